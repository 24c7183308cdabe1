//! Stable grid hashing for deterministic verification.
//! Cell types are encoded by their rank in name order, never by slot key, so two
//! worlds built through different registration sequences hash the same.

use std::collections::BTreeMap;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::CellTypeId;
use crate::world::GridWorld;

impl GridWorld {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());

        let mut rank: BTreeMap<CellTypeId, u32> = BTreeMap::new();
        bytes.extend((self.registry().len() as u32).to_le_bytes());
        for (idx, (id, cell_type)) in self.registry().iter().enumerate() {
            rank.insert(id, idx as u32);
            bytes.extend((cell_type.name.len() as u32).to_le_bytes());
            bytes.extend(cell_type.name.as_bytes());
            bytes.extend(u32::from(cell_type.glyph).to_le_bytes());
            bytes.push(u8::from(cell_type.solid));
        }

        for cell in self.cells() {
            let kind = rank.get(&cell.kind).copied().unwrap_or(u32::MAX);
            bytes.extend(kind.to_le_bytes());
            bytes.push(u8::from(cell.explored));
            bytes.push(u8::from(cell.visible));
            bytes.push(match cell.solid {
                None => 0,
                Some(false) => 1,
                Some(true) => 2,
            });
        }

        bytes.extend((self.occupants().len() as u32).to_le_bytes());
        for (id, occupant) in self.occupants() {
            bytes.extend((id.len() as u32).to_le_bytes());
            bytes.extend(id.as_bytes());
            bytes.extend(occupant.pos.y.to_le_bytes());
            bytes.extend(occupant.pos.x.to_le_bytes());
            bytes.extend(u32::from(occupant.glyph).to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
