//! Dynamic occupants (player, NPCs) layered over the grid.
//! Occupants never live in the cell array; the world only tracks where they stand so the
//! renderer can redraw the cells they enter and leave.

use std::collections::{BTreeMap, BTreeSet};

use super::GridWorld;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub pos: Pos,
    pub glyph: char,
    /// Redraw this occupant's cell even if it did not move.
    pub force_refresh: bool,
}

impl Occupant {
    pub fn new(pos: Pos, glyph: char) -> Self {
        Self { pos, glyph, force_refresh: false }
    }

    pub fn refreshed(mut self) -> Self {
        self.force_refresh = true;
        self
    }
}

impl GridWorld {
    /// Replaces the occupant set and queues every coordinate whose occupant appeared,
    /// disappeared, moved, or asked for a refresh. A coordinate is queued at most once per
    /// call. Returns how many coordinates were queued.
    pub fn set_entities(&mut self, entities: BTreeMap<String, Occupant>) -> usize {
        let mut changed = BTreeSet::new();

        for (id, occupant) in &entities {
            match self.occupants.get(id) {
                None => {
                    changed.insert(occupant.pos);
                }
                Some(previous) if previous.pos != occupant.pos => {
                    changed.insert(previous.pos);
                    changed.insert(occupant.pos);
                }
                Some(_) => {}
            }
            if occupant.force_refresh {
                changed.insert(occupant.pos);
            }
        }
        for (id, previous) in &self.occupants {
            if !entities.contains_key(id) {
                changed.insert(previous.pos);
            }
        }

        self.occupants = entities;
        let before = self.dirty.len();
        for pos in changed {
            self.mark_dirty(pos);
        }
        self.dirty.len() - before
    }

    pub fn occupants(&self) -> &BTreeMap<String, Occupant> {
        &self.occupants
    }

    /// First occupant, by id order, standing on `pos`.
    pub fn occupant_at(&self, pos: Pos) -> Option<(&str, &Occupant)> {
        self.occupants
            .iter()
            .find(|(_, occupant)| occupant.pos == pos)
            .map(|(id, occupant)| (id.as_str(), occupant))
    }
}
