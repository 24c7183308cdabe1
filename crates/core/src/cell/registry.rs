//! Name-to-type registry backing every cell in a grid.
//! Types are appended or overridden in place, never removed, so a `CellTypeId` handed
//! out by a registry stays valid for that registry's lifetime.

use std::collections::BTreeMap;

use slotmap::SlotMap;

use super::{CellEffect, CellType, CellTypeDef, EXIT, FLOOR, WALL};
use crate::types::{CellTypeId, GridError};

#[derive(Clone, Debug)]
pub struct CellTypeRegistry {
    types: SlotMap<CellTypeId, CellType>,
    by_name: BTreeMap<String, CellTypeId>,
    wall: CellTypeId,
    floor: CellTypeId,
}

impl Default for CellTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CellTypeRegistry {
    /// Registry holding only the built-in `wall` and `floor` types.
    pub fn new() -> Self {
        let mut types = SlotMap::with_key();
        let wall = types.insert(CellType::from_def(WALL, CellTypeDef::builtin_wall()));
        let floor = types.insert(CellType::from_def(FLOOR, CellTypeDef::builtin_floor()));
        let by_name = BTreeMap::from([(WALL.to_owned(), wall), (FLOOR.to_owned(), floor)]);
        Self { types, by_name, wall, floor }
    }

    /// Built-in types plus a default `exit`.
    pub fn with_exit() -> Self {
        let mut registry = Self::new();
        registry.register(EXIT, CellTypeDef::builtin_exit());
        registry
    }

    /// Builds a registry from caller definitions. Built-in `wall` and `floor` are seeded
    /// first so a caller may override them but never leave them out.
    pub fn from_definitions(defs: BTreeMap<String, CellTypeDef>) -> Result<Self, GridError> {
        let mut registry = Self::new();
        for (name, def) in defs {
            if name.trim().is_empty() {
                return Err(GridError::InvalidConfig("cell type name must not be empty".into()));
            }
            registry.register(&name, def);
        }
        registry.validate()?;
        Ok(registry)
    }

    pub fn from_json(text: &str) -> Result<Self, GridError> {
        let defs: BTreeMap<String, CellTypeDef> =
            serde_json::from_str(text).map_err(|e| GridError::InvalidConfig(e.to_string()))?;
        Self::from_definitions(defs)
    }

    /// Adds `name`, or replaces its attributes in place if it already exists.
    pub fn register(&mut self, name: &str, def: CellTypeDef) -> CellTypeId {
        let cell_type = CellType::from_def(name, def);
        if let Some(&id) = self.by_name.get(name) {
            self.types[id] = cell_type;
            return id;
        }
        let id = self.types.insert(cell_type);
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Registers `name` only if it is missing.
    pub fn ensure(&mut self, name: &str, def: CellTypeDef) -> CellTypeId {
        match self.by_name.get(name) {
            Some(&id) => id,
            None => self.register(name, def),
        }
    }

    pub fn id(&self, name: &str) -> Option<CellTypeId> {
        self.by_name.get(name).copied()
    }

    pub fn require(&self, name: &str) -> Result<CellTypeId, GridError> {
        self.id(name).ok_or_else(|| GridError::UnknownCellType(name.to_owned()))
    }

    pub fn get(&self, id: CellTypeId) -> Option<&CellType> {
        self.types.get(id)
    }

    /// Looks up `id`, degrading to the wall type for ids from another registry.
    pub fn resolve(&self, id: CellTypeId) -> &CellType {
        match self.types.get(id) {
            Some(cell_type) => cell_type,
            None => &self.types[self.wall],
        }
    }

    pub fn wall_id(&self) -> CellTypeId {
        self.wall
    }

    pub fn floor_id(&self) -> CellTypeId {
        self.floor
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered types in name order.
    pub fn iter(&self) -> impl Iterator<Item = (CellTypeId, &CellType)> {
        self.by_name.values().map(|&id| (id, &self.types[id]))
    }

    fn validate(&self) -> Result<(), GridError> {
        for (_, cell_type) in self.iter() {
            for effect in cell_type.effects() {
                if let CellEffect::Transform { into } = effect
                    && self.id(into).is_none()
                {
                    return Err(GridError::InvalidConfig(format!(
                        "`{}` transforms into unknown type `{into}`",
                        cell_type.name
                    )));
                }
            }
        }
        Ok(())
    }
}
