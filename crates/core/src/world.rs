//! The fixed-size cell grid and everything that mutates it in place.
//! Out-of-bounds reads degrade to a synthetic solid wall; out-of-bounds writes are
//! logged and ignored. Only malformed requests (diagonal lines, unknown type names)
//! surface as errors.

mod fog;
mod occupants;
pub mod render;

use std::collections::BTreeMap;
use std::mem;

use log::warn;

use crate::cell::{Cell, CellEffect, CellOverrides, CellType, CellTypeRegistry, EffectTrigger};
use crate::types::{CellTypeId, GridError, Pos};

pub use occupants::Occupant;
pub use render::{Appearance, AsciiRenderer, CellRenderer};

#[derive(Clone, Debug)]
pub struct GridWorld {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    registry: CellTypeRegistry,
    occupants: BTreeMap<String, Occupant>,
    dirty: Vec<Pos>,
}

impl GridWorld {
    /// Floor-filled grid using the built-in registry.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_registry(width, height, CellTypeRegistry::new())
    }

    pub fn with_registry(width: usize, height: usize, registry: CellTypeRegistry) -> Self {
        let mut world = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            registry,
            occupants: BTreeMap::new(),
            dirty: Vec::new(),
        };
        let floor = world.registry.floor_id();
        world.reset_with_kind(width, height, floor);
        world
    }

    /// Re-dimensions the grid and fills it with fresh, unexplored cells of `type_name`.
    /// Pending dirty entries are discarded since their coordinates no longer apply.
    pub fn reset(&mut self, width: usize, height: usize, type_name: &str) -> Result<(), GridError> {
        let kind = self.registry.require(type_name)?;
        self.reset_with_kind(width, height, kind);
        Ok(())
    }

    pub(crate) fn reset_with_kind(&mut self, width: usize, height: usize, kind: CellTypeId) {
        let cell_type = self.registry.resolve(kind);
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::fresh(Pos { y: y as i32, x: x as i32 }, kind, cell_type));
            }
        }
        self.width = width;
        self.height = height;
        self.cells = cells;
        self.dirty.clear();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn registry(&self) -> &CellTypeRegistry {
        &self.registry
    }

    /// Cells keep their `CellTypeId`, so overriding a type here restyles every cell of
    /// that type at once.
    pub fn registry_mut(&mut self) -> &mut CellTypeRegistry {
        &mut self.registry
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    /// The cell at `pos`, or a synthetic unexplored wall outside the grid.
    pub fn cell(&self, pos: Pos) -> Cell {
        match self.index(pos) {
            Some(idx) => self.cells[idx],
            None => Cell {
                pos,
                kind: self.registry.wall_id(),
                explored: false,
                solid: Some(true),
                visible: true,
            },
        }
    }

    pub fn cell_type(&self, pos: Pos) -> &CellType {
        self.registry.resolve(self.cell(pos).kind)
    }

    pub fn is_solid(&self, pos: Pos) -> bool {
        let cell = self.cell(pos);
        cell.is_solid(self.registry.resolve(cell.kind))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrites the inclusive rectangle with fresh cells of `type_name`, clipping to the
    /// grid. Explored flags are reset.
    pub fn fill(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        type_name: &str,
    ) -> Result<(), GridError> {
        let kind = self.registry.require(type_name)?;
        let Some((min, max)) = self.clip_rect(x0, y0, x1, y1) else {
            warn!(
                "[GridWorld] fill ({x0},{y0})-({x1},{y1}) lies outside the {}x{} grid",
                self.width, self.height
            );
            return Ok(());
        };
        self.fill_clipped(min, max, kind);
        Ok(())
    }

    fn fill_clipped(&mut self, min: Pos, max: Pos, kind: CellTypeId) {
        let cell_type = self.registry.resolve(kind);
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let pos = Pos { y, x };
                let idx = (y as usize) * self.width + (x as usize);
                self.cells[idx] = Cell::fresh(pos, kind, cell_type);
                self.dirty.push(pos);
            }
        }
    }

    fn clip_rect(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(Pos, Pos)> {
        if self.cells.is_empty() {
            return None;
        }
        let (lo_x, hi_x) = (x0.min(x1), x0.max(x1));
        let (lo_y, hi_y) = (y0.min(y1), y0.max(y1));
        let max_x = self.width as i32 - 1;
        let max_y = self.height as i32 - 1;
        if hi_x < 0 || hi_y < 0 || lo_x > max_x || lo_y > max_y {
            return None;
        }
        Some((
            Pos { y: lo_y.max(0), x: lo_x.max(0) },
            Pos { y: hi_y.min(max_y), x: hi_x.min(max_x) },
        ))
    }

    /// Sets every cell on the horizontal or vertical segment between the two points to
    /// `type_name`, keeping each cell's explored flag. Cells outside the grid are skipped.
    pub fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        type_name: &str,
    ) -> Result<(), GridError> {
        if x0 != x1 && y0 != y1 {
            return Err(GridError::InvalidGeometry { x0, y0, x1, y1 });
        }
        let kind = self.registry.require(type_name)?;
        let Some((min, max)) = self.clip_rect(x0, y0, x1, y1) else {
            warn!(
                "[GridWorld] line ({x0},{y0})-({x1},{y1}) lies outside the {}x{} grid",
                self.width, self.height
            );
            return Ok(());
        };
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                self.set_cell_kind(Pos { y, x }, kind, CellOverrides::default());
            }
        }
        Ok(())
    }

    /// Replaces the cell at `pos` with `type_name`. The previous explored flag survives
    /// unless `overrides` sets one.
    pub fn set_cell(
        &mut self,
        pos: Pos,
        type_name: &str,
        overrides: CellOverrides,
    ) -> Result<(), GridError> {
        let kind = self.registry.require(type_name)?;
        if !self.set_cell_kind(pos, kind, overrides) {
            warn!("[GridWorld] set_cell {pos:?} to `{type_name}` is out of bounds");
        }
        Ok(())
    }

    pub(crate) fn set_cell_kind(
        &mut self,
        pos: Pos,
        kind: CellTypeId,
        overrides: CellOverrides,
    ) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        let previous = self.cells[idx];
        let cell_type = self.registry.resolve(kind);
        self.cells[idx] = Cell {
            pos,
            kind,
            explored: overrides.explored.unwrap_or(previous.explored),
            solid: overrides.solid,
            visible: overrides.visible.unwrap_or(cell_type.visible),
        };
        self.dirty.push(pos);
        true
    }

    /// First cell of `type_name` in row-major order.
    pub fn locate(&self, type_name: &str) -> Option<Pos> {
        let kind = self.registry.id(type_name)?;
        self.cells.iter().find(|cell| cell.kind == kind).map(|cell| cell.pos)
    }

    pub fn locate_all(&self, type_name: &str) -> Vec<Pos> {
        let Some(kind) = self.registry.id(type_name) else {
            return Vec::new();
        };
        self.cells.iter().filter(|cell| cell.kind == kind).map(|cell| cell.pos).collect()
    }

    /// Effect the game layer should apply when `trigger` happens at `pos`.
    pub fn effect_at(&self, pos: Pos, trigger: EffectTrigger) -> Option<&CellEffect> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cell_type(pos).effect(trigger)
    }

    pub fn mark_dirty(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            self.dirty.push(pos);
        }
    }

    /// Queues every cell, row-major, replacing whatever was pending.
    pub fn mark_all_dirty(&mut self) {
        self.dirty.clear();
        self.dirty.extend(self.cells.iter().map(|cell| cell.pos));
    }

    pub fn dirty(&self) -> &[Pos] {
        &self.dirty
    }

    pub fn drain_dirty(&mut self) -> Vec<Pos> {
        mem::take(&mut self.dirty)
    }
}
