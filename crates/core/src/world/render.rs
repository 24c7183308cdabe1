//! Boundary with whatever draws the map. The world never draws; a renderer drains the
//! dirty queue through `GridWorld::flush_dirty` and receives one resolved `Appearance`
//! per coordinate.

use std::collections::BTreeSet;

use super::GridWorld;
use crate::cell::UNEXPLORED_GLYPH;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Appearance {
    Unexplored,
    /// Explored, but the cell hides its real type behind the floor glyph.
    Masked { glyph: char },
    Terrain { type_name: String, glyph: char },
    Occupant { id: String, glyph: char },
}

impl Appearance {
    pub fn glyph(&self) -> char {
        match self {
            Appearance::Unexplored => UNEXPLORED_GLYPH,
            Appearance::Masked { glyph }
            | Appearance::Terrain { glyph, .. }
            | Appearance::Occupant { glyph, .. } => *glyph,
        }
    }

    /// Style class a renderer can key colours or sprites on.
    pub fn class(&self) -> &str {
        match self {
            Appearance::Unexplored => "unexplored",
            Appearance::Masked { .. } => "masked",
            Appearance::Terrain { type_name, .. } => type_name.as_str(),
            Appearance::Occupant { .. } => "occupant",
        }
    }
}

pub trait CellRenderer {
    fn draw(&mut self, pos: Pos, appearance: &Appearance);
}

impl GridWorld {
    /// Resolves what should be drawn at `pos` under fog-of-war rules.
    pub fn appearance(&self, pos: Pos) -> Appearance {
        let cell = self.cell(pos);
        if !self.in_bounds(pos) || !cell.explored {
            return Appearance::Unexplored;
        }
        if let Some((id, occupant)) = self.occupant_at(pos) {
            return Appearance::Occupant { id: id.to_owned(), glyph: occupant.glyph };
        }
        if !cell.visible {
            let floor = self.registry.resolve(self.registry.floor_id());
            return Appearance::Masked { glyph: floor.glyph };
        }
        let cell_type = self.registry.resolve(cell.kind);
        Appearance::Terrain { type_name: cell_type.name.clone(), glyph: cell_type.glyph }
    }

    /// Drains the dirty queue into `renderer`, drawing each coordinate once.
    pub fn flush_dirty<R: CellRenderer>(&mut self, renderer: &mut R) -> usize {
        let mut drawn = BTreeSet::new();
        for pos in self.drain_dirty() {
            if drawn.insert(pos) {
                renderer.draw(pos, &self.appearance(pos));
            }
        }
        drawn.len()
    }
}

/// Character-buffer renderer used by the CLI and by tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, buffer: vec![' '; width * height] }
    }

    pub fn for_world(world: &GridWorld) -> Self {
        Self::new(world.width(), world.height())
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let in_bounds = pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height;
        in_bounds.then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    pub fn glyph_at(&self, pos: Pos) -> Option<char> {
        self.index(pos).map(|idx| self.buffer[idx])
    }

    /// Paints over the buffer without touching the world, e.g. to highlight a path.
    pub fn overlay(&mut self, pos: Pos, glyph: char) {
        if let Some(idx) = self.index(pos) {
            self.buffer[idx] = glyph;
        }
    }

    pub fn lines(&self) -> Vec<String> {
        if self.width == 0 {
            return Vec::new();
        }
        self.buffer.chunks(self.width).map(|row| row.iter().collect()).collect()
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

impl CellRenderer for AsciiRenderer {
    fn draw(&mut self, pos: Pos, appearance: &Appearance) {
        self.overlay(pos, appearance.glyph());
    }
}
