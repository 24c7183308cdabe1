//! Fog-of-war flags: which cells the player has seen, and which explored cells still
//! pretend to be plain floor.

use super::GridWorld;
use crate::types::Pos;

impl GridWorld {
    pub fn is_explored(&self, pos: Pos) -> bool {
        self.cell(pos).explored
    }

    /// Marks one cell explored. Returns whether the flag changed.
    pub fn explore(&mut self, pos: Pos) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        if self.cells[idx].explored {
            return false;
        }
        self.cells[idx].explored = true;
        self.dirty.push(pos);
        true
    }

    /// Explores the square of side `2 * radius + 1` centred on `center`, clipped to the
    /// grid. Only cells that were unexplored are queued for redraw.
    pub fn reveal(&mut self, center: Pos, radius: u32) -> usize {
        if self.cells.is_empty() {
            return 0;
        }
        let r = i64::from(radius);
        let clip = |mid: i32, side: usize| {
            let lo = (i64::from(mid) - r).max(0);
            let hi = (i64::from(mid) + r).min(side as i64 - 1);
            (lo <= hi).then_some((lo as i32, hi as i32))
        };
        let (Some((x0, x1)), Some((y0, y1))) =
            (clip(center.x, self.width), clip(center.y, self.height))
        else {
            return 0;
        };

        let mut revealed = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                if self.explore(Pos { y, x }) {
                    revealed += 1;
                }
            }
        }
        revealed
    }

    pub fn reveal_all(&mut self) -> usize {
        let mut revealed = 0;
        for cell in &mut self.cells {
            if !cell.explored {
                cell.explored = true;
                self.dirty.push(cell.pos);
                revealed += 1;
            }
        }
        revealed
    }

    /// Unmasks (`true`) or masks (`false`) an explored cell. A masked cell renders as the
    /// generic floor glyph.
    pub fn set_visible(&mut self, pos: Pos, visible: bool) {
        let Some(idx) = self.index(pos) else {
            return;
        };
        if self.cells[idx].visible != visible {
            self.cells[idx].visible = visible;
            self.dirty.push(pos);
        }
    }
}
