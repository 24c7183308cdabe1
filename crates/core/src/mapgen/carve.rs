//! Randomized depth-first carving of the start-to-exit corridor.
//! The walk is iterative: `attempts` runs parallel to `stack`, holding the retry counter
//! of every cell on the current walk. Backtracking pops both.

use rand_chacha::ChaCha8Rng;

use super::rng::{random_below, random_sign};
use super::{CARVE_MARGIN, MAX_STEP};
use crate::types::Pos;

/// Transient carving state for one attempt. Discarded once the corridor is returned.
#[derive(Clone, Debug)]
pub(super) struct MazePlan {
    width: usize,
    height: usize,
    start: Pos,
    exit: Pos,
    stack: Vec<Pos>,
    attempts: Vec<u32>,
    visited: Vec<bool>,
}

impl MazePlan {
    pub(super) fn new(width: usize, height: usize, start: Pos, exit: Pos) -> Self {
        Self {
            width,
            height,
            start,
            exit,
            stack: Vec::new(),
            attempts: Vec::new(),
            visited: vec![false; width * height],
        }
    }

    fn carvable(&self, pos: Pos) -> bool {
        pos.x >= CARVE_MARGIN
            && pos.y >= CARVE_MARGIN
            && pos.x < self.width as i32 - CARVE_MARGIN
            && pos.y < self.height as i32 - CARVE_MARGIN
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    fn visit(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.visited[idx] = true;
        self.stack.push(pos);
        self.attempts.push(0);
    }

    /// Cells covered by one random step from `from`, or `None` when the step would leave
    /// the carvable interior or cross the walk. The step ends early on the exit.
    fn propose_step(&self, rng: &mut ChaCha8Rng, from: Pos) -> Option<Vec<Pos>> {
        let sign = random_sign(rng);
        let (dx, dy) = if random_below(rng, 2) == 0 { (sign, 0) } else { (0, sign) };
        let length = 1 + random_below(rng, MAX_STEP);

        let mut cells = Vec::with_capacity(length);
        let mut pos = from;
        for _ in 0..length {
            pos = pos.offset(dx, dy);
            if !self.carvable(pos) || self.visited[self.index(pos)] {
                return None;
            }
            cells.push(pos);
            if pos == self.exit {
                break;
            }
        }
        Some(cells)
    }

    /// Walks from the start until the exit is reached. A cell that has used up
    /// `retry_budget` step attempts is backtracked off the walk (it stays visited).
    /// Returns the corridor from start to exit inclusive, or `None` once the walk has
    /// backtracked past the start.
    pub(super) fn carve(mut self, rng: &mut ChaCha8Rng, retry_budget: u32) -> Option<Vec<Pos>> {
        if !self.carvable(self.start) || !self.carvable(self.exit) {
            return None;
        }
        self.visit(self.start);
        if self.start == self.exit {
            return Some(self.stack);
        }

        while let Some(attempts) = self.attempts.last_mut() {
            if *attempts >= retry_budget {
                self.attempts.pop();
                self.stack.pop();
                continue;
            }
            *attempts += 1;

            let tip = *self.stack.last()?;
            let Some(cells) = self.propose_step(rng, tip) else {
                continue;
            };
            for &pos in &cells {
                self.visit(pos);
            }
            if cells.last() == Some(&self.exit) {
                return Some(self.stack);
            }
        }
        None
    }
}
