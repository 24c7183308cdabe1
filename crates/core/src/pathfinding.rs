//! Spatial queries over a read-only grid snapshot.
//! Movement is four-directional with unit cost; a cell is passable iff it is inside the
//! grid and not solid. The planner borrows the world, so the grid cannot change under a
//! running query.

mod field;
mod search;

use std::collections::BTreeSet;

use crate::types::{Pos, neighbors};
use crate::world::GridWorld;

pub use field::DistanceField;

#[derive(Clone, Copy, Debug)]
pub struct PathPlanner<'a> {
    world: &'a GridWorld,
}

impl<'a> PathPlanner<'a> {
    pub fn new(world: &'a GridWorld) -> Self {
        Self { world }
    }

    pub fn world(&self) -> &'a GridWorld {
        self.world
    }

    pub fn is_passable(&self, pos: Pos) -> bool {
        self.world.in_bounds(pos) && !self.world.is_solid(pos)
    }

    /// Passable cardinal neighbours in North, East, South, West order.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        neighbors(pos).into_iter().filter(move |&next| self.is_passable(next))
    }

    /// Non-solid cells in the grid, reachable or not.
    pub fn count_passable_cells(&self) -> usize {
        self.world.cells().iter().filter(|cell| !self.world.is_solid(cell.pos)).count()
    }

    /// Shortest route from `start` to `goal`, both included. `None` when either end is
    /// blocked, when the goal is unreachable, or when `start == goal` (nothing to do).
    /// Equal-length routes are broken the same way on every call.
    pub fn find_path(&self, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
        if start == goal || !self.is_passable(start) || !self.is_passable(goal) {
            return None;
        }
        search::astar_path(self, start, goal)
    }

    /// The first move of `find_path(start, goal)`.
    pub fn find_next_step(&self, start: Pos, goal: Pos) -> Option<Pos> {
        self.find_path(start, goal)?.get(1).copied()
    }

    /// Number of moves on the shortest route.
    pub fn path_length(&self, start: Pos, goal: Pos) -> Option<usize> {
        self.find_path(start, goal).map(|path| path.len() - 1)
    }

    pub fn reachable_from(&self, start: Pos) -> BTreeSet<Pos> {
        field::reachable_from(self, start)
    }

    /// Breadth-first distances from every passable cell to `goal`.
    pub fn distance_field(&self, goal: Pos) -> DistanceField {
        DistanceField::build(self, goal)
    }
}
