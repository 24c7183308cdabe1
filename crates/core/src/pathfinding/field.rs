//! Breadth-first flood fills: reachability and goal-distance fields.

use std::collections::{BTreeSet, VecDeque};

use super::PathPlanner;
use crate::types::{Pos, neighbors};

pub(super) fn reachable_from(planner: &PathPlanner<'_>, start: Pos) -> BTreeSet<Pos> {
    let mut visited = BTreeSet::new();
    if !planner.is_passable(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in planner.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Step counts from every cell to one goal. Unreachable and blocked cells hold
/// `u32::MAX` internally and read back as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    width: usize,
    height: usize,
    goal: Pos,
    distances: Vec<u32>,
}

impl DistanceField {
    pub(super) fn build(planner: &PathPlanner<'_>, goal: Pos) -> Self {
        let world = planner.world();
        let (width, height) = (world.width(), world.height());
        let mut field = Self { width, height, goal, distances: vec![u32::MAX; width * height] };
        let Some(goal_index) = field.index(goal) else {
            return field;
        };
        if !planner.is_passable(goal) {
            return field;
        }

        field.distances[goal_index] = 0;
        let mut queue = VecDeque::from([goal]);
        while let Some(current) = queue.pop_front() {
            let Some(current_index) = field.index(current) else {
                continue;
            };
            let next_distance = field.distances[current_index] + 1;
            for neighbor in planner.neighbors(current) {
                let Some(index) = field.index(neighbor) else {
                    continue;
                };
                if field.distances[index] == u32::MAX {
                    field.distances[index] = next_distance;
                    queue.push_back(neighbor);
                }
            }
        }
        field
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let in_bounds = pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height;
        in_bounds.then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn distance(&self, pos: Pos) -> Option<u32> {
        let distance = self.distances[self.index(pos)?];
        (distance != u32::MAX).then_some(distance)
    }

    /// A neighbour one step closer to the goal, first in North, East, South, West order.
    /// Lets many movers share one search toward a common goal.
    pub fn downhill_step(&self, pos: Pos) -> Option<Pos> {
        let here = self.distance(pos)?;
        if here == 0 {
            return None;
        }
        neighbors(pos).into_iter().find(|&next| self.distance(next) == Some(here - 1))
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&distance| distance != u32::MAX).count()
    }
}
