//! A* over the four-connected grid with a Manhattan heuristic.

use std::collections::{BTreeMap, BTreeSet};

use super::PathPlanner;
use crate::types::Pos;

/// Open-set entry. Field order is the tie-break: lowest `f`, then lowest `h` (closest to
/// the goal), then row-major position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    y: i32,
    x: i32,
}

pub(super) fn astar_path(planner: &PathPlanner<'_>, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    let mut open_set = BTreeSet::new();
    let mut g_score = BTreeMap::new();
    let mut came_from = BTreeMap::new();
    let mut closed = BTreeSet::new();

    let h = start.manhattan(goal);
    open_set.insert(OpenNode { f: h, h, y: start.y, x: start.x });
    g_score.insert(start, 0_u32);

    while let Some(curr) = open_set.pop_first() {
        let p = Pos { y: curr.y, x: curr.x };
        if p == goal {
            return reconstruct_path(&came_from, start, goal);
        }
        if !closed.insert(p) {
            continue;
        }
        let cur_g = curr.f - curr.h;
        for n in planner.neighbors(p) {
            let tg = cur_g + 1;
            // Strictly shorter only, so the first parent found for a cost keeps it.
            if tg < *g_score.get(&n).unwrap_or(&u32::MAX) {
                came_from.insert(n, p);
                g_score.insert(n, tg);
                let h = n.manhattan(goal);
                open_set.insert(OpenNode { f: tg + h, h, y: n.y, x: n.x });
            }
        }
    }
    None
}

fn reconstruct_path(came: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    let mut p = goal;
    let mut result = vec![p];
    while p != start {
        p = *came.get(&p)?;
        result.push(p);
    }
    result.reverse();
    Some(result)
}
