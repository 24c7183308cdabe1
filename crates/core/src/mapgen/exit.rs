//! Exit placement: a cell near the corner opposite the start, kept `EDGE_MARGIN` cells
//! away from every edge.

use rand_chacha::ChaCha8Rng;

use super::EDGE_MARGIN;
use super::rng::random_below;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ExitStrategy {
    PerturbBoth,
    PerturbX,
    PerturbY,
}

impl ExitStrategy {
    const ALL: [ExitStrategy; 3] =
        [ExitStrategy::PerturbBoth, ExitStrategy::PerturbX, ExitStrategy::PerturbY];

    fn pick(rng: &mut ChaCha8Rng) -> Self {
        Self::ALL[random_below(rng, Self::ALL.len())]
    }
}

/// Far-side coordinate on one axis and the direction that points back toward the centre.
fn far_side(start: i32, side: usize) -> (i32, i32) {
    let high = side as i32 - 1 - EDGE_MARGIN;
    if (start as usize) < side / 2 { (high, -1) } else { (EDGE_MARGIN, 1) }
}

/// Largest inward offset that still leaves the exit on the far half of the axis.
fn offset_limit(side: usize, max_offset: u32) -> usize {
    let usable = side.saturating_sub(2 * EDGE_MARGIN as usize + 1);
    (usable / 2).min(max_offset as usize)
}

fn perturbed(rng: &mut ChaCha8Rng, far: i32, inward: i32, side: usize, max_offset: u32) -> i32 {
    let offset = random_below(rng, offset_limit(side, max_offset) + 1) as i32;
    (far + inward * offset).clamp(EDGE_MARGIN, side as i32 - 1 - EDGE_MARGIN)
}

pub(super) fn far_corner(width: usize, height: usize, start: Pos) -> Pos {
    let (x, _) = far_side(start.x, width);
    let (y, _) = far_side(start.y, height);
    Pos { y, x }
}

/// Picks the exit for a maze carved from `start`. Callers guarantee both sides are at
/// least `MIN_MAZE_SIDE`, which keeps the unperturbed far corner distinct from `start`.
pub(super) fn choose_exit(
    rng: &mut ChaCha8Rng,
    width: usize,
    height: usize,
    start: Pos,
    max_offset: u32,
) -> Pos {
    let (far_x, inward_x) = far_side(start.x, width);
    let (far_y, inward_y) = far_side(start.y, height);
    let (x, y) = match ExitStrategy::pick(rng) {
        ExitStrategy::PerturbBoth => (
            perturbed(rng, far_x, inward_x, width, max_offset),
            perturbed(rng, far_y, inward_y, height, max_offset),
        ),
        ExitStrategy::PerturbX => (perturbed(rng, far_x, inward_x, width, max_offset), far_y),
        ExitStrategy::PerturbY => (far_x, perturbed(rng, far_y, inward_y, height, max_offset)),
    };
    let exit = Pos { y, x };
    if exit == start { far_corner(width, height, start) } else { exit }
}
