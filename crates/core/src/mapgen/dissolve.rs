//! Dissolve passes: knock out thin walls to branch the corridor without merging it into
//! open rooms.

use log::debug;
use rand_chacha::ChaCha8Rng;

use super::EDGE_MARGIN;
use super::rng::shuffle;
use crate::cell::CellOverrides;
use crate::types::{CellTypeId, Pos, neighbors};
use crate::world::GridWorld;

/// Solid cells outside the edge margin with exactly three solid cardinal neighbours,
/// in row-major order.
pub(super) fn thin_wall_candidates(world: &GridWorld) -> Vec<Pos> {
    let max_x = world.width() as i32 - 1 - EDGE_MARGIN;
    let max_y = world.height() as i32 - 1 - EDGE_MARGIN;
    let mut candidates = Vec::new();
    for y in EDGE_MARGIN..=max_y {
        for x in EDGE_MARGIN..=max_x {
            let pos = Pos { y, x };
            if !world.is_solid(pos) {
                continue;
            }
            let solid_neighbors = neighbors(pos).iter().filter(|&&n| world.is_solid(n)).count();
            if solid_neighbors == 3 {
                candidates.push(pos);
            }
        }
    }
    candidates
}

/// Converts a random half of the current candidates to `floor`, keeping each cell's
/// explored flag. Every converted cell touches a floor cell that existed before the
/// pass, so connectivity of the open cells is preserved. Returns the number converted.
pub(super) fn dissolve_pass(
    world: &mut GridWorld,
    rng: &mut ChaCha8Rng,
    floor: CellTypeId,
) -> usize {
    let mut candidates = thin_wall_candidates(world);
    shuffle(rng, &mut candidates);
    let take = candidates.len() / 2;
    for &pos in &candidates[..take] {
        world.set_cell_kind(pos, floor, CellOverrides::default());
    }
    debug!("[MazeGenerator] dissolve pass opened {take} of {} thin walls", candidates.len());
    take
}
