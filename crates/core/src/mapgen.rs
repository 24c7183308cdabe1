//! Procedural maze generation split into coherent submodules.

mod carve;
mod dissolve;
mod exit;
mod generator;
mod rng;

use crate::cell::{EXIT, FLOOR, WALL};
use crate::types::{GridError, Pos};
use crate::world::GridWorld;

pub use generator::MazeGenerator;

/// Distance from the grid edge that exit placement and dissolve passes keep clear.
pub const EDGE_MARGIN: i32 = 2;
/// Outer ring the carving walk may never enter.
pub const CARVE_MARGIN: i32 = 1;
/// Smallest side for which the far-corner exit is always distinct from the start.
pub const MIN_MAZE_SIDE: usize = 6;
pub const DISSOLVE_PASSES: u32 = 10;
pub const CARVE_RETRY_BUDGET: u32 = 100;
/// Longest single stride of the carving walk.
pub const MAX_STEP: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeSettings {
    pub wall_type: String,
    pub floor_type: String,
    pub exit_type: String,
    pub dissolve_passes: u32,
    pub carve_retry_budget: u32,
    /// Upper bound on how far the exit may drift inward from the far corner.
    pub max_exit_offset: u32,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            wall_type: WALL.to_owned(),
            floor_type: FLOOR.to_owned(),
            exit_type: EXIT.to_owned(),
            dissolve_passes: DISSOLVE_PASSES,
            carve_retry_budget: CARVE_RETRY_BUDGET,
            max_exit_offset: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub start: Pos,
    pub exit: Pos,
    /// The carved start-to-exit route, before dissolve passes added branches.
    pub corridor: Vec<Pos>,
    pub carve_restarts: u32,
    pub dissolved: usize,
}

/// Builds a fresh world holding a `size_x` by `size_y` maze carved from `start`.
pub fn generate_maze(
    seed: u64,
    size_x: usize,
    size_y: usize,
    start: Pos,
) -> Result<(GridWorld, GeneratedMaze), GridError> {
    let mut world = GridWorld::new(size_x, size_y);
    let maze = MazeGenerator::new(seed).generate(&mut world, size_x, size_y, start)?;
    Ok((world, maze))
}
