//! Maze generation orchestration: backdrop, exit, corridor, dissolve passes, endpoints.

use log::{debug, info};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::carve::MazePlan;
use super::dissolve::dissolve_pass;
use super::exit::choose_exit;
use super::{CARVE_MARGIN, GeneratedMaze, MIN_MAZE_SIDE, MazeSettings};
use crate::cell::{CellOverrides, CellTypeDef};
use crate::types::{CellTypeId, GridError, Pos};
use crate::world::GridWorld;

pub struct MazeGenerator {
    rng: ChaCha8Rng,
    settings: MazeSettings,
}

impl MazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, MazeSettings::default())
    }

    pub fn with_settings(seed: u64, settings: MazeSettings) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), settings }
    }

    pub fn settings(&self) -> &MazeSettings {
        &self.settings
    }

    /// Rebuilds `world` as a `size_x` by `size_y` maze with a guaranteed route from
    /// `start` to the generated exit. The grid is left fully queued for redraw.
    pub fn generate(
        &mut self,
        world: &mut GridWorld,
        size_x: usize,
        size_y: usize,
        start: Pos,
    ) -> Result<GeneratedMaze, GridError> {
        if size_x < MIN_MAZE_SIDE || size_y < MIN_MAZE_SIDE {
            return Err(GridError::MapTooSmall {
                width: size_x,
                height: size_y,
                min: MIN_MAZE_SIDE,
            });
        }
        let inside = |value: i32, side: usize| {
            value >= CARVE_MARGIN && value < side as i32 - CARVE_MARGIN
        };
        if !inside(start.x, size_x) || !inside(start.y, size_y) {
            return Err(GridError::StartOutOfBounds { x: start.x, y: start.y });
        }

        if self.settings.carve_retry_budget == 0 {
            return Err(GridError::InvalidConfig("carve retry budget must be at least 1".into()));
        }

        let wall = world.registry().require(&self.settings.wall_type)?;
        let floor = world.registry().require(&self.settings.floor_type)?;
        check_solidity(world, wall, true)?;
        check_solidity(world, floor, false)?;
        if let Some(exit_kind) = world.registry().id(&self.settings.exit_type) {
            check_solidity(world, exit_kind, false)?;
        }
        let exit_kind =
            world.registry_mut().ensure(&self.settings.exit_type, CellTypeDef::builtin_exit());

        world.reset_with_kind(size_x, size_y, wall);
        let exit = choose_exit(&mut self.rng, size_x, size_y, start, self.settings.max_exit_offset);

        let mut carve_restarts = 0_u32;
        let corridor = loop {
            let plan = MazePlan::new(size_x, size_y, start, exit);
            if let Some(corridor) = plan.carve(&mut self.rng, self.settings.carve_retry_budget) {
                break corridor;
            }
            carve_restarts += 1;
            debug!(
                "[MazeGenerator] carve from {start:?} to {exit:?} failed, restart #{carve_restarts}"
            );
        };

        for &pos in &corridor {
            world.set_cell_kind(pos, floor, CellOverrides::explored(false));
        }

        let mut dissolved = 0;
        for _ in 0..self.settings.dissolve_passes {
            dissolved += dissolve_pass(world, &mut self.rng, floor);
        }

        world.set_cell_kind(start, floor, CellOverrides::explored(true));
        world.set_cell_kind(exit, exit_kind, CellOverrides::explored(false));
        world.mark_all_dirty();

        info!(
            "[MazeGenerator] {size_x}x{size_y} maze: start={start:?} exit={exit:?} \
             corridor={} dissolved={dissolved}",
            corridor.len()
        );
        Ok(GeneratedMaze { start, exit, corridor, carve_restarts, dissolved })
    }
}

/// Walls must block and floor/exit must not, or the carved route would not be walkable.
fn check_solidity(world: &GridWorld, kind: CellTypeId, solid: bool) -> Result<(), GridError> {
    let cell_type = world.registry().resolve(kind);
    if cell_type.solid == solid {
        return Ok(());
    }
    let expected = if solid { "solid" } else { "passable" };
    Err(GridError::InvalidConfig(format!("maze type `{}` must be {expected}", cell_type.name)))
}
