pub mod cell;
pub mod hash;
pub mod mapgen;
pub mod pathfinding;
pub mod types;
pub mod world;

#[cfg(test)]
mod test_support;

pub use cell::{
    Cell, CellEffect, CellOverrides, CellType, CellTypeDef, CellTypeRegistry, EffectTrigger, EXIT,
    FLOOR, UNEXPLORED_GLYPH, WALL,
};
pub use mapgen::{GeneratedMaze, MazeGenerator, MazeSettings, generate_maze};
pub use pathfinding::{DistanceField, PathPlanner};
pub use types::*;
pub use world::{Appearance, AsciiRenderer, CellRenderer, GridWorld, Occupant};
