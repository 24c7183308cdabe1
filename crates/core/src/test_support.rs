//! Shared test fixtures for the crate's unit test suites.
//! This module exists to avoid repeating grid setup across world, mapgen and
//! pathfinding tests. It does not own production logic.

use crate::cell::{CellOverrides, FLOOR, WALL};
use crate::types::Pos;
use crate::world::GridWorld;

/// Walls on the outer ring, floor inside. The dirty queue holds the shaping writes.
pub(crate) fn bordered_room(width: usize, height: usize) -> GridWorld {
    let mut world = GridWorld::new(width, height);
    let (w, h) = (width as i32, height as i32);
    world.fill(0, 0, w - 1, h - 1, WALL).expect("wall is built in");
    world.fill(1, 1, w - 2, h - 2, FLOOR).expect("floor is built in");
    world
}

pub(crate) fn solid_grid(width: usize, height: usize) -> GridWorld {
    let mut world = GridWorld::new(width, height);
    world.fill(0, 0, width as i32 - 1, height as i32 - 1, WALL).expect("wall is built in");
    world
}

/// Carves `route` as floor through an otherwise solid grid.
pub(crate) fn carved_route(width: usize, height: usize, route: &[Pos]) -> GridWorld {
    let mut world = solid_grid(width, height);
    for &pos in route {
        world.set_cell(pos, FLOOR, CellOverrides::default()).expect("floor is built in");
    }
    world
}

/// Single-width clockwise spiral for an 11x11 grid, from the outer corner (1,1) inwards
/// to (5,5). Rings are separated by a wall, so there is exactly one route between its ends.
pub(crate) fn spiral_route() -> Vec<Pos> {
    let corners = [
        Pos::new(1, 1),
        Pos::new(9, 1),
        Pos::new(9, 9),
        Pos::new(1, 9),
        Pos::new(1, 3),
        Pos::new(7, 3),
        Pos::new(7, 7),
        Pos::new(3, 7),
        Pos::new(3, 5),
        Pos::new(5, 5),
    ];
    let mut route = vec![corners[0]];
    for pair in corners.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (dx, dy) = ((to.x - from.x).signum(), (to.y - from.y).signum());
        let mut pos = from;
        while pos != to {
            pos = pos.offset(dx, dy);
            route.push(pos);
        }
    }
    route
}
