use grid_world::{CellOverrides, FLOOR, GridError, GridWorld, PathPlanner, Pos, WALL};

fn corridor(width: usize, height: usize, corners: &[Pos]) -> (GridWorld, Vec<Pos>) {
    let mut world = GridWorld::new(width, height);
    world.fill(0, 0, width as i32 - 1, height as i32 - 1, WALL).expect("wall");
    let mut route = vec![corners[0]];
    for pair in corners.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        world.line(from.x, from.y, to.x, to.y, FLOOR).expect("orthogonal leg");
        let (dx, dy) = ((to.x - from.x).signum(), (to.y - from.y).signum());
        let mut pos = from;
        while pos != to {
            pos = pos.offset(dx, dy);
            route.push(pos);
        }
    }
    (world, route)
}

#[test]
fn test_passable_count_for_solid_and_open_grids() {
    let mut world = GridWorld::new(20, 20);
    world.fill(0, 0, 19, 19, WALL).expect("wall");
    assert_eq!(PathPlanner::new(&world).count_passable_cells(), 0);

    world.fill(0, 0, 19, 19, FLOOR).expect("floor");
    assert_eq!(PathPlanner::new(&world).count_passable_cells(), 400);
}

#[test]
fn test_bordered_room_first_steps() {
    let mut world = GridWorld::new(10, 10);
    world.fill(0, 0, 9, 9, WALL).expect("wall");
    world.fill(1, 1, 8, 8, FLOOR).expect("floor");
    let planner = PathPlanner::new(&world);

    let north = planner.find_path(Pos::new(5, 5), Pos::new(5, 1)).expect("open interior");
    assert_eq!(north[1], Pos::new(5, 4));
    let south = planner.find_path(Pos::new(5, 5), Pos::new(5, 8)).expect("open interior");
    assert_eq!(south[1], Pos::new(5, 6));
}

#[test]
fn test_single_route_corridor_is_reproduced() {
    let corners = [
        Pos::new(1, 1),
        Pos::new(7, 1),
        Pos::new(7, 3),
        Pos::new(1, 3),
        Pos::new(1, 5),
        Pos::new(7, 5),
    ];
    let (world, route) = corridor(9, 7, &corners);
    let planner = PathPlanner::new(&world);

    let path = planner.find_path(route[0], route[route.len() - 1]).expect("corridor connects");
    assert_eq!(path, route);
    assert_eq!(planner.count_passable_cells(), route.len());
}

#[test]
fn test_out_of_bounds_reads_are_solid_and_writes_are_ignored() {
    let mut world = GridWorld::new(4, 4);
    let before = world.fingerprint();

    assert!(world.is_solid(Pos::new(-1, 0)));
    assert!(world.cell(Pos::new(4, 2)).solid.unwrap_or(false));
    world.set_cell(Pos::new(9, 9), WALL, CellOverrides::default()).expect("known type");
    world.fill(10, 10, 12, 12, WALL).expect("known type");
    assert_eq!(world.fingerprint(), before);
}

#[test]
fn test_malformed_requests_surface_as_errors() {
    let mut world = GridWorld::new(6, 6);
    assert_eq!(
        world.line(0, 0, 3, 2, WALL),
        Err(GridError::InvalidGeometry { x0: 0, y0: 0, x1: 3, y1: 2 })
    );
    assert_eq!(
        world.fill(0, 0, 1, 1, "magma"),
        Err(GridError::UnknownCellType("magma".into()))
    );
}

#[test]
fn test_partial_fill_is_clipped() {
    let mut world = GridWorld::new(5, 5);
    world.fill(3, 3, 8, 8, WALL).expect("wall");
    assert_eq!(world.locate_all(WALL).len(), 4);
    assert_eq!(world.locate(WALL), Some(Pos::new(3, 3)));
}
