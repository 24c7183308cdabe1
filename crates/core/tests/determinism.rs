use grid_world::{GridWorld, MazeGenerator, PathPlanner, Pos, generate_maze};

#[test]
fn test_determinism_identical_seeds_produce_same_fingerprint() {
    let (world1, maze1) = generate_maze(12345, 41, 31, Pos::new(1, 1)).expect("maze 1");
    let (world2, maze2) = generate_maze(12345, 41, 31, Pos::new(1, 1)).expect("maze 2");

    assert_eq!(
        world1.fingerprint(),
        world2.fingerprint(),
        "Identical requests must produce identical grids"
    );
    assert_eq!(maze1, maze2);
}

#[test]
fn test_determinism_different_seeds_produce_different_fingerprints() {
    let (world1, _) = generate_maze(123, 41, 31, Pos::new(1, 1)).expect("maze 1");
    let (world2, _) = generate_maze(456, 41, 31, Pos::new(1, 1)).expect("maze 2");

    assert_ne!(
        world1.fingerprint(),
        world2.fingerprint(),
        "Different seeds should produce different grids"
    );
}

#[test]
fn test_determinism_prior_world_contents_do_not_leak() {
    let (fresh, _) = generate_maze(77, 25, 19, Pos::new(3, 5)).expect("fresh");

    let mut reused = GridWorld::new(60, 60);
    reused.reveal_all();
    MazeGenerator::new(77).generate(&mut reused, 25, 19, Pos::new(3, 5)).expect("reused");

    assert_eq!(fresh.canonical_bytes(), reused.canonical_bytes());
}

#[test]
fn test_determinism_path_queries_are_stable() {
    let (world, maze) = generate_maze(2024, 51, 35, Pos::new(1, 33)).expect("maze");
    let planner = PathPlanner::new(&world);

    let first = planner.find_path(maze.start, maze.exit).expect("solvable");
    for _ in 0..3 {
        assert_eq!(planner.find_path(maze.start, maze.exit).as_ref(), Some(&first));
    }
    let field = planner.distance_field(maze.exit);
    assert_eq!(field.distance(maze.start), Some((first.len() - 1) as u32));
}
