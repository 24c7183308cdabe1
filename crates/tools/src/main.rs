use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use grid_world::{
    AsciiRenderer, CellTypeDef, CellTypeRegistry, GridWorld, MazeGenerator, PathPlanner, Pos,
};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a maze and print it as ASCII", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 21)]
    width: usize,
    #[arg(long, default_value_t = 15)]
    height: usize,
    #[arg(long, default_value_t = 1)]
    start_x: i32,
    #[arg(long, default_value_t = 1)]
    start_y: i32,
    #[arg(short, long, env = "MAZEGEN_SEED", default_value_t = 42)]
    seed: u64,
    /// TOML file mapping cell type names to definitions
    #[arg(long)]
    cell_types: Option<PathBuf>,
    /// Reveal the whole map before printing
    #[arg(long)]
    reveal: bool,
    /// Overlay the start-to-exit path with `*`
    #[arg(long)]
    show_path: bool,
}

fn load_registry(path: Option<&Path>) -> Result<CellTypeRegistry> {
    let Some(path) = path else {
        return Ok(CellTypeRegistry::with_exit());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cell type file: {}", path.display()))?;
    let defs: BTreeMap<String, CellTypeDef> = toml::from_str(&text)
        .with_context(|| format!("Failed to parse cell type TOML: {}", path.display()))?;
    let registry = CellTypeRegistry::from_definitions(defs)
        .with_context(|| format!("Invalid cell type definitions in {}", path.display()))?;
    info!("[mazegen] loaded {} cell types from {}", registry.len(), path.display());
    Ok(registry)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let registry = load_registry(args.cell_types.as_deref())?;
    let mut world = GridWorld::with_registry(args.width, args.height, registry);
    let start = Pos::new(args.start_x, args.start_y);
    let maze = MazeGenerator::new(args.seed)
        .generate(&mut world, args.width, args.height, start)
        .with_context(|| {
            format!("Maze generation failed for {}x{} from {start:?}", args.width, args.height)
        })?;

    if args.reveal {
        world.reveal_all();
    }

    let path = PathPlanner::new(&world).find_path(maze.start, maze.exit);
    let mut renderer = AsciiRenderer::for_world(&world);
    world.flush_dirty(&mut renderer);
    if args.show_path {
        for &pos in path.iter().flatten() {
            if pos != maze.start && pos != maze.exit {
                renderer.overlay(pos, '*');
            }
        }
    }

    println!("{}", renderer.render());
    println!("Seed: {}", args.seed);
    println!("Start: ({}, {})", maze.start.x, maze.start.y);
    println!("Exit: ({}, {})", maze.exit.x, maze.exit.y);
    match &path {
        Some(path) => println!("Path length: {}", path.len() - 1),
        None => println!("Path length: unreachable"),
    }
    println!("Fingerprint: {:016x}", world.fingerprint());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use grid_world::{CellEffect, EffectTrigger, EXIT, WALL};
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_file_argument_uses_builtin_types() {
        let registry = load_registry(None).expect("built-ins");
        assert!(registry.id(WALL).is_some());
        assert!(registry.id(EXIT).is_some());
    }

    #[test]
    fn toml_definitions_extend_and_override_builtins() {
        let file = write_config(
            r##"
[wall]
glyph = "#"
solid = true
display_name = "Granite"

[spikes]
glyph = "^"
on_enter = { kind = "damage", amount = 2 }
"##,
        );
        let registry = load_registry(Some(file.path())).expect("valid config");

        let wall = registry.resolve(registry.require(WALL).expect("wall"));
        assert_eq!(wall.display_name, "Granite");
        let spikes = registry.resolve(registry.require("spikes").expect("spikes"));
        assert!(!spikes.solid);
        assert_eq!(spikes.effect(EffectTrigger::Enter), Some(&CellEffect::Damage { amount: 2 }));
    }

    #[test]
    fn malformed_toml_reports_the_file() {
        let file = write_config("[lava\nglyph = '~'");
        let err = load_registry(Some(file.path())).expect_err("broken TOML");
        assert!(format!("{err:#}").contains("Failed to parse cell type TOML"));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_registry(Some(&dir.path().join("absent.toml"))).expect_err("no file");
        assert!(format!("{err:#}").contains("Failed to read cell type file"));
    }

    #[test]
    fn solid_exit_from_config_fails_generation() {
        let file = write_config("[exit]\nglyph = \">\"\nsolid = true\n");
        let registry = load_registry(Some(file.path())).expect("well-formed config");
        let mut world = GridWorld::with_registry(21, 15, registry);
        let err = MazeGenerator::new(42)
            .generate(&mut world, 21, 15, Pos::new(1, 1))
            .expect_err("exit must be passable");
        assert!(err.to_string().contains("exit"), "{err}");
    }

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["mazegen", "--seed", "7", "--show-path"]).expect("args");
        assert_eq!((args.width, args.height), (21, 15));
        assert_eq!((args.start_x, args.start_y), (1, 1));
        assert_eq!(args.seed, 7);
        assert!(args.show_path);
        assert!(!args.reveal);
    }
}
