//! Sweeps many seeds and checks the layout invariants on every generated
//! level. A cheap confidence harness for generation changes.

use std::collections::BTreeSet;

use anyhow::{Result, bail};
use clap::Parser;
use levelgen::{
    ComposeTargets, GeneratorConfig, LevelGenerator, MemorySurface, RoomType, SurfaceBindings,
    TilePos, TileSurface,
};
use tools::demo::demo_template_set;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many consecutive seeds to generate
    #[arg(short, long, default_value_t = 500)]
    runs: u64,
    /// First seed of the sweep
    #[arg(short, long, default_value_t = 0)]
    first_seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let generator = LevelGenerator::new(GeneratorConfig::default())?;
    let library = demo_template_set();

    println!("Soaking {} seeds starting at {}...", args.runs, args.first_seed);

    let mut min_path_len = usize::MAX;
    let mut max_path_len = 0_usize;

    for seed in args.first_seed..args.first_seed + args.runs {
        let mut main = MemorySurface::new();
        let mut ladders = MemorySurface::new();
        let mut border = MemorySurface::new();
        let layers = SurfaceBindings::bind(
            generator.config(),
            vec![
                ("main", &mut main as &mut dyn TileSurface),
                ("ladders", &mut ladders as &mut dyn TileSurface),
            ],
        )?;
        let mut targets = ComposeTargets { layers, border: &mut border };
        let level = generator.generate(seed, &library, &mut targets);
        drop(targets);

        let height = level.grid.height() as i32;
        let rows: BTreeSet<i32> = level.path.iter().map(|cell| cell.y).collect();
        if rows != (0..height).collect::<BTreeSet<i32>>() {
            bail!("seed {seed}: path does not touch every row");
        }
        if level.end.y != height - 1 {
            bail!("seed {seed}: end {:?} is not on the top row", level.end);
        }
        for node in level.grid.nodes() {
            if !node.in_main_path && node.room_type != RoomType::NonCritical {
                bail!("seed {seed}: off-path node {:?} left unclassified", node.grid_position);
            }
        }
        if level.composite.is_none() {
            bail!("seed {seed}: start room failed to composite");
        }
        if level.spawn_position("SpawnPoint").is_none() {
            bail!("seed {seed}: spawn marker missing from the retained start room");
        }

        let width = level.map_tiles_width as i32;
        let map_height = level.map_tiles_height as i32;
        for x in -1..=width {
            if border.tile_at(TilePos { x, y: -1 }).is_none()
                || border.tile_at(TilePos { x, y: map_height }).is_none()
            {
                bail!("seed {seed}: border ring has a horizontal gap at x={x}");
            }
        }
        for y in 0..map_height {
            if border.tile_at(TilePos { x: -1, y }).is_none()
                || border.tile_at(TilePos { x: width, y }).is_none()
            {
                bail!("seed {seed}: border ring has a vertical gap at y={y}");
            }
        }

        min_path_len = min_path_len.min(level.path.len());
        max_path_len = max_path_len.max(level.path.len());
    }

    println!(
        "All {} seeds passed. Path length range: {}..={}",
        args.runs, min_path_len, max_path_len
    );
    Ok(())
}
