use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use levelgen::{
    ComposeTargets, GeneratedLevel, GeneratorConfig, GridPos, LevelGenerator, MemorySurface,
    RoomType, SurfaceBindings, TileSurface,
};
use tools::demo::demo_template_set;
use xxhash_rust::xxh3::xxh3_64;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the generation run
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Optional path to a generator config JSON file
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str(&data).with_context(|| "Failed to deserialize config JSON")?
        }
        None => GeneratorConfig::default(),
    };

    let generator = LevelGenerator::new(config)?;
    let library = demo_template_set();

    let mut layer_surfaces: Vec<MemorySurface> =
        generator.config().tile_layers.iter().map(|_| MemorySurface::new()).collect();
    let mut border = MemorySurface::new();

    let layer_names: Vec<String> = generator.config().tile_layers.clone();
    let bindings = layer_names
        .iter()
        .map(String::as_str)
        .zip(layer_surfaces.iter_mut().map(|surface| surface as &mut dyn TileSurface))
        .collect();
    let layers = SurfaceBindings::bind(generator.config(), bindings)?;

    let mut targets = ComposeTargets { layers, border: &mut border };
    let level = generator.generate(args.seed, &library, &mut targets);
    drop(targets);

    println!("Generated level for seed {}", args.seed);
    println!(
        "Room grid: {}x{} ({} tiles wide, {} tall)",
        level.grid.width(),
        level.grid.height(),
        level.map_tiles_width,
        level.map_tiles_height
    );
    print_room_grid(&level);

    println!("Path ({} cells): start {:?}, end {:?}", level.path.len(), level.start, level.end);
    for (name, surface) in layer_names.iter().zip(&layer_surfaces) {
        println!("Layer {name:?}: {} tiles written", surface.len());
    }
    println!("Border: {} wall tiles", border.len());
    println!(
        "Trigger bounds: center ({:.1}, {:.1}), size ({:.1}, {:.1})",
        level.trigger_bounds.center.x,
        level.trigger_bounds.center.y,
        level.trigger_bounds.size.x,
        level.trigger_bounds.size.y
    );
    match level.spawn_position("SpawnPoint") {
        Some(spawn) => println!("Spawn position: ({:.1}, {:.1})", spawn.x, spawn.y),
        None => println!("Spawn position: none (no start room composited)"),
    }
    println!("Layout fingerprint: {:016x}", xxh3_64(&level.canonical_bytes()));

    Ok(())
}

/// Room grid rendered top row first so it reads the way the level plays.
fn print_room_grid(level: &GeneratedLevel) {
    for y in (0..level.grid.height()).rev() {
        let mut row = String::new();
        for x in 0..level.grid.width() {
            let node = level.grid.node(GridPos { x: x as i32, y: y as i32 });
            row.push(match node.room_type {
                RoomType::None => '?',
                RoomType::Start => 'S',
                RoomType::End => 'E',
                RoomType::Corridor => '-',
                RoomType::Climb => 'C',
                RoomType::Top => 'T',
                RoomType::NonCritical => '.',
            });
        }
        println!("  {row}");
    }
}
