//! High-level generation orchestration: one call runs the whole pipeline
//! from grid configuration to bounds publishing.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::border::stamp_border;
use crate::bounds::compute_trigger_bounds;
use crate::classify::assign_room_types;
use crate::compose::{ComposeContext, compose_rooms};
use crate::config::{ConfigError, GeneratorConfig};
use crate::grid::{RoomGrid, pick_start_room, roll_grid_size};
use crate::model::GeneratedLevel;
use crate::path::carve_path;
use crate::surface::{SurfaceBindings, TileSurface};
use crate::template::{TemplateInstances, TemplateLibrary};

/// The destination surfaces of one generation run: the validated per-layer
/// bindings plus the dedicated border layer.
pub struct ComposeTargets<'a> {
    pub layers: SurfaceBindings<'a>,
    pub border: &'a mut dyn TileSurface,
}

pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the full pipeline: grid configuration, path carving, room
    /// classification, template compositing, border stamping, and bounds
    /// computation. Synchronous, no retries across stages; identical seeds
    /// produce identical levels.
    pub fn generate(
        &self,
        seed: u64,
        library: &dyn TemplateLibrary,
        targets: &mut ComposeTargets<'_>,
    ) -> GeneratedLevel {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let (width, height) = roll_grid_size(&mut rng, &self.config);
        let mut grid = RoomGrid::new(width, height);

        let start = pick_start_room(&mut rng, width);
        let path = carve_path(&mut rng, start, width as i32, height as i32);
        assign_room_types(&mut grid, &path, start);

        let mut instances = TemplateInstances::new();
        let mut placed_objects = Vec::new();
        let composite = compose_rooms(&mut ComposeContext {
            room_width: self.config.room_width,
            room_height: self.config.room_height,
            cell_size: self.config.cell_size,
            grid: &grid,
            library,
            surfaces: &mut targets.layers,
            instances: &mut instances,
            placed_objects: &mut placed_objects,
        });

        let map_tiles_width = width as u32 * self.config.room_width;
        let map_tiles_height = height as u32 * self.config.room_height;

        stamp_border(
            targets.border,
            self.config.wall_tile,
            map_tiles_width as i32,
            map_tiles_height as i32,
            self.config.border_thickness as i32,
        );

        let trigger_bounds = compute_trigger_bounds(
            map_tiles_width,
            map_tiles_height,
            self.config.padding,
            self.config.cell_size,
        );

        GeneratedLevel {
            grid,
            path: path.cells,
            start,
            end: path.end,
            map_tiles_width,
            map_tiles_height,
            cell_size: self.config.cell_size,
            placed_objects,
            composite,
            instances,
            trigger_bounds,
        }
    }
}

/// One-shot convenience over [`LevelGenerator`].
pub fn generate_level(
    config: GeneratorConfig,
    seed: u64,
    library: &dyn TemplateLibrary,
    targets: &mut ComposeTargets<'_>,
) -> Result<GeneratedLevel, ConfigError> {
    Ok(LevelGenerator::new(config)?.generate(seed, library, targets))
}
