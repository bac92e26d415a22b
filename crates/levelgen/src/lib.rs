//! Procedural level layout generation for a 2D platformer: a room grid, a
//! carved bottom-to-top traversal path, room classification, and template
//! compositing into caller-owned tile surfaces.

pub mod border;
pub mod bounds;
pub mod classify;
pub mod compose;
pub mod config;
pub mod coords;
pub mod generator;
pub mod grid;
pub mod model;
pub mod path;
pub mod surface;
pub mod template;
pub mod types;

mod rng;

pub use border::stamp_border;
pub use bounds::{TriggerBounds, compute_trigger_bounds};
pub use classify::assign_room_types;
pub use compose::{ComposeContext, compose_rooms};
pub use config::{BoundsPadding, ConfigError, GeneratorConfig, MAX_GRID_EXTENT};
pub use coords::{room_tile_offset, room_world_origin, tile_to_world};
pub use generator::{ComposeTargets, LevelGenerator, generate_level};
pub use grid::{RoomGrid, RoomNode};
pub use model::{CompositeResult, GeneratedLevel, PlacedObject};
pub use path::{CarvedPath, carve_path};
pub use surface::{MemorySurface, SurfaceBindings, TileSurface};
pub use template::{
    TemplateDef, TemplateInstance, TemplateInstanceKey, TemplateInstances, TemplateLibrary,
    TemplateObject, TemplateSet, TileFragment,
};
pub use types::{GridPos, RoomType, TileId, TilePos, WorldVec};
