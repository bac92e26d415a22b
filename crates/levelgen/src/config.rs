//! Generation parameters and their up-front validation.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{TileId, WorldVec};

/// Hard cap on either room-grid dimension. Layouts are meant to stay small;
/// anything larger belongs to a different generator.
pub const MAX_GRID_EXTENT: u32 = 16;

/// Per-side playable-area padding, in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsPadding {
    pub left: u32,
    pub right: u32,
    pub down: u32,
    pub up: u32,
}

impl BoundsPadding {
    pub fn uniform(tiles: u32) -> Self {
        Self { left: tiles, right: tiles, down: tiles, up: tiles }
    }
}

/// All inputs of one generation run except the seed and the collaborators.
///
/// `grid_min..=grid_max` is the inclusive range both grid dimensions are
/// drawn from. `tile_layers` lists the destination layer names template
/// fragments may be copied into; the set of bound surfaces is checked
/// against it before generation starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub grid_min: u32,
    pub grid_max: u32,
    pub room_width: u32,
    pub room_height: u32,
    pub cell_size: WorldVec,
    pub border_thickness: u32,
    pub padding: BoundsPadding,
    pub wall_tile: TileId,
    pub tile_layers: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_min: 4,
            grid_max: 5,
            room_width: 12,
            room_height: 10,
            cell_size: WorldVec { x: 1.0, y: 1.0 },
            border_thickness: 10,
            padding: BoundsPadding::uniform(3),
            wall_tile: TileId(1),
            tile_layers: vec!["main".to_string(), "ladders".to_string()],
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_min > self.grid_max {
            return Err(ConfigError::GridRangeEmpty { min: self.grid_min, max: self.grid_max });
        }
        // The carver's mandatory lateral step needs at least two columns.
        if self.grid_min < 2 {
            return Err(ConfigError::GridRangeTooSmall { min: self.grid_min });
        }
        if self.grid_max > MAX_GRID_EXTENT {
            return Err(ConfigError::GridRangeTooLarge { max: self.grid_max });
        }
        if self.room_width == 0 || self.room_height == 0 {
            return Err(ConfigError::ZeroRoomDimensions);
        }
        if self.cell_size.x <= 0.0 || self.cell_size.y <= 0.0 {
            return Err(ConfigError::NonPositiveCellSize);
        }
        for (index, layer) in self.tile_layers.iter().enumerate() {
            if layer.is_empty() {
                return Err(ConfigError::EmptyLayerName);
            }
            if self.tile_layers[..index].contains(layer) {
                return Err(ConfigError::DuplicateLayer(layer.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    GridRangeEmpty { min: u32, max: u32 },
    GridRangeTooSmall { min: u32 },
    GridRangeTooLarge { max: u32 },
    ZeroRoomDimensions,
    NonPositiveCellSize,
    EmptyLayerName,
    DuplicateLayer(String),
    UnboundLayer(String),
    UnknownLayer(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridRangeEmpty { min, max } => {
                write!(f, "grid size range {min}..={max} is empty")
            }
            Self::GridRangeTooSmall { min } => {
                write!(f, "grid size range starts at {min}, need at least 2 columns")
            }
            Self::GridRangeTooLarge { max } => {
                write!(f, "grid size range ends at {max}, cap is {MAX_GRID_EXTENT}")
            }
            Self::ZeroRoomDimensions => write!(f, "room dimensions must be at least 1x1 tiles"),
            Self::NonPositiveCellSize => write!(f, "world cell size must be positive"),
            Self::EmptyLayerName => write!(f, "tile layer names must not be empty"),
            Self::DuplicateLayer(layer) => write!(f, "tile layer {layer:?} listed twice"),
            Self::UnboundLayer(layer) => {
                write!(f, "configured tile layer {layer:?} has no bound surface")
            }
            Self::UnknownLayer(layer) => {
                write!(f, "bound surface {layer:?} is not a configured tile layer")
            }
        }
    }
}

impl Error for ConfigError {}
