//! Destination tile surfaces and the validated layer-name bindings the
//! compositor writes through.

use std::collections::BTreeMap;

use crate::config::{ConfigError, GeneratorConfig};
use crate::types::{TileId, TilePos};

/// A named destination surface owned by the rendering collaborator.
pub trait TileSurface {
    fn set_tile(&mut self, pos: TilePos, tile: TileId);
}

/// Deterministic in-memory surface used by tests and the developer tools.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    tiles: BTreeMap<TilePos, TileId>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile_at(&self, pos: TilePos) -> Option<TileId> {
        self.tiles.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TilePos, TileId)> + '_ {
        self.tiles.iter().map(|(&pos, &tile)| (pos, tile))
    }
}

impl TileSurface for MemorySurface {
    fn set_tile(&mut self, pos: TilePos, tile: TileId) {
        self.tiles.insert(pos, tile);
    }
}

/// Mapping from configured layer name to a bound surface, checked when it
/// is built so a name mismatch can never turn into a silent no-op copy
/// during generation.
pub struct SurfaceBindings<'a> {
    entries: Vec<(String, &'a mut dyn TileSurface)>,
}

impl<'a> SurfaceBindings<'a> {
    pub fn bind(
        config: &GeneratorConfig,
        surfaces: Vec<(&str, &'a mut dyn TileSurface)>,
    ) -> Result<Self, ConfigError> {
        let mut entries: Vec<(String, &'a mut dyn TileSurface)> = Vec::with_capacity(surfaces.len());
        for (layer, surface) in surfaces {
            if !config.tile_layers.iter().any(|name| name == layer) {
                return Err(ConfigError::UnknownLayer(layer.to_string()));
            }
            if entries.iter().any(|(bound, _)| bound == layer) {
                return Err(ConfigError::DuplicateLayer(layer.to_string()));
            }
            entries.push((layer.to_string(), surface));
        }
        for layer in &config.tile_layers {
            if !entries.iter().any(|(bound, _)| bound == layer) {
                return Err(ConfigError::UnboundLayer(layer.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub(crate) fn surface_mut(&mut self, layer: &str) -> Option<&mut (dyn TileSurface + 'a)> {
        self.entries
            .iter_mut()
            .find(|(bound, _)| bound == layer)
            .map(|(_, surface)| &mut **surface)
    }
}
