//! World-space playable-area rectangle handed to the boundary collaborator.

use crate::config::BoundsPadding;
use crate::types::WorldVec;

/// The published playable-area rectangle. Registration and enforcement of
/// the boundary belong to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBounds {
    pub center: WorldVec,
    pub size: WorldVec,
}

/// Map tile extents plus per-side padding, scaled into world units. The
/// center shifts by half the padding imbalance on each axis.
pub fn compute_trigger_bounds(
    map_tiles_width: u32,
    map_tiles_height: u32,
    padding: BoundsPadding,
    cell_size: WorldVec,
) -> TriggerBounds {
    let map_width = map_tiles_width as f32;
    let map_height = map_tiles_height as f32;

    let size = WorldVec {
        x: (map_width + (padding.left + padding.right) as f32) * cell_size.x,
        y: (map_height + (padding.down + padding.up) as f32) * cell_size.y,
    };
    let center = WorldVec {
        x: (map_width * 0.5 + (padding.right as f32 - padding.left as f32) * 0.5) * cell_size.x,
        y: (map_height * 0.5 + (padding.up as f32 - padding.down as f32) * 0.5) * cell_size.y,
    };

    TriggerBounds { center, size }
}
