//! Perimeter wall stamping around the composited map.

use crate::surface::TileSurface;
use crate::types::{TileId, TilePos};

/// Fill a `thickness`-deep ring of wall tiles around the map's tile-space
/// bounding rectangle. The horizontal bands extend across the corners so
/// the ring closes for any thickness of at least one.
pub fn stamp_border(
    surface: &mut dyn TileSurface,
    wall_tile: TileId,
    map_width: i32,
    map_height: i32,
    thickness: i32,
) {
    for x in -thickness..map_width + thickness {
        for y in -thickness..0 {
            surface.set_tile(TilePos { x, y }, wall_tile);
        }
    }

    for x in -thickness..map_width + thickness {
        for y in map_height..map_height + thickness {
            surface.set_tile(TilePos { x, y }, wall_tile);
        }
    }

    for x in -thickness..0 {
        for y in 0..map_height {
            surface.set_tile(TilePos { x, y }, wall_tile);
        }
    }

    for x in map_width..map_width + thickness {
        for y in 0..map_height {
            surface.set_tile(TilePos { x, y }, wall_tile);
        }
    }
}
