//! Pure coordinate transforms between grid cells, tile space, and world
//! space.

use crate::types::{GridPos, TilePos, WorldVec};

/// Tile-space origin of a room cell: one room's worth of tiles per cell.
pub fn room_tile_offset(cell: GridPos, room_width: u32, room_height: u32) -> TilePos {
    TilePos { x: cell.x * room_width as i32, y: cell.y * room_height as i32 }
}

/// World-space position of a tile coordinate.
pub fn tile_to_world(tile: TilePos, cell_size: WorldVec) -> WorldVec {
    WorldVec { x: tile.x as f32 * cell_size.x, y: tile.y as f32 * cell_size.y }
}

/// World-space origin of a room cell.
pub fn room_world_origin(
    cell: GridPos,
    room_width: u32,
    room_height: u32,
    cell_size: WorldVec,
) -> WorldVec {
    tile_to_world(room_tile_offset(cell, room_width, room_height), cell_size)
}
