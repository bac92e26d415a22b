//! Room-type assignment driven by the carved path.

use crate::grid::RoomGrid;
use crate::path::CarvedPath;
use crate::types::{GridPos, RoomType};

/// Classify every node of the grid against the carved path.
///
/// Interior path nodes are typed from a three-cell window: the cell right
/// before a row transition is a climb room, the first cell after one is a
/// top room, and lateral movement inside a row is a corridor. A window with
/// no vertical or lateral change leaves the node's type untouched; that
/// gap is part of the layout contract and is not papered over here. Start
/// and end are forced afterwards, and everything off the main path becomes
/// a non-critical room.
pub fn assign_room_types(grid: &mut RoomGrid, path: &CarvedPath, start: GridPos) {
    for &pos in &path.cells {
        grid.node_mut(pos).in_main_path = true;
    }

    for i in 1..path.cells.len().saturating_sub(1) {
        let from = path.cells[i - 1];
        let current = path.cells[i];
        let to = path.cells[i + 1];

        let node = grid.node_mut(current);
        if to.y > current.y {
            node.room_type = RoomType::Climb;
        } else if current.y > from.y {
            node.room_type = RoomType::Top;
        } else if current.x != from.x {
            node.room_type = RoomType::Corridor;
        }
    }

    grid.node_mut(start).room_type = RoomType::Start;
    grid.node_mut(path.end).room_type = RoomType::End;

    for node in grid.nodes_mut() {
        if !node.in_main_path {
            node.room_type = RoomType::NonCritical;
        }
    }
}
