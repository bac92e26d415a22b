//! Public data model for one finished generation run.

use crate::bounds::TriggerBounds;
use crate::grid::RoomGrid;
use crate::template::{TemplateInstanceKey, TemplateInstances};
use crate::types::{GridPos, RoomType, TilePos, WorldVec};

/// A copied auxiliary object at its final world placement.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedObject {
    pub name: String,
    pub position: WorldVec,
    pub rotation: f32,
}

/// Where the Start room landed, plus the retained template instance the
/// caller extracts spawn markers from. The instance stays alive inside the
/// result's arena until the caller takes or drops it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeResult {
    pub start_instance: TemplateInstanceKey,
    pub tile_offset: TilePos,
    pub world_offset: WorldVec,
}

/// Everything one generation run produces. Tile writes happen as side
/// effects on the bound surfaces; this struct carries the layout data and
/// the ownership of the retained Start instance.
#[derive(Clone, Debug)]
pub struct GeneratedLevel {
    pub grid: RoomGrid,
    pub path: Vec<GridPos>,
    pub start: GridPos,
    pub end: GridPos,
    pub map_tiles_width: u32,
    pub map_tiles_height: u32,
    pub cell_size: WorldVec,
    pub placed_objects: Vec<PlacedObject>,
    pub composite: Option<CompositeResult>,
    pub instances: TemplateInstances,
    pub trigger_bounds: TriggerBounds,
}

impl GeneratedLevel {
    /// World position of a named marker object inside the retained Start
    /// instance, or `None` when no Start room was composited or the marker
    /// is missing.
    pub fn spawn_position(&self, marker_name: &str) -> Option<WorldVec> {
        let composite = self.composite.as_ref()?;
        let instance = self.instances.get(composite.start_instance)?;
        let marker = instance.object_named(marker_name)?;
        Some(WorldVec {
            x: composite.world_offset.x + marker.local_position.x * self.cell_size.x,
            y: composite.world_offset.y + marker.local_position.y * self.cell_size.y,
        })
    }

    /// Stable byte encoding of the layout for fingerprinting and
    /// determinism checks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        bytes.extend(self.map_tiles_width.to_le_bytes());
        bytes.extend(self.map_tiles_height.to_le_bytes());

        for node in self.grid.nodes() {
            bytes.push(match node.room_type {
                RoomType::None => 0,
                RoomType::Start => 1,
                RoomType::End => 2,
                RoomType::Corridor => 3,
                RoomType::Climb => 4,
                RoomType::Top => 5,
                RoomType::NonCritical => 6,
            });
            bytes.push(u8::from(node.in_main_path));
        }

        bytes.extend((self.path.len() as u32).to_le_bytes());
        for cell in &self.path {
            bytes.extend(cell.x.to_le_bytes());
            bytes.extend(cell.y.to_le_bytes());
        }
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.end.x.to_le_bytes());
        bytes.extend(self.end.y.to_le_bytes());

        bytes.extend((self.placed_objects.len() as u32).to_le_bytes());
        for object in &self.placed_objects {
            bytes.extend((object.name.len() as u32).to_le_bytes());
            bytes.extend(object.name.as_bytes());
            bytes.extend(object.position.x.to_le_bytes());
            bytes.extend(object.position.y.to_le_bytes());
            bytes.extend(object.rotation.to_le_bytes());
        }

        bytes.push(u8::from(self.composite.is_some()));
        if let Some(composite) = &self.composite {
            bytes.extend(composite.tile_offset.x.to_le_bytes());
            bytes.extend(composite.tile_offset.y.to_le_bytes());
            bytes.extend(composite.world_offset.x.to_le_bytes());
            bytes.extend(composite.world_offset.y.to_le_bytes());
        }

        bytes.extend(self.trigger_bounds.center.x.to_le_bytes());
        bytes.extend(self.trigger_bounds.center.y.to_le_bytes());
        bytes.extend(self.trigger_bounds.size.x.to_le_bytes());
        bytes.extend(self.trigger_bounds.size.y.to_le_bytes());

        bytes
    }
}
