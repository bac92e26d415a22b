//! Template compositing: copying per-room template content into the
//! destination surfaces.

use crate::coords::{room_tile_offset, room_world_origin};
use crate::grid::RoomGrid;
use crate::model::{CompositeResult, PlacedObject};
use crate::surface::SurfaceBindings;
use crate::template::{TemplateInstance, TemplateInstances, TemplateLibrary};
use crate::types::{GridPos, RoomType, TilePos, WorldVec};

/// Borrowed state for one compositing pass.
pub struct ComposeContext<'a, 'b> {
    pub room_width: u32,
    pub room_height: u32,
    pub cell_size: WorldVec,
    pub grid: &'a RoomGrid,
    pub library: &'a dyn TemplateLibrary,
    pub surfaces: &'a mut SurfaceBindings<'b>,
    pub instances: &'a mut TemplateInstances,
    pub placed_objects: &'a mut Vec<PlacedObject>,
}

/// Composite every classified room into the bound surfaces.
///
/// Rooms without a template stay empty. Each room's instance is released
/// before moving on, except the Start room's, which is retained and handed
/// back so the caller can read its markers after compositing.
pub fn compose_rooms(context: &mut ComposeContext<'_, '_>) -> Option<CompositeResult> {
    let mut result = None;

    for x in 0..context.grid.width() {
        for y in 0..context.grid.height() {
            let pos = GridPos { x: x as i32, y: y as i32 };
            let node = context.grid.node(pos);

            let Some(template) = context.library.template_for(node.room_type) else {
                continue;
            };

            let tile_offset = room_tile_offset(pos, context.room_width, context.room_height);
            let world_offset =
                room_world_origin(pos, context.room_width, context.room_height, context.cell_size);

            let key = context.instances.instantiate(template);
            if let Some(instance) = context.instances.get(key) {
                copy_fragments(instance, context.surfaces, tile_offset);
                copy_objects(instance, context.placed_objects, world_offset, context.cell_size);
            }

            if node.room_type == RoomType::Start {
                result = Some(CompositeResult { start_instance: key, tile_offset, world_offset });
            } else {
                context.instances.release(key);
            }
        }
    }

    result
}

/// Copy every non-empty cell of each fragment whose layer is bound,
/// shifted into the room's tile-space slot.
fn copy_fragments(
    instance: &TemplateInstance,
    surfaces: &mut SurfaceBindings<'_>,
    offset: TilePos,
) {
    for fragment in &instance.fragments {
        let Some(surface) = surfaces.surface_mut(&fragment.layer) else {
            continue;
        };
        for local_y in 0..fragment.height {
            for local_x in 0..fragment.width {
                if let Some(tile) = fragment.cell(local_x, local_y) {
                    surface.set_tile(
                        TilePos {
                            x: fragment.origin.x + local_x as i32 + offset.x,
                            y: fragment.origin.y + local_y as i32 + offset.y,
                        },
                        tile,
                    );
                }
            }
        }
    }
}

/// Record a placed copy of every auxiliary object, local position scaled
/// by the world cell size, rotation preserved.
fn copy_objects(
    instance: &TemplateInstance,
    placed_objects: &mut Vec<PlacedObject>,
    world_offset: WorldVec,
    cell_size: WorldVec,
) {
    for object in &instance.objects {
        placed_objects.push(PlacedObject {
            name: object.name.clone(),
            position: WorldVec {
                x: world_offset.x + object.local_position.x * cell_size.x,
                y: world_offset.y + object.local_position.y * cell_size.y,
            },
            rotation: object.rotation,
        });
    }
}
