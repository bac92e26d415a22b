//! Built-in demo template set for the developer binaries.

use levelgen::{
    RoomType, TemplateDef, TemplateObject, TemplateSet, TileFragment, TileId, TilePos, WorldVec,
};

pub const FLOOR_TILE: TileId = TileId(2);
pub const LADDER_TILE: TileId = TileId(9);
pub const PLATFORM_TILE: TileId = TileId(3);

/// One simple template per room type, sized for the default 12x10 rooms.
/// Every room gets a floor run on the `main` layer; climb rooms add a
/// ladder column on the `ladders` layer; start and end rooms carry their
/// marker objects.
pub fn demo_template_set() -> TemplateSet {
    let mut set = TemplateSet::new();

    set.insert(
        RoomType::Start,
        TemplateDef {
            name: "demo_start".to_string(),
            fragments: vec![floor_run()],
            objects: vec![TemplateObject {
                name: "SpawnPoint".to_string(),
                local_position: WorldVec { x: 6.0, y: 1.0 },
                rotation: 0.0,
            }],
        },
    );

    set.insert(
        RoomType::End,
        TemplateDef {
            name: "demo_end".to_string(),
            fragments: vec![floor_run()],
            objects: vec![TemplateObject {
                name: "ExitDoor".to_string(),
                local_position: WorldVec { x: 10.0, y: 1.0 },
                rotation: 0.0,
            }],
        },
    );

    set.insert(
        RoomType::Corridor,
        TemplateDef {
            name: "demo_corridor".to_string(),
            fragments: vec![floor_run()],
            objects: Vec::new(),
        },
    );

    set.insert(
        RoomType::Climb,
        TemplateDef {
            name: "demo_climb".to_string(),
            fragments: vec![
                floor_run(),
                TileFragment::filled("ladders", TilePos { x: 5, y: 0 }, 1, 10, LADDER_TILE),
            ],
            objects: Vec::new(),
        },
    );

    set.insert(
        RoomType::Top,
        TemplateDef {
            name: "demo_top".to_string(),
            fragments: vec![
                floor_run(),
                TileFragment::filled("main", TilePos { x: 3, y: 4 }, 6, 1, PLATFORM_TILE),
            ],
            objects: Vec::new(),
        },
    );

    set.insert(
        RoomType::NonCritical,
        TemplateDef {
            name: "demo_filler".to_string(),
            fragments: vec![floor_run()],
            objects: Vec::new(),
        },
    );

    set
}

fn floor_run() -> TileFragment {
    TileFragment::filled("main", TilePos { x: 0, y: 0 }, 12, 1, FLOOR_TILE)
}
