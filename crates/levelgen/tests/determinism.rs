use levelgen::{
    ComposeTargets, GeneratedLevel, GeneratorConfig, LevelGenerator, MemorySurface, RoomType,
    SurfaceBindings, TemplateDef, TemplateObject, TemplateSet, TileFragment, TileId, TilePos,
    TileSurface, WorldVec,
};
use xxhash_rust::xxh3::xxh3_64;

fn library() -> TemplateSet {
    let mut set = TemplateSet::new();
    for (room_type, name) in [
        (RoomType::Start, "start_room"),
        (RoomType::End, "end_room"),
        (RoomType::Corridor, "corridor_room"),
        (RoomType::Climb, "climb_room"),
        (RoomType::Top, "top_room"),
        (RoomType::NonCritical, "filler_room"),
    ] {
        set.insert(
            room_type,
            TemplateDef {
                name: name.to_string(),
                fragments: vec![TileFragment::filled(
                    "main",
                    TilePos { x: 0, y: 0 },
                    12,
                    1,
                    TileId(2),
                )],
                objects: vec![TemplateObject {
                    name: "Anchor".to_string(),
                    local_position: WorldVec { x: 1.0, y: 1.0 },
                    rotation: 0.0,
                }],
            },
        );
    }
    set
}

fn config() -> GeneratorConfig {
    GeneratorConfig { tile_layers: vec!["main".to_string()], ..GeneratorConfig::default() }
}

fn generate(seed: u64) -> (GeneratedLevel, MemorySurface, MemorySurface) {
    let generator = LevelGenerator::new(config()).expect("config should validate");
    let mut main = MemorySurface::new();
    let mut border = MemorySurface::new();
    let layers = SurfaceBindings::bind(
        generator.config(),
        vec![("main", &mut main as &mut dyn TileSurface)],
    )
    .expect("binding should succeed");
    let mut targets = ComposeTargets { layers, border: &mut border };
    let level = generator.generate(seed, &library(), &mut targets);
    drop(targets);
    (level, main, border)
}

#[test]
fn identical_seeds_produce_identical_layouts() {
    let (left, left_main, left_border) = generate(12_345);
    let (right, right_main, right_border) = generate(12_345);

    assert_eq!(left.canonical_bytes(), right.canonical_bytes());
    assert_eq!(left_main, right_main);
    assert_eq!(left_border, right_border);
}

#[test]
fn identical_seeds_produce_identical_fingerprints() {
    let (left, _, _) = generate(88_001);
    let (right, _, _) = generate(88_001);
    assert_eq!(xxh3_64(&left.canonical_bytes()), xxh3_64(&right.canonical_bytes()));
}

#[test]
fn different_seeds_produce_different_layouts() {
    let (left, _, _) = generate(11);
    let (right, _, _) = generate(911);
    assert_ne!(
        left.canonical_bytes(),
        right.canonical_bytes(),
        "different seeds should produce different layouts"
    );
}

#[test]
fn one_generator_instance_is_deterministic_across_calls() {
    let generator = LevelGenerator::new(config()).expect("config should validate");

    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut main = MemorySurface::new();
        let mut border = MemorySurface::new();
        let layers = SurfaceBindings::bind(
            generator.config(),
            vec![("main", &mut main as &mut dyn TileSurface)],
        )
        .expect("binding should succeed");
        let mut targets = ComposeTargets { layers, border: &mut border };
        let level = generator.generate(2_024, &library(), &mut targets);
        drop(targets);
        runs.push(level.canonical_bytes());
    }

    assert_eq!(runs[0], runs[1]);
}
