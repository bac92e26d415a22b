use std::collections::BTreeSet;

use levelgen::{
    ComposeTargets, GeneratorConfig, GridPos, LevelGenerator, MemorySurface, RoomGrid, RoomType,
    SurfaceBindings, TemplateSet, assign_room_types, carve_path,
};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    #[test]
    fn carved_paths_span_every_row_and_end_on_top(
        seed in any::<u64>(),
        width in 2_i32..=8,
        height in 2_i32..=8,
        start_fraction in 0_u32..1_000
    ) {
        let start_x = (start_fraction as i32 * width / 1_000).min(width - 1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let path = carve_path(&mut rng, GridPos { x: start_x, y: 0 }, width, height);

        let rows: BTreeSet<i32> = path.cells.iter().map(|cell| cell.y).collect();
        prop_assert_eq!(rows, (0..height).collect::<BTreeSet<i32>>());
        prop_assert_eq!(path.end.y, height - 1);
        prop_assert!(path.cells.contains(&path.end));
        prop_assert!(path.cells.len() >= height as usize);
        for cell in &path.cells {
            prop_assert!((0..width).contains(&cell.x));
            prop_assert!((0..height).contains(&cell.y));
        }
    }

    #[test]
    fn classification_covers_the_grid(
        seed in any::<u64>(),
        width in 2_i32..=8,
        height in 2_i32..=8
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start = GridPos { x: 0, y: 0 };
        let path = carve_path(&mut rng, start, width, height);

        let mut grid = RoomGrid::new(width as usize, height as usize);
        assign_room_types(&mut grid, &path, start);

        for node in grid.nodes() {
            if node.in_main_path {
                // An interior window with no movement may legitimately leave
                // a main-path node unclassified.
                prop_assert_ne!(node.room_type, RoomType::NonCritical);
            } else {
                prop_assert_eq!(node.room_type, RoomType::NonCritical);
            }
        }
        prop_assert_eq!(grid.node(start).room_type, RoomType::Start);
        prop_assert_eq!(grid.node(path.end).room_type, RoomType::End);
    }
}

#[test]
fn four_by_four_carving_never_panics_and_reaches_the_top() {
    for seed in 0..500_u64 {
        for start_x in 0..4 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let path = carve_path(&mut rng, GridPos { x: start_x, y: 0 }, 4, 4);
            assert!(path.cells.len() >= 4, "seed {seed} start {start_x}");
            assert_eq!(path.end.y, 3, "seed {seed} start {start_x}");
        }
    }
}

#[test]
fn start_and_end_are_unique_across_the_grid() {
    for seed in 0..200_u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start = GridPos { x: (seed % 5) as i32, y: 0 };
        let path = carve_path(&mut rng, start, 5, 5);

        let mut grid = RoomGrid::new(5, 5);
        assign_room_types(&mut grid, &path, start);

        let starts = grid.nodes().filter(|node| node.room_type == RoomType::Start).count();
        let ends = grid.nodes().filter(|node| node.room_type == RoomType::End).count();
        assert_eq!(starts, 1, "seed {seed}");
        assert_eq!(ends, 1, "seed {seed}");
    }
}

#[test]
fn generation_with_an_empty_library_produces_no_writes_and_no_composite() {
    let config = GeneratorConfig { tile_layers: Vec::new(), ..GeneratorConfig::default() };
    let generator = LevelGenerator::new(config).expect("config should validate");
    let mut border = MemorySurface::new();
    let layers = SurfaceBindings::bind(generator.config(), Vec::new())
        .expect("binding should succeed");
    let mut targets = ComposeTargets { layers, border: &mut border };

    let level = generator.generate(42, &TemplateSet::new(), &mut targets);
    drop(targets);

    assert!(level.composite.is_none());
    assert!(level.instances.is_empty());
    assert!(level.placed_objects.is_empty());
    assert_eq!(level.spawn_position("SpawnPoint"), None);
}
