//! The room grid and the randomized choices that shape it.

use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::rng::range_i32;
use crate::types::{GridPos, RoomType};

/// One cell of the level grid. Initialized unclassified and off the main
/// path; the classifier writes each node exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomNode {
    pub grid_position: GridPos,
    pub room_type: RoomType,
    pub in_main_path: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomGrid {
    width: usize,
    height: usize,
    nodes: Vec<RoomNode>,
}

impl RoomGrid {
    pub fn new(width: usize, height: usize) -> Self {
        let mut nodes = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                nodes.push(RoomNode {
                    grid_position: GridPos { x: x as i32, y: y as i32 },
                    room_type: RoomType::None,
                    in_main_path: false,
                });
            }
        }
        Self { width, height, nodes }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn node(&self, pos: GridPos) -> &RoomNode {
        &self.nodes[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub fn node_mut(&mut self, pos: GridPos) -> &mut RoomNode {
        &mut self.nodes[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoomNode> {
        self.nodes.iter()
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut RoomNode> {
        self.nodes.iter_mut()
    }
}

/// Draw width and height independently from the configured inclusive range.
pub(crate) fn roll_grid_size(rng: &mut ChaCha8Rng, config: &GeneratorConfig) -> (usize, usize) {
    let width = range_i32(rng, config.grid_min as i32, config.grid_max as i32 + 1) as usize;
    let height = range_i32(rng, config.grid_min as i32, config.grid_max as i32 + 1) as usize;
    (width, height)
}

/// Uniform column on the bottom row.
pub(crate) fn pick_start_room(rng: &mut ChaCha8Rng, width: usize) -> GridPos {
    GridPos { x: range_i32(rng, 0, width as i32), y: 0 }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn new_grid_starts_unclassified_and_off_path() {
        let grid = RoomGrid::new(4, 5);
        assert_eq!(grid.nodes().count(), 20);
        for node in grid.nodes() {
            assert_eq!(node.room_type, RoomType::None);
            assert!(!node.in_main_path);
            assert!(grid.in_bounds(node.grid_position));
        }
    }

    #[test]
    fn node_lookup_matches_grid_position() {
        let grid = RoomGrid::new(5, 4);
        for y in 0..4 {
            for x in 0..5 {
                let pos = GridPos { x, y };
                assert_eq!(grid.node(pos).grid_position, pos);
            }
        }
    }

    #[test]
    fn rolled_grid_sizes_stay_inside_the_configured_range() {
        let config = GeneratorConfig::default();
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (width, height) = roll_grid_size(&mut rng, &config);
            assert!((4..=5).contains(&width));
            assert!((4..=5).contains(&height));
        }
    }

    #[test]
    fn start_room_is_always_on_the_bottom_row() {
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let start = pick_start_room(&mut rng, 5);
            assert_eq!(start.y, 0);
            assert!((0..5).contains(&start.x));
        }
    }
}
