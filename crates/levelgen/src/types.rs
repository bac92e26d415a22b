use serde::{Deserialize, Serialize};

/// A room-grid coordinate. `x` runs left to right, `y` runs bottom to top,
/// both 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// A tile-space coordinate. Negative coordinates are legal and are used by
/// the border ring outside the map proper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

/// A world-space vector in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldVec {
    pub x: f32,
    pub y: f32,
}

/// Opaque tile identifier written into destination surfaces. The meaning of
/// a given id belongs to the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoomType {
    None,
    Start,
    End,
    Corridor,
    Climb,
    Top,
    NonCritical,
}
