use serde::Serialize;
use std::collections::BTreeMap;

pub type Result<T> = std::result::Result<T, crate::error::LodestoneError>;

/// Every placed block is a unit cube.
pub const UNIT_SIZE: [i32; 3] = [1, 1, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[i32; 3]")]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Position { x, y, z }
    }
}

impl From<Position> for [i32; 3] {
    fn from(p: Position) -> Self {
        [p.x, p.y, p.z]
    }
}

/// A single non-air block handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedBlock {
    pub position: Position,
    pub size: [i32; 3],
    pub block_id: String,
    /// Block state properties, e.g. `facing=north`. Empty for legacy blocks.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl PlacedBlock {
    pub fn new(position: Position, block_id: impl Into<String>) -> Self {
        PlacedBlock {
            position,
            size: UNIT_SIZE,
            block_id: block_id.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = properties;
        self
    }
}
