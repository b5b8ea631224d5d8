use crate::palette::FALLBACK_BLOCK_ID;
use lodestone_common::{LodestoneError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const BUILTIN_COLORS: &[(&str, &str)] = &[
    ("minecraft:dirt", "#8B4513"),
    ("minecraft:grass_block", "#228B22"),
    ("minecraft:stone", "#808080"),
    ("minecraft:cobblestone", "#7A7A7A"),
    ("minecraft:oak_log", "#4A3C2C"),
    ("minecraft:oak_planks", "#BA8C63"),
    ("minecraft:oak_leaves", "#3B7A23"),
    ("minecraft:sand", "#DBD3A0"),
    ("minecraft:gravel", "#857F7F"),
    ("minecraft:water", "#3F76E4"),
    ("minecraft:lava", "#CF5B13"),
    ("minecraft:glass", "#C0F5FE"),
    ("minecraft:bedrock", "#565656"),
    ("minecraft:bricks", "#966153"),
    ("minecraft:white_wool", "#E9ECEC"),
    (FALLBACK_BLOCK_ID, "#CCCCCC"),
];

/// Block id → display color. Every table has a `"default"` entry, used for
/// any id it does not list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct ColorTable {
    colors: HashMap<String, String>,
}

impl ColorTable {
    pub fn new(colors: HashMap<String, String>) -> Result<Self> {
        if !colors.contains_key(FALLBACK_BLOCK_ID) {
            return Err(LodestoneError::InvalidConfig(format!(
                "color table has no '{}' entry",
                FALLBACK_BLOCK_ID
            )));
        }
        Ok(ColorTable { colors })
    }

    /// Parses a flat JSON object such as `{"minecraft:stone": "#808080", "default": "#CCCCCC"}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let colors: HashMap<String, String> = serde_json::from_str(text)
            .map_err(|e| LodestoneError::InvalidConfig(format!("invalid color table: {}", e)))?;
        Self::new(colors)
    }

    pub fn color_for(&self, block_id: &str) -> &str {
        self.colors
            .get(block_id)
            .or_else(|| self.colors.get(FALLBACK_BLOCK_ID))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        ColorTable {
            colors: BUILTIN_COLORS
                .iter()
                .map(|&(id, color)| (id.to_string(), color.to_string()))
                .collect(),
        }
    }
}

impl TryFrom<HashMap<String, String>> for ColorTable {
    type Error = LodestoneError;

    fn try_from(colors: HashMap<String, String>) -> Result<Self> {
        ColorTable::new(colors)
    }
}

impl From<ColorTable> for HashMap<String, String> {
    fn from(table: ColorTable) -> Self {
        table.colors
    }
}
