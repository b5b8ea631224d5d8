use lodestone_common::{LodestoneError, Result};
use lodestone_logger::{log, LogSeverity::Warning};
use lodestone_nbt::{Compound, Tag};
use std::collections::{BTreeMap, HashMap, HashSet};

pub const AIR_BLOCK_ID: &str = "minecraft:air";

/// Identifier emitted when a palette index, structure state or legacy id
/// has no known block. Color tables key their fallback color on it too.
pub const FALLBACK_BLOCK_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockState {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}

impl BlockState {
    pub fn new(name: impl Into<String>) -> Self {
        BlockState {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn fallback() -> Self {
        BlockState::new(FALLBACK_BLOCK_ID)
    }

    /// Parses `namespace:name[key=value,...]`. Malformed property pairs are
    /// dropped; the name is everything before the first `[`.
    pub fn parse(identifier: &str) -> Self {
        let identifier = identifier.trim();
        let Some((name, rest)) = identifier.split_once('[') else {
            return BlockState::new(identifier);
        };

        let properties = rest
            .trim_end_matches(']')
            .split(',')
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .filter(|(key, _)| !key.is_empty())
            .collect();

        BlockState {
            name: name.to_string(),
            properties,
        }
    }

    pub fn is_air(&self) -> bool {
        self.name == AIR_BLOCK_ID
    }
}

/// Index → block state lookup shared by the modern and structure dialects.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: HashMap<u32, BlockState>,
}

impl Palette {
    /// The state at `index`. Entries with an empty name count as missing.
    pub fn get(&self, index: u32) -> Option<&BlockState> {
        self.entries.get(&index).filter(|state| !state.name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inverts a `{ "minecraft:stone": 1, ... }` compound into index → state.
    /// When two names claim one index the later one wins.
    pub fn from_index_map(map: &Compound) -> Result<Self> {
        let mut entries = HashMap::with_capacity(map.len());
        for (identifier, tag) in map {
            let index = tag
                .as_int()
                .and_then(|index| u32::try_from(index).ok())
                .ok_or_else(|| {
                    LodestoneError::invalid_field(
                        format!("Palette.{}", identifier),
                        format!("expected a non-negative integer index, found {}", tag.kind()),
                    )
                })?;
            entries.insert(index, BlockState::parse(identifier));
        }
        Ok(Palette { entries })
    }

    /// Reads a list of `{ Name, Properties? }` compounds, indexed by position.
    pub fn from_state_list(list: &[Tag]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(list.len());
        for (index, entry) in list.iter().enumerate() {
            let field = |suffix: &str| format!("palette[{}]{}", index, suffix);
            let entry = entry
                .as_compound()
                .ok_or_else(|| LodestoneError::invalid_field(field(""), "expected a compound"))?;
            let name = entry
                .get("Name")
                .and_then(Tag::as_string)
                .ok_or_else(|| LodestoneError::invalid_field(field(".Name"), "missing or not a string"))?;

            let mut state = BlockState::new(name);
            if let Some(properties) = entry.get("Properties").and_then(Tag::as_compound) {
                for (key, value) in properties {
                    if let Some(value) = value.as_string() {
                        state.properties.insert(key.clone(), value.to_string());
                    }
                }
            }
            entries.insert(index as u32, state);
        }
        Ok(Palette { entries })
    }
}

/// Collects each distinct unresolved identifier once, in first-seen order,
/// and logs it as it is first seen.
#[derive(Debug, Default)]
pub(crate) struct Unresolved {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl Unresolved {
    pub(crate) fn note(&mut self, key: String) {
        if self.seen.insert(key.clone()) {
            log(
                format!(
                    "No block known for {}, falling back to '{}'",
                    key, FALLBACK_BLOCK_ID
                ),
                Warning,
            );
            self.order.push(key);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.order
    }
}
