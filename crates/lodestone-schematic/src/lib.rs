pub mod color;
pub mod dialect;
pub mod legacy;
pub mod palette;
pub mod structure;
pub mod volume;

use lodestone_common::{LodestoneError, PlacedBlock, Result};
use lodestone_logger::{log, LogSeverity::Info};
use lodestone_nbt::{Compound, NbtFile, Tag};
use serde::Serialize;
use std::collections::BTreeMap;

pub use color::ColorTable;
pub use dialect::{select_dialect, Dialect};
pub use legacy::resolve_legacy;
pub use palette::{BlockState, Palette, AIR_BLOCK_ID, FALLBACK_BLOCK_ID};
pub use volume::Extent;

/// The outcome of one schematic decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedSchematic {
    pub dialect: Dialect,
    pub width: i32,
    pub height: i32,
    pub length: i32,
    /// Non-air blocks in decode traversal order.
    pub blocks: Vec<PlacedBlock>,
    /// Each distinct identifier that fell back to `FALLBACK_BLOCK_ID`, such as
    /// `legacy:255`, `palette:7` or `state:3`.
    pub unresolved: Vec<String>,
}

impl DecodedSchematic {
    pub(crate) fn new(
        dialect: Dialect,
        extent: Extent,
        blocks: Vec<PlacedBlock>,
        unresolved: Vec<String>,
    ) -> Self {
        DecodedSchematic {
            dialect,
            width: extent.width,
            height: extent.height,
            length: extent.length,
            blocks,
            unresolved,
        }
    }

    /// Number of placed blocks per block id.
    pub fn block_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for block in &self.blocks {
            *counts.entry(block.block_id.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Runs the matching interpreter over an already decoded root compound.
pub fn interpret(root: &Compound) -> Result<DecodedSchematic> {
    let dialect = select_dialect(root)?;
    let decoded = match dialect {
        Dialect::ModernFlat => {
            let schematic = root
                .get("Schematic")
                .and_then(Tag::as_compound)
                .ok_or_else(|| LodestoneError::invalid_field("Schematic", "expected a compound"))?;
            volume::decode_modern(schematic)?
        }
        Dialect::LegacyFlat => volume::decode_legacy(root)?,
        Dialect::SpongeList => structure::decode_structure(root)?,
    };

    log(
        format!(
            "Decoded {} schematic: {}x{}x{}, {} blocks, {} unresolved ids",
            decoded.dialect,
            decoded.width,
            decoded.height,
            decoded.length,
            decoded.blocks.len(),
            decoded.unresolved.len()
        ),
        Info,
    );
    Ok(decoded)
}

/// Decodes raw or gzip-compressed schematic bytes into placed blocks.
pub fn decode_schematic(bytes: &[u8]) -> Result<DecodedSchematic> {
    let file = NbtFile::decode(bytes)?;
    interpret(&file.root)
}
