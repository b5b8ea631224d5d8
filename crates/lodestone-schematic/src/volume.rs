use crate::dialect::Dialect;
use crate::legacy::resolve_legacy;
use crate::palette::{BlockState, Palette, Unresolved, FALLBACK_BLOCK_ID};
use crate::DecodedSchematic;
use lodestone_common::{LodestoneError, PlacedBlock, Position, Result};
use lodestone_logger::{log, LogSeverity::Debug};
use lodestone_nbt::{Compound, Tag};

/// Dimensions of a dense block grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
    pub length: i32,
}

impl Extent {
    /// Reads `Width`/`Height`/`Length` from `container`. Shorts are read as
    /// unsigned, the way schematic writers store them.
    pub fn read(container: &Compound) -> Result<Self> {
        Ok(Extent {
            width: dimension(container, "Width")?,
            height: dimension(container, "Height")?,
            length: dimension(container, "Length")?,
        })
    }

    pub fn volume(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|area| area.checked_mul(self.length as usize))
            .ok_or_else(|| {
                LodestoneError::invalid_field("Width", format!("volume of {:?} overflows", self))
            })
    }

    /// Row-major cell index, y outermost: `y*width*length + z*width + x`.
    pub fn index(&self, x: i32, y: i32, z: i32) -> usize {
        let (w, l) = (self.width as usize, self.length as usize);
        y as usize * w * l + z as usize * w + x as usize
    }

    /// Visits every cell in scan order (y, then z, then x).
    fn for_each_cell(&self, mut visit: impl FnMut(i32, i32, i32, usize)) {
        for y in 0..self.height {
            for z in 0..self.length {
                for x in 0..self.width {
                    visit(x, y, z, self.index(x, y, z));
                }
            }
        }
    }
}

fn dimension(container: &Compound, field: &str) -> Result<i32> {
    let tag = container
        .get(field)
        .ok_or_else(|| LodestoneError::invalid_field(field, "missing"))?;
    let value = match tag {
        Tag::Short(n) => i64::from(*n as u16),
        other => other.as_int().ok_or_else(|| {
            LodestoneError::invalid_field(field, format!("expected an integer, found {}", other.kind()))
        })?,
    };
    i32::try_from(value)
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| LodestoneError::invalid_field(field, format!("invalid dimension {}", value)))
}

/// Decodes unsigned LEB128 varints, one per cell, stopping after `cells`
/// values. Anything after the last needed value is ignored.
fn read_varints(bytes: &[i8], cells: usize) -> Result<Vec<u32>> {
    // Every varint takes at least one byte.
    if bytes.len() < cells {
        return Err(LodestoneError::invalid_field(
            "BlockData",
            format!("expected {} cells, found {} bytes", cells, bytes.len()),
        ));
    }
    let mut values = Vec::with_capacity(cells);
    let mut iter = bytes.iter().map(|b| *b as u8);

    while values.len() < cells {
        let mut value: u32 = 0;
        let mut shift = 0;
        loop {
            let byte = iter.next().ok_or_else(|| {
                LodestoneError::invalid_field(
                    "BlockData",
                    format!("expected {} cells, found {}", cells, values.len()),
                )
            })?;
            // Only the low four bits of a fifth byte fit in a u32.
            if shift == 28 && byte & 0x70 != 0 {
                return Err(LodestoneError::invalid_field(
                    "BlockData",
                    format!("varint too long at cell {}", values.len()),
                ));
            }
            value |= u32::from(byte & 0x7F) << shift;
            shift += 7;
            if byte & 0x80 == 0 {
                break;
            }
            if shift >= 32 {
                return Err(LodestoneError::invalid_field(
                    "BlockData",
                    format!("varint too long at cell {}", values.len()),
                ));
            }
        }
        values.push(value);
    }
    Ok(values)
}

fn modern_cells(block_data: &Tag, cells: usize) -> Result<Vec<u32>> {
    match block_data {
        Tag::ByteArray(bytes) => read_varints(bytes, cells),
        Tag::IntArray(ints) => {
            if ints.len() < cells {
                return Err(LodestoneError::invalid_field(
                    "BlockData",
                    format!("expected {} cells, found {}", cells, ints.len()),
                ));
            }
            ints[..cells]
                .iter()
                .map(|&v| {
                    u32::try_from(v).map_err(|_| {
                        LodestoneError::invalid_field("BlockData", format!("negative index {}", v))
                    })
                })
                .collect()
        }
        other => Err(LodestoneError::invalid_field(
            "BlockData",
            format!("expected a byte or int array, found {}", other.kind()),
        )),
    }
}

/// Decodes the contents of a `Schematic` compound. Cell value 0 and air
/// palette entries are skipped; positions are not shifted.
pub fn decode_modern(schematic: &Compound) -> Result<DecodedSchematic> {
    let extent = Extent::read(schematic)?;
    let cells = extent.volume()?;

    let palette_map = schematic
        .get("Palette")
        .and_then(Tag::as_compound)
        .ok_or_else(|| LodestoneError::invalid_field("Palette", "expected a compound"))?;
    let palette = Palette::from_index_map(palette_map)?;
    let block_data = schematic
        .get("BlockData")
        .ok_or_else(|| LodestoneError::invalid_field("BlockData", "missing"))?;
    let values = modern_cells(block_data, cells)?;

    log(
        format!(
            "Modern schematic {}x{}x{} with {} palette entries",
            extent.width,
            extent.height,
            extent.length,
            palette.len()
        ),
        Debug,
    );

    let fallback = BlockState::fallback();
    let mut unresolved = Unresolved::default();
    let mut blocks = Vec::new();

    extent.for_each_cell(|x, y, z, index| {
        let value = values[index];
        if value == 0 {
            return;
        }
        let state = match palette.get(value) {
            Some(state) => state,
            None => {
                unresolved.note(format!("palette:{}", value));
                &fallback
            }
        };
        if state.is_air() {
            return;
        }
        blocks.push(
            PlacedBlock::new(Position::new(x, y, z), state.name.clone())
                .with_properties(state.properties.clone()),
        );
    });

    Ok(DecodedSchematic::new(
        Dialect::ModernFlat,
        extent,
        blocks,
        unresolved.into_vec(),
    ))
}

/// Decodes an MCEdit-style root with `Blocks` ids and `Data` nibbles.
pub fn decode_legacy(root: &Compound) -> Result<DecodedSchematic> {
    let extent = Extent::read(root)?;
    let cells = extent.volume()?;

    let ids = root
        .get("Blocks")
        .and_then(Tag::as_byte_array)
        .ok_or_else(|| LodestoneError::invalid_field("Blocks", "expected a byte array"))?;
    if ids.len() < cells {
        return Err(LodestoneError::invalid_field(
            "Blocks",
            format!("expected {} cells, found {}", cells, ids.len()),
        ));
    }
    let data = root
        .get("Data")
        .and_then(Tag::as_byte_array)
        .ok_or_else(|| LodestoneError::invalid_field("Data", "expected a byte array"))?;

    log(
        format!(
            "Legacy schematic {}x{}x{}",
            extent.width, extent.height, extent.length
        ),
        Debug,
    );

    let mut unresolved = Unresolved::default();
    let mut blocks = Vec::new();

    extent.for_each_cell(|x, y, z, index| {
        let id = ids[index] as u8;
        if id == 0 {
            return;
        }
        let nibble = data.get(index).map_or(0, |d| (*d as u8) & 0x0F);
        let block_id = resolve_legacy(id, nibble).unwrap_or_else(|| {
            unresolved.note(format!("legacy:{}", id));
            FALLBACK_BLOCK_ID
        });
        blocks.push(PlacedBlock::new(Position::new(x, y, z), block_id));
    });

    Ok(DecodedSchematic::new(
        Dialect::LegacyFlat,
        extent,
        blocks,
        unresolved.into_vec(),
    ))
}
