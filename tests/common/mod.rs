#![allow(dead_code)]

use lodestone_nbt::fixture::{compound, int_list, list};
use lodestone_nbt::{Compound, Tag};
use std::path::PathBuf;

/// MCEdit-style root with the given numeric ids and a zeroed data array.
pub fn legacy_root(width: i16, height: i16, length: i16, blocks: Vec<i8>) -> Compound {
    compound(vec![
        ("Width", Tag::Short(width)),
        ("Height", Tag::Short(height)),
        ("Length", Tag::Short(length)),
        ("Materials", Tag::String("Alpha".to_string())),
        ("Data", Tag::ByteArray(vec![0; blocks.len()])),
        ("Blocks", Tag::ByteArray(blocks)),
    ])
}

/// `.schem` root wrapping a `Schematic` compound. `palette` pairs a block
/// identifier with its index; `cells` holds one single-byte index per cell.
pub fn modern_root(size: [i16; 3], palette: &[(&str, i32)], cells: Vec<i8>) -> Compound {
    let palette: Compound = palette
        .iter()
        .map(|&(name, index)| (name.to_string(), Tag::Int(index)))
        .collect();
    let schematic = compound(vec![
        ("Version", Tag::Int(2)),
        ("Width", Tag::Short(size[0])),
        ("Height", Tag::Short(size[1])),
        ("Length", Tag::Short(size[2])),
        ("PaletteMax", Tag::Int(palette.len() as i32)),
        ("Palette", Tag::Compound(palette)),
        ("BlockData", Tag::ByteArray(cells)),
    ]);
    compound(vec![("Schematic", Tag::Compound(schematic))])
}

/// Structure root with a name-only palette and `(pos, state)` entries.
pub fn structure_root(size: [i32; 3], palette: &[&str], blocks: &[([i32; 3], i32)]) -> Compound {
    let palette = palette
        .iter()
        .map(|name| Tag::Compound(compound(vec![("Name", Tag::String(name.to_string()))])))
        .collect();
    let blocks = blocks
        .iter()
        .map(|&(pos, state)| {
            Tag::Compound(compound(vec![
                ("pos", int_list(&pos)),
                ("state", Tag::Int(state)),
            ]))
        })
        .collect();
    compound(vec![
        ("size", int_list(&size)),
        ("palette", list(palette)),
        ("blocks", list(blocks)),
    ])
}

/// A path under the system temp dir that no other test uses.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lodestone-{}-{}", std::process::id(), name))
}
