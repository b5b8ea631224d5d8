use crate::dialect::Dialect;
use crate::palette::{BlockState, Palette, Unresolved};
use crate::volume::Extent;
use crate::DecodedSchematic;
use lodestone_common::{LodestoneError, PlacedBlock, Position, Result};
use lodestone_logger::{log, LogSeverity::Debug};
use lodestone_nbt::{Compound, Tag};

/// Reads a 3-element integer list (or int array) such as `pos` or `size`.
fn int_triple(tag: Option<&Tag>, field: &str) -> Result<[i32; 3]> {
    let values: Vec<i64> = match tag {
        Some(Tag::List(_, items)) => items.iter().filter_map(Tag::as_int).collect(),
        Some(Tag::IntArray(ints)) => ints.iter().map(|&v| i64::from(v)).collect(),
        Some(other) => {
            return Err(LodestoneError::invalid_field(
                field,
                format!("expected a list of 3 integers, found {}", other.kind()),
            ))
        }
        None => return Err(LodestoneError::invalid_field(field, "missing")),
    };

    match values.as_slice() {
        &[x, y, z] => {
            let narrow = |v: i64| {
                i32::try_from(v).map_err(|_| {
                    LodestoneError::invalid_field(field, format!("value {} out of range", v))
                })
            };
            Ok([narrow(x)?, narrow(y)?, narrow(z)?])
        }
        _ => Err(LodestoneError::invalid_field(
            field,
            format!("expected 3 integers, found {}", values.len()),
        )),
    }
}

/// Decodes a structure file's explicit block list.
///
/// Unlike the flat dialects, positions are re-anchored on the horizontal
/// center: `x - width/2` and `z - length/2` with integer division.
pub fn decode_structure(root: &Compound) -> Result<DecodedSchematic> {
    let [width, height, length] = int_triple(root.get("size"), "size")?;
    if width < 0 || height < 0 || length < 0 {
        return Err(LodestoneError::invalid_field(
            "size",
            format!("negative size [{}, {}, {}]", width, height, length),
        ));
    }

    let palette_list = root
        .get("palette")
        .and_then(Tag::as_list)
        .ok_or_else(|| LodestoneError::invalid_field("palette", "expected a list"))?;
    let palette = Palette::from_state_list(palette_list)?;
    let entries = root
        .get("blocks")
        .and_then(Tag::as_list)
        .ok_or_else(|| LodestoneError::invalid_field("blocks", "expected a list"))?;

    log(
        format!(
            "Structure {}x{}x{} with {} block entries and {} palette states",
            width,
            height,
            length,
            entries.len(),
            palette.len()
        ),
        Debug,
    );

    let (offset_x, offset_z) = (width / 2, length / 2);
    let fallback = BlockState::fallback();
    let mut unresolved = Unresolved::default();
    let mut blocks = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let entry = entry.as_compound().ok_or_else(|| {
            LodestoneError::invalid_field(format!("blocks[{}]", i), "expected a compound")
        })?;
        let [x, y, z] = int_triple(entry.get("pos"), &format!("blocks[{}].pos", i))?;
        let state_index = entry.get("state").and_then(Tag::as_int).ok_or_else(|| {
            LodestoneError::invalid_field(format!("blocks[{}].state", i), "missing or not an integer")
        })?;

        let state = match u32::try_from(state_index).ok().and_then(|s| palette.get(s)) {
            Some(state) => state,
            None => {
                unresolved.note(format!("state:{}", state_index));
                &fallback
            }
        };
        if state.is_air() {
            continue;
        }

        let centered = x
            .checked_sub(offset_x)
            .zip(z.checked_sub(offset_z))
            .ok_or_else(|| {
                LodestoneError::invalid_field(
                    format!("blocks[{}].pos", i),
                    format!("[{}, {}, {}] overflows when centered", x, y, z),
                )
            })?;
        blocks.push(
            PlacedBlock::new(Position::new(centered.0, y, centered.1), state.name.clone())
                .with_properties(state.properties.clone()),
        );
    }

    Ok(DecodedSchematic::new(
        Dialect::SpongeList,
        Extent {
            width,
            height,
            length,
        },
        blocks,
        unresolved.into_vec(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FALLBACK_BLOCK_ID;
    use assert_matches::assert_matches;
    use lodestone_nbt::fixture::{compound, int_list, list};
    use lodestone_nbt::TagKind;

    fn palette_entry(name: &str) -> Tag {
        Tag::Compound(compound(vec![("Name", Tag::String(name.to_string()))]))
    }

    fn block_entry(pos: [i32; 3], state: i32) -> Tag {
        Tag::Compound(compound(vec![
            ("pos", int_list(&pos)),
            ("state", Tag::Int(state)),
        ]))
    }

    fn structure(size: [i32; 3], palette: Vec<Tag>, blocks: Vec<Tag>) -> Compound {
        compound(vec![
            ("DataVersion", Tag::Int(3465)),
            ("size", int_list(&size)),
            ("palette", list(palette)),
            ("blocks", list(blocks)),
            ("entities", Tag::List(TagKind::End, vec![])),
        ])
    }

    #[test]
    fn test_centering_transform() {
        let root = structure(
            [10, 4, 10],
            vec![palette_entry("minecraft:stone")],
            vec![block_entry([0, 3, 0], 0), block_entry([9, 0, 5], 0)],
        );
        let decoded = decode_structure(&root).unwrap();
        assert_eq!(decoded.dialect, Dialect::SpongeList);
        assert_eq!(decoded.blocks[0].position, Position::new(-5, 3, -5));
        assert_eq!(decoded.blocks[1].position, Position::new(4, 0, 0));
    }

    #[test]
    fn test_centering_uses_integer_division() {
        let root = structure(
            [3, 1, 5],
            vec![palette_entry("minecraft:stone")],
            vec![block_entry([0, 0, 0], 0)],
        );
        let decoded = decode_structure(&root).unwrap();
        assert_eq!(decoded.blocks[0].position, Position::new(-1, 0, -2));
    }

    #[test]
    fn test_air_entries_are_skipped() {
        let root = structure(
            [2, 1, 1],
            vec![palette_entry("minecraft:air"), palette_entry("minecraft:dirt")],
            vec![block_entry([0, 0, 0], 0), block_entry([1, 0, 0], 1)],
        );
        let decoded = decode_structure(&root).unwrap();
        assert_eq!(decoded.blocks.len(), 1);
        assert_eq!(decoded.blocks[0].block_id, "minecraft:dirt");
        assert_eq!(decoded.blocks[0].position, Position::new(0, 0, 0));
    }

    #[test]
    fn test_list_order_is_preserved() {
        let root = structure(
            [2, 2, 2],
            vec![palette_entry("minecraft:stone"), palette_entry("minecraft:dirt")],
            vec![
                block_entry([1, 1, 1], 1),
                block_entry([0, 0, 0], 0),
                block_entry([1, 0, 1], 1),
            ],
        );
        let ids: Vec<String> = decode_structure(&root)
            .unwrap()
            .blocks
            .into_iter()
            .map(|b| b.block_id)
            .collect();
        assert_eq!(ids, vec!["minecraft:dirt", "minecraft:stone", "minecraft:dirt"]);
    }

    #[test]
    fn test_properties_are_carried() {
        let furnace = Tag::Compound(compound(vec![
            ("Name", Tag::String("minecraft:furnace".to_string())),
            (
                "Properties",
                Tag::Compound(compound(vec![("facing", Tag::String("west".to_string()))])),
            ),
        ]));
        let root = structure([1, 1, 1], vec![furnace], vec![block_entry([0, 0, 0], 0)]);
        let decoded = decode_structure(&root).unwrap();
        assert_eq!(
            decoded.blocks[0].properties.get("facing").map(String::as_str),
            Some("west")
        );
    }

    #[test]
    fn test_unknown_state_falls_back() {
        let root = structure(
            [1, 1, 1],
            vec![palette_entry("minecraft:stone")],
            vec![block_entry([0, 0, 0], 7), block_entry([0, 0, 0], -2)],
        );
        let decoded = decode_structure(&root).unwrap();
        assert_eq!(decoded.blocks.len(), 2);
        assert!(decoded.blocks.iter().all(|b| b.block_id == FALLBACK_BLOCK_ID));
        assert_eq!(decoded.unresolved, vec!["state:7", "state:-2"]);
    }

    #[test]
    fn test_centering_overflow() {
        let root = structure(
            [10, 1, 10],
            vec![palette_entry("minecraft:stone")],
            vec![block_entry([i32::MIN, 0, 0], 0)],
        );
        assert_matches!(
            decode_structure(&root),
            Err(LodestoneError::InvalidField { field, .. }) if field == "blocks[0].pos"
        );

        let root = structure(
            [10, 1, 10],
            vec![palette_entry("minecraft:stone")],
            vec![block_entry([0, 0, i32::MIN], 0)],
        );
        assert!(decode_structure(&root).is_err());
    }

    #[test]
    fn test_empty_palette_name_falls_back() {
        let root = structure(
            [1, 1, 1],
            vec![palette_entry("")],
            vec![block_entry([0, 0, 0], 0)],
        );
        let decoded = decode_structure(&root).unwrap();
        assert_eq!(decoded.blocks.len(), 1);
        assert_eq!(decoded.blocks[0].block_id, FALLBACK_BLOCK_ID);
        assert_eq!(decoded.unresolved, vec!["state:0"]);
    }

    #[test]
    fn test_malformed_position() {
        let bad = Tag::Compound(compound(vec![
            ("pos", int_list(&[1, 2])),
            ("state", Tag::Int(0)),
        ]));
        let root = structure([1, 1, 1], vec![palette_entry("minecraft:stone")], vec![bad]);
        assert_matches!(
            decode_structure(&root),
            Err(LodestoneError::InvalidField { field, .. }) if field == "blocks[0].pos"
        );
    }

    #[test]
    fn test_missing_state() {
        let bad = Tag::Compound(compound(vec![("pos", int_list(&[0, 0, 0]))]));
        let root = structure([1, 1, 1], vec![palette_entry("minecraft:stone")], vec![bad]);
        assert_matches!(
            decode_structure(&root),
            Err(LodestoneError::InvalidField { field, .. }) if field == "blocks[0].state"
        );
    }

    #[test]
    fn test_int_triple_accepts_int_array() {
        let tag = Tag::IntArray(vec![4, 5, 6]);
        assert_eq!(int_triple(Some(&tag), "size").unwrap(), [4, 5, 6]);
        assert!(int_triple(None, "size").is_err());
        assert!(int_triple(Some(&Tag::Int(3)), "size").is_err());
    }
}
