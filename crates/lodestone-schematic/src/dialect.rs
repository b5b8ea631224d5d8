use lodestone_common::{LodestoneError, Result};
use lodestone_nbt::{Compound, Tag};
use serde::Serialize;
use std::fmt;

/// The three on-disk schematic layouts, told apart by the root's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dialect {
    /// `.schem`: a `Schematic` compound with a name → index palette.
    ModernFlat,
    /// MCEdit `.schematic`: numeric `Blocks` and `Data` arrays.
    LegacyFlat,
    /// Structure `.nbt`: explicit `blocks` list with positions.
    SpongeList,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::ModernFlat => write!(f, "modern flat (.schem)"),
            Dialect::LegacyFlat => write!(f, "legacy flat (.schematic)"),
            Dialect::SpongeList => write!(f, "block list (structure .nbt)"),
        }
    }
}

const MODERN_KEYS: [&str; 5] = ["Width", "Height", "Length", "Palette", "BlockData"];
const LEGACY_KEYS: [&str; 5] = ["Blocks", "Width", "Height", "Length", "Data"];

fn has_all(map: &Compound, keys: &[&str]) -> bool {
    keys.iter().all(|key| map.contains_key(*key))
}

/// Picks the dialect of a decoded root compound. Keys are case-sensitive and
/// the checks run in the order ModernFlat, LegacyFlat, SpongeList.
pub fn select_dialect(root: &Compound) -> Result<Dialect> {
    if let Some(schematic) = root.get("Schematic").and_then(Tag::as_compound) {
        if has_all(schematic, &MODERN_KEYS) {
            return Ok(Dialect::ModernFlat);
        }
    }

    if has_all(root, &LEGACY_KEYS) {
        return Ok(Dialect::LegacyFlat);
    }

    let is_list = |key: &str| root.get(key).and_then(Tag::as_list).is_some();
    if is_list("blocks") && is_list("palette") && root.contains_key("size") {
        return Ok(Dialect::SpongeList);
    }

    Err(LodestoneError::UnsupportedDialect {
        keys: root.keys().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use lodestone_nbt::fixture::{compound, int_list, list};

    fn modern_body() -> Compound {
        compound(vec![
            ("Width", Tag::Short(1)),
            ("Height", Tag::Short(1)),
            ("Length", Tag::Short(1)),
            ("Palette", Tag::Compound(Compound::new())),
            ("BlockData", Tag::ByteArray(vec![0])),
        ])
    }

    #[test]
    fn test_modern_flat() {
        let root = compound(vec![("Schematic", Tag::Compound(modern_body()))]);
        assert_eq!(select_dialect(&root).unwrap(), Dialect::ModernFlat);
    }

    #[test]
    fn test_modern_flat_needs_every_key() {
        let mut body = modern_body();
        body.shift_remove("BlockData");
        let root = compound(vec![("Schematic", Tag::Compound(body))]);
        assert_matches!(
            select_dialect(&root),
            Err(LodestoneError::UnsupportedDialect { keys }) if keys == vec!["Schematic"]
        );
    }

    #[test]
    fn test_legacy_flat() {
        let root = compound(vec![
            ("Width", Tag::Short(1)),
            ("Height", Tag::Short(1)),
            ("Length", Tag::Short(1)),
            ("Materials", Tag::String("Alpha".to_string())),
            ("Blocks", Tag::ByteArray(vec![1])),
            ("Data", Tag::ByteArray(vec![0])),
        ]);
        assert_eq!(select_dialect(&root).unwrap(), Dialect::LegacyFlat);
    }

    #[test]
    fn test_sponge_list() {
        let root = compound(vec![
            ("size", int_list(&[1, 1, 1])),
            ("blocks", list(vec![])),
            ("palette", list(vec![])),
            ("DataVersion", Tag::Int(3465)),
        ]);
        assert_eq!(select_dialect(&root).unwrap(), Dialect::SpongeList);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let root = compound(vec![
            ("schematic", Tag::Compound(modern_body())),
            ("BLOCKS", Tag::ByteArray(vec![])),
        ]);
        assert_matches!(select_dialect(&root), Err(LodestoneError::UnsupportedDialect { .. }));
    }

    #[test]
    fn test_sponge_list_requires_lists() {
        let root = compound(vec![
            ("size", int_list(&[1, 1, 1])),
            ("blocks", Tag::ByteArray(vec![])),
            ("palette", list(vec![])),
        ]);
        assert_matches!(select_dialect(&root), Err(LodestoneError::UnsupportedDialect { .. }));
    }

    #[test]
    fn test_unsupported_lists_keys() {
        let root = compound(vec![("Foo", Tag::Int(1)), ("Bar", Tag::Int(2))]);
        assert_matches!(
            select_dialect(&root),
            Err(LodestoneError::UnsupportedDialect { keys }) if keys == vec!["Foo", "Bar"]
        );
    }
}
