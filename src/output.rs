use lodestone_common::{LodestoneError, Position, Result};
use lodestone_schematic::{ColorTable, DecodedSchematic};
use serde::Serialize;

/// What the renderer receives for each block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBlock<'a> {
    pub position: Position,
    pub size: [i32; 3],
    pub block_id: &'a str,
    pub color: &'a str,
}

pub fn render<'a>(decoded: &'a DecodedSchematic, colors: &'a ColorTable) -> Vec<RenderedBlock<'a>> {
    decoded
        .blocks
        .iter()
        .map(|block| RenderedBlock {
            position: block.position,
            size: block.size,
            block_id: &block.block_id,
            color: colors.color_for(&block.block_id),
        })
        .collect()
}

pub fn to_json(decoded: &DecodedSchematic, colors: &ColorTable) -> Result<String> {
    serde_json::to_string_pretty(&render(decoded, colors))
        .map_err(|e| LodestoneError::IoError(e.into()))
}

pub fn summary(decoded: &DecodedSchematic) -> String {
    let mut out = format!(
        "Dialect: {}\nDimensions: {} x {} x {}\nBlocks: {}\n",
        decoded.dialect,
        decoded.width,
        decoded.height,
        decoded.length,
        decoded.blocks.len()
    );
    for (block_id, count) in decoded.block_counts() {
        out.push_str(&format!("  {}: {}\n", block_id, count));
    }
    if !decoded.unresolved.is_empty() {
        out.push_str(&format!("Unresolved: {}\n", decoded.unresolved.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_nbt::fixture::{compound, encode};
    use lodestone_nbt::Tag;
    use lodestone_schematic::decode_schematic;

    fn legacy(blocks: Vec<i8>) -> DecodedSchematic {
        let len = blocks.len() as i16;
        let root = compound(vec![
            ("Width", Tag::Short(len)),
            ("Height", Tag::Short(1)),
            ("Length", Tag::Short(1)),
            ("Data", Tag::ByteArray(vec![0; blocks.len()])),
            ("Blocks", Tag::ByteArray(blocks)),
        ]);
        decode_schematic(&encode("Schematic", &root)).unwrap()
    }

    #[test]
    fn test_render_attaches_colors() {
        let decoded = legacy(vec![3, 0, 2, -1]);
        let colors = ColorTable::default();
        let rendered = render(&decoded, &colors);
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].color, "#8B4513");
        assert_eq!(rendered[1].position, Position::new(2, 0, 0));
        assert_eq!(rendered[1].color, "#228B22");
        assert_eq!(rendered[2].block_id, "default");
        assert_eq!(rendered[2].color, "#CCCCCC");
    }

    #[test]
    fn test_json_shape() {
        let decoded = legacy(vec![1]);
        let json = to_json(&decoded, &ColorTable::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "position": [0, 0, 0],
                "size": [1, 1, 1],
                "block_id": "minecraft:stone",
                "color": "#808080"
            }])
        );
    }

    #[test]
    fn test_summary_lists_counts_and_unresolved() {
        let decoded = legacy(vec![1, 1, 3, -1]);
        let text = summary(&decoded);
        assert!(text.contains("Dimensions: 4 x 1 x 1"));
        assert!(text.contains("Blocks: 4"));
        assert!(text.contains("  minecraft:stone: 2"));
        assert!(text.contains("  minecraft:dirt: 1"));
        assert!(text.contains("Unresolved: legacy:255"));
    }
}
