use once_cell::sync::Lazy;

/// Dye order shared by the shulker box (219..=234) and glazed terracotta
/// (235..=250) id ranges.
const DYE_COLORS: [&str; 16] = [
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "light_gray",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

// Pre-1.13 numeric ids, each mapped to the flattened name of its base
// (data value 0) variant.
const LEGACY_BLOCKS: &[(u8, &str)] = &[
    (0, "minecraft:air"),
    (1, "minecraft:stone"),
    (2, "minecraft:grass_block"),
    (3, "minecraft:dirt"),
    (4, "minecraft:cobblestone"),
    (5, "minecraft:oak_planks"),
    (6, "minecraft:oak_sapling"),
    (7, "minecraft:bedrock"),
    (8, "minecraft:water"),
    (9, "minecraft:water"),
    (10, "minecraft:lava"),
    (11, "minecraft:lava"),
    (12, "minecraft:sand"),
    (13, "minecraft:gravel"),
    (14, "minecraft:gold_ore"),
    (15, "minecraft:iron_ore"),
    (16, "minecraft:coal_ore"),
    (17, "minecraft:oak_log"),
    (18, "minecraft:oak_leaves"),
    (19, "minecraft:sponge"),
    (20, "minecraft:glass"),
    (21, "minecraft:lapis_ore"),
    (22, "minecraft:lapis_block"),
    (23, "minecraft:dispenser"),
    (24, "minecraft:sandstone"),
    (25, "minecraft:note_block"),
    (26, "minecraft:red_bed"),
    (27, "minecraft:powered_rail"),
    (28, "minecraft:detector_rail"),
    (29, "minecraft:sticky_piston"),
    (30, "minecraft:cobweb"),
    (31, "minecraft:short_grass"),
    (32, "minecraft:dead_bush"),
    (33, "minecraft:piston"),
    (34, "minecraft:piston_head"),
    (35, "minecraft:white_wool"),
    (36, "minecraft:moving_piston"),
    (37, "minecraft:dandelion"),
    (38, "minecraft:poppy"),
    (39, "minecraft:brown_mushroom"),
    (40, "minecraft:red_mushroom"),
    (41, "minecraft:gold_block"),
    (42, "minecraft:iron_block"),
    (43, "minecraft:smooth_stone_slab"),
    (44, "minecraft:smooth_stone_slab"),
    (45, "minecraft:bricks"),
    (46, "minecraft:tnt"),
    (47, "minecraft:bookshelf"),
    (48, "minecraft:mossy_cobblestone"),
    (49, "minecraft:obsidian"),
    (50, "minecraft:torch"),
    (51, "minecraft:fire"),
    (52, "minecraft:spawner"),
    (53, "minecraft:oak_stairs"),
    (54, "minecraft:chest"),
    (55, "minecraft:redstone_wire"),
    (56, "minecraft:diamond_ore"),
    (57, "minecraft:diamond_block"),
    (58, "minecraft:crafting_table"),
    (59, "minecraft:wheat"),
    (60, "minecraft:farmland"),
    (61, "minecraft:furnace"),
    (62, "minecraft:furnace"),
    (63, "minecraft:oak_sign"),
    (64, "minecraft:oak_door"),
    (65, "minecraft:ladder"),
    (66, "minecraft:rail"),
    (67, "minecraft:cobblestone_stairs"),
    (68, "minecraft:oak_wall_sign"),
    (69, "minecraft:lever"),
    (70, "minecraft:stone_pressure_plate"),
    (71, "minecraft:iron_door"),
    (72, "minecraft:oak_pressure_plate"),
    (73, "minecraft:redstone_ore"),
    (74, "minecraft:redstone_ore"),
    (75, "minecraft:redstone_torch"),
    (76, "minecraft:redstone_torch"),
    (77, "minecraft:stone_button"),
    (78, "minecraft:snow"),
    (79, "minecraft:ice"),
    (80, "minecraft:snow_block"),
    (81, "minecraft:cactus"),
    (82, "minecraft:clay"),
    (83, "minecraft:sugar_cane"),
    (84, "minecraft:jukebox"),
    (85, "minecraft:oak_fence"),
    (86, "minecraft:carved_pumpkin"),
    (87, "minecraft:netherrack"),
    (88, "minecraft:soul_sand"),
    (89, "minecraft:glowstone"),
    (90, "minecraft:nether_portal"),
    (91, "minecraft:jack_o_lantern"),
    (92, "minecraft:cake"),
    (93, "minecraft:repeater"),
    (94, "minecraft:repeater"),
    (95, "minecraft:white_stained_glass"),
    (96, "minecraft:oak_trapdoor"),
    (97, "minecraft:infested_stone"),
    (98, "minecraft:stone_bricks"),
    (99, "minecraft:brown_mushroom_block"),
    (100, "minecraft:red_mushroom_block"),
    (101, "minecraft:iron_bars"),
    (102, "minecraft:glass_pane"),
    (103, "minecraft:melon"),
    (104, "minecraft:pumpkin_stem"),
    (105, "minecraft:melon_stem"),
    (106, "minecraft:vine"),
    (107, "minecraft:oak_fence_gate"),
    (108, "minecraft:brick_stairs"),
    (109, "minecraft:stone_brick_stairs"),
    (110, "minecraft:mycelium"),
    (111, "minecraft:lily_pad"),
    (112, "minecraft:nether_bricks"),
    (113, "minecraft:nether_brick_fence"),
    (114, "minecraft:nether_brick_stairs"),
    (115, "minecraft:nether_wart"),
    (116, "minecraft:enchanting_table"),
    (117, "minecraft:brewing_stand"),
    (118, "minecraft:cauldron"),
    (119, "minecraft:end_portal"),
    (120, "minecraft:end_portal_frame"),
    (121, "minecraft:end_stone"),
    (122, "minecraft:dragon_egg"),
    (123, "minecraft:redstone_lamp"),
    (124, "minecraft:redstone_lamp"),
    (125, "minecraft:oak_slab"),
    (126, "minecraft:oak_slab"),
    (127, "minecraft:cocoa"),
    (128, "minecraft:sandstone_stairs"),
    (129, "minecraft:emerald_ore"),
    (130, "minecraft:ender_chest"),
    (131, "minecraft:tripwire_hook"),
    (132, "minecraft:tripwire"),
    (133, "minecraft:emerald_block"),
    (134, "minecraft:spruce_stairs"),
    (135, "minecraft:birch_stairs"),
    (136, "minecraft:jungle_stairs"),
    (137, "minecraft:command_block"),
    (138, "minecraft:beacon"),
    (139, "minecraft:cobblestone_wall"),
    (140, "minecraft:flower_pot"),
    (141, "minecraft:carrots"),
    (142, "minecraft:potatoes"),
    (143, "minecraft:oak_button"),
    (144, "minecraft:skeleton_skull"),
    (145, "minecraft:anvil"),
    (146, "minecraft:trapped_chest"),
    (147, "minecraft:light_weighted_pressure_plate"),
    (148, "minecraft:heavy_weighted_pressure_plate"),
    (149, "minecraft:comparator"),
    (150, "minecraft:comparator"),
    (151, "minecraft:daylight_detector"),
    (152, "minecraft:redstone_block"),
    (153, "minecraft:nether_quartz_ore"),
    (154, "minecraft:hopper"),
    (155, "minecraft:quartz_block"),
    (156, "minecraft:quartz_stairs"),
    (157, "minecraft:activator_rail"),
    (158, "minecraft:dropper"),
    (159, "minecraft:white_terracotta"),
    (160, "minecraft:white_stained_glass_pane"),
    (161, "minecraft:acacia_leaves"),
    (162, "minecraft:acacia_log"),
    (163, "minecraft:acacia_stairs"),
    (164, "minecraft:dark_oak_stairs"),
    (165, "minecraft:slime_block"),
    (166, "minecraft:barrier"),
    (167, "minecraft:iron_trapdoor"),
    (168, "minecraft:prismarine"),
    (169, "minecraft:sea_lantern"),
    (170, "minecraft:hay_block"),
    (171, "minecraft:white_carpet"),
    (172, "minecraft:terracotta"),
    (173, "minecraft:coal_block"),
    (174, "minecraft:packed_ice"),
    (175, "minecraft:sunflower"),
    (176, "minecraft:white_banner"),
    (177, "minecraft:white_wall_banner"),
    (178, "minecraft:daylight_detector"),
    (179, "minecraft:red_sandstone"),
    (180, "minecraft:red_sandstone_stairs"),
    (181, "minecraft:red_sandstone_slab"),
    (182, "minecraft:red_sandstone_slab"),
    (183, "minecraft:spruce_fence_gate"),
    (184, "minecraft:birch_fence_gate"),
    (185, "minecraft:jungle_fence_gate"),
    (186, "minecraft:dark_oak_fence_gate"),
    (187, "minecraft:acacia_fence_gate"),
    (188, "minecraft:spruce_fence"),
    (189, "minecraft:birch_fence"),
    (190, "minecraft:jungle_fence"),
    (191, "minecraft:dark_oak_fence"),
    (192, "minecraft:acacia_fence"),
    (193, "minecraft:spruce_door"),
    (194, "minecraft:birch_door"),
    (195, "minecraft:jungle_door"),
    (196, "minecraft:acacia_door"),
    (197, "minecraft:dark_oak_door"),
    (198, "minecraft:end_rod"),
    (199, "minecraft:chorus_plant"),
    (200, "minecraft:chorus_flower"),
    (201, "minecraft:purpur_block"),
    (202, "minecraft:purpur_pillar"),
    (203, "minecraft:purpur_stairs"),
    (204, "minecraft:purpur_slab"),
    (205, "minecraft:purpur_slab"),
    (206, "minecraft:end_stone_bricks"),
    (207, "minecraft:beetroots"),
    (208, "minecraft:dirt_path"),
    (209, "minecraft:end_gateway"),
    (210, "minecraft:repeating_command_block"),
    (211, "minecraft:chain_command_block"),
    (212, "minecraft:frosted_ice"),
    (213, "minecraft:magma_block"),
    (214, "minecraft:nether_wart_block"),
    (215, "minecraft:red_nether_bricks"),
    (216, "minecraft:bone_block"),
    (217, "minecraft:structure_void"),
    (218, "minecraft:observer"),
    (251, "minecraft:white_concrete"),
    (252, "minecraft:white_concrete_powder"),
];

static LEGACY_TABLE: Lazy<Vec<Option<String>>> = Lazy::new(|| {
    let mut table = vec![None; 256];
    for &(id, name) in LEGACY_BLOCKS {
        table[id as usize] = Some(name.to_string());
    }
    for (offset, color) in DYE_COLORS.iter().enumerate() {
        table[219 + offset] = Some(format!("minecraft:{}_shulker_box", color));
        table[235 + offset] = Some(format!("minecraft:{}_glazed_terracotta", color));
    }
    table
});

/// Resolves a legacy block id to its flattened identifier.
///
/// The data nibble is accepted but not consulted, so every sub-variant maps
/// to its base block (all wool is white wool, all logs are oak). Returns
/// `None` for ids the table does not know, such as 253..=255.
pub fn resolve_legacy(id: u8, _data: u8) -> Option<&'static str> {
    LEGACY_TABLE[id as usize].as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stone_ignores_data_nibble() {
        for data in 0..16 {
            assert_eq!(resolve_legacy(1, data), Some("minecraft:stone"));
        }
    }

    #[test]
    fn test_common_ids() {
        assert_eq!(resolve_legacy(0, 0), Some("minecraft:air"));
        assert_eq!(resolve_legacy(2, 0), Some("minecraft:grass_block"));
        assert_eq!(resolve_legacy(3, 0), Some("minecraft:dirt"));
        assert_eq!(resolve_legacy(17, 2), Some("minecraft:oak_log"));
        assert_eq!(resolve_legacy(35, 14), Some("minecraft:white_wool"));
    }

    #[test]
    fn test_generated_color_ranges() {
        assert_eq!(resolve_legacy(219, 0), Some("minecraft:white_shulker_box"));
        assert_eq!(resolve_legacy(234, 0), Some("minecraft:black_shulker_box"));
        assert_eq!(resolve_legacy(235, 0), Some("minecraft:white_glazed_terracotta"));
        assert_eq!(resolve_legacy(250, 0), Some("minecraft:black_glazed_terracotta"));
    }

    #[test]
    fn test_unmapped_ids() {
        assert_eq!(resolve_legacy(253, 0), None);
        assert_eq!(resolve_legacy(254, 0), None);
        assert_eq!(resolve_legacy(255, 0), None);
    }

    #[test]
    fn test_every_mapped_name_is_namespaced() {
        for id in 0..=255u8 {
            if let Some(name) = resolve_legacy(id, 0) {
                assert!(name.starts_with("minecraft:"), "id {} -> {}", id, name);
            }
        }
    }
}
