//! Block type catalog
//!
//! Grid cells cycle through the catalog in order, so its order is part of
//! the level layout.

use serde::{Deserialize, Serialize};

/// A kind of block: display color plus full health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockType {
    /// Unique name
    pub name: String,
    /// RGB color, only meaningful to the renderer
    pub color: u32,
    /// Hit-points of a fresh block of this type (also its payout)
    pub hp: u32,
}

impl BlockType {
    pub fn new(name: impl Into<String>, color: u32, hp: u32) -> Self {
        Self {
            name: name.into(),
            color,
            hp,
        }
    }
}

/// The eleven stock block types, weakest first
pub fn default_catalog() -> Vec<BlockType> {
    vec![
        BlockType::new("DirtBlock", 0x8B4513, 1),
        BlockType::new("StoneBlock", 0xA9A9A9, 2),
        BlockType::new("WoodBlock", 0x8B0000, 3),
        BlockType::new("IronBlock", 0xC0C0C0, 4),
        BlockType::new("GoldBlock", 0xFFD700, 5),
        BlockType::new("EmeraldBlock", 0x50C878, 6),
        BlockType::new("RubyBlock", 0xE0115F, 7),
        BlockType::new("SapphireBlock", 0x0F52BA, 8),
        BlockType::new("QuartzBlock", 0xFFFFFF, 9),
        BlockType::new("ObsidianBlock", 0x101820, 10),
        BlockType::new("DiamondBlock", 0xB9FBC0, 11),
    ]
}
