use serde::Deserialize;

use crate::types::BlockKind;

// Top-level blocks config file
#[derive(Deserialize, Debug, Default)]
pub struct BlocksConfig {
    #[serde(default, rename = "block")]
    pub blocks: Vec<BlockDef>,
    #[serde(default, rename = "item")]
    pub items: Vec<ItemDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub kind: BlockKind,
    // Whether the block can share its space with water
    #[serde(default)]
    pub waterloggable: bool,
    // Inventory size for containers; ignored for other kinds
    #[serde(default)]
    pub slots: Option<usize>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ItemDef {
    pub name: String,
    #[serde(default)]
    pub max_stack: Option<u32>,
    // Name of the block this item places, if any
    #[serde(default)]
    pub places: Option<String>,
}
