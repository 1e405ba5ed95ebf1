use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::BlocksConfig;
use super::inventory::Inventory;
use super::sign::SignText;
use super::types::{BlockId, BlockKind, BlockState, ItemId, ItemStack};

pub const DEFAULT_CONTAINER_SLOTS: usize = 27;
pub const DEFAULT_MAX_STACK: u32 = 64;

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub kind: BlockKind,
    pub waterloggable: bool,
    pub slots: usize,
}

#[derive(Clone, Debug)]
pub struct ItemType {
    pub id: ItemId,
    pub name: String,
    pub max_stack: u32,
    pub places: Option<BlockId>,
}

/// Named block and item types. `air` and `water` are built in and map to
/// [`BlockState::Empty`] and [`BlockState::Water`].
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    pub items: Vec<ItemType>,
    pub items_by_name: HashMap<String, ItemId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id.0 as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn item(&self, id: ItemId) -> Option<&ItemType> {
        self.items.get(id.0 as usize)
    }

    pub fn item_id_by_name(&self, name: &str) -> Option<ItemId> {
        self.items_by_name.get(name).copied()
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry::new();
        for def in cfg.blocks {
            if matches!(def.name.as_str(), "air" | "water") {
                return Err(format!("block name `{}` is reserved", def.name).into());
            }
            if reg.by_name.contains_key(&def.name) {
                return Err(format!("duplicate block `{}`", def.name).into());
            }
            let id = BlockId(u16::try_from(reg.blocks.len())?);
            let slots = match def.kind {
                BlockKind::Container => def.slots.unwrap_or(DEFAULT_CONTAINER_SLOTS),
                _ => 0,
            };
            if def.kind == BlockKind::Container && slots == 0 {
                return Err(format!("container `{}` has no slots", def.name).into());
            }
            reg.by_name.insert(def.name.clone(), id);
            reg.blocks.push(BlockType {
                id,
                name: def.name,
                kind: def.kind,
                waterloggable: def.waterloggable,
                slots,
            });
        }
        for def in cfg.items {
            if reg.items_by_name.contains_key(&def.name) {
                return Err(format!("duplicate item `{}`", def.name).into());
            }
            let places = match def.places.as_deref() {
                Some(block) => Some(
                    reg.id_by_name(block)
                        .ok_or_else(|| format!("item `{}` places unknown block `{}`", def.name, block))?,
                ),
                None => None,
            };
            let id = ItemId(u16::try_from(reg.items.len())?);
            reg.items_by_name.insert(def.name.clone(), id);
            reg.items.push(ItemType {
                id,
                name: def.name,
                max_stack: def.max_stack.unwrap_or(DEFAULT_MAX_STACK).max(1),
                places,
            });
        }
        Ok(reg)
    }

    /// Freshly placed state for a block type: empty inventory, blank sign, dry.
    pub fn default_state(&self, id: BlockId) -> Option<BlockState> {
        let ty = self.get(id)?;
        let waterlogged = ty.waterloggable.then_some(false);
        Some(match ty.kind {
            BlockKind::Solid => BlockState::Solid { id, waterlogged },
            BlockKind::Container => BlockState::Container {
                id,
                inventory: Inventory::with_slots(ty.slots),
                waterlogged,
            },
            BlockKind::Sign => BlockState::Sign {
                id,
                text: SignText::default(),
                waterlogged,
            },
        })
    }

    pub fn state_by_name(&self, name: &str) -> Option<BlockState> {
        match name {
            "air" => Some(BlockState::Empty),
            "water" => Some(BlockState::Water),
            _ => self.default_state(self.id_by_name(name)?),
        }
    }

    pub fn stack(&self, name: &str, count: u32) -> Option<ItemStack> {
        let ty = self.item(self.item_id_by_name(name)?)?;
        Some(ItemStack::new(ty.id, count, ty.max_stack))
    }

    /// True when the item places a sign block.
    pub fn places_sign(&self, item: ItemId) -> bool {
        self.item(item)
            .and_then(|ty| ty.places)
            .and_then(|b| self.get(b))
            .is_some_and(|b| b.kind == BlockKind::Sign)
    }

    pub fn name_of(&self, state: &BlockState) -> &str {
        match state {
            BlockState::Empty => "air",
            BlockState::Water => "water",
            _ => state
                .block_id()
                .and_then(|id| self.get(id))
                .map(|ty| ty.name.as_str())
                .unwrap_or("unknown"),
        }
    }

    pub fn item_name(&self, item: ItemId) -> &str {
        self.item(item).map(|ty| ty.name.as_str()).unwrap_or("unknown")
    }
}
