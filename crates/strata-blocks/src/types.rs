use serde::Deserialize;

use crate::inventory::Inventory;
use crate::sign::SignText;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct BlockId(pub u16);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ItemId(pub u16);

/// Behaviour class of a registered block type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Solid,
    Container,
    Sign,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    pub max_stack: u32,
}

impl ItemStack {
    pub fn new(item: ItemId, count: u32, max_stack: u32) -> Self {
        Self {
            item,
            count,
            max_stack,
        }
    }

    #[inline]
    pub fn max_stack_size(&self) -> u32 {
        self.max_stack.max(1)
    }

    #[inline]
    pub fn stacks_with(&self, other: &ItemStack) -> bool {
        self.item == other.item
    }

    /// Copy of this stack with a different count.
    pub fn with_count(&self, count: u32) -> ItemStack {
        ItemStack {
            count,
            ..self.clone()
        }
    }
}

/// Full state of one block as the engine sees it.
///
/// `waterlogged` is `None` for block types that cannot hold water.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Empty,
    Water,
    Solid {
        id: BlockId,
        waterlogged: Option<bool>,
    },
    Container {
        id: BlockId,
        inventory: Inventory,
        waterlogged: Option<bool>,
    },
    Sign {
        id: BlockId,
        text: SignText,
        waterlogged: Option<bool>,
    },
}

impl BlockState {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, BlockState::Empty)
    }

    pub fn block_id(&self) -> Option<BlockId> {
        match self {
            BlockState::Empty | BlockState::Water => None,
            BlockState::Solid { id, .. }
            | BlockState::Container { id, .. }
            | BlockState::Sign { id, .. } => Some(*id),
        }
    }

    pub fn waterlogged(&self) -> Option<bool> {
        match self {
            BlockState::Empty | BlockState::Water => None,
            BlockState::Solid { waterlogged, .. }
            | BlockState::Container { waterlogged, .. }
            | BlockState::Sign { waterlogged, .. } => *waterlogged,
        }
    }

    /// Flips the waterlogged flag in place. Returns false when the block has no such flag.
    pub fn set_waterlogged(&mut self, value: bool) -> bool {
        match self {
            BlockState::Solid { waterlogged, .. }
            | BlockState::Container { waterlogged, .. }
            | BlockState::Sign { waterlogged, .. } => match waterlogged {
                Some(flag) => {
                    *flag = value;
                    true
                }
                None => false,
            },
            BlockState::Empty | BlockState::Water => false,
        }
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        match self {
            BlockState::Container { inventory, .. } => Some(inventory),
            _ => None,
        }
    }

    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match self {
            BlockState::Container { inventory, .. } => Some(inventory),
            _ => None,
        }
    }

    pub fn sign_text(&self) -> Option<&SignText> {
        match self {
            BlockState::Sign { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn sign_text_mut(&mut self) -> Option<&mut SignText> {
        match self {
            BlockState::Sign { text, .. } => Some(text),
            _ => None,
        }
    }
}
