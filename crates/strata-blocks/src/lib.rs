//! Block state, inventories, signs and the block/item registry.
#![forbid(unsafe_code)]

pub mod config;
pub mod inventory;
pub mod registry;
pub mod sign;
pub mod types;

pub use inventory::Inventory;
pub use registry::BlockRegistry;
pub use sign::SignText;
pub use types::{BlockId, BlockKind, BlockState, ItemId, ItemStack};
