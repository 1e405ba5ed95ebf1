use core::fmt;

use strata_blocks::{BlockState, ItemStack};
use strata_geom::{Location, Point, Vec3};

/// Player or other actor that can interact with blocks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity {}", self.0)
    }
}

/// Block storage and the side effects the sync rules may trigger.
///
/// Reads hand out owned copies; a rule reads, edits and writes back within one call.
pub trait World {
    /// Current state at `at`; unset locations are [`BlockState::Empty`].
    fn block(&self, at: Location) -> BlockState;

    fn set_block(&mut self, at: Location, state: BlockState);

    /// Spawns a dropped item entity at `at` moving with `velocity`.
    fn drop_item(&mut self, at: Point, stack: ItemStack, velocity: Vec3) -> EntityId;

    fn item_entity(&self, id: EntityId) -> Option<ItemStack>;

    /// Replaces the stack carried by an entity. Returns false if the entity is gone.
    fn set_item_entity(&mut self, id: EntityId, stack: ItemStack) -> bool;

    fn remove_item_entity(&mut self, id: EntityId) -> Option<ItemStack>;

    /// Shows the inventory of the container at `at` to `agent`.
    fn open_inventory(&mut self, agent: &AgentId, at: Location);

    fn send_message(&mut self, agent: &AgentId, message: &str);
}
