use strata_geom::Location;
use strata_world::{AccessControl, EntityId, World};

use crate::engine::SectionSync;
use crate::outcome::RuleOutcome;

impl<A: AccessControl> SectionSync<A> {
    /// A collector at `inventory` picked up `entity`. Lower collectors feed the upper copy of
    /// their container instead of themselves; upper collectors behave normally.
    pub fn item_collected(&self, world: &mut impl World, inventory: Location, entity: EntityId) -> RuleOutcome {
        let Some(corr) = self.partner(inventory) else {
            return RuleOutcome::NoEffect;
        };
        if !self.sections().is_above(corr.section, inventory.section) {
            return RuleOutcome::NoEffect;
        }
        let Some(stack) = world.item_entity(entity) else {
            log::trace!(target: "sync", "{} vanished before pickup at {}", entity, inventory);
            return RuleOutcome::NoEffect;
        };

        let mut state = world.block(corr);
        let Some(target) = state.inventory_mut() else {
            // Leave the entity where it is rather than lose it.
            log::debug!(target: "sync", "{} mirrors {} but is not a container", corr, inventory);
            return RuleOutcome::Suppress;
        };
        let offered = stack.count;
        match target.add_stack(stack) {
            None => {
                world.remove_item_entity(entity);
            }
            Some(left) => {
                if left.count == offered {
                    return RuleOutcome::Suppress;
                }
                world.set_item_entity(entity, left);
            }
        }
        world.set_block(corr, state);
        RuleOutcome::Suppress
    }
}
