use strata_blocks::BlockState;
use strata_geom::{Location, Vec3};
use strata_world::{AccessControl, World};

use crate::engine::{SectionSync, drop_stacks};
use crate::outcome::RuleOutcome;

impl<A: AccessControl> SectionSync<A> {
    /// Water was poured into (`filled`) or scooped out of `at`.
    ///
    /// A mirror that cannot hold water is replaced outright; if it was a container its items
    /// are dropped at `at` first.
    pub fn liquid_changed(&self, world: &mut impl World, at: Location, filled: bool) -> RuleOutcome {
        let Some(corr) = self.partner(at) else {
            return RuleOutcome::NoEffect;
        };
        let mut state = world.block(corr);
        if !state.set_waterlogged(filled) {
            if let Some(inventory) = state.inventory_mut() {
                let stacks = inventory.take_all();
                let dropped = drop_stacks(world, at.point(Vec3::new(0.5, 0.0, 0.5)), stacks, Vec3::ZERO);
                if dropped > 0 {
                    log::debug!(target: "sync", "dropped {} item(s) of {} at {}", dropped, corr, at);
                }
            }
            state = if filled { BlockState::Water } else { BlockState::Empty };
        }
        world.set_block(corr, state);
        RuleOutcome::Applied
    }
}
