use strata_blocks::BlockState;
use strata_geom::{Location, Vec3};
use strata_world::{AccessControl, World};

use crate::engine::{SectionSync, drop_stacks};
use crate::outcome::RuleOutcome;

impl<A: AccessControl> SectionSync<A> {
    /// The block at `at` is being destroyed: clear its mirror.
    ///
    /// Items held by a mirrored container are dropped at `at` so nothing is lost when the
    /// mirror disappears. The drop happens whichever side was broken, above or below its
    /// mirror. Breaking a private sign tears down the whole protection on the
    /// other side.
    pub fn block_removed(&self, world: &mut impl World, at: Location) -> RuleOutcome {
        let Some(corr) = self.partner(at) else {
            return RuleOutcome::NoEffect;
        };
        let mut state = world.block(corr);

        if let Some(inventory) = state.inventory_mut() {
            let stacks = inventory.take_all();
            let dropped = drop_stacks(world, at.point(Vec3::new(0.5, 0.0, 0.5)), stacks, Vec3::ZERO);
            if dropped > 0 {
                log::debug!(target: "sync", "dropped {} item(s) of {} at {}", dropped, corr, at);
            }
        }

        if state.sign_text().is_some_and(|t| t.is_private()) {
            if let Some(group) = self.access().find_group(corr) {
                log::debug!(target: "sync", "clearing {} sign(s) protecting {}", group.signs.len(), corr);
                // Every sign of the group goes, even those outside the overlap band.
                for sign in group.signs {
                    world.set_block(sign, BlockState::Empty);
                }
            }
        }

        world.set_block(corr, BlockState::Empty);
        RuleOutcome::Applied
    }
}
