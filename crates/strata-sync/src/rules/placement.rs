use strata_blocks::BlockState;
use strata_geom::Location;
use strata_world::{AccessControl, World};

use crate::engine::SectionSync;
use crate::outcome::RuleOutcome;

impl<A: AccessControl> SectionSync<A> {
    /// `state` was placed at `at`; the mirror becomes an exact copy.
    pub fn block_placed(&self, world: &mut impl World, at: Location, state: &BlockState) -> RuleOutcome {
        let Some(corr) = self.partner(at) else {
            return RuleOutcome::NoEffect;
        };
        world.set_block(corr, state.clone());
        RuleOutcome::Applied
    }
}
