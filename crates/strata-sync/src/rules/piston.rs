use strata_geom::Location;
use strata_world::AccessControl;

use crate::engine::SectionSync;
use crate::outcome::RuleOutcome;

impl<A: AccessControl> SectionSync<A> {
    /// Pistons anywhere in a linked section are disabled, inside the overlap or not.
    pub fn mechanism_actuated(&self, at: Location) -> RuleOutcome {
        match self.mapper().corresponding_section(at) {
            Some(_) => RuleOutcome::Suppress,
            None => RuleOutcome::NoEffect,
        }
    }
}
