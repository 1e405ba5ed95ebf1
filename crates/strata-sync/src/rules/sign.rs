use strata_blocks::SignText;
use strata_geom::Location;
use strata_world::{AccessControl, World};

use crate::engine::SectionSync;
use crate::outcome::RuleOutcome;

impl<A: AccessControl> SectionSync<A> {
    /// Copies the sign at `at` onto its mirror. `lines` overrides the stored text while an
    /// edit is still being committed.
    ///
    /// Writes only when the mirror differs, so repeating an edit costs nothing.
    pub fn sign_edited(&self, world: &mut impl World, at: Location, lines: Option<&[String]>) -> RuleOutcome {
        let Some(corr) = self.partner(at) else {
            return RuleOutcome::NoEffect;
        };
        let mut desired = world.block(at);
        if let (Some(lines), Some(text)) = (lines, desired.sign_text_mut()) {
            *text = SignText::from_lines(lines.iter().cloned());
        }
        if world.block(corr) == desired {
            return RuleOutcome::NoEffect;
        }
        world.set_block(corr, desired);
        RuleOutcome::Applied
    }
}
