use strata_blocks::ItemId;
use strata_geom::{Location, Vec3};
use strata_world::{AccessControl, AgentId, World};

use crate::engine::{SectionSync, drop_stacks};
use crate::event::ClickAction;
use crate::outcome::RuleOutcome;

/// Told to an agent whose container overflowed while merging into its mirror.
pub const EJECT_MESSAGE: &str =
    "This container held items that did not fit the upper section's copy; they were ejected.";

const EJECT_OFFSET: Vec3 = Vec3::new(0.5, 1.0, 0.5);
const EJECT_VELOCITY: Vec3 = Vec3::new(0.0, 0.2, 0.0);

impl<A: AccessControl> SectionSync<A> {
    /// `agent` clicked the container at `at`. Opening a lower copy moves its contents into
    /// the upper copy and opens that one instead.
    pub fn container_opened(
        &self,
        world: &mut impl World,
        at: Location,
        agent: &AgentId,
        action: ClickAction,
        sneaking: bool,
        main_hand: Option<ItemId>,
    ) -> RuleOutcome {
        if action != ClickAction::RightClick || sneaking {
            return RuleOutcome::NoEffect;
        }
        if world.block(at).inventory().is_none() {
            return RuleOutcome::NoEffect;
        }
        let Some(linked) = self.partner(at) else {
            return RuleOutcome::NoEffect;
        };

        // Lock signs on both sides first so the permission checks below agree.
        let mut outcome = RuleOutcome::NoEffect;
        for block in [linked, at] {
            if let Some(group) = self.access().find_group(block) {
                for sign in &group.signs {
                    outcome = outcome.and(self.sign_edited(world, *sign, None));
                }
            }
        }

        if self.sections().is_above(at.section, linked.section) {
            return outcome;
        }
        if main_hand.is_some_and(|item| self.blocks().places_sign(item)) {
            return outcome;
        }
        if !self.access().is_allowed(agent, at) || !self.access().is_allowed(agent, linked) {
            log::debug!(target: "sync", "{} may not merge {} into {}", agent, at, linked);
            return outcome;
        }

        let mut target = world.block(linked);
        let Some(target_inv) = target.inventory_mut() else {
            log::debug!(target: "sync", "{} mirrors {} but is not a container", linked, at);
            return outcome;
        };

        let mut clicked = world.block(at);
        let stacks = clicked
            .inventory_mut()
            .map(|inv| inv.take_all())
            .unwrap_or_default();
        if !stacks.is_empty() {
            let overflow = target_inv.add_all(stacks);
            if !overflow.is_empty() {
                let ejected = drop_stacks(world, at.point(EJECT_OFFSET), overflow, EJECT_VELOCITY);
                log::info!(target: "sync", "ejected {} item(s) at {} for {}", ejected, at, agent);
                world.send_message(agent, EJECT_MESSAGE);
            }
            world.set_block(linked, target);
            world.set_block(at, clicked);
        }
        world.open_inventory(agent, linked);
        RuleOutcome::Suppress
    }
}
