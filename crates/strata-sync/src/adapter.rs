use strata_world::{AccessControl, World};

use crate::engine::SectionSync;
use crate::event::{Delivery, SyncEvent};
use crate::outcome::{RuleOutcome, Verdict};

impl<A: AccessControl> SectionSync<A> {
    /// Runs the rule for one event that the host has not cancelled.
    pub fn handle(&self, world: &mut impl World, event: &SyncEvent) -> Verdict {
        self.dispatch(world, 0, event, false)
    }

    /// Runs the rule for one delivered event and returns what the host should do with it.
    pub fn deliver(&self, world: &mut impl World, delivery: &Delivery) -> Verdict {
        self.dispatch(world, delivery.seq, &delivery.event, delivery.cancelled)
    }

    fn dispatch(&self, world: &mut impl World, seq: u64, event: &SyncEvent, cancelled: bool) -> Verdict {
        if cancelled && event.skips_cancelled() {
            log::trace!(target: "sync", "[{}] {} at {} already cancelled", seq, event.kind(), event.location());
            return Verdict::Cancel;
        }
        let outcome = self.apply(world, event);
        match outcome {
            RuleOutcome::Suppress => {
                log::info!(target: "sync", "[{}] {} at {} vetoed", seq, event.kind(), event.location())
            }
            RuleOutcome::Applied => {
                log::debug!(target: "sync", "[{}] {} at {} mirrored", seq, event.kind(), event.location())
            }
            RuleOutcome::NoEffect => {
                log::trace!(target: "sync", "[{}] {} at {} no effect", seq, event.kind(), event.location())
            }
        }
        Verdict::fold(cancelled, outcome)
    }

    fn apply(&self, world: &mut impl World, event: &SyncEvent) -> RuleOutcome {
        match event {
            SyncEvent::BlockBroken { at } => self.block_removed(world, *at),
            SyncEvent::BlockPlaced { at, state } => self.block_placed(world, *at, state),
            SyncEvent::PistonExtended { at } => self.mechanism_actuated(*at),
            SyncEvent::LiquidFilled { at } => self.liquid_changed(world, *at, true),
            SyncEvent::LiquidDrained { at } => self.liquid_changed(world, *at, false),
            SyncEvent::SignEdited { at, lines } => self.sign_edited(world, *at, Some(lines.as_slice())),
            SyncEvent::ContainerInteract {
                at,
                agent,
                action,
                sneaking,
                main_hand,
            } => self.container_opened(world, *at, agent, *action, *sneaking, *main_hand),
            SyncEvent::ItemCollected { inventory, entity } => {
                self.item_collected(world, *inventory, *entity)
            }
        }
    }
}
