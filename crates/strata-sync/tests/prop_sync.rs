mod common;

use common::*;
use proptest::prelude::*;
use strata_blocks::BlockState;
use strata_geom::{Location, Vec3};
use strata_sync::{ClickAction, SyncEvent};
use strata_world::{AgentId, MemoryLocks, MemoryWorld, World};

/// Locations of the linked sections that have no mirrored counterpart.
fn unmirrored() -> impl Strategy<Value = Location> {
    prop_oneof![
        (-50i32..50, -64i32..0, -50i32..50).prop_map(|(x, y, z)| low(x, y, z)),
        (-50i32..50, 76i32..=200, -50i32..50).prop_map(|(x, y, z)| up(x, y, z)),
        (-50i32..50, 201i32..400, -50i32..50).prop_map(|(x, y, z)| up(x, y, z)),
    ]
}

fn stacks() -> impl Strategy<Value = Vec<(usize, u32)>> {
    prop::collection::vec((0usize..3, 1u32..=64), 0..3)
}

const ITEMS: [&str; 3] = ["cobblestone", "diamond", "ender_pearl"];

fn crate_with(picks: &[(usize, u32)]) -> BlockState {
    let reg = blocks();
    let mut state = block(&reg, "crate");
    let inv = state.inventory_mut().unwrap();
    for &(i, count) in picks {
        let mut stack = reg.stack(ITEMS[i], count).unwrap();
        stack.count = stack.count.min(stack.max_stack);
        inv.add_stack(stack);
    }
    state
}

proptest! {
    // Outside the overlap zone no rule touches the world, whatever is stored there.
    #[test]
    fn unmirrored_locations_are_never_written(at in unmirrored(), picks in stacks()) {
        let reg = blocks();
        let sync = engine(MemoryLocks::new());
        let mut world = MemoryWorld::default();
        world.set_block(at, crate_with(&picks));
        let entity = world.spawn_item(at.point(Vec3::ZERO), reg.stack("diamond", 3).unwrap());
        let before = world.stats();
        let events = [
            SyncEvent::BlockBroken { at },
            SyncEvent::BlockPlaced { at, state: block(&reg, "stone") },
            SyncEvent::LiquidFilled { at },
            SyncEvent::LiquidDrained { at },
            SyncEvent::SignEdited { at, lines: lines(&["x"]) },
            SyncEvent::ContainerInteract {
                at,
                agent: AgentId::new("alice"),
                action: ClickAction::RightClick,
                sneaking: false,
                main_hand: None,
            },
            SyncEvent::ItemCollected { inventory: at, entity },
        ];
        for event in &events {
            prop_assert!(!sync.handle(&mut world, event).is_cancel());
        }
        prop_assert_eq!(world.stats(), before);
        prop_assert_eq!(world.item_entity(entity).map(|s| s.count), Some(3));
    }

    // Merging a lower container never creates or destroys items.
    #[test]
    fn merge_conserves_items(lower in stacks(), upper in stacks(), x in -20i32..20, y in 0i32..=15, z in -20i32..20) {
        let sync = engine(MemoryLocks::new());
        let mut world = MemoryWorld::default();
        let (clicked, linked) = (low(x, y, z), up(x, y + 60, z));
        world.set_block(clicked, crate_with(&lower));
        world.set_block(linked, crate_with(&upper));
        let before = items_total(&world, &[clicked, linked]);

        let verdict = sync.handle(&mut world, &SyncEvent::ContainerInteract {
            at: clicked,
            agent: AgentId::new("alice"),
            action: ClickAction::RightClick,
            sneaking: false,
            main_hand: None,
        });

        prop_assert!(verdict.is_cancel());
        prop_assert_eq!(items_total(&world, &[clicked, linked]), before);
        prop_assert!(world.block(clicked).inventory().unwrap().is_empty());
    }

    // Breaking either copy drops the mirror's contents instead of deleting them.
    #[test]
    fn removal_conserves_items(picks in stacks(), from_lower in any::<bool>(), y in 0i32..=15) {
        let sync = engine(MemoryLocks::new());
        let mut world = MemoryWorld::default();
        let (broken, mirror) = if from_lower {
            (low(0, y, 0), up(0, y + 60, 0))
        } else {
            (up(0, y + 60, 0), low(0, y, 0))
        };
        world.set_block(mirror, crate_with(&picks));
        let before = items_total(&world, &[mirror]);

        sync.handle(&mut world, &SyncEvent::BlockBroken { at: broken });

        prop_assert_eq!(world.block(mirror), BlockState::Empty);
        prop_assert_eq!(items_total(&world, &[mirror]), before);
    }

    // Pickups only ever flow upward; downward ones neither transfer nor veto.
    #[test]
    fn pickups_only_flow_upward(count in 1u32..=64, y in 0i32..=15, from_lower in any::<bool>()) {
        let reg = blocks();
        let sync = engine(MemoryLocks::new());
        let mut world = MemoryWorld::default();
        let (collector, mirror) = if from_lower {
            (low(0, y, 0), up(0, y + 60, 0))
        } else {
            (up(0, y + 60, 0), low(0, y, 0))
        };
        world.set_block(collector, block(&reg, "hopper"));
        world.set_block(mirror, block(&reg, "chest"));
        let entity = world.spawn_item(collector.point(Vec3::UP), reg.stack("cobblestone", count).unwrap());

        let verdict = sync.handle(&mut world, &SyncEvent::ItemCollected { inventory: collector, entity });

        prop_assert_eq!(verdict.is_cancel(), from_lower);
        let moved = items_total(&world, &[mirror]) - world.item_entity(entity).map_or(0, |s| s.count as u64);
        prop_assert_eq!(moved, if from_lower { count as u64 } else { 0 });
    }
}
