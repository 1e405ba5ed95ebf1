mod common;

use common::*;
use strata_blocks::BlockState;
use strata_sync::{ClickAction, SyncEvent, Verdict};
use strata_world::{AgentId, LockGroup, MemoryLocks, MemoryWorld, World};

#[test]
fn breaking_private_sign_tears_down_lower_protection() {
    let reg = blocks();
    let private = sign(&reg, &["[Private]", "", "", ""]);
    let mut locks = MemoryLocks::new();
    locks.add_group(LockGroup {
        signs: vec![low(5, 4, 5), low(6, 4, 5)],
        protects: vec![low(5, 4, 4)],
        allowed: [AgentId::new("alice")].into_iter().collect(),
    });
    let sync = engine(locks);

    let mut world = MemoryWorld::default();
    world.set_block(up(5, 64, 5), private.clone());
    world.set_block(low(5, 4, 5), private.clone());
    world.set_block(low(6, 4, 5), sign(&reg, &["[More Users]", "bob"]));
    world.set_block(low(5, 4, 4), container(&reg, "chest", &[]));

    let verdict = sync.handle(&mut world, &SyncEvent::BlockBroken { at: up(5, 64, 5) });

    assert_eq!(verdict, Verdict::Allow);
    assert_eq!(world.block(low(5, 4, 5)), BlockState::Empty);
    assert_eq!(world.block(low(6, 4, 5)), BlockState::Empty);
    // the protected chest itself is left alone
    assert!(world.block(low(5, 4, 4)).inventory().is_some());
    // the host removes the broken sign itself
    assert_eq!(world.block(up(5, 64, 5)), private);
}

#[test]
fn private_sign_teardown_reaches_signs_below_the_band() {
    let reg = blocks();
    let private = sign(&reg, &["[Private]"]);
    let mut locks = MemoryLocks::new();
    locks.add_group(LockGroup {
        signs: vec![low(5, 4, 5), low(5, -20, 5)],
        ..Default::default()
    });
    let sync = engine(locks);

    let mut world = MemoryWorld::default();
    world.set_block(up(5, 64, 5), private.clone());
    world.set_block(low(5, 4, 5), private.clone());
    world.set_block(low(5, -20, 5), sign(&reg, &["[More Users]", "carol"]));

    sync.handle(&mut world, &SyncEvent::BlockBroken { at: up(5, 64, 5) });

    assert_eq!(world.block(low(5, 4, 5)), BlockState::Empty);
    assert_eq!(world.block(low(5, -20, 5)), BlockState::Empty);
}

#[test]
fn opening_lower_chest_moves_items_up_and_redirects() {
    let reg = blocks();
    let sync = engine(MemoryLocks::new());
    let alice = AgentId::new("alice");

    let mut world = MemoryWorld::default();
    world.set_block(
        low(2, 10, 2),
        container(&reg, "chest", &[("cobblestone", 1), ("diamond", 1), ("ender_pearl", 1)]),
    );
    world.set_block(up(2, 70, 2), container(&reg, "chest", &[]));

    let verdict = sync.handle(
        &mut world,
        &SyncEvent::ContainerInteract {
            at: low(2, 10, 2),
            agent: alice.clone(),
            action: ClickAction::RightClick,
            sneaking: false,
            main_hand: None,
        },
    );

    assert_eq!(verdict, Verdict::Cancel);
    let upper = world.block(up(2, 70, 2));
    let upper_inv = upper.inventory().unwrap();
    assert_eq!(upper_inv.total_items(), 3);
    for item in ["cobblestone", "diamond", "ender_pearl"] {
        assert_eq!(upper_inv.count_of(reg.item_id_by_name(item).unwrap()), 1);
    }
    assert!(world.block(low(2, 10, 2)).inventory().unwrap().is_empty());
    assert_eq!(world.opened(), &[(alice, up(2, 70, 2))]);
    assert!(world.messages().is_empty());
    assert!(world.entities().is_empty());
}
