use proptest::prelude::*;
use strata_blocks::{BlockId, BlockState};
use strata_geom::{Location, SectionId};
use strata_world::{AgentId, MemoryWorld, World};

fn solid(id: u16) -> BlockState {
    BlockState::Solid {
        id: BlockId(id),
        waterlogged: None,
    }
}

proptest! {
    // Last write wins for every location, across chunk and section borders.
    #[test]
    fn reads_see_last_write(
        writes in prop::collection::vec((0u16..3, -40i32..40, -40i32..40, -40i32..40, 0u16..4), 1..64)
    ) {
        let mut world = MemoryWorld::new(8, 8, 8);
        let mut expected = std::collections::BTreeMap::new();
        for &(s, x, y, z, b) in &writes {
            let at = Location::at(SectionId(s), x, y, z);
            let state = if b == 0 { BlockState::Empty } else { solid(b) };
            world.set_block(at, state.clone());
            expected.insert(at, state);
        }
        for (at, state) in &expected {
            prop_assert_eq!(&world.block(*at), state);
        }
        let non_empty = expected.values().filter(|s| !s.is_empty()).count();
        prop_assert_eq!(world.stats().blocks, non_empty);
        prop_assert_eq!(world.writes(), writes.len() as u64);
    }
}

#[test]
fn journal_records_agent_effects() {
    let mut world = MemoryWorld::default();
    let alice = AgentId::new("alice");
    let chest = Location::at(SectionId(0), 2, 70, 2);
    world.open_inventory(&alice, chest);
    world.send_message(&alice, "hello");
    assert_eq!(world.opened(), &[(alice.clone(), chest)]);
    assert_eq!(world.messages(), &[(alice, "hello".to_string())]);
    let stats = world.stats();
    assert_eq!((stats.opened, stats.messages), (1, 1));
}

#[test]
fn blocks_in_lists_one_section_sorted() {
    let mut world = MemoryWorld::default();
    world.set_block(Location::at(SectionId(1), 40, 0, 0), solid(1));
    world.set_block(Location::at(SectionId(1), -40, 0, 0), solid(2));
    world.set_block(Location::at(SectionId(0), 0, 0, 0), solid(3));
    let listed: Vec<i32> = world.blocks_in(SectionId(1)).iter().map(|(p, _)| p.x).collect();
    assert_eq!(listed, vec![-40, 40]);
}
