#![allow(dead_code)]

use std::sync::Arc;

use strata_blocks::{BlockRegistry, BlockState, SignText};
use strata_geom::{Location, SectionId};
use strata_sections::SectionRegistry;
use strata_sync::SectionSync;
use strata_world::{MemoryLocks, MemoryWorld, World};

pub const UPPER: SectionId = SectionId(0);
pub const LOWER: SectionId = SectionId(1);
pub const ISLAND: SectionId = SectionId(2);

pub const SECTIONS: &str = r#"
[[section]]
name = "upper"
min_y = 60
max_y = 200

[[section]]
name = "lower"
min_y = -64
max_y = 15
[section.link]
y_offset = 60

# declared last, not linked to anything
[[section]]
name = "island"
min_y = -300
max_y = -200
"#;

pub const BLOCKS: &str = r#"
[[block]]
name = "stone"

[[block]]
name = "slab"
waterloggable = true

[[block]]
name = "chest"
kind = "container"

[[block]]
name = "crate"
kind = "container"
slots = 3

[[block]]
name = "hopper"
kind = "container"
slots = 5

[[block]]
name = "oak_sign"
kind = "sign"
waterloggable = true

[[item]]
name = "cobblestone"

[[item]]
name = "diamond"

[[item]]
name = "ender_pearl"
max_stack = 16

[[item]]
name = "oak_sign"
max_stack = 16
places = "oak_sign"
"#;

pub fn sections() -> Arc<SectionRegistry> {
    Arc::new(SectionRegistry::from_toml_str(SECTIONS).expect("sections"))
}

pub fn blocks() -> Arc<BlockRegistry> {
    Arc::new(BlockRegistry::from_toml_str(BLOCKS).expect("blocks"))
}

pub fn engine(locks: MemoryLocks) -> SectionSync<MemoryLocks> {
    SectionSync::new(sections(), blocks(), locks)
}

pub fn up(x: i32, y: i32, z: i32) -> Location {
    Location::at(UPPER, x, y, z)
}

pub fn low(x: i32, y: i32, z: i32) -> Location {
    Location::at(LOWER, x, y, z)
}

pub fn block(reg: &BlockRegistry, name: &str) -> BlockState {
    reg.state_by_name(name).expect("known block")
}

pub fn container(reg: &BlockRegistry, name: &str, items: &[(&str, u32)]) -> BlockState {
    let mut state = block(reg, name);
    let inv = state.inventory_mut().expect("container");
    for (item, count) in items {
        let stack = reg.stack(item, *count).expect("known item");
        assert!(inv.add_stack(stack).is_none(), "fixture container overflowed");
    }
    state
}

pub fn sign(reg: &BlockRegistry, lines: &[&str]) -> BlockState {
    let mut state = block(reg, "oak_sign");
    if let Some(text) = state.sign_text_mut() {
        *text = SignText::from_lines(lines.iter().copied());
    }
    state
}

pub fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

/// Items held by the containers at `locs` plus every item entity lying around.
pub fn items_total(world: &MemoryWorld, locs: &[Location]) -> u64 {
    let held: u64 = locs
        .iter()
        .filter_map(|l| world.block(*l).inventory().map(|i| i.total_items()))
        .sum();
    let loose: u64 = world.entities().iter().map(|(_, e)| e.stack.count as u64).sum();
    held + loose
}
