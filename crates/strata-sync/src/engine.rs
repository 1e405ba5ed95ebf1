use std::sync::Arc;

use strata_blocks::{BlockRegistry, ItemStack};
use strata_geom::{Location, Point, Vec3};
use strata_sections::{CoordinateMapper, SectionRegistry};
use strata_world::{AccessControl, World};

/// The reconciliation engine: static section layout, the block registry and the locking
/// subsystem it consults. Rules live in [`crate::rules`]; [`SectionSync::handle`] dispatches
/// host events to them.
pub struct SectionSync<A> {
    sections: Arc<SectionRegistry>,
    blocks: Arc<BlockRegistry>,
    access: A,
}

impl<A: AccessControl> SectionSync<A> {
    pub fn new(sections: Arc<SectionRegistry>, blocks: Arc<BlockRegistry>, access: A) -> Self {
        Self {
            sections,
            blocks,
            access,
        }
    }

    #[inline]
    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    #[inline]
    pub fn blocks(&self) -> &BlockRegistry {
        &self.blocks
    }

    #[inline]
    pub fn access(&self) -> &A {
        &self.access
    }

    #[inline]
    pub(crate) fn mapper(&self) -> CoordinateMapper<'_> {
        self.sections.mapper()
    }

    /// Corresponding location of `at` when both lie inside the overlap zone.
    pub(crate) fn partner(&self, at: Location) -> Option<Location> {
        let partner = self.mapper().overlap_partner(at);
        if partner.is_none() {
            log::trace!(target: "sync", "{} has no mirrored counterpart", at);
        }
        partner
    }
}

/// Spawns every stack as an item entity at `at`.
pub(crate) fn drop_stacks(world: &mut impl World, at: Point, stacks: Vec<ItemStack>, velocity: Vec3) -> u64 {
    let mut dropped = 0u64;
    for stack in stacks.into_iter().filter(|s| s.count > 0) {
        dropped += stack.count as u64;
        world.drop_item(at, stack, velocity);
    }
    dropped
}
