use strata_geom::Location;

use crate::world::AgentId;

/// Signs that jointly protect one or more blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtectionGroup {
    pub signs: Vec<Location>,
}

/// Narrow view of the locking subsystem needed by the sync rules.
pub trait AccessControl {
    /// Group protecting `at`, or owning the sign at `at`.
    fn find_group(&self, at: Location) -> Option<ProtectionGroup>;

    fn is_allowed(&self, agent: &AgentId, at: Location) -> bool;
}

impl<T: AccessControl + ?Sized> AccessControl for &T {
    fn find_group(&self, at: Location) -> Option<ProtectionGroup> {
        (**self).find_group(at)
    }

    fn is_allowed(&self, agent: &AgentId, at: Location) -> bool {
        (**self).is_allowed(agent, at)
    }
}
