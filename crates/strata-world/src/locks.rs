use hashbrown::{HashMap, HashSet};
use strata_geom::Location;

use crate::access::{AccessControl, ProtectionGroup};
use crate::world::AgentId;

/// One protection: the signs that declare it, the blocks it guards and who may use them.
#[derive(Clone, Debug, Default)]
pub struct LockGroup {
    pub signs: Vec<Location>,
    pub protects: Vec<Location>,
    pub allowed: HashSet<AgentId>,
}

/// Explicit protection groups. Blocks outside every group are open to everyone.
#[derive(Default, Debug)]
pub struct MemoryLocks {
    groups: Vec<LockGroup>,
    // sign or protected block -> group index
    index: HashMap<Location, usize>,
}

impl MemoryLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group; a location already claimed by an earlier group keeps that claim.
    pub fn add_group(&mut self, group: LockGroup) -> usize {
        let gi = self.groups.len();
        for loc in group.signs.iter().chain(&group.protects) {
            self.index.entry(*loc).or_insert(gi);
        }
        self.groups.push(group);
        gi
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn group_at(&self, at: Location) -> Option<&LockGroup> {
        self.index.get(&at).and_then(|&gi| self.groups.get(gi))
    }
}

impl AccessControl for MemoryLocks {
    fn find_group(&self, at: Location) -> Option<ProtectionGroup> {
        self.group_at(at).map(|g| ProtectionGroup {
            signs: g.signs.clone(),
        })
    }

    fn is_allowed(&self, agent: &AgentId, at: Location) -> bool {
        self.group_at(at).is_none_or(|g| g.allowed.contains(agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_geom::SectionId;

    #[test]
    fn groups_resolve_from_signs_and_protected_blocks() {
        let sign = Location::at(SectionId(1), 5, 4, 6);
        let chest = Location::at(SectionId(1), 5, 4, 5);
        let mut locks = MemoryLocks::new();
        locks.add_group(LockGroup {
            signs: vec![sign],
            protects: vec![chest],
            allowed: [AgentId::new("alice")].into_iter().collect(),
        });

        let by_sign = locks.find_group(sign).unwrap();
        assert_eq!(by_sign.signs, vec![sign]);
        assert_eq!(locks.find_group(chest), Some(by_sign));
        assert!(locks.is_allowed(&AgentId::new("alice"), chest));
        assert!(!locks.is_allowed(&AgentId::new("bob"), chest));
        // unprotected
        assert!(locks.is_allowed(&AgentId::new("bob"), Location::at(SectionId(0), 5, 4, 5)));
        assert_eq!(locks.find_group(Location::at(SectionId(0), 5, 4, 5)), None);
    }

    #[test]
    fn first_group_keeps_contested_locations() {
        let chest = Location::at(SectionId(0), 0, 0, 0);
        let mut locks = MemoryLocks::new();
        locks.add_group(LockGroup {
            protects: vec![chest],
            allowed: [AgentId::new("a")].into_iter().collect(),
            ..Default::default()
        });
        locks.add_group(LockGroup {
            protects: vec![chest],
            ..Default::default()
        });
        assert_eq!(locks.len(), 2);
        assert!(locks.is_allowed(&AgentId::new("a"), chest));
    }
}
