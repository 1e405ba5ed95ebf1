//! In-memory world used by the driver and the tests.
use hashbrown::HashMap;
use strata_blocks::{BlockState, ItemStack};
use strata_geom::{BlockPos, Location, Point, SectionId, Vec3};

use crate::world::{AgentId, EntityId, World};

type ChunkKey = (SectionId, i32, i32, i32);

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryWorldStats {
    pub chunk_entries: usize,
    pub blocks: usize,
    pub rev_entries: usize,
    pub writes: u64,
    pub entities: usize,
    pub opened: usize,
    pub messages: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemEntity {
    pub at: Point,
    pub stack: ItemStack,
    pub velocity: Vec3,
}

/// Chunk-keyed block store per section with write tracking, item entities and a journal of
/// the agent-facing side effects.
pub struct MemoryWorld {
    sx: i32,
    sy: i32,
    sz: i32,
    // Map per-chunk: key=(section,cx,cy,cz) -> map of block coords -> state
    inner: HashMap<ChunkKey, HashMap<BlockPos, BlockState>>,
    // Latest write stamp per chunk
    rev: HashMap<ChunkKey, u64>,
    counter: u64,
    writes: u64,
    entities: HashMap<EntityId, ItemEntity>,
    next_entity: u64,
    opened: Vec<(AgentId, Location)>,
    messages: Vec<(AgentId, String)>,
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new(16, 16, 16)
    }
}

impl MemoryWorld {
    pub fn new(sx: i32, sy: i32, sz: i32) -> Self {
        Self {
            sx: sx.max(1),
            sy: sy.max(1),
            sz: sz.max(1),
            inner: HashMap::new(),
            rev: HashMap::new(),
            counter: 0,
            writes: 0,
            entities: HashMap::new(),
            next_entity: 0,
            opened: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn stats(&self) -> MemoryWorldStats {
        MemoryWorldStats {
            chunk_entries: self.inner.len(),
            blocks: self.inner.values().map(|m| m.len()).sum(),
            rev_entries: self.rev.len(),
            writes: self.writes,
            entities: self.entities.len(),
            opened: self.opened.len(),
            messages: self.messages.len(),
        }
    }

    #[inline]
    fn chunk_key(&self, at: Location) -> ChunkKey {
        (
            at.section,
            at.pos.x.div_euclid(self.sx),
            at.pos.y.div_euclid(self.sy),
            at.pos.z.div_euclid(self.sz),
        )
    }

    /// Marks the chunk holding `at` as changed. Returns a new monotonically increasing stamp.
    fn bump(&mut self, at: Location) -> u64 {
        self.counter = self.counter.wrapping_add(1).max(1);
        let stamp = self.counter;
        let key = self.chunk_key(at);
        self.rev.insert(key, stamp);
        stamp
    }

    /// Stamp of the last write to the chunk holding `at`, 0 if never written.
    pub fn rev_at(&self, at: Location) -> u64 {
        self.rev.get(&self.chunk_key(at)).copied().unwrap_or(0)
    }

    /// Total number of block writes, including writes of an identical state.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Non-empty blocks of one section, sorted by position.
    pub fn blocks_in(&self, section: SectionId) -> Vec<(BlockPos, &BlockState)> {
        let mut out: Vec<(BlockPos, &BlockState)> = self
            .inner
            .iter()
            .filter(|(k, _)| k.0 == section)
            .flat_map(|(_, m)| m.iter().map(|(p, s)| (*p, s)))
            .collect();
        out.sort_by_key(|(p, _)| *p);
        out
    }

    /// Item entities sorted by id.
    pub fn entities(&self) -> Vec<(EntityId, &ItemEntity)> {
        let mut out: Vec<(EntityId, &ItemEntity)> =
            self.entities.iter().map(|(id, e)| (*id, e)).collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// Spawns an item entity at rest, as a host would for items lying on the ground.
    pub fn spawn_item(&mut self, at: Point, stack: ItemStack) -> EntityId {
        self.drop_item(at, stack, Vec3::ZERO)
    }

    pub fn opened(&self) -> &[(AgentId, Location)] {
        &self.opened
    }

    pub fn messages(&self) -> &[(AgentId, String)] {
        &self.messages
    }
}

impl World for MemoryWorld {
    fn block(&self, at: Location) -> BlockState {
        self.inner
            .get(&self.chunk_key(at))
            .and_then(|m| m.get(&at.pos).cloned())
            .unwrap_or_default()
    }

    fn set_block(&mut self, at: Location, state: BlockState) {
        let key = self.chunk_key(at);
        if state.is_empty() {
            if let Some(m) = self.inner.get_mut(&key) {
                m.remove(&at.pos);
                if m.is_empty() {
                    self.inner.remove(&key);
                }
            }
        } else {
            self.inner.entry(key).or_default().insert(at.pos, state);
        }
        self.writes += 1;
        self.bump(at);
    }

    fn drop_item(&mut self, at: Point, stack: ItemStack, velocity: Vec3) -> EntityId {
        self.next_entity += 1;
        let id = EntityId(self.next_entity);
        log::trace!(target: "world", "{} dropped at {} ({}, {}, {}) x{}", id, at.section, at.pos.x, at.pos.y, at.pos.z, stack.count);
        self.entities.insert(
            id,
            ItemEntity {
                at,
                stack,
                velocity,
            },
        );
        id
    }

    fn item_entity(&self, id: EntityId) -> Option<ItemStack> {
        self.entities.get(&id).map(|e| e.stack.clone())
    }

    fn set_item_entity(&mut self, id: EntityId, stack: ItemStack) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.stack = stack;
                true
            }
            None => false,
        }
    }

    fn remove_item_entity(&mut self, id: EntityId) -> Option<ItemStack> {
        self.entities.remove(&id).map(|e| e.stack)
    }

    fn open_inventory(&mut self, agent: &AgentId, at: Location) {
        log::trace!(target: "world", "{} opens {}", agent, at);
        self.opened.push((agent.clone(), at));
    }

    fn send_message(&mut self, agent: &AgentId, message: &str) {
        self.messages.push((agent.clone(), message.to_string()));
    }
}
