//! World storage and access-control contracts, with in-memory implementations.
#![forbid(unsafe_code)]

pub mod access;
pub mod locks;
pub mod memory;
pub mod world;

pub use access::{AccessControl, ProtectionGroup};
pub use locks::{LockGroup, MemoryLocks};
pub use memory::{ItemEntity, MemoryWorld, MemoryWorldStats};
pub use world::{AgentId, EntityId, World};
