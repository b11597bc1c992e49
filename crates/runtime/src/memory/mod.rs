//! In-memory collaborators for tests and local runs.
//!
//! Host games bring their own inventory and world object systems; these
//! adapters implement the same contracts with plain data so pipelines can be
//! exercised end to end.
mod loot;
mod storage;

pub use loot::MemoryLootWorld;
pub use storage::MemoryStorage;
