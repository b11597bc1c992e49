//! Runtime orchestration of the auto-equip pipelines.
//!
//! This crate drives the shared decision from `equip-core` in the two trust
//! contexts a session has, and ships in-memory collaborators for tests and
//! local tooling. Modules are organized by responsibility:
//! - [`pipeline`] hosts the authoritative and the mirror entry points
//! - [`oracle`] provides oracle implementations backed by loaded content
//! - [`memory`] provides in-memory storage and loot world adapters
pub mod memory;
pub mod oracle;
pub mod pipeline;

pub use memory::{MemoryLootWorld, MemoryStorage};
pub use oracle::{InputOracleImpl, ItemOracleImpl, OracleManager, SessionOracleImpl};
pub use pipeline::{
    AuthorityPipeline, DeferReason, Displaced, EquipReport, GrantNotification, InteractTarget,
    InteractableKind, Interaction, MirrorPipeline, Outcome, PlayerInventory, SwallowReason,
};
