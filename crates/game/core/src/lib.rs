//! Deterministic auto-equip decisions shared by every peer of a session.
//!
//! `equip-core` decides whether an acquired item goes straight into a
//! dedicated equipment slot and how an occupied slot is vacated. The same
//! [`AutoEquip::decide`] call backs both the authoritative pickup pipeline and
//! the mirrored grant pipeline, so the two views of one event cannot diverge.
//!
//! Live game state is never reached through globals: read-only collaborators
//! arrive bundled in an [`Env`], mutable containers are passed explicitly.
pub mod classify;
pub mod config;
pub mod env;
pub mod error;
pub mod policy;
pub mod resolve;
pub mod state;

pub use classify::{classify, slot_for_category};
pub use config::AutoEquipConfig;
pub use env::{
    Category, Env, InputOracle, ItemDefinition, ItemOracle, LootWorld, Placement, PlacementFlags,
    SessionOracle, StorageContainer,
};
pub use error::{ErrorSeverity, GameError};
pub use policy::AutoEquip;
pub use resolve::{DeclineReason, Disposal, EquipPlan, Resolution, resolve};
pub use state::{EntityId, EquipError, EquipmentSlots, Item, ItemHandle, SlotId};
