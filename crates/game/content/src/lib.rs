//! Data-driven content for the auto-equip stack.
//!
//! This crate loads the static item database (RON) and the auto-equip
//! configuration (TOML). Content is consumed by runtime oracles and never
//! appears in per-player state.
//!
//! All loaders use equip-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult};
