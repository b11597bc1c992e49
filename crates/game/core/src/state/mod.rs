//! Mutable per-player state touched by the auto-equip pipelines.
//!
//! Items move between world loot, equipment slots, and storage containers;
//! ownership is exclusive and always transferred by value.
mod equipment;
mod item;

pub use equipment::{EquipError, EquipmentSlots, SlotId};
pub use item::{EntityId, Item, ItemHandle};
