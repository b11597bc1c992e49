//! Entry points invoked by the host's interaction and notification dispatchers.
//!
//! Both pipelines run synchronously on the thread that owns the player's
//! state and return an [`Outcome`]; the host runs its default handling exactly
//! when [`Outcome::suppresses_default`] is false.
//!
//! ```text
//! authority:  interaction ─ guards ─ classify ─ resolve ─ detach loot ─ apply
//! mirror:     grant ─────────────── classify ─ resolve ─────────────── apply
//! ```
mod apply;
mod authority;
mod mirror;
mod outcome;

pub use authority::AuthorityPipeline;
pub use mirror::MirrorPipeline;
pub use outcome::{DeferReason, Displaced, EquipReport, Outcome, SwallowReason};

use equip_core::{EntityId, EquipmentSlots, ItemHandle, StorageContainer};
use serde::{Deserialize, Serialize};

/// Kind of world object an interaction targets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InteractableKind {
    Loot,
    Door,
    Container,
    Vehicle,
    Generator,
    Other,
}

/// Object named by an interaction request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractTarget {
    pub id: EntityId,
    pub kind: InteractableKind,
}

impl InteractTarget {
    pub fn loot(id: EntityId) -> Self {
        Self {
            id,
            kind: InteractableKind::Loot,
        }
    }
}

/// Interaction request received by the authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub actor: EntityId,
    pub target: Option<InteractTarget>,
}

impl Interaction {
    pub fn new(actor: EntityId, target: InteractTarget) -> Self {
        Self {
            actor,
            target: Some(target),
        }
    }

    /// Request that lost its target before reaching the authority.
    pub fn untargeted(actor: EntityId) -> Self {
        Self {
            actor,
            target: None,
        }
    }
}

/// Notification that the authority granted an item to `receiver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantNotification {
    pub receiver: EntityId,
    pub handle: ItemHandle,
    pub quantity: u32,
}

impl GrantNotification {
    pub fn new(receiver: EntityId, handle: ItemHandle, quantity: u32) -> Self {
        Self {
            receiver,
            handle,
            quantity,
        }
    }
}

/// Mutable view of one player's equipment and storage for a single invocation.
pub struct PlayerInventory<'a, C>
where
    C: StorageContainer + ?Sized,
{
    pub equipment: &'a mut EquipmentSlots,
    pub storage: &'a mut C,
}

impl<'a, C> PlayerInventory<'a, C>
where
    C: StorageContainer + ?Sized,
{
    pub fn new(equipment: &'a mut EquipmentSlots, storage: &'a mut C) -> Self {
        Self { equipment, storage }
    }
}
