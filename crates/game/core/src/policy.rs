//! The single decision entry point shared by both pipelines.

use crate::classify::classify;
use crate::config::AutoEquipConfig;
use crate::env::{ItemOracle, StorageContainer};
use crate::resolve::{DeclineReason, Resolution, resolve};
use crate::state::{EquipmentSlots, Item, SlotId};

/// Classification, configuration gating and conflict resolution in one call.
///
/// The authoritative and the mirror pipeline both go through
/// [`AutoEquip::decide`]; neither re-implements any part of it.
pub struct AutoEquip<'a, I>
where
    I: ItemOracle + ?Sized,
{
    items: &'a I,
    config: &'a AutoEquipConfig,
}

impl<'a, I> AutoEquip<'a, I>
where
    I: ItemOracle + ?Sized,
{
    pub fn new(items: &'a I, config: &'a AutoEquipConfig) -> Self {
        Self { items, config }
    }

    pub fn config(&self) -> &'a AutoEquipConfig {
        self.config
    }

    /// Slot the item belongs in, ignoring configuration.
    pub fn classify(&self, item: &Item) -> Option<SlotId> {
        classify(item, self.items)
    }

    /// Decides what to do with `incoming` given the player's current equipment,
    /// the sampled override intent, and their storage container.
    pub fn decide<C>(
        &self,
        incoming: &Item,
        equipment: &EquipmentSlots,
        override_held: bool,
        storage: &C,
    ) -> Resolution
    where
        C: StorageContainer + ?Sized,
    {
        if !self.config.enabled {
            return Resolution::Decline(DeclineReason::Disabled);
        }

        let candidate = self.classify(incoming);
        if let Some(slot) = candidate {
            if !self.config.slot_enabled(slot) {
                return Resolution::Decline(DeclineReason::SlotDisabled { slot });
            }
        }

        let override_intent = override_held && self.config.allow_override;
        let occupant = candidate.and_then(|slot| equipment.get(slot));

        resolve(
            candidate,
            incoming,
            occupant,
            override_intent,
            storage,
            self.config.placement,
        )
    }
}
