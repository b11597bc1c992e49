//! Dedicated equipment slots, one per gear category.

use crate::classify::classify;
use crate::env::ItemOracle;
use crate::error::{ErrorSeverity, GameError};

use super::{Item, ItemHandle};

/// Identifier of a dedicated equipment slot.
///
/// The set is closed; "not an equipment slot" is expressed as `Option::None`
/// by every API that may fail to find one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum SlotId {
    PrimaryWeapon = 0,
    SecondaryWeapon = 1,
    Melee = 2,
    Throwable = 3,
    Healing = 4,
    Consumable = 5,
}

impl SlotId {
    /// Total number of slots.
    pub const COUNT: usize = 6;

    /// Returns all slots in index order.
    pub const fn all() -> [SlotId; Self::COUNT] {
        [
            SlotId::PrimaryWeapon,
            SlotId::SecondaryWeapon,
            SlotId::Melee,
            SlotId::Throwable,
            SlotId::Healing,
            SlotId::Consumable,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Fixed-size slot set owned by a single player.
///
/// Each slot holds at most one item. The raw accessors (`set`, `take`) trust
/// the caller; [`EquipmentSlots::equip`] additionally checks that the item's
/// category belongs in the slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlots {
    slots: [Option<Item>; SlotId::COUNT],
}

impl EquipmentSlots {
    /// Creates a slot set with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the occupant of `slot`, if any.
    pub fn get(&self, slot: SlotId) -> Option<&Item> {
        self.slots[slot.as_index()].as_ref()
    }

    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.slots[slot.as_index()].is_some()
    }

    /// Writes `item` into `slot`, returning the previous occupant.
    pub fn set(&mut self, slot: SlotId, item: Item) -> Option<Item> {
        self.slots[slot.as_index()].replace(item)
    }

    /// Vacates `slot`, returning its occupant.
    pub fn take(&mut self, slot: SlotId) -> Option<Item> {
        self.slots[slot.as_index()].take()
    }

    /// Equips `item` into `slot` after checking that it is classified there.
    ///
    /// # Errors
    ///
    /// Returns [`EquipError::IncompatibleSlot`] when the item database maps the
    /// item to another slot or to none at all.
    pub fn equip<I>(
        &mut self,
        slot: SlotId,
        item: Item,
        items: &I,
    ) -> Result<Option<Item>, EquipError>
    where
        I: ItemOracle + ?Sized,
    {
        match classify(&item, items) {
            Some(expected) if expected == slot => Ok(self.set(slot, item)),
            expected => Err(EquipError::IncompatibleSlot {
                slot,
                handle: item.handle,
                expected,
            }),
        }
    }

    /// Iterates over occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Item)> {
        SlotId::all()
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Errors raised when writing equipment through the checked API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("{handle} cannot occupy slot {slot} (classified as {expected:?})")]
    IncompatibleSlot {
        slot: SlotId,
        handle: ItemHandle,
        expected: Option<SlotId>,
    },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IncompatibleSlot { .. } => "EQUIP_INCOMPATIBLE_SLOT",
        }
    }
}
