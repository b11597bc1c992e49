//! Conflict resolution for an incoming item and its target slot.
//!
//! Rules, evaluated in order:
//!
//! 1. no candidate slot → decline
//! 2. empty slot → proceed, nothing displaced
//! 3. occupied, no override → decline
//! 4. occupied, override, same kind → decline
//! 5. occupied, override, different kind → proceed; the occupant is stored if
//!    the container has room for its full quantity, dropped to the world
//!    otherwise
//!
//! An occupant is never discarded: every `Proceed` that displaces one says
//! where it goes.

use crate::env::{Placement, PlacementFlags, StorageContainer};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Item, ItemHandle, SlotId};

/// Outcome of conflict resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// Auto-equip goes ahead according to the plan.
    Proceed(EquipPlan),
    /// Auto-equip does not apply; the host's default handling should run.
    Decline(DeclineReason),
}

impl Resolution {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }

    pub fn plan(&self) -> Option<&EquipPlan> {
        match self {
            Self::Proceed(plan) => Some(plan),
            Self::Decline(_) => None,
        }
    }
}

/// Everything a caller needs to vacate a slot and place the incoming item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipPlan {
    pub slot: SlotId,
    /// What to do with the current occupant; `None` when the slot is empty.
    pub displaced: Option<Disposal>,
}

/// Destination of an occupant displaced by an override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disposal {
    /// Move the occupant into the storage container at this placement.
    Store(Placement),
    /// The container cannot hold the occupant; drop it into the world.
    DropToWorld,
}

/// Why auto-equip did not apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclineReason {
    #[error("item has no equipment slot")]
    NoSlot,

    #[error("slot {slot} is occupied and override was not requested")]
    SlotOccupied { slot: SlotId },

    #[error("slot {slot} already holds {handle}")]
    SameKind { slot: SlotId, handle: ItemHandle },

    #[error("auto-equip is disabled")]
    Disabled,

    #[error("auto-equip is disabled for slot {slot}")]
    SlotDisabled { slot: SlotId },
}

impl GameError for DeclineReason {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::NotApplicable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoSlot => "DECLINE_NO_SLOT",
            Self::SlotOccupied { .. } => "DECLINE_SLOT_OCCUPIED",
            Self::SameKind { .. } => "DECLINE_SAME_KIND",
            Self::Disabled => "DECLINE_DISABLED",
            Self::SlotDisabled { .. } => "DECLINE_SLOT_DISABLED",
        }
    }
}

/// Decides whether `incoming` may be placed into `candidate`.
///
/// `occupant` is the current content of the candidate slot. The storage
/// container is only queried, never mutated; executing the plan is up to the
/// caller.
pub fn resolve<C>(
    candidate: Option<SlotId>,
    incoming: &Item,
    occupant: Option<&Item>,
    override_intent: bool,
    storage: &C,
    flags: PlacementFlags,
) -> Resolution
where
    C: StorageContainer + ?Sized,
{
    let Some(slot) = candidate else {
        return Resolution::Decline(DeclineReason::NoSlot);
    };

    let Some(occupant) = occupant else {
        return Resolution::Proceed(EquipPlan {
            slot,
            displaced: None,
        });
    };

    if !override_intent {
        return Resolution::Decline(DeclineReason::SlotOccupied { slot });
    }

    if occupant.same_kind(incoming) {
        return Resolution::Decline(DeclineReason::SameKind {
            slot,
            handle: incoming.handle,
        });
    }

    let disposal = match storage.find_placement(occupant.handle, occupant.quantity, flags) {
        Some(placement) => Disposal::Store(placement),
        None => Disposal::DropToWorld,
    };

    Resolution::Proceed(EquipPlan {
        slot,
        displaced: Some(disposal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Container that either has one free slot at `free` or is full.
    struct Fixed {
        free: Option<u32>,
    }

    impl StorageContainer for Fixed {
        fn find_placement(&self, _: ItemHandle, _: u32, _: PlacementFlags) -> Option<Placement> {
            self.free.map(Placement::empty_slot)
        }

        fn commit_placement(&mut self, _: Item, _: Placement) {
            unreachable!("resolver must not mutate storage")
        }

        fn drop_to_world(&mut self, _: Item) {
            unreachable!("resolver must not mutate storage")
        }
    }

    const ROOMY: Fixed = Fixed { free: Some(3) };
    const FULL: Fixed = Fixed { free: None };

    fn bandage() -> Item {
        Item::new(ItemHandle(40), 2)
    }

    fn medkit() -> Item {
        Item::single(ItemHandle(41))
    }

    #[test]
    fn no_candidate_declines() {
        for intent in [false, true] {
            let resolution = resolve(None, &medkit(), None, intent, &ROOMY, PlacementFlags::default());
            assert_eq!(resolution, Resolution::Decline(DeclineReason::NoSlot));
        }
    }

    #[test]
    fn empty_slot_proceeds_regardless_of_intent() {
        for slot in SlotId::all() {
            for intent in [false, true] {
                let resolution =
                    resolve(Some(slot), &medkit(), None, intent, &FULL, PlacementFlags::default());
                assert_eq!(
                    resolution,
                    Resolution::Proceed(EquipPlan {
                        slot,
                        displaced: None
                    })
                );
            }
        }
    }

    #[test]
    fn occupied_without_override_declines() {
        let occupant = bandage();
        let resolution = resolve(
            Some(SlotId::Healing),
            &medkit(),
            Some(&occupant),
            false,
            &ROOMY,
            PlacementFlags::default(),
        );
        assert_eq!(
            resolution,
            Resolution::Decline(DeclineReason::SlotOccupied {
                slot: SlotId::Healing
            })
        );
    }

    #[test]
    fn same_kind_override_declines_even_with_different_payload() {
        let occupant = Item::new(ItemHandle(41), 5);
        let resolution = resolve(
            Some(SlotId::Healing),
            &medkit(),
            Some(&occupant),
            true,
            &ROOMY,
            PlacementFlags::default(),
        );
        assert_eq!(
            resolution,
            Resolution::Decline(DeclineReason::SameKind {
                slot: SlotId::Healing,
                handle: ItemHandle(41),
            })
        );
    }

    #[test]
    fn override_with_room_stores_occupant() {
        let occupant = bandage();
        let resolution = resolve(
            Some(SlotId::Healing),
            &medkit(),
            Some(&occupant),
            true,
            &ROOMY,
            PlacementFlags::default(),
        );
        assert_eq!(
            resolution.plan().and_then(|plan| plan.displaced),
            Some(Disposal::Store(Placement::empty_slot(3)))
        );
    }

    #[test]
    fn override_without_room_drops_occupant() {
        let occupant = bandage();
        let resolution = resolve(
            Some(SlotId::Healing),
            &medkit(),
            Some(&occupant),
            true,
            &FULL,
            PlacementFlags::default(),
        );
        assert_eq!(
            resolution,
            Resolution::Proceed(EquipPlan {
                slot: SlotId::Healing,
                displaced: Some(Disposal::DropToWorld),
            })
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let occupant = bandage();
        let cases = [(None, false), (Some(&occupant), false), (Some(&occupant), true)];
        for (occupant, intent) in cases {
            let first = resolve(
                Some(SlotId::Healing),
                &medkit(),
                occupant,
                intent,
                &ROOMY,
                PlacementFlags::default(),
            );
            let second = resolve(
                Some(SlotId::Healing),
                &medkit(),
                occupant,
                intent,
                &ROOMY,
                PlacementFlags::default(),
            );
            assert_eq!(first, second);
        }
    }

    #[test]
    fn decline_reasons_are_not_applicable() {
        let reason = DeclineReason::SlotOccupied {
            slot: SlotId::Melee,
        };
        assert_eq!(reason.severity(), ErrorSeverity::NotApplicable);
        assert_eq!(reason.error_code(), "DECLINE_SLOT_OCCUPIED");
        assert_eq!(reason.to_string(), "slot melee is occupied and override was not requested");
    }
}
