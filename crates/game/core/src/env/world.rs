//! Contracts for the containers an item can leave or enter.

use bitflags::bitflags;

use crate::state::{EntityId, Item, ItemHandle};

/// World-present loot objects, owned by the authority until claimed.
pub trait LootWorld: Send + Sync {
    /// Returns a copy of the item held by loot object `id`, without claiming it.
    fn peek_loot(&self, id: EntityId) -> Option<Item>;

    /// Claims loot object `id`, removing it from the world.
    ///
    /// Must be atomic against concurrent callers: of two racing claims exactly
    /// one receives the item and the other receives `None`.
    fn detach_loot(&self, id: EntityId) -> Option<Item>;

    /// Puts a claimed item back into the world at loot object `id`.
    ///
    /// Used when a claim turns out not to fit the decision it was made for.
    /// The item must stay in the world even if `id` was reused meanwhile.
    fn restore_loot(&self, id: EntityId, item: Item);
}

/// General-purpose storage owned by a single player.
///
/// The placement algorithm (free space, stacking) belongs to the implementor.
pub trait StorageContainer {
    /// Finds room for `quantity` units of `handle`, or `None` when they do not fit.
    fn find_placement(
        &self,
        handle: ItemHandle,
        quantity: u32,
        flags: PlacementFlags,
    ) -> Option<Placement>;

    /// Stores `item` at a placement previously returned by `find_placement`.
    fn commit_placement(&mut self, item: Item, placement: Placement);

    /// Removes `item` from the player's possession by dropping it into the world.
    fn drop_to_world(&mut self, item: Item);
}

/// Container-addressed position chosen by [`StorageContainer::find_placement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Container slot index.
    pub index: u32,
    /// True when the item tops off an existing stack instead of filling an empty slot.
    pub merges: bool,
}

impl Placement {
    pub fn empty_slot(index: u32) -> Self {
        Self {
            index,
            merges: false,
        }
    }

    pub fn merge_into(index: u32) -> Self {
        Self {
            index,
            merges: true,
        }
    }
}

bitflags! {
    /// Constraints passed to [`StorageContainer::find_placement`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlacementFlags: u8 {
        /// May top off an existing stack of the same kind.
        const MERGE_STACKS = 0b0000_0001;
        /// May occupy an empty container slot.
        const EMPTY_SLOTS = 0b0000_0010;
    }
}

impl Default for PlacementFlags {
    fn default() -> Self {
        Self::MERGE_STACKS | Self::EMPTY_SLOTS
    }
}
