//! Fixed-capacity storage container.

use std::sync::Arc;

use arrayvec::ArrayVec;
use equip_core::{
    AutoEquipConfig, Item, ItemHandle, ItemOracle, Placement, PlacementFlags, StorageContainer,
};

const MAX_SLOTS: usize = AutoEquipConfig::MAX_STORAGE_SLOTS;

/// Slot-based general inventory with per-kind stack limits.
///
/// Stack limits come from the item database. Items dropped to the world are
/// kept in a separate list until the owner of the world collects them.
pub struct MemoryStorage {
    slots: ArrayVec<Option<Item>, MAX_SLOTS>,
    items: Arc<dyn ItemOracle>,
    dropped: Vec<Item>,
}

impl MemoryStorage {
    /// Creates an empty container; `capacity` is clamped to
    /// [`AutoEquipConfig::MAX_STORAGE_SLOTS`].
    pub fn new(capacity: usize, items: Arc<dyn ItemOracle>) -> Self {
        let capacity = capacity.min(MAX_SLOTS);
        if capacity < MAX_SLOTS {
            tracing::trace!("storage created with {} of {} slots", capacity, MAX_SLOTS);
        }
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            items,
            dropped: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn free_slots(&self) -> usize {
        self.capacity() - self.used_slots()
    }

    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.slots.get(index)?.as_ref()
    }

    /// Total quantity of `handle` across all slots.
    pub fn count_item(&self, handle: ItemHandle) -> u32 {
        self.stored().filter(|item| item.handle == handle).map(|item| item.quantity).sum()
    }

    /// Stored items in slot order.
    pub fn stored(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().flatten()
    }

    /// Items dropped to the world since the last [`MemoryStorage::take_dropped`].
    pub fn dropped(&self) -> &[Item] {
        &self.dropped
    }

    /// Hands dropped items over to whoever spawns them in the world.
    pub fn take_dropped(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.dropped)
    }

    /// General-inventory insertion used by the default acquisition path.
    ///
    /// Returns the item back when it does not fit as a whole.
    pub fn add_item(&mut self, item: Item) -> Result<Placement, Item> {
        match self.find_placement(item.handle, item.quantity, PlacementFlags::default()) {
            Some(placement) => {
                self.commit_placement(item, placement);
                Ok(placement)
            }
            None => Err(item),
        }
    }

    fn max_stack(&self, handle: ItemHandle) -> u32 {
        self.items.max_stack(handle)
    }
}

impl StorageContainer for MemoryStorage {
    fn find_placement(
        &self,
        handle: ItemHandle,
        quantity: u32,
        flags: PlacementFlags,
    ) -> Option<Placement> {
        let max_stack = self.max_stack(handle);
        // Non-stackable kinds carry a charge, not a count: one slot each, never merged.
        let stackable = max_stack > 1;

        if stackable && flags.contains(PlacementFlags::MERGE_STACKS) {
            let merge = self.slots.iter().position(|slot| {
                slot.is_some_and(|stored| {
                    stored.handle == handle && stored.quantity.saturating_add(quantity) <= max_stack
                })
            });
            if let Some(index) = merge {
                return Some(Placement::merge_into(index as u32));
            }
        }

        if flags.contains(PlacementFlags::EMPTY_SLOTS) && (!stackable || quantity <= max_stack) {
            if let Some(index) = self.slots.iter().position(Option::is_none) {
                return Some(Placement::empty_slot(index as u32));
            }
        }

        None
    }

    fn commit_placement(&mut self, item: Item, placement: Placement) {
        let index = placement.index as usize;
        let stackable = self.max_stack(item.handle) > 1;
        match self.slots.get_mut(index) {
            Some(Some(stored)) if placement.merges && stackable && stored.same_kind(&item) => {
                stored.quantity += item.quantity;
            }
            Some(slot @ None) if !placement.merges => {
                *slot = Some(item);
            }
            _ => {
                tracing::warn!(
                    "stale placement {:?} for {}; dropping it to the world instead",
                    placement,
                    item
                );
                self.drop_to_world(item);
            }
        }
    }

    fn drop_to_world(&mut self, item: Item) {
        tracing::debug!("dropping {} to the world", item);
        self.dropped.push(item);
    }
}
