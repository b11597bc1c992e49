//! In-memory loot world with atomic claims.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use equip_core::{EntityId, Item, LootWorld};

/// Loot objects keyed by entity id, guarded by a single lock.
///
/// Every claim removes its entry under the lock, so of any number of racing
/// `detach_loot` calls for one id exactly one observes the item.
pub struct MemoryLootWorld {
    loot: Mutex<HashMap<EntityId, Item>>,
    next_id: AtomicU32,
}

impl MemoryLootWorld {
    /// First id handed out by [`MemoryLootWorld::spawn`].
    pub const FIRST_SPAWN_ID: u32 = 10_000;

    pub fn new() -> Self {
        Self {
            loot: Mutex::new(HashMap::new()),
            next_id: AtomicU32::new(Self::FIRST_SPAWN_ID),
        }
    }

    /// Places `item` into the world under a fresh id.
    pub fn spawn(&self, item: Item) -> EntityId {
        let id = EntityId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.insert(id, item);
        id
    }

    /// Places `item` into the world under `id`, replacing any loot already there.
    ///
    /// Later [`MemoryLootWorld::spawn`] calls never reuse `id`.
    pub fn insert(&self, id: EntityId, item: Item) {
        self.next_id.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
        if let Some(previous) = self.lock().insert(id, item) {
            tracing::warn!("loot {} replaced {} in world", id, previous);
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.lock().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Loot entries sorted by id.
    pub fn snapshot(&self) -> Vec<(EntityId, Item)> {
        let mut entries: Vec<_> = self.lock().iter().map(|(id, item)| (*id, *item)).collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries
    }

    // Critical sections are single map operations, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<EntityId, Item>> {
        self.loot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryLootWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl LootWorld for MemoryLootWorld {
    fn peek_loot(&self, id: EntityId) -> Option<Item> {
        self.lock().get(&id).copied()
    }

    fn detach_loot(&self, id: EntityId) -> Option<Item> {
        self.lock().remove(&id)
    }

    fn restore_loot(&self, id: EntityId, item: Item) {
        let mut loot = self.lock();
        if loot.contains_key(&id) {
            let fresh = EntityId(self.next_id.fetch_add(1, Ordering::Relaxed));
            tracing::warn!("loot {} reused; restoring {} as {}", id, item, fresh);
            loot.insert(fresh, item);
        } else {
            loot.insert(id, item);
        }
    }
}
