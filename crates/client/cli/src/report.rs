//! JSON report of a replayed session.
use equip_core::{EntityId, EquipmentSlots, Item, SlotId};
use equip_runtime::{InteractTarget, ItemOracleImpl, Outcome};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub steps: Vec<StepReport>,
    pub players: Vec<PlayerReport>,
    /// Loot left in the world after the last step.
    pub world: Vec<LootReport>,
    /// True when any player's mirrored view ended up differing from the
    /// authoritative one.
    pub diverged: bool,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub actor: EntityId,
    pub target: Option<InteractTarget>,
    pub override_held: bool,
    pub authority: Outcome,
    pub suppresses_default: bool,
    /// Result of the host's default pickup, when it ran.
    pub default_pickup: Option<DefaultPickup>,
    /// Outcome of the grant forwarded to the actor's mirrored view.
    pub mirror: Option<Outcome>,
    /// Items that left an inventory and became loot during this step.
    pub spawned: Vec<LootReport>,
    pub in_sync: bool,
}

/// What the host's own pickup handling did with a deferred loot item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DefaultPickup {
    Stored(Item),
    NoRoom(Item),
}

#[derive(Debug, Serialize)]
pub struct PlayerReport {
    pub id: EntityId,
    pub equipment: Vec<(SlotId, Item)>,
    pub storage: Vec<Item>,
    pub in_sync: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LootReport {
    pub id: EntityId,
    pub item: Item,
    pub name: String,
}

impl LootReport {
    pub fn new(id: EntityId, item: Item, items: &ItemOracleImpl) -> Self {
        Self {
            id,
            item,
            name: items.display_name(item.handle),
        }
    }
}

pub(crate) fn equipment_entries(equipment: &EquipmentSlots) -> Vec<(SlotId, Item)> {
    equipment.iter().map(|(slot, item)| (slot, *item)).collect()
}
