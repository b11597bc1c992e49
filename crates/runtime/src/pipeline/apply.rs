//! Executes an [`EquipPlan`] against a player's inventory.

use equip_core::{Disposal, EquipPlan, Item, StorageContainer};

use super::PlayerInventory;
use super::outcome::{Displaced, EquipReport};

/// Vacates the planned slot, then places `item` into it.
///
/// The occupant is disposed of before the slot is overwritten, so it is never
/// lost. A plan without a disposal on an occupied slot means the caller's view
/// changed since resolution; the occupant is then dropped to the world.
pub(crate) fn apply_plan<C>(
    plan: &EquipPlan,
    item: Item,
    inventory: &mut PlayerInventory<'_, C>,
) -> EquipReport
where
    C: StorageContainer + ?Sized,
{
    let displaced = inventory.equipment.take(plan.slot).map(|occupant| {
        let destination = plan.displaced.unwrap_or_else(|| {
            tracing::warn!(
                slot = %plan.slot,
                occupant = %occupant,
                "slot occupied without a disposal instruction"
            );
            Disposal::DropToWorld
        });
        dispose(occupant, destination, inventory.storage);
        Displaced {
            item: occupant,
            destination,
        }
    });

    let previous = inventory.equipment.set(plan.slot, item);
    debug_assert!(previous.is_none(), "slot {} refilled during apply", plan.slot);

    EquipReport {
        slot: plan.slot,
        item,
        displaced,
    }
}

fn dispose<C>(occupant: Item, destination: Disposal, storage: &mut C)
where
    C: StorageContainer + ?Sized,
{
    match destination {
        Disposal::Store(placement) => storage.commit_placement(occupant, placement),
        Disposal::DropToWorld => storage.drop_to_world(occupant),
    }
}
