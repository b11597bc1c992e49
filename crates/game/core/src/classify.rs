//! Item category to equipment slot mapping.

use crate::env::{Category, ItemOracle};
use crate::state::{Item, SlotId};

/// Maps a category to its dedicated slot, or `None` for categories that are
/// stored in general inventory.
pub const fn slot_for_category(category: Category) -> Option<SlotId> {
    match category {
        Category::PrimaryGun => Some(SlotId::PrimaryWeapon),
        Category::SecondaryGun => Some(SlotId::SecondaryWeapon),
        Category::Melee => Some(SlotId::Melee),
        Category::Throwable => Some(SlotId::Throwable),
        Category::Healing => Some(SlotId::Healing),
        Category::Food => Some(SlotId::Consumable),
        Category::Ammo
        | Category::Armor
        | Category::Backpack
        | Category::Material
        | Category::Misc
        | Category::Unknown => None,
    }
}

/// Returns the equipment slot `item` belongs in.
pub fn classify<I>(item: &Item, items: &I) -> Option<SlotId>
where
    I: ItemOracle + ?Sized,
{
    slot_for_category(items.category_of(item.handle))
}
