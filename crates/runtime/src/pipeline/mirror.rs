//! Auto-equip replayed on a peer's local view of granted items.

use equip_core::{
    AutoEquip, AutoEquipConfig, Env, InputOracle, Item, ItemOracle, Resolution, SessionOracle,
    StorageContainer,
};

use super::apply::apply_plan;
use super::outcome::{DeferReason, Outcome};
use super::{GrantNotification, PlayerInventory};

/// Mirrors the authority's placement decision for a granted item.
///
/// The authority already removed the item from the world, so there is no
/// detach step; everything else goes through the same [`AutoEquip::decide`].
pub struct MirrorPipeline<'a, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
    env: Env<'a, I, S, N>,
    config: &'a AutoEquipConfig,
}

impl<'a, I, S, N> MirrorPipeline<'a, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
    pub fn new(env: Env<'a, I, S, N>, config: &'a AutoEquipConfig) -> Self {
        Self { env, config }
    }

    pub fn on_grant<C>(
        &self,
        grant: &GrantNotification,
        mut inventory: PlayerInventory<'_, C>,
    ) -> Outcome
    where
        C: StorageContainer + ?Sized,
    {
        let outcome = self.evaluate(grant, &mut inventory);
        outcome.trace("mirror", grant.receiver);
        outcome
    }

    fn evaluate<C>(
        &self,
        grant: &GrantNotification,
        inventory: &mut PlayerInventory<'_, C>,
    ) -> Outcome
    where
        C: StorageContainer + ?Sized,
    {
        let item = Item::new(grant.handle, grant.quantity);
        let override_held = self.env.input().is_override_key_held();
        let policy = AutoEquip::new(self.env.items(), self.config);

        match policy.decide(&item, inventory.equipment, override_held, &*inventory.storage) {
            Resolution::Proceed(plan) => Outcome::Equipped(apply_plan(&plan, item, inventory)),
            Resolution::Decline(reason) => Outcome::Deferred(DeferReason::Declined(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::oracle::{InputOracleImpl, ItemOracleImpl, SessionOracleImpl};
    use equip_core::{
        Category, DeclineReason, Disposal, EntityId, EquipmentSlots, ItemDefinition, ItemHandle,
        SlotId,
    };
    use std::sync::Arc;

    const RIFLE: ItemHandle = ItemHandle(10);
    const SHOTGUN: ItemHandle = ItemHandle(11);
    const RECEIVER: EntityId = EntityId(3);

    fn items() -> Arc<ItemOracleImpl> {
        Arc::new(ItemOracleImpl::from_definitions([
            ItemDefinition::new(RIFLE, Category::PrimaryGun, 1),
            ItemDefinition::new(SHOTGUN, Category::PrimaryGun, 1),
        ]))
    }

    #[test]
    fn override_on_mirror_stores_previous_weapon() {
        let items = items();
        let session = SessionOracleImpl::client();
        let input = InputOracleImpl::new(true);
        let config = AutoEquipConfig::default();
        let mut equipment = EquipmentSlots::empty();
        equipment.set(SlotId::PrimaryWeapon, Item::single(RIFLE));
        let mut storage = MemoryStorage::new(2, items.clone());

        let pipeline = MirrorPipeline::new(Env::new(items.as_ref(), &session, &input), &config);
        let outcome = pipeline.on_grant(
            &GrantNotification::new(RECEIVER, SHOTGUN, 1),
            PlayerInventory::new(&mut equipment, &mut storage),
        );

        let report = outcome.report().copied().expect("equipped");
        assert!(matches!(
            report.displaced.map(|d| d.destination),
            Some(Disposal::Store(_))
        ));
        assert_eq!(equipment.get(SlotId::PrimaryWeapon), Some(&Item::single(SHOTGUN)));
        assert_eq!(storage.count_item(RIFLE), 1);
    }

    #[test]
    fn disabled_override_defers_on_mirror() {
        let items = items();
        let session = SessionOracleImpl::client();
        let input = InputOracleImpl::new(true);
        let config = AutoEquipConfig::default().with_allow_override(false);
        let mut equipment = EquipmentSlots::empty();
        equipment.set(SlotId::PrimaryWeapon, Item::single(RIFLE));
        let mut storage = MemoryStorage::new(2, items.clone());

        let pipeline = MirrorPipeline::new(Env::new(items.as_ref(), &session, &input), &config);
        let outcome = pipeline.on_grant(
            &GrantNotification::new(RECEIVER, SHOTGUN, 1),
            PlayerInventory::new(&mut equipment, &mut storage),
        );

        assert_eq!(
            outcome,
            Outcome::Deferred(DeferReason::Declined(DeclineReason::SlotOccupied {
                slot: SlotId::PrimaryWeapon
            }))
        );
        assert_eq!(equipment.get(SlotId::PrimaryWeapon), Some(&Item::single(RIFLE)));
    }
}
