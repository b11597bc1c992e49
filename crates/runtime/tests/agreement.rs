//! The authoritative and the mirrored view must reach the same state for the
//! same event.

use std::sync::Arc;

use equip_core::{
    AutoEquipConfig, Category, EntityId, EquipmentSlots, Item, ItemDefinition, ItemHandle,
    PlacementFlags, SlotId,
};
use equip_runtime::{
    AuthorityPipeline, GrantNotification, InputOracleImpl, InteractTarget, Interaction,
    ItemOracleImpl, MemoryLootWorld, MemoryStorage, MirrorPipeline, OracleManager, Outcome,
    PlayerInventory, SessionOracleImpl,
};

const PLAYER: EntityId = EntityId(1);

fn catalog() -> Arc<ItemOracleImpl> {
    Arc::new(ItemOracleImpl::from_definitions([
        ItemDefinition::new(ItemHandle(1), Category::PrimaryGun, 1).with_name("Rifle"),
        ItemDefinition::new(ItemHandle(2), Category::PrimaryGun, 1).with_name("Shotgun"),
        ItemDefinition::new(ItemHandle(3), Category::Healing, 5).with_name("Bandage"),
        ItemDefinition::new(ItemHandle(4), Category::Healing, 1).with_name("Medkit"),
        ItemDefinition::new(ItemHandle(5), Category::Throwable, 3).with_name("Grenade"),
        ItemDefinition::new(ItemHandle(6), Category::Ammo, 60).with_name("Rounds"),
        ItemDefinition::new(ItemHandle(99), Category::Unknown, 1),
    ]))
}

/// One side of a session: its oracles plus one player's state.
struct Side {
    oracles: OracleManager,
    equipment: EquipmentSlots,
    storage: MemoryStorage,
}

impl Side {
    fn new(items: &Arc<ItemOracleImpl>, session: SessionOracleImpl, capacity: usize) -> Self {
        Self {
            oracles: OracleManager::new(
                items.clone(),
                Arc::new(session),
                Arc::new(InputOracleImpl::new(false)),
            ),
            equipment: EquipmentSlots::empty(),
            storage: MemoryStorage::new(capacity, items.clone()),
        }
    }

    fn seed(&mut self, occupant: Option<(SlotId, Item)>, filler: u32) {
        if let Some((slot, item)) = occupant {
            self.equipment.set(slot, item);
        }
        for _ in 0..filler {
            self.storage
                .add_item(Item::new(ItemHandle(6), 60))
                .expect("filler fits");
        }
    }

    fn stored(&self) -> Vec<Item> {
        self.storage.stored().copied().collect()
    }
}

struct Case {
    occupant: Option<(SlotId, Item)>,
    incoming: Item,
    override_held: bool,
    capacity: usize,
    filler: u32,
}

fn cases() -> Vec<Case> {
    let rifle = Item::single(ItemHandle(1));
    let bandages = Item::new(ItemHandle(3), 2);
    let mut cases = Vec::new();
    for incoming in [
        Item::single(ItemHandle(2)),
        Item::single(ItemHandle(4)),
        Item::new(ItemHandle(3), 1),
        Item::new(ItemHandle(5), 2),
        Item::new(ItemHandle(6), 30),
        Item::single(ItemHandle(99)),
        Item::single(ItemHandle(1234)),
    ] {
        for occupant in [
            None,
            Some((SlotId::PrimaryWeapon, rifle)),
            Some((SlotId::Healing, bandages)),
        ] {
            for override_held in [false, true] {
                for (capacity, filler) in [(4, 0), (2, 2), (0, 0)] {
                    cases.push(Case {
                        occupant,
                        incoming,
                        override_held,
                        capacity,
                        filler,
                    });
                }
            }
        }
    }
    cases
}

fn run_case(case: &Case, config: &AutoEquipConfig) {
    let items = catalog();
    let mut authority = Side::new(&items, SessionOracleImpl::authority(), case.capacity);
    let mut mirror = Side::new(&items, SessionOracleImpl::client(), case.capacity);
    authority.seed(case.occupant, case.filler);
    mirror.seed(case.occupant, case.filler);
    authority.oracles.input().set_override_held(case.override_held);
    mirror.oracles.input().set_override_held(case.override_held);

    let world = MemoryLootWorld::new();
    let loot = world.spawn(case.incoming);

    let authoritative = AuthorityPipeline::new(authority.oracles.as_env(), config).on_interact(
        &Interaction::new(PLAYER, InteractTarget::loot(loot)),
        &world,
        PlayerInventory::new(&mut authority.equipment, &mut authority.storage),
    );
    let mirrored = MirrorPipeline::new(mirror.oracles.as_env(), config).on_grant(
        &GrantNotification::new(PLAYER, case.incoming.handle, case.incoming.quantity),
        PlayerInventory::new(&mut mirror.equipment, &mut mirror.storage),
    );

    assert_eq!(authoritative, mirrored, "outcome differs for {}", case.incoming);
    assert_eq!(authority.equipment, mirror.equipment);
    assert_eq!(authority.stored(), mirror.stored());
    assert_eq!(authority.storage.dropped(), mirror.storage.dropped());
    assert_eq!(world.contains(loot), !authoritative.is_equipped());
}

#[test]
fn pipelines_agree_with_default_config() {
    let config = AutoEquipConfig::default();
    for case in cases() {
        run_case(&case, &config);
    }
}

#[test]
fn pipelines_agree_with_restricted_config() {
    let config = AutoEquipConfig::default()
        .with_disabled_slot(SlotId::Throwable)
        .with_placement(PlacementFlags::EMPTY_SLOTS);
    for case in cases() {
        run_case(&case, &config);
    }
}

#[test]
fn pipelines_agree_when_override_is_not_allowed() {
    let config = AutoEquipConfig::default().with_allow_override(false);
    for case in cases() {
        run_case(&case, &config);
    }
}

#[test]
fn replaying_an_equip_on_the_mirror_reproduces_it() {
    let items = catalog();
    let config = AutoEquipConfig::default();
    let mut mirror = Side::new(&items, SessionOracleImpl::client(), 4);

    let first = MirrorPipeline::new(mirror.oracles.as_env(), &config).on_grant(
        &GrantNotification::new(PLAYER, ItemHandle(1), 1),
        PlayerInventory::new(&mut mirror.equipment, &mut mirror.storage),
    );
    let second = MirrorPipeline::new(mirror.oracles.as_env(), &config).on_grant(
        &GrantNotification::new(PLAYER, ItemHandle(2), 1),
        PlayerInventory::new(&mut mirror.equipment, &mut mirror.storage),
    );

    assert!(first.is_equipped());
    assert!(matches!(second, Outcome::Deferred(_)));
    assert_eq!(
        mirror.equipment.get(SlotId::PrimaryWeapon),
        Some(&Item::single(ItemHandle(1)))
    );
}
