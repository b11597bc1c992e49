//! Replays a script against an authoritative state and a mirrored view.
//!
//! Every authoritative equip is forwarded to the actor's mirrored view as a
//! grant notification, the way a host's networking layer would. Deferred
//! loot pickups run a minimal stand-in for the host's default handling.
use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use equip_core::{
    AutoEquipConfig, EntityId, EquipmentSlots, Item, LootWorld, PlacementFlags, StorageContainer,
};
use equip_runtime::{
    AuthorityPipeline, GrantNotification, InputOracleImpl, InteractableKind, ItemOracleImpl,
    MemoryLootWorld, MemoryStorage, MirrorPipeline, OracleManager, Outcome, PlayerInventory,
    SessionOracleImpl,
};

use crate::report::{
    DefaultPickup, LootReport, PlayerReport, SessionReport, StepReport, equipment_entries,
};
use crate::script::{PlayerSetup, Script, Step};

/// One player's equipment and storage as seen by one side.
struct View {
    equipment: EquipmentSlots,
    storage: MemoryStorage,
}

impl View {
    fn from_setup(setup: &PlayerSetup, items: &Arc<ItemOracleImpl>) -> Result<Self> {
        let mut equipment = EquipmentSlots::empty();
        for &(slot, item) in &setup.equipment {
            equipment
                .equip(slot, item, items.as_ref())
                .with_context(|| format!("Invalid starting equipment for {}", setup.id))?;
        }

        let mut storage = MemoryStorage::new(setup.storage_capacity, items.clone());
        for &item in &setup.storage {
            if let Err(item) = storage.add_item(item) {
                anyhow::bail!("Storage of {} cannot hold {}", setup.id, item);
            }
        }

        Ok(Self { equipment, storage })
    }

    fn inventory(&mut self) -> PlayerInventory<'_, MemoryStorage> {
        PlayerInventory::new(&mut self.equipment, &mut self.storage)
    }

    fn stored(&self) -> Vec<Item> {
        self.storage.stored().copied().collect()
    }

    fn matches(&self, other: &View) -> bool {
        self.equipment == other.equipment && self.stored() == other.stored()
    }
}

struct Player {
    authority: View,
    mirror: View,
}

pub struct Simulator {
    config: AutoEquipConfig,
    authority: OracleManager,
    mirror: OracleManager,
    world: MemoryLootWorld,
    players: BTreeMap<EntityId, Player>,
}

impl Simulator {
    /// Builds both views from the script's initial state.
    ///
    /// # Errors
    ///
    /// Fails when initial equipment does not belong in its slot or initial
    /// storage does not fit.
    pub fn new(
        items: Arc<ItemOracleImpl>,
        config: AutoEquipConfig,
        script: &Script,
    ) -> Result<Self> {
        let session = script
            .players
            .iter()
            .filter(|player| player.blocked)
            .fold(SessionOracleImpl::authority(), |session, player| {
                session.with_blocked(player.id)
            });
        let authority = OracleManager::new(
            items.clone(),
            Arc::new(session),
            Arc::new(InputOracleImpl::new(false)),
        );
        let mirror = OracleManager::new(
            items.clone(),
            Arc::new(SessionOracleImpl::client()),
            Arc::new(InputOracleImpl::new(false)),
        );

        let mut players = BTreeMap::new();
        for setup in &script.players {
            let player = Player {
                authority: View::from_setup(setup, &items)?,
                mirror: View::from_setup(setup, &items)?,
            };
            players.insert(setup.id, player);
        }

        let world = MemoryLootWorld::new();
        for entry in &script.loot {
            world.insert(entry.id, entry.item);
        }

        tracing::info!(
            players = players.len(),
            loot = world.len(),
            items = items.len(),
            "simulator ready"
        );

        Ok(Self {
            config,
            authority,
            mirror,
            world,
            players,
        })
    }

    /// Replays every step and reports the final state of both views.
    pub fn run(&mut self, steps: &[Step]) -> Result<SessionReport> {
        let steps = steps
            .iter()
            .enumerate()
            .map(|(index, step)| self.step(index, step))
            .collect::<Result<Vec<_>>>()?;

        let players: Vec<PlayerReport> = self
            .players
            .iter()
            .map(|(&id, player)| PlayerReport {
                id,
                equipment: equipment_entries(&player.authority.equipment),
                storage: player.authority.stored(),
                in_sync: player.authority.matches(&player.mirror),
            })
            .collect();
        let diverged = players.iter().any(|player| !player.in_sync);

        let world = self
            .world
            .snapshot()
            .into_iter()
            .map(|(id, item)| LootReport::new(id, item, self.authority.items()))
            .collect();

        Ok(SessionReport {
            steps,
            players,
            world,
            diverged,
        })
    }

    fn step(&mut self, index: usize, step: &Step) -> Result<StepReport> {
        let interaction = step.interaction();
        let actor = interaction.actor;
        let override_held = step.override_held();
        self.authority.input().set_override_held(override_held);
        self.mirror.input().set_override_held(override_held);

        let player = self
            .players
            .get_mut(&actor)
            .with_context(|| format!("Step {} names unknown player {}", index, actor))?;

        let authority = AuthorityPipeline::new(self.authority.as_env(), &self.config);
        let outcome =
            authority.on_interact(&interaction, &self.world, player.authority.inventory());

        let mut default_pickup = None;
        let granted = match outcome {
            Outcome::Equipped(report) => Some(report.item),
            Outcome::Deferred(_) => {
                let target = interaction
                    .target
                    .filter(|target| target.kind == InteractableKind::Loot);
                default_pickup = target
                    .and_then(|target| pick_up_default(&self.world, target.id, &mut player.authority));
                match default_pickup {
                    Some(DefaultPickup::Stored(item)) => Some(item),
                    _ => None,
                }
            }
            Outcome::Swallowed(_) => None,
        };

        let mirror = granted.map(|item| {
            let grant = GrantNotification::new(actor, item.handle, item.quantity);
            let pipeline = MirrorPipeline::new(self.mirror.as_env(), &self.config);
            let mirrored = pipeline.on_grant(&grant, player.mirror.inventory());
            if !mirrored.suppresses_default() {
                if let Err(item) = player.mirror.storage.add_item(item) {
                    tracing::warn!(%actor, %item, "mirrored storage cannot hold granted item");
                }
            }
            mirrored
        });

        let spawned = player
            .authority
            .storage
            .take_dropped()
            .into_iter()
            .map(|item| LootReport::new(self.world.spawn(item), item, self.authority.items()))
            .collect();
        // The authority's world already holds these.
        player.mirror.storage.take_dropped();

        let in_sync = player.authority.matches(&player.mirror);
        if !in_sync {
            tracing::error!(step = index, %actor, "mirrored view diverged from authority");
        }

        Ok(StepReport {
            index,
            actor,
            target: interaction.target,
            override_held,
            authority: outcome,
            suppresses_default: outcome.suppresses_default(),
            default_pickup,
            mirror,
            spawned,
            in_sync,
        })
    }
}

/// Host default handling: move the loot into general storage if it fits.
fn pick_up_default(
    world: &MemoryLootWorld,
    id: EntityId,
    view: &mut View,
) -> Option<DefaultPickup> {
    let item = world.peek_loot(id)?;
    let flags = PlacementFlags::default();
    let Some(placement) = view.storage.find_placement(item.handle, item.quantity, flags) else {
        tracing::debug!(loot = %id, %item, "no room for default pickup");
        return Some(DefaultPickup::NoRoom(item));
    };
    let item = world.detach_loot(id)?;
    view.storage.commit_placement(item, placement);
    Some(DefaultPickup::Stored(item))
}
