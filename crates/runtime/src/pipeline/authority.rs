//! Auto-equip on the side that owns canonical world state.

use equip_core::{
    AutoEquip, AutoEquipConfig, Env, InputOracle, ItemOracle, LootWorld, Resolution,
    SessionOracle, StorageContainer,
};

use super::apply::apply_plan;
use super::outcome::{DeferReason, Outcome, SwallowReason};
use super::{InteractableKind, Interaction, PlayerInventory};

/// Handles loot pickups on the authoritative peer.
pub struct AuthorityPipeline<'a, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
    env: Env<'a, I, S, N>,
    config: &'a AutoEquipConfig,
}

impl<'a, I, S, N> AuthorityPipeline<'a, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
    pub fn new(env: Env<'a, I, S, N>, config: &'a AutoEquipConfig) -> Self {
        Self { env, config }
    }

    /// Runs one interaction through the pipeline.
    ///
    /// Loot is only detached once the resolver has agreed to equip it; a
    /// request that loses the detach race leaves the inventory untouched.
    pub fn on_interact<W, C>(
        &self,
        interaction: &Interaction,
        world: &W,
        mut inventory: PlayerInventory<'_, C>,
    ) -> Outcome
    where
        W: LootWorld + ?Sized,
        C: StorageContainer + ?Sized,
    {
        let outcome = self.evaluate(interaction, world, &mut inventory);
        outcome.trace("authority", interaction.actor);
        outcome
    }

    fn evaluate<W, C>(
        &self,
        interaction: &Interaction,
        world: &W,
        inventory: &mut PlayerInventory<'_, C>,
    ) -> Outcome
    where
        W: LootWorld + ?Sized,
        C: StorageContainer + ?Sized,
    {
        let session = self.env.session();
        if session.is_client_side() {
            return Outcome::Deferred(DeferReason::ClientSide);
        }

        let actor = interaction.actor;
        if !session.can_interact(actor) {
            return Outcome::Swallowed(SwallowReason::CannotInteract { actor });
        }
        let Some(target) = interaction.target else {
            return Outcome::Swallowed(SwallowReason::MissingTarget);
        };
        if target.kind != InteractableKind::Loot {
            return Outcome::Deferred(DeferReason::NotLoot { kind: target.kind });
        }
        let Some(loot) = world.peek_loot(target.id) else {
            return Outcome::Swallowed(SwallowReason::NotDroppedLoot { target: target.id });
        };

        let override_held = self.env.input().is_override_key_held();
        let policy = AutoEquip::new(self.env.items(), self.config);
        let resolution = policy.decide(
            &loot,
            inventory.equipment,
            override_held,
            &*inventory.storage,
        );
        let plan = match resolution {
            Resolution::Proceed(plan) => plan,
            Resolution::Decline(reason) => {
                return Outcome::Deferred(DeferReason::Declined(reason));
            }
        };

        let Some(item) = world.detach_loot(target.id) else {
            return Outcome::Swallowed(SwallowReason::RaceLost { target: target.id });
        };
        let plan = if item.same_kind(&loot) {
            plan
        } else {
            // A different kind may belong in another slot, or in none.
            tracing::debug!(
                loot = %target.id,
                peeked = %loot,
                detached = %item,
                "loot kind changed between peek and detach"
            );
            let redecided = policy.decide(
                &item,
                inventory.equipment,
                override_held,
                &*inventory.storage,
            );
            match redecided {
                Resolution::Proceed(plan) => plan,
                Resolution::Decline(reason) => {
                    world.restore_loot(target.id, item);
                    return Outcome::Deferred(DeferReason::Declined(reason));
                }
            }
        };

        Outcome::Equipped(apply_plan(&plan, item, inventory))
    }
}
