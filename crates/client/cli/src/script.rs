//! Session scripts replayed by the simulator.
//!
//! A script declares the players, the loot lying in the world, and the
//! interactions to replay, in RON:
//!
//! ```ron
//! (
//!     players: [
//!         (id: (1), storage_capacity: 4, equipment: [(Healing, (handle: (2), quantity: 3))]),
//!     ],
//!     loot: [(id: (100), item: (handle: (3), quantity: 1))],
//!     steps: [Pickup(actor: (1), loot: (100), override_held: true)],
//! )
//! ```
use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use equip_core::{EntityId, Item, SlotId};
use equip_runtime::{InteractTarget, Interaction};
use serde::{Deserialize, Serialize};

const DEFAULT_STORAGE_CAPACITY: usize = 8;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub players: Vec<PlayerSetup>,
    #[serde(default)]
    pub loot: Vec<LootSetup>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Initial state of one player, applied to both the authoritative and the
/// mirrored view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub id: EntityId,
    #[serde(default = "default_storage_capacity")]
    pub storage_capacity: usize,
    #[serde(default)]
    pub equipment: Vec<(SlotId, Item)>,
    #[serde(default)]
    pub storage: Vec<Item>,
    /// Player cannot interact (dead, downed, stunned).
    #[serde(default)]
    pub blocked: bool,
}

fn default_storage_capacity() -> usize {
    DEFAULT_STORAGE_CAPACITY
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LootSetup {
    pub id: EntityId,
    pub item: Item,
}

/// One scripted event.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Step {
    /// Raw interaction request, possibly with a non-loot or missing target.
    Interact {
        actor: EntityId,
        target: Option<InteractTarget>,
        #[serde(default)]
        override_held: bool,
    },
    /// Interaction with a loot object.
    Pickup {
        actor: EntityId,
        loot: EntityId,
        #[serde(default)]
        override_held: bool,
    },
}

impl Step {
    pub fn actor(&self) -> EntityId {
        match self {
            Self::Interact { actor, .. } | Self::Pickup { actor, .. } => *actor,
        }
    }

    pub fn override_held(&self) -> bool {
        match self {
            Self::Interact { override_held, .. } | Self::Pickup { override_held, .. } => {
                *override_held
            }
        }
    }

    pub fn interaction(&self) -> Interaction {
        match *self {
            Self::Interact { actor, target, .. } => Interaction { actor, target },
            Self::Pickup { actor, loot, .. } => Interaction::new(actor, InteractTarget::loot(loot)),
        }
    }
}

/// Loader for session scripts.
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> Result<Script> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Parses a script and checks that ids are unique and every step names a
    /// declared player.
    pub fn parse(content: &str) -> Result<Script> {
        let script: Script = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))?;

        let mut players = HashSet::new();
        for player in &script.players {
            if !players.insert(player.id) {
                anyhow::bail!("Duplicate player {}", player.id);
            }
        }

        let mut loot = HashSet::new();
        for entry in &script.loot {
            if !loot.insert(entry.id) {
                anyhow::bail!("Duplicate loot object {}", entry.id);
            }
            if players.contains(&entry.id) {
                anyhow::bail!("Loot object {} reuses a player id", entry.id);
            }
        }

        for (index, step) in script.steps.iter().enumerate() {
            if !players.contains(&step.actor()) {
                anyhow::bail!("Step {} names unknown player {}", index, step.actor());
            }
        }

        Ok(script)
    }
}
