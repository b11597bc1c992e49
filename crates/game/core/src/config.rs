use crate::env::PlacementFlags;
use crate::state::SlotId;

/// Tunable auto-equip behaviour.
///
/// Both the authority and every mirror must run with the same configuration,
/// otherwise their decisions for one event can differ.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoEquipConfig {
    /// Master switch. When off every acquisition takes the default path.
    pub enabled: bool,
    /// Whether the override modifier is honoured at all.
    pub allow_override: bool,
    /// Slots that never receive items automatically.
    pub disabled_slots: Vec<SlotId>,
    /// Constraints used when looking for room for a displaced occupant.
    pub placement: PlacementFlags,
}

impl AutoEquipConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound on the slot count of the in-memory storage container.
    pub const MAX_STORAGE_SLOTS: usize = 64;

    pub fn new() -> Self {
        Self {
            enabled: true,
            allow_override: true,
            disabled_slots: Vec::new(),
            placement: PlacementFlags::default(),
        }
    }

    /// Configuration with auto-equip switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_allow_override(mut self, allow_override: bool) -> Self {
        self.allow_override = allow_override;
        self
    }

    #[must_use]
    pub fn with_disabled_slot(mut self, slot: SlotId) -> Self {
        if !self.disabled_slots.contains(&slot) {
            self.disabled_slots.push(slot);
        }
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: PlacementFlags) -> Self {
        self.placement = placement;
        self
    }

    pub fn slot_enabled(&self, slot: SlotId) -> bool {
        !self.disabled_slots.contains(&slot)
    }
}

impl Default for AutoEquipConfig {
    fn default() -> Self {
        Self::new()
    }
}
