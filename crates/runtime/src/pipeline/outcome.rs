//! Results reported by the pipelines.

use equip_core::{
    DeclineReason, Disposal, EntityId, ErrorSeverity, GameError, Item, SlotId,
};
use serde::{Deserialize, Serialize};

use super::InteractableKind;

/// What a pipeline invocation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The item went into its slot; default handling must not run.
    Equipped(EquipReport),
    /// Auto-equip did not apply; default handling runs unchanged.
    Deferred(DeferReason),
    /// The request was dropped without any effect and without default handling.
    Swallowed(SwallowReason),
}

impl Outcome {
    /// The boolean handed back to the host dispatcher.
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, Self::Deferred(_))
    }

    pub fn is_equipped(&self) -> bool {
        matches!(self, Self::Equipped(_))
    }

    pub fn report(&self) -> Option<&EquipReport> {
        match self {
            Self::Equipped(report) => Some(report),
            _ => None,
        }
    }

    /// Emits one log event for this outcome, levelled by severity.
    pub(crate) fn trace(&self, pipeline: &'static str, actor: EntityId) {
        match self {
            Self::Equipped(report) => match report.displaced {
                Some(displaced) => tracing::info!(
                    pipeline,
                    %actor,
                    slot = %report.slot,
                    item = %report.item,
                    displaced = %displaced.item,
                    destination = ?displaced.destination,
                    "auto-equipped over previous occupant"
                ),
                None => tracing::info!(
                    pipeline,
                    %actor,
                    slot = %report.slot,
                    item = %report.item,
                    "auto-equipped into empty slot"
                ),
            },
            Self::Deferred(reason) => trace_reason(pipeline, actor, reason),
            Self::Swallowed(reason) => trace_reason(pipeline, actor, reason),
        }
    }
}

fn trace_reason<E>(pipeline: &'static str, actor: EntityId, reason: &E)
where
    E: GameError,
{
    let code = reason.error_code();
    match reason.severity() {
        ErrorSeverity::NotApplicable => {
            tracing::debug!(pipeline, %actor, code, "auto-equip skipped: {}", reason)
        }
        ErrorSeverity::Recoverable => {
            tracing::info!(pipeline, %actor, code, "auto-equip abandoned: {}", reason)
        }
        ErrorSeverity::Validation => {
            tracing::warn!(pipeline, %actor, code, "request dropped: {}", reason)
        }
        ErrorSeverity::Internal => {
            tracing::error!(pipeline, %actor, code, "request dropped: {}", reason)
        }
    }
}

/// Details of a completed auto-equip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipReport {
    pub slot: SlotId,
    pub item: Item,
    pub displaced: Option<Displaced>,
}

/// Former occupant of the slot and where it went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Displaced {
    pub item: Item,
    pub destination: Disposal,
}

/// Why default handling runs instead of auto-equip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DeferReason {
    #[error("interaction arrived on a client-side peer")]
    ClientSide,

    #[error("target is a {kind}, not loot")]
    NotLoot { kind: InteractableKind },

    #[error(transparent)]
    Declined(DeclineReason),
}

impl GameError for DeferReason {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::NotApplicable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ClientSide => "DEFER_CLIENT_SIDE",
            Self::NotLoot { .. } => "DEFER_NOT_LOOT",
            Self::Declined(reason) => reason.error_code(),
        }
    }
}

/// Why a request was dropped with no effect at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SwallowReason {
    #[error("actor {actor} cannot interact")]
    CannotInteract { actor: EntityId },

    #[error("interaction has no target")]
    MissingTarget,

    #[error("target {target} is marked as loot but holds no loot object")]
    NotDroppedLoot { target: EntityId },

    #[error("loot {target} was claimed by another actor")]
    RaceLost { target: EntityId },
}

impl GameError for SwallowReason {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CannotInteract { .. } | Self::MissingTarget => ErrorSeverity::Validation,
            Self::RaceLost { .. } => ErrorSeverity::Recoverable,
            Self::NotDroppedLoot { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CannotInteract { .. } => "SWALLOW_CANNOT_INTERACT",
            Self::MissingTarget => "SWALLOW_MISSING_TARGET",
            Self::NotDroppedLoot { .. } => "SWALLOW_NOT_DROPPED_LOOT",
            Self::RaceLost { .. } => "SWALLOW_RACE_LOST",
        }
    }
}
