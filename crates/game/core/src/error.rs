//! Common error infrastructure for equip-core.
//!
//! Most auto-equip "failures" are ordinary outcomes: a pickup that does not
//! qualify simply falls back to the host's default handling. The types here
//! let callers classify those outcomes uniformly, pick a log level, and tag
//! them with a stable code, without any of them surfacing as a fault.

/// Severity level of a decline or error, used for logging and handling policy.
///
/// - **NotApplicable**: auto-equip does not apply; the default path runs
/// - **Recoverable**: an expected concurrent outcome, such as losing a race
/// - **Validation**: the request itself was invalid or stale
/// - **Internal**: state that should be impossible; indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Auto-equip is not applicable; default handling takes over.
    ///
    /// Examples: item has no slot, slot occupied without override
    NotApplicable,

    /// Expected outcome of concurrent access.
    ///
    /// Examples: another actor claimed the loot first
    Recoverable,

    /// Invalid input; the request is dropped without effect.
    ///
    /// Examples: no interaction target, actor cannot interact
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: a loot-typed target without a loot object behind it
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotApplicable => "not_applicable",
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this outcome is part of normal operation.
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::NotApplicable | Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for declines and errors produced by the auto-equip stack.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by how the caller should react, not by impact
/// - Keep `error_code` stable; it is used as a structured log field
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_severities() {
        assert!(ErrorSeverity::NotApplicable.is_expected());
        assert!(ErrorSeverity::Recoverable.is_expected());
        assert!(!ErrorSeverity::Validation.is_expected());
        assert!(ErrorSeverity::Internal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
