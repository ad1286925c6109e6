//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors live next to the code that raises them (for example
//! [`TeamError`](crate::state::TeamError) in the roster module). This module holds
//! the shared classification trait and the errors raised when a caller breaks an
//! engine precondition.

use crate::state::UnitId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: rejected input data, e.g. a roster breaking team limits
/// - **Internal**: a caller asked the engine for something that cannot happen
///   during normal play, such as summoning into the leader slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all battle-core errors.
pub trait ClassifiedError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, handy for log fields and tests.
    fn error_code(&self) -> &'static str;
}

/// Precondition failures raised by board and roster mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("slot {slot} cannot receive a summoned unit")]
    InvalidSlot { slot: usize },

    #[error("unit {0} is not part of this team")]
    UnknownUnit(UnitId),

    #[error("unit {0} is not waiting in the reserve")]
    NotInReserve(UnitId),

    #[error("unit {0} is not on the board")]
    NotOnBoard(UnitId),

    #[error("leader {0} cannot be swapped out of the board")]
    LeaderNotSwappable(UnitId),
}

impl ClassifiedError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSlot { .. } => "BATTLE_INVALID_SLOT",
            Self::UnknownUnit(_) => "BATTLE_UNKNOWN_UNIT",
            Self::NotInReserve(_) => "BATTLE_NOT_IN_RESERVE",
            Self::NotOnBoard(_) => "BATTLE_NOT_ON_BOARD",
            Self::LeaderNotSwappable(_) => "BATTLE_LEADER_NOT_SWAPPABLE",
        }
    }
}
