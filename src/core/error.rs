//! Engine error types.
//!
//! Two families:
//! - `ValidationError`: the request or rules were malformed. Rejected before
//!   any amount is computed.
//! - `InvariantViolation`: a computed settlement failed the zero-sum check.
//!   Unreachable with correct tables; callers should treat it as a bug.
//!
//! Neither path leaves partial state behind, since the engine mutates nothing.

use thiserror::Error;

use super::units::Quarters;

/// Which optional rules field a scoring preset needed but did not get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesField {
    UnitPerFan,
}

impl std::fmt::Display for RulesField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesField::UnitPerFan => write!(f, "unitPerFan"),
        }
    }
}

/// Input or configuration rejected before settlement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("seat index {0} is outside 0..3")]
    InvalidSeat(i64),

    #[error("discarder seat {0} cannot also be the winner")]
    DiscarderIsWinner(u8),

    #[error("discard outcome requires a discarder seat")]
    MissingDiscarder,

    #[error("self-drawn outcome cannot name a discarder (seat {0})")]
    UnexpectedDiscarder(u8),

    #[error("fan must be a non-negative integer, got {0}")]
    InvalidFan(String),

    #[error("fan {fan} is below the minimum of {min} required to win")]
    BelowMinimumFan { fan: u32, min: u32 },

    #[error("payout for fan {fan} exceeds the representable range")]
    PayoutOverflow { fan: u32 },

    #[error("seat offset {0} is outside 0..3")]
    InvalidOffset(u8),

    #[error("rules are missing `{0}` required by the scoring preset")]
    MissingRulesField(RulesField),

    #[error("invalid rules: {0}")]
    InvalidRules(String),

    #[error("malformed hand outcome: {0}")]
    MalformedOutcome(String),
}

/// Zero-sum check failure on a computed settlement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("settlement deltas {deltas:?} sum to {sum}, expected 0")]
pub struct InvariantViolation {
    pub deltas: [i64; 4],
    /// Exact sum; wide enough that four `i64` deltas cannot overflow it.
    pub sum: i128,
}

/// Umbrella error returned by settlement entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl SettlementError {
    /// True when the error is a rejected request rather than an engine bug.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, SettlementError::Validation(_))
    }
}

impl InvariantViolation {
    /// Build from a seat-ordered delta array.
    #[must_use]
    pub fn from_deltas(deltas: &[Quarters; 4]) -> Self {
        let raw = deltas.map(Quarters::raw);
        Self {
            deltas: raw,
            sum: raw.iter().map(|d| i128::from(*d)).sum(),
        }
    }
}
