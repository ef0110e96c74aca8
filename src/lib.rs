//! # mahjong-ledger
//!
//! Settlement and round-progression engine for four-player mahjong scoring.
//!
//! ## Design Principles
//!
//! 1. **Zero-Sum Always**: Every settlement is checked to sum to exactly
//!    zero before it is returned.
//!
//! 2. **Derive, Don't Store**: Dealer, round label and seat offsets are
//!    recomputed by replaying the ordered hand list. Nothing is mutated.
//!
//! 3. **Fixed-Point Money**: All amounts are integer quarter-units
//!    (`4Q = 1` display unit), so long aggregations never drift.
//!
//! ## Architecture
//!
//! - **Two settlement formulas**: tiered payout tables (`traditionalFan`)
//!   or flat cash per fan (`customTable`), selected by the rules.
//!
//! - **Legacy tolerance at the edge**: stored payloads and metadata tags are
//!   normalized in `records`; the engine core only sees typed values.
//!
//! ## Modules
//!
//! - `core`: Seats, quarter units, rules configuration, errors
//! - `payout`: Half-gun and full-gun payout tables with extrapolation
//! - `settlement`: Traditional and linear settlement plus the dispatcher
//! - `records`: Stored hand records and payload decoding
//! - `progression`: Dealer state machine and round labels
//! - `rotation`: Seat offsets and per-player totals across reseats

pub mod core;
pub mod payout;
pub mod settlement;
pub mod records;
pub mod progression;
pub mod rotation;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap, Quarters,
    RulesConfiguration, ScoringPreset, GunMode, StakePreset,
    ValidationError, InvariantViolation, SettlementError,
};

pub use crate::payout::{FullGunEntry, HalfGunEntry, full_gun_entry, half_gun_entry};

pub use crate::settlement::{
    compute_settlement, effective_fan,
    HandOutcome, SettlementType, SettlementResult, SourceTag,
};

pub use crate::records::{HandRecord, HandResult, HandMetadata, RecordedHand, decode_deltas};

pub use crate::progression::{
    next_dealer_seat, round_label,
    DealerAction, DealerReplay, DealerState, HandProgress, RoundInfo, RoundLabel, Wind,
};

pub use crate::rotation::{
    effective_seat, home_seat, wrap_event,
    offsets_by_hand, aggregate_totals_by_player,
    SeatOffset, PlayerTotals,
};
