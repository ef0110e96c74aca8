//! Core engine types: seats, money units, rules configuration, errors.
//!
//! This module contains the building blocks shared by settlement,
//! dealer progression and seat rotation.

pub mod seat;
pub mod units;
pub mod rules;
pub mod error;

pub use seat::{Seat, SeatMap, SEAT_COUNT};
pub use units::{Quarters, QUARTERS_PER_UNIT};
pub use rules::{GunMode, RulesConfiguration, ScoringPreset, StakePreset};
pub use error::{InvariantViolation, RulesField, SettlementError, ValidationError};
