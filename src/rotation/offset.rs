//! Seat rotation offset.
//!
//! Players keep a fixed home seat for scoring identity. After a reseat the
//! whole table shifts by one position, so a player's physical seat is
//! `home + offset (mod 4)`.
//!
//! The offset only ever changes through the persistence layer's explicit
//! reseat operation, which may run only when a full wind cycle has just
//! completed (`wrap_event`). The engine computes, never stores.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, ValidationError, SEAT_COUNT};
use crate::progression::{RoundLabel, Wind};

/// Table rotation in `0..4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeatOffset(u8);

impl SeatOffset {
    pub const ZERO: SeatOffset = SeatOffset(0);

    /// # Panics
    ///
    /// Panics if `value` is not in `0..4`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < SEAT_COUNT, "Seat offset must be 0..4");
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The offset after one more reseat.
    #[must_use]
    pub const fn advanced(self) -> Self {
        Self((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// Physical seat currently occupied by the player whose home seat is `home`.
    #[must_use]
    pub const fn effective_seat(self, home: Seat) -> Seat {
        home.advance(self.0)
    }

    /// Home seat of whoever sits at `effective` under this offset.
    #[must_use]
    pub const fn home_seat(self, effective: Seat) -> Seat {
        effective.advance(SEAT_COUNT as u8 - self.0)
    }
}

impl TryFrom<u8> for SeatOffset {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < SEAT_COUNT {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidOffset(value))
        }
    }
}

impl From<SeatOffset> for u8 {
    fn from(offset: SeatOffset) -> Self {
        offset.0
    }
}

/// `(home + offset) mod 4`.
#[must_use]
pub const fn effective_seat(home: Seat, offset: SeatOffset) -> Seat {
    offset.effective_seat(home)
}

/// `(effective - offset + 4) mod 4`.
#[must_use]
pub const fn home_seat(effective: Seat, offset: SeatOffset) -> Seat {
    offset.home_seat(effective)
}

/// True when the round counter has just cycled through all four winds:
/// the previous label is a North round and the next is an East round.
///
/// Missing or unparseable labels never count as a wrap.
///
/// ```
/// use mahjong_ledger::rotation::wrap_event;
///
/// assert!(wrap_event(Some("北風北局"), Some("東風東局")));
/// assert!(!wrap_event(Some("北風北局"), Some("北風東局")));
/// assert!(!wrap_event(None, Some("東風東局")));
/// ```
#[must_use]
pub fn wrap_event(prev_label: Option<&str>, next_label: Option<&str>) -> bool {
    match (parse_label(prev_label), parse_label(next_label)) {
        (Some(prev), Some(next)) => prev.round_wind == Wind::North && next.round_wind == Wind::East,
        _ => false,
    }
}

/// Whether the caller should offer a reseat between these two labels.
#[must_use]
pub fn reseat_due(prev_label: Option<&str>, next_label: Option<&str>) -> bool {
    wrap_event(prev_label, next_label)
}

fn parse_label(text: Option<&str>) -> Option<RoundLabel> {
    let text = text?;
    let parsed = RoundLabel::parse(text);
    if parsed.is_none() {
        tracing::warn!(label = text, "unparseable round label, ignoring for wrap detection");
    }
    parsed
}
