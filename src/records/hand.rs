//! Persisted hand records as the engine reads them.
//!
//! The persistence layer owns these; the engine only replays an ordered,
//! already-committed slice of them. Each record carries the round label in
//! force *after* the hand, which seat rotation depends on.

use serde::{Deserialize, Serialize};

use super::payload::{decode_deltas, encode_deltas};
use crate::core::{Quarters, Seat, SeatMap};
use crate::progression::{DealerAction, HandProgress};
use crate::settlement::{HandOutcome, SettlementResult};

/// What happened in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HandResult {
    Win(HandOutcome),
    Draw,
}

/// Engine-computed metadata stored alongside a hand.
///
/// `dealer_action` is kept as raw text so records written with tags this
/// release does not know still load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealer_action: Option<String>,
}

/// One stored hand.
///
/// Seating is not stored per hand. The seat assignment in force for a
/// hand is recovered by replaying offsets over the history, see
/// [`crate::rotation::offsets_by_hand`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecord {
    pub result: HandResult,

    /// Raw delta payload, decoded lazily by `deltas()`.
    #[serde(default)]
    pub deltas: serde_json::Value,

    #[serde(default)]
    pub computed_meta: HandMetadata,

    /// Round label in force after this hand.
    #[serde(default)]
    pub next_round_label: Option<String>,
}

impl HandRecord {
    /// Record a settled win.
    pub fn win(outcome: HandOutcome, settlement: &SettlementResult) -> Self {
        Self {
            result: HandResult::Win(outcome),
            deltas: encode_deltas(&settlement.per_seat_deltas),
            computed_meta: HandMetadata::default(),
            next_round_label: None,
        }
    }

    /// Record a draw with the table's decision on the dealer.
    pub fn draw(action: DealerAction) -> Self {
        Self {
            result: HandResult::Draw,
            deltas: serde_json::Value::Null,
            computed_meta: HandMetadata {
                dealer_action: Some(action.as_tag().to_string()),
            },
            next_round_label: None,
        }
    }

    /// Attach the post-hand round label.
    #[must_use]
    pub fn with_next_label(mut self, label: impl Into<String>) -> Self {
        self.next_round_label = Some(label.into());
        self
    }
}

/// Read access to a stored hand, as needed by replay.
///
/// Implemented by `HandRecord`; storage adapters with their own row types
/// can implement it directly instead of converting.
pub trait RecordedHand {
    /// Input for dealer progression.
    fn progress(&self) -> HandProgress;

    /// Per-seat deltas, or `None` for no financial movement.
    fn deltas(&self) -> Option<SeatMap<Quarters>>;

    /// Round label stored after the hand, if any.
    fn next_round_label(&self) -> Option<&str>;
}

impl RecordedHand for HandRecord {
    fn progress(&self) -> HandProgress {
        match self.result {
            HandResult::Win(outcome) => HandProgress::Decisive {
                winner: outcome.winner_seat,
            },
            HandResult::Draw => HandProgress::Draw(DealerAction::from_tag(
                self.computed_meta.dealer_action.as_deref(),
            )),
        }
    }

    fn deltas(&self) -> Option<SeatMap<Quarters>> {
        decode_deltas(&self.deltas)
    }

    fn next_round_label(&self) -> Option<&str> {
        self.next_round_label.as_deref()
    }
}

impl HandRecord {
    /// Winner seat for decisive hands.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self.result {
            HandResult::Win(outcome) => Some(outcome.winner_seat),
            HandResult::Draw => None,
        }
    }
}
