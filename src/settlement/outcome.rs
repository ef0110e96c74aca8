//! Settlement request and result types.

use serde::{Deserialize, Serialize};

use crate::core::{Quarters, Seat, SeatMap, ValidationError};

/// How a hand was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettlementType {
    /// Won on another player's discard.
    Discard,
    /// Self-drawn win; all three others pay.
    Zimo,
}

/// A hand outcome to be settled.
///
/// Seat fields are physical table positions. Build one directly for
/// trusted input, or with `HandOutcome::from_value` for raw JSON requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandOutcome {
    pub fan: u32,
    pub settlement_type: SettlementType,
    pub winner_seat: Seat,
    /// Required for `Discard`, absent for `Zimo`.
    pub discarder_seat: Option<Seat>,
}

/// Validated shape of a win, with the seats each form needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinKind {
    Discard { winner: Seat, discarder: Seat },
    Zimo { winner: Seat },
}

impl WinKind {
    #[must_use]
    pub fn winner(self) -> Seat {
        match self {
            WinKind::Discard { winner, .. } | WinKind::Zimo { winner } => winner,
        }
    }
}

/// Wire form accepted by `HandOutcome::from_value`, before range checks.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHandOutcome {
    fan: serde_json::Number,
    settlement_type: SettlementType,
    winner_seat: i64,
    #[serde(default)]
    discarder_seat: Option<i64>,
}

impl HandOutcome {
    /// Discard-fed win.
    #[must_use]
    pub fn discard(fan: u32, winner: Seat, discarder: Seat) -> Self {
        Self {
            fan,
            settlement_type: SettlementType::Discard,
            winner_seat: winner,
            discarder_seat: Some(discarder),
        }
    }

    /// Self-drawn win.
    #[must_use]
    pub fn zimo(fan: u32, winner: Seat) -> Self {
        Self {
            fan,
            settlement_type: SettlementType::Zimo,
            winner_seat: winner,
            discarder_seat: None,
        }
    }

    /// Decode and range-check an untrusted JSON request.
    ///
    /// ```
    /// use mahjong_ledger::core::ValidationError;
    /// use mahjong_ledger::settlement::HandOutcome;
    ///
    /// let bad = serde_json::json!({"fan": 2.5, "settlementType": "zimo", "winnerSeat": 0});
    /// assert!(matches!(HandOutcome::from_value(bad), Err(ValidationError::InvalidFan(_))));
    /// ```
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        let raw: RawHandOutcome = serde_json::from_value(value)
            .map_err(|e| ValidationError::MalformedOutcome(e.to_string()))?;
        let outcome = Self {
            fan: parse_fan(&raw.fan)?,
            settlement_type: raw.settlement_type,
            winner_seat: Seat::try_from(raw.winner_seat)?,
            discarder_seat: raw.discarder_seat.map(Seat::try_from).transpose()?,
        };
        outcome.kind()?;
        Ok(outcome)
    }

    /// Check seat consistency and return the validated win shape.
    pub fn kind(&self) -> Result<WinKind, ValidationError> {
        match (self.settlement_type, self.discarder_seat) {
            (SettlementType::Discard, None) => Err(ValidationError::MissingDiscarder),
            (SettlementType::Discard, Some(d)) if d == self.winner_seat => {
                Err(ValidationError::DiscarderIsWinner(d.into()))
            }
            (SettlementType::Discard, Some(discarder)) => Ok(WinKind::Discard {
                winner: self.winner_seat,
                discarder,
            }),
            (SettlementType::Zimo, Some(d)) => Err(ValidationError::UnexpectedDiscarder(d.into())),
            (SettlementType::Zimo, None) => Ok(WinKind::Zimo {
                winner: self.winner_seat,
            }),
        }
    }
}

fn parse_fan(n: &serde_json::Number) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidFan(n.to_string());
    if let Some(v) = n.as_u64() {
        return u32::try_from(v).map_err(|_| invalid());
    }
    match n.as_f64() {
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => Ok(v as u32),
        _ => Err(invalid()),
    }
}

/// Which formula produced a settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceTag {
    TraditionalDiscardHalfGun,
    TraditionalDiscardFullGun,
    TraditionalZimo,
    LinearDiscard,
    LinearZimo,
}

/// Zero-sum money transfer for one hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    /// Fan after the minimum floor and cap were applied.
    pub effective_fan: u32,

    /// Money movement per physical seat. Always sums to zero.
    pub per_seat_deltas: SeatMap<Quarters>,

    /// Amount the discarder pays; on a self-draw, what each loser pays.
    pub discarder_pays: Quarters,

    /// Amount each other loser pays. `None` when bystanders are untouched.
    pub others_pay: Option<Quarters>,

    pub source_tag: SourceTag,
}

impl SettlementResult {
    /// Net amount the winner collected.
    #[must_use]
    pub fn winner_receives(&self) -> Quarters {
        self.per_seat_deltas
            .values()
            .copied()
            .filter(|d| *d > Quarters::ZERO)
            .sum()
    }
}
