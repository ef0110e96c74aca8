//! Dealer progression by full replay.
//!
//! State is just the current dealer seat plus how many times the deal has
//! passed. Nothing is stored: the state after any hand is recomputed by
//! folding the ordered hand list from the starting dealer.
//!
//! ## Transitions
//!
//! - decisive hand won by the dealer: dealer keeps the deal
//! - decisive hand won by anyone else: deal passes to the next seat
//! - draw: the stored `dealerAction` decides (`stick` keeps, `pass` passes);
//!   missing or unknown tags mean `stick`
//!
//! Every fourth pass moves the round wind on.

use serde::{Deserialize, Serialize};

use super::wind::{RoundLabel, Wind};
use crate::core::Seat;
use crate::records::RecordedHand;

/// Table decision on the deal after a drawn hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DealerAction {
    /// Dealer keeps the deal.
    #[default]
    Stick,
    /// Deal passes to the next seat.
    Pass,
}

impl DealerAction {
    /// Stored metadata tag.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            DealerAction::Stick => "stick",
            DealerAction::Pass => "pass",
        }
    }

    /// Read a stored tag. Absent or unrecognized tags fall back to `Stick`.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("stick") => DealerAction::Stick,
            Some("pass") => DealerAction::Pass,
            Some(other) => {
                tracing::warn!(tag = other, "unrecognized dealerAction, defaulting to stick");
                DealerAction::Stick
            }
        }
    }
}

/// What dealer progression needs to know about a finished hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandProgress {
    Decisive { winner: Seat },
    Draw(DealerAction),
}

/// Compute the dealer for the next hand.
///
/// ```
/// use mahjong_ledger::core::Seat;
/// use mahjong_ledger::progression::{next_dealer_seat, DealerAction, HandProgress};
///
/// let dealer = Seat::new(3);
/// assert_eq!(next_dealer_seat(dealer, HandProgress::Decisive { winner: Seat::new(3) }), dealer);
/// let won = HandProgress::Decisive { winner: Seat::new(1) };
/// assert_eq!(next_dealer_seat(dealer, won), Seat::new(0));
/// assert_eq!(next_dealer_seat(dealer, HandProgress::Draw(DealerAction::Pass)), Seat::new(0));
/// ```
#[must_use]
pub fn next_dealer_seat(current: Seat, progress: HandProgress) -> Seat {
    if passes_deal(current, progress) {
        current.next()
    } else {
        current
    }
}

fn passes_deal(current: Seat, progress: HandProgress) -> bool {
    match progress {
        HandProgress::Decisive { winner } => winner != current,
        HandProgress::Draw(action) => action == DealerAction::Pass,
    }
}

/// Derived dealer state. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerState {
    pub dealer: Seat,
    /// Times the deal has passed since the game started.
    pub advance_count: u32,
}

impl DealerState {
    /// State before any hand is played.
    #[must_use]
    pub const fn initial(starting_dealer: Seat) -> Self {
        Self {
            dealer: starting_dealer,
            advance_count: 0,
        }
    }

    /// Apply one finished hand.
    #[must_use]
    pub fn after(self, progress: HandProgress) -> Self {
        if passes_deal(self.dealer, progress) {
            Self {
                dealer: self.dealer.next(),
                advance_count: self.advance_count + 1,
            }
        } else {
            self
        }
    }

    /// 1-based round number; every four passes start a new round.
    #[must_use]
    pub const fn round_index(&self) -> u32 {
        self.advance_count / 4 + 1
    }

    #[must_use]
    pub const fn label(&self) -> RoundLabel {
        RoundLabel::new(
            Wind::from_index((self.round_index() as usize - 1) % 4),
            Wind::of_seat(self.dealer),
        )
    }

    /// Full round information for display.
    #[must_use]
    pub fn round_info(&self) -> RoundInfo {
        let label = self.label();
        RoundInfo {
            wind: label.round_wind,
            dealer_wind: label.dealer_wind,
            label: label.to_string(),
            round_index: self.round_index(),
            dealer: self.dealer,
        }
    }
}

/// Current round as shown to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub wind: Wind,
    pub dealer_wind: Wind,
    pub label: String,
    pub round_index: u32,
    pub dealer: Seat,
}

/// Iterator yielding the dealer state after each hand in order.
///
/// ```
/// use mahjong_ledger::core::Seat;
/// use mahjong_ledger::progression::{DealerAction, DealerReplay};
/// use mahjong_ledger::records::HandRecord;
///
/// let hands = vec![HandRecord::draw(DealerAction::Pass), HandRecord::draw(DealerAction::Stick)];
/// let labels: Vec<_> = DealerReplay::new(Seat::new(0), &hands)
///     .map(|state| state.label().to_string())
///     .collect();
/// assert_eq!(labels, vec!["東風南局", "東風南局"]);
/// ```
pub struct DealerReplay<'a, H> {
    state: DealerState,
    hands: std::slice::Iter<'a, H>,
}

impl<'a, H: RecordedHand> DealerReplay<'a, H> {
    pub fn new(starting_dealer: Seat, hands: &'a [H]) -> Self {
        Self {
            state: DealerState::initial(starting_dealer),
            hands: hands.iter(),
        }
    }
}

impl<H: RecordedHand> Iterator for DealerReplay<'_, H> {
    type Item = DealerState;

    fn next(&mut self) -> Option<Self::Item> {
        let hand = self.hands.next()?;
        self.state = self.state.after(hand.progress());
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hands.size_hint()
    }
}

/// Dealer state after replaying every hand.
#[must_use]
pub fn replay_dealer<H: RecordedHand>(starting_dealer: Seat, hands: &[H]) -> DealerState {
    DealerReplay::new(starting_dealer, hands)
        .last()
        .unwrap_or(DealerState::initial(starting_dealer))
}

/// Round label in force after replaying every hand.
///
/// The insert-hand path calls this right after appending a record and
/// stores the result as that record's `nextRoundLabel`.
#[must_use]
pub fn round_label<H: RecordedHand>(starting_dealer: Seat, hands: &[H]) -> RoundInfo {
    let state = replay_dealer(starting_dealer, hands);
    tracing::debug!(
        hands = hands.len(),
        dealer = %state.dealer,
        advances = state.advance_count,
        "replayed dealer progression"
    );
    state.round_info()
}
