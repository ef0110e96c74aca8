//! Dealer progression and round labels.
//!
//! Dealer and round are derived by replaying the ordered hand list from the
//! starting dealer. The replay is O(n) per call; a game has tens of hands.

pub mod wind;
pub mod dealer;

pub use wind::{RoundLabel, Wind, WINDS};
pub use dealer::{
    next_dealer_seat, replay_dealer, round_label, DealerAction, DealerReplay, DealerState,
    HandProgress, RoundInfo,
};
