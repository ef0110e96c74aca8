//! Shared helpers for integration tests.

#![allow(dead_code)]

use mahjong_ledger::core::{Quarters, RulesConfiguration, Seat};
use mahjong_ledger::progression::{round_label, DealerAction};
use mahjong_ledger::records::HandRecord;
use mahjong_ledger::settlement::{compute_settlement, HandOutcome};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn raw(deltas: &mahjong_ledger::core::SeatMap<Quarters>) -> [i64; 4] {
    deltas.as_array().map(Quarters::raw)
}

/// Minimal stand-in for the persistence layer's insert-hand operation:
/// settle, append, then stamp the new record with the post-hand label.
pub struct GameLog {
    pub rules: RulesConfiguration,
    pub starting_dealer: Seat,
    pub hands: Vec<HandRecord>,
}

impl GameLog {
    pub fn new(rules: RulesConfiguration, starting_dealer: Seat) -> Self {
        Self {
            rules,
            starting_dealer,
            hands: Vec::new(),
        }
    }

    pub fn initial_label(&self) -> String {
        round_label::<HandRecord>(self.starting_dealer, &[]).label
    }

    pub fn current_label(&self) -> String {
        round_label(self.starting_dealer, &self.hands).label
    }

    pub fn current_dealer(&self) -> Seat {
        round_label(self.starting_dealer, &self.hands).dealer
    }

    fn insert(&mut self, record: HandRecord) {
        self.hands.push(record);
        let label = round_label(self.starting_dealer, &self.hands).label;
        if let Some(last) = self.hands.last_mut() {
            last.next_round_label = Some(label);
        }
    }

    pub fn win(&mut self, outcome: HandOutcome) {
        let settlement = compute_settlement(&self.rules, &outcome).unwrap();
        self.insert(HandRecord::win(outcome, &settlement));
    }

    pub fn draw(&mut self, action: DealerAction) {
        self.insert(HandRecord::draw(action));
    }

    /// Non-dealer self-draw at fan 0, passing the deal.
    pub fn pass_deal(&mut self) {
        let winner = self.current_dealer().next();
        self.win(HandOutcome::zimo(self.rules.min_fan_to_win, winner));
    }
}
