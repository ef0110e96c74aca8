//! Seat rotation: physical seats vs. scoring identity.
//!
//! - `offset`: home/effective seat conversion and wrap detection
//! - `timeline`: per-hand offset replay and per-player totals

pub mod offset;
pub mod timeline;

pub use offset::{effective_seat, home_seat, reseat_due, wrap_event, SeatOffset};
pub use timeline::{aggregate_totals_by_player, offsets_by_hand, HandOffsets, PlayerTotals};
