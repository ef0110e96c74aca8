//! Stored hand records and the storage-boundary decoding they need.
//!
//! Legacy tolerance lives here so the rest of the engine only sees
//! normalized values: raw payloads become `Option<SeatMap<Quarters>>`,
//! raw metadata tags become `DealerAction`.

pub mod hand;
pub mod payload;

pub use hand::{HandMetadata, HandRecord, HandResult, RecordedHand};
pub use payload::{decode_deltas, encode_deltas};
