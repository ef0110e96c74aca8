//! Stored per-hand delta payload decoding.
//!
//! Hand records written by older releases stored deltas in several shapes.
//! All of them decode here into a seat-ordered `SeatMap<Quarters>`:
//!
//! - a bare 4-element array: `[512, -256, -128, -128]`
//! - an object with `values`: `{"values": [...]}`
//! - an object with `deltasQ`: `{"deltasQ": [...]}`
//!
//! Anything else (including `null`, used for draws) means no financial
//! movement and decodes to `None`.

use serde::Deserialize;

use crate::core::{Quarters, SeatMap};

#[derive(Deserialize)]
#[serde(untagged)]
enum PayloadShape {
    List([i64; 4]),
    Values {
        values: [i64; 4],
    },
    DeltasQ {
        #[serde(rename = "deltasQ")]
        deltas_q: [i64; 4],
    },
}

/// Decode a stored delta payload, tolerating legacy shapes.
///
/// ```
/// use mahjong_ledger::records::decode_deltas;
/// use serde_json::json;
///
/// let deltas = decode_deltas(&json!({"deltasQ": [8, -8, 0, 0]})).unwrap();
/// assert_eq!(deltas.as_array().map(|q| q.raw()), [8, -8, 0, 0]);
/// assert!(decode_deltas(&json!(null)).is_none());
/// ```
#[must_use]
pub fn decode_deltas(payload: &serde_json::Value) -> Option<SeatMap<Quarters>> {
    if payload.is_null() {
        return None;
    }
    match PayloadShape::deserialize(payload) {
        Ok(PayloadShape::List(raw))
        | Ok(PayloadShape::Values { values: raw })
        | Ok(PayloadShape::DeltasQ { deltas_q: raw }) => {
            Some(SeatMap::from_array(raw.map(Quarters::new)))
        }
        Err(_) => {
            tracing::warn!(%payload, "unrecognized delta payload, treating as no movement");
            None
        }
    }
}

/// Encode deltas in the current canonical shape (bare array).
#[must_use]
pub fn encode_deltas(deltas: &SeatMap<Quarters>) -> serde_json::Value {
    serde_json::Value::from(deltas.as_array().map(Quarters::raw).to_vec())
}
