//! Replaying seat offsets over a hand history.
//!
//! Stored deltas are per physical seat. To credit the right player after a
//! mid-game reseat, each hand is mapped back to home seats using the offset
//! that was in force when that hand was played. The offset for each hand is
//! recovered from the stored post-hand labels: it steps forward by one
//! whenever consecutive labels show a wind-cycle wrap.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::offset::{wrap_event, SeatOffset};
use crate::core::{Quarters, SeatMap};
use crate::records::RecordedHand;

/// Per-hand offsets. Inline capacity covers a typical game without allocating.
pub type HandOffsets = SmallVec<[SeatOffset; 64]>;

/// Offset in force while each hand was played, in hand order.
///
/// `initial_label` is the label in force before the first hand (normally
/// the game's starting label); `initial_offset` the offset at game start.
#[must_use]
pub fn offsets_by_hand<H: RecordedHand>(
    hands: &[H],
    initial_label: Option<&str>,
    initial_offset: SeatOffset,
) -> HandOffsets {
    let mut current = initial_offset;
    let mut previous_label = initial_label;
    let mut offsets = HandOffsets::with_capacity(hands.len());

    for hand in hands {
        offsets.push(current);
        let next_label = hand.next_round_label();
        if wrap_event(previous_label, next_label) {
            current = current.advanced();
        }
        previous_label = next_label;
    }
    offsets
}

/// Running totals keyed by player identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerTotals<P: Eq + Hash> {
    totals: FxHashMap<P, Quarters>,
}

impl<P: Eq + Hash + Clone> PlayerTotals<P> {
    fn new(players: &SeatMap<P>) -> Self {
        let totals = players
            .values()
            .map(|p| (p.clone(), Quarters::ZERO))
            .collect();
        Self { totals }
    }

    fn credit(&mut self, player: &P, amount: Quarters) {
        if let Some(total) = self.totals.get_mut(player) {
            *total += amount;
        }
    }

    /// Total for a player, or zero if they are not at this table.
    #[must_use]
    pub fn get(&self, player: &P) -> Quarters {
        self.totals.get(player).copied().unwrap_or(Quarters::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&P, Quarters)> {
        self.totals.iter().map(|(p, q)| (p, *q))
    }

    /// Sum across all players. Zero for any well-formed history.
    #[must_use]
    pub fn sum(&self) -> Quarters {
        self.totals.values().sum()
    }

    /// Players ordered by total, highest first.
    #[must_use]
    pub fn standings(&self) -> Vec<(P, Quarters)>
    where
        P: Ord,
    {
        let mut rows: Vec<_> = self.iter().map(|(p, q)| (p.clone(), q)).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

/// Aggregate every hand's deltas into per-player totals.
///
/// `players` is indexed by home seat. Hands without a decodable payload
/// (draws, legacy rows) contribute nothing.
///
/// ```
/// use mahjong_ledger::core::{Quarters, SeatMap};
/// use mahjong_ledger::records::HandRecord;
/// use mahjong_ledger::rotation::{aggregate_totals_by_player, SeatOffset};
/// use serde_json::json;
///
/// let players = SeatMap::from_array(["ann", "bo", "cy", "di"]);
/// let hand: HandRecord = serde_json::from_value(json!({
///     "result": {"kind": "draw"},
///     "deltas": [8, -8, 0, 0],
///     "nextRoundLabel": "東風南局"
/// })).unwrap();
///
/// let totals =
///     aggregate_totals_by_player(&players, &[hand], Some("東風東局"), SeatOffset::new(1));
/// // offset 1: seat 0 holds home seat 3, seat 1 holds home seat 0
/// assert_eq!(totals.get(&"di"), Quarters::new(8));
/// assert_eq!(totals.get(&"ann"), Quarters::new(-8));
/// ```
#[must_use]
pub fn aggregate_totals_by_player<P, H>(
    players: &SeatMap<P>,
    hands: &[H],
    initial_label: Option<&str>,
    initial_offset: SeatOffset,
) -> PlayerTotals<P>
where
    P: Eq + Hash + Clone,
    H: RecordedHand,
{
    let offsets = offsets_by_hand(hands, initial_label, initial_offset);
    let mut totals = PlayerTotals::new(players);

    for (hand, offset) in hands.iter().zip(offsets) {
        let Some(deltas) = hand.deltas() else {
            continue;
        };
        for (seat, delta) in deltas.iter() {
            totals.credit(&players[offset.home_seat(seat)], *delta);
        }
    }

    tracing::debug!(hands = hands.len(), "aggregated player totals");
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{HandRecord, HandResult};
    use serde_json::json;

    fn hand(deltas: serde_json::Value, label: &str) -> HandRecord {
        HandRecord {
            result: HandResult::Draw,
            deltas,
            computed_meta: Default::default(),
            next_round_label: Some(label.to_string()),
        }
    }

    fn players() -> SeatMap<&'static str> {
        SeatMap::from_array(["a", "b", "c", "d"])
    }

    #[test]
    fn test_offsets_without_wrap() {
        let hands = vec![hand(json!(null), "東風南局"), hand(json!(null), "東風西局")];
        let offsets = offsets_by_hand(&hands, Some("東風東局"), SeatOffset::new(2));
        assert_eq!(offsets.into_vec(), vec![SeatOffset::new(2), SeatOffset::new(2)]);
    }

    #[test]
    fn test_offsets_step_after_wrap() {
        let hands = vec![
            hand(json!(null), "北風北局"),
            hand(json!(null), "東風東局"),
            hand(json!(null), "東風南局"),
        ];
        let offsets = offsets_by_hand(&hands, Some("北風西局"), SeatOffset::ZERO);
        // the wrapping hand itself was played at the old offset
        assert_eq!(
            offsets.into_vec(),
            vec![SeatOffset::ZERO, SeatOffset::ZERO, SeatOffset::new(1)]
        );
    }

    #[test]
    fn test_missing_labels_never_wrap() {
        let mut hands = vec![hand(json!(null), "北風北局"), hand(json!(null), "東風東局")];
        hands[0].next_round_label = None;
        let offsets = offsets_by_hand(&hands, Some("北風西局"), SeatOffset::ZERO);
        assert_eq!(offsets.into_vec(), vec![SeatOffset::ZERO, SeatOffset::ZERO]);
    }

    #[test]
    fn test_totals_follow_identity() {
        let hands = vec![
            hand(json!([12, -4, -4, -4]), "北風北局"),
            hand(json!([12, -4, -4, -4]), "東風東局"),
            hand(json!([12, -4, -4, -4]), "東風東局"),
        ];
        let totals =
            aggregate_totals_by_player(&players(), &hands, Some("北風西局"), SeatOffset::ZERO);

        // seat 0 is "a" for two hands, then "d" after the reseat
        assert_eq!(totals.get(&"a"), Quarters::new(12 + 12 - 4));
        assert_eq!(totals.get(&"d"), Quarters::new(-4 - 4 + 12));
        assert_eq!(totals.get(&"b"), Quarters::new(-12));
        assert!(totals.sum().is_zero());
    }

    #[test]
    fn test_draws_contribute_nothing() {
        let hands = vec![hand(json!(null), "東風東局"), hand(json!({"bogus": 1}), "東風東局")];
        let totals = aggregate_totals_by_player(&players(), &hands, None, SeatOffset::ZERO);
        assert!(totals.iter().all(|(_, q)| q.is_zero()));
    }

    #[test]
    fn test_standings_order() {
        let hands = vec![hand(json!([-8, 16, 0, -8]), "東風東局")];
        let totals = aggregate_totals_by_player(&players(), &hands, None, SeatOffset::ZERO);
        let standings = totals.standings();
        assert_eq!(standings[0], ("b", Quarters::new(16)));
        assert_eq!(standings[1], ("c", Quarters::ZERO));
        assert_eq!(standings[2], ("a", Quarters::new(-8)));
        assert_eq!(standings[3], ("d", Quarters::new(-8)));
    }

    #[test]
    fn test_unknown_player_total_is_zero() {
        let totals =
            aggregate_totals_by_player::<_, HandRecord>(&players(), &[], None, SeatOffset::ZERO);
        assert_eq!(totals.get(&"zed"), Quarters::ZERO);
    }
}
