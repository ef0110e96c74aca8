//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe physical table position. A mahjong table always has exactly
//! four seats, so a `Seat` is guaranteed to hold an index in `0..4`.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by `[T; 4]` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::ValidationError;

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 4;

/// Physical table position, `0..4`.
///
/// Seat indices are 0-based and increase counter-clockwise in play order,
/// so "the next dealer" is always `seat.next()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Seat(u8);

impl Seat {
    /// All four seats in play order.
    pub const ALL: [Seat; SEAT_COUNT] = [Seat(0), Seat(1), Seat(2), Seat(3)];

    /// Create a seat from a trusted index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..4`. Use `Seat::try_from` for
    /// untrusted input.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < SEAT_COUNT, "Seat index must be 0..4");
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat `steps` positions further along in play order.
    #[must_use]
    pub const fn advance(self, steps: u8) -> Self {
        Self(((self.0 as usize + steps as usize) % SEAT_COUNT) as u8)
    }

    /// The seat that follows this one in play order.
    #[must_use]
    pub const fn next(self) -> Self {
        self.advance(1)
    }

    /// Iterate over the other three seats in play order, starting after `self`.
    ///
    /// ```
    /// use mahjong_ledger::core::Seat;
    ///
    /// let others: Vec<_> = Seat::new(2).others().collect();
    /// assert_eq!(others, vec![Seat::new(3), Seat::new(0), Seat::new(1)]);
    /// ```
    pub fn others(self) -> impl Iterator<Item = Seat> {
        (1..SEAT_COUNT as u8).map(move |step| self.advance(step))
    }
}

impl TryFrom<u8> for Seat {
    type Error = ValidationError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < SEAT_COUNT {
            Ok(Self(index))
        } else {
            Err(ValidationError::InvalidSeat(i64::from(index)))
        }
    }
}

impl TryFrom<i64> for Seat {
    type Error = ValidationError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(|i| Seat::try_from(i).ok())
            .ok_or(ValidationError::InvalidSeat(index))
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Always holds exactly four entries, one per seat.
/// Use `SeatMap::from_fn()` to create with a factory function,
/// or `SeatMap::with_value()` to initialize all entries to the same value.
///
/// Serializes as a plain 4-element array.
///
/// ## Example
///
/// ```
/// use mahjong_ledger::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<i64> = SeatMap::with_value(0);
/// scores[Seat::new(1)] = 15;
/// assert_eq!(scores[Seat::new(1)], 15);
/// assert_eq!(scores[Seat::new(0)], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Seat(i as u8))),
        }
    }

    /// Wrap an array already ordered by seat index.
    #[must_use]
    pub const fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Borrow the underlying seat-ordered array.
    #[must_use]
    pub fn as_array(&self) -> &[T; SEAT_COUNT] {
        &self.data
    }

    /// Map every entry, keeping seat order.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SeatMap<U> {
        SeatMap {
            data: self.data.map(f),
        }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

impl<T> From<[T; SEAT_COUNT]> for SeatMap<T> {
    fn from(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        let s3 = Seat::new(3);

        assert_eq!(s0.index(), 0);
        assert_eq!(s3.index(), 3);
        assert_eq!(format!("{}", s3), "Seat 3");
    }

    #[test]
    fn test_seat_advance_wraps() {
        assert_eq!(Seat::new(3).next(), Seat::new(0));
        assert_eq!(Seat::new(1).advance(2), Seat::new(3));
        assert_eq!(Seat::new(2).advance(4), Seat::new(2));
    }

    #[test]
    fn test_seat_others() {
        let others: Vec<_> = Seat::new(0).others().collect();
        assert_eq!(others, vec![Seat::new(1), Seat::new(2), Seat::new(3)]);
    }

    #[test]
    fn test_seat_try_from() {
        assert_eq!(Seat::try_from(2u8), Ok(Seat::new(2)));
        assert_eq!(Seat::try_from(4u8), Err(ValidationError::InvalidSeat(4)));
        assert_eq!(Seat::try_from(-1i64), Err(ValidationError::InvalidSeat(-1)));
        assert_eq!(Seat::try_from(300i64), Err(ValidationError::InvalidSeat(300)));
    }

    #[test]
    #[should_panic(expected = "Seat index must be 0..4")]
    fn test_seat_new_out_of_range() {
        let _ = Seat::new(4);
    }

    #[test]
    fn test_seat_serialization() {
        let json = serde_json::to_string(&Seat::new(2)).unwrap();
        assert_eq!(json, "2");
        let back: Seat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Seat::new(2));
        assert!(serde_json::from_str::<Seat>("7").is_err());
    }

    #[test]
    fn test_seat_map_from_fn() {
        let map: SeatMap<i32> = SeatMap::from_fn(|s| s.index() as i32 * 10);

        assert_eq!(map[Seat::new(0)], 0);
        assert_eq!(map[Seat::new(1)], 10);
        assert_eq!(map[Seat::new(2)], 20);
        assert_eq!(map[Seat::new(3)], 30);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<i32> = SeatMap::with_value(0);

        map[Seat::new(0)] = 10;
        map[Seat::new(3)] -= 5;

        assert_eq!(map.as_array(), &[10, 0, 0, -5]);
    }

    #[test]
    fn test_seat_map_iter() {
        let map = SeatMap::from_array([4, 3, 2, 1]);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (Seat::new(0), &4));
        assert_eq!(pairs[3], (Seat::new(3), &1));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map = SeatMap::from_array([1, -1, 0, 0]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "[1,-1,0,0]");
        let back: SeatMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
