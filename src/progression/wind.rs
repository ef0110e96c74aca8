//! Winds and round labels.
//!
//! A label names the prevailing round wind and the current dealer's wind,
//! rendered as `<round>風<dealer>局`, e.g. `東風南局` for the South dealer's
//! hand of the East round.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// The four winds in round order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Wind {
    East,
    South,
    West,
    North,
}

pub const WINDS: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

const ROUND_SUFFIX: char = '風';
const HAND_SUFFIX: char = '局';

impl Wind {
    /// Wind at position `index` in round order, wrapping.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        WINDS[index % 4]
    }

    /// Wind belonging to a seat index.
    #[must_use]
    pub const fn of_seat(seat: Seat) -> Self {
        Self::from_index(seat.index())
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Wind::East => '東',
            Wind::South => '南',
            Wind::West => '西',
            Wind::North => '北',
        }
    }

    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        WINDS.into_iter().find(|w| w.glyph() == glyph)
    }
}

impl std::fmt::Display for Wind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Round wind plus dealer wind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundLabel {
    pub round_wind: Wind,
    pub dealer_wind: Wind,
}

impl RoundLabel {
    #[must_use]
    pub const fn new(round_wind: Wind, dealer_wind: Wind) -> Self {
        Self {
            round_wind,
            dealer_wind,
        }
    }

    /// Parse stored label text. Returns `None` for anything not in the
    /// `<wind>風<wind>局` form.
    ///
    /// ```
    /// use mahjong_ledger::progression::{RoundLabel, Wind};
    ///
    /// let label = RoundLabel::parse("北風西局").unwrap();
    /// assert_eq!(label.round_wind, Wind::North);
    /// assert_eq!(label.dealer_wind, Wind::West);
    /// assert_eq!(label.to_string(), "北風西局");
    /// assert!(RoundLabel::parse("East 1").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.trim().chars();
        let round_wind = Wind::from_glyph(chars.next()?)?;
        if chars.next()? != ROUND_SUFFIX {
            return None;
        }
        let dealer_wind = Wind::from_glyph(chars.next()?)?;
        if chars.next()? != HAND_SUFFIX || chars.next().is_some() {
            return None;
        }
        Some(Self::new(round_wind, dealer_wind))
    }
}

impl std::fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.round_wind, ROUND_SUFFIX, self.dealer_wind, HAND_SUFFIX
        )
    }
}
