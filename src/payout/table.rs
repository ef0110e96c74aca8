//! Payout lookup with extrapolation past the tabulated range.
//!
//! ## Extrapolation
//!
//! For fan above 10, every field of an entry follows the same rule:
//! - even fan doubles the previous even entry, starting at fan 10
//! - odd fan is the preceding even entry times 1.5, rounded half up
//!
//! ```
//! use mahjong_ledger::core::{Quarters, StakePreset};
//! use mahjong_ledger::payout::full_gun_entry;
//!
//! let at = |fan| full_gun_entry(fan, StakePreset::Tier1).unwrap().discarder_pays;
//! assert_eq!(at(10), Quarters::new(512));
//! assert_eq!(at(11), Quarters::new(768));
//! assert_eq!(at(12), Quarters::new(1024));
//! assert_eq!(at(13), Quarters::new(1536));
//! ```

use serde::{Deserialize, Serialize};

use super::curves::{
    FULL_GUN_DISCARDER, HALF_GUN_DISCARDER, HALF_GUN_OTHERS, TABULATED_MAX_FAN,
};
use crate::core::{Quarters, StakePreset, ValidationError};

/// Half-gun liability split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfGunEntry {
    /// Paid by the discarder on a discard win; paid by each loser on a self-draw.
    pub discarder_pays: Quarters,
    /// Paid by each bystander on a discard win.
    pub others_pay: Quarters,
}

/// Full-gun liability: discarder pays everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullGunEntry {
    pub discarder_pays: Quarters,
}

/// Look up the half-gun entry for `fan` at `stake`.
pub fn half_gun_entry(fan: u32, stake: StakePreset) -> Result<HalfGunEntry, ValidationError> {
    let s = stake.index();
    Ok(HalfGunEntry {
        discarder_pays: curve_value(&HALF_GUN_DISCARDER[s], fan)?,
        others_pay: curve_value(&HALF_GUN_OTHERS[s], fan)?,
    })
}

/// Look up the full-gun entry for `fan` at `stake`.
pub fn full_gun_entry(fan: u32, stake: StakePreset) -> Result<FullGunEntry, ValidationError> {
    Ok(FullGunEntry {
        discarder_pays: curve_value(&FULL_GUN_DISCARDER[stake.index()], fan)?,
    })
}

fn curve_value(column: &[u64], fan: u32) -> Result<Quarters, ValidationError> {
    extrapolate(column, fan)
        .and_then(|v| i64::try_from(v).ok())
        .map(Quarters::new)
        .ok_or(ValidationError::PayoutOverflow { fan })
}

/// Value of one curve column at `fan`, or `None` on `u64` overflow.
fn extrapolate(column: &[u64], fan: u32) -> Option<u64> {
    let top = TABULATED_MAX_FAN;
    if fan <= top {
        return column.get(fan as usize).copied();
    }
    let even_fan = fan - fan % 2;
    let mut value = column[top as usize];
    for _ in 0..(even_fan - top) / 2 {
        value = value.checked_mul(2)?;
    }
    if fan % 2 == 1 {
        value = value.checked_mul(3)?.checked_add(1)? / 2;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(raw: i64) -> Quarters {
        Quarters::new(raw)
    }

    #[test]
    fn test_tier1_half_gun_endpoints() {
        let e0 = half_gun_entry(0, StakePreset::Tier1).unwrap();
        assert_eq!((e0.discarder_pays, e0.others_pay), (q(2), q(1)));

        let e10 = half_gun_entry(10, StakePreset::Tier1).unwrap();
        assert_eq!((e10.discarder_pays, e10.others_pay), (q(256), q(128)));
    }

    #[test]
    fn test_tier1_full_gun_endpoints() {
        assert_eq!(full_gun_entry(0, StakePreset::Tier1).unwrap().discarder_pays, q(4));
        assert_eq!(full_gun_entry(10, StakePreset::Tier1).unwrap().discarder_pays, q(512));
    }

    #[test]
    fn test_full_gun_extrapolation() {
        let at = |fan| full_gun_entry(fan, StakePreset::Tier1).unwrap().discarder_pays;
        assert_eq!(at(11), q(768));
        assert_eq!(at(12), q(1024));
        assert_eq!(at(13), q(1536));
        assert_eq!(at(14), q(2048));
    }

    #[test]
    fn test_half_gun_extrapolation_per_field() {
        let e11 = half_gun_entry(11, StakePreset::Tier1).unwrap();
        assert_eq!((e11.discarder_pays, e11.others_pay), (q(384), q(192)));

        let e12 = half_gun_entry(12, StakePreset::Tier1).unwrap();
        assert_eq!((e12.discarder_pays, e12.others_pay), (q(512), q(256)));
    }

    #[test]
    fn test_odd_extrapolation_rounds_half_up() {
        let column = [1u64, 1, 1, 1, 1, 1, 1, 1, 1, 1, 5];
        assert_eq!(extrapolate(&column, 11), Some(8));
        assert_eq!(extrapolate(&column, 12), Some(10));
        assert_eq!(extrapolate(&column, 13), Some(15));
    }

    #[test]
    fn test_higher_tiers_scale() {
        let t2 = full_gun_entry(5, StakePreset::Tier2).unwrap();
        let t3 = full_gun_entry(5, StakePreset::Tier3).unwrap();
        assert_eq!(t2.discarder_pays, q(192));
        assert_eq!(t3.discarder_pays, q(480));
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(
            full_gun_entry(200, StakePreset::Tier3),
            Err(ValidationError::PayoutOverflow { fan: 200 })
        );
        assert!(full_gun_entry(u32::MAX, StakePreset::Tier1).is_err());
    }
}
