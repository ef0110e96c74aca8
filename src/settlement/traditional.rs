//! Traditional fan settlement.
//!
//! Discard wins follow the configured gun mode. Self-drawn wins always use
//! the half-gun discarder rate as the per-loser payment, whatever the gun
//! mode; tables configured full gun settle a self-draw exactly like half gun.

use crate::core::{
    GunMode, Quarters, RulesConfiguration, Seat, SeatMap, SettlementError, ValidationError,
};
use crate::payout::{full_gun_entry, half_gun_entry};

use super::outcome::{SettlementResult, SourceTag};
use super::{effective_fan, ensure_zero_sum, transfer};

fn checked_fan(rules: &RulesConfiguration, fan: u32) -> Result<u32, ValidationError> {
    if fan < rules.min_fan_to_win {
        return Err(ValidationError::BelowMinimumFan {
            fan,
            min: rules.min_fan_to_win,
        });
    }
    Ok(effective_fan(rules, fan))
}

/// Settle a win on `discarder`'s discard.
pub fn discard(
    rules: &RulesConfiguration,
    fan: u32,
    winner: Seat,
    discarder: Seat,
) -> Result<SettlementResult, SettlementError> {
    if winner == discarder {
        return Err(ValidationError::DiscarderIsWinner(discarder.into()).into());
    }
    let fan = checked_fan(rules, fan)?;

    let mut deltas = SeatMap::with_value(Quarters::ZERO);
    let (discarder_pays, others_pay, source_tag) = match rules.gun_mode {
        GunMode::FullGun => {
            let full = full_gun_entry(fan, rules.stake_preset)?;
            transfer(&mut deltas, discarder, winner, full.discarder_pays, fan)?;
            (full.discarder_pays, None, SourceTag::TraditionalDiscardFullGun)
        }
        GunMode::HalfGun => {
            let half = half_gun_entry(fan, rules.stake_preset)?;
            transfer(&mut deltas, discarder, winner, half.discarder_pays, fan)?;
            for bystander in winner.others().filter(|s| *s != discarder) {
                transfer(&mut deltas, bystander, winner, half.others_pay, fan)?;
            }
            (
                half.discarder_pays,
                Some(half.others_pay),
                SourceTag::TraditionalDiscardHalfGun,
            )
        }
    };

    Ok(SettlementResult {
        effective_fan: fan,
        per_seat_deltas: ensure_zero_sum(deltas)?,
        discarder_pays,
        others_pay,
        source_tag,
    })
}

/// Settle a self-drawn win: every other seat pays the half-gun discarder rate.
pub fn zimo(
    rules: &RulesConfiguration,
    fan: u32,
    winner: Seat,
) -> Result<SettlementResult, SettlementError> {
    let fan = checked_fan(rules, fan)?;
    let per_loser = half_gun_entry(fan, rules.stake_preset)?.discarder_pays;

    let mut deltas = SeatMap::with_value(Quarters::ZERO);
    for loser in winner.others() {
        transfer(&mut deltas, loser, winner, per_loser, fan)?;
    }

    Ok(SettlementResult {
        effective_fan: fan,
        per_seat_deltas: ensure_zero_sum(deltas)?,
        discarder_pays: per_loser,
        others_pay: Some(per_loser),
        source_tag: SourceTag::TraditionalZimo,
    })
}
