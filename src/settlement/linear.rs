//! Linear cash settlement for custom tables.
//!
//! `base = unitPerFan * effectiveFan`, rounded to the nearest quarter only
//! once at the end. Gun mode and stake preset are ignored.
//! - discard: the discarder alone pays the winner `2 * base`
//! - zimo: each of the three others pays `base`

use crate::core::{Quarters, RulesConfiguration, SeatMap, SettlementError, ValidationError};

use super::outcome::{SettlementResult, SourceTag, WinKind};
use super::{effective_fan, ensure_zero_sum, transfer};

/// Settle a win with the flat per-fan formula.
pub fn compute(
    rules: &RulesConfiguration,
    fan: u32,
    kind: WinKind,
) -> Result<SettlementResult, SettlementError> {
    let unit = rules.require_unit_per_fan()?;
    let fan = effective_fan(rules, fan);
    let base = Quarters::from_display(unit * f64::from(fan))
        .ok_or(ValidationError::PayoutOverflow { fan })?;

    let mut deltas = SeatMap::with_value(Quarters::ZERO);
    let (discarder_pays, others_pay, source_tag) = match kind {
        WinKind::Discard { winner, discarder } => {
            let amount = base
                .checked_mul(2)
                .ok_or(ValidationError::PayoutOverflow { fan })?;
            transfer(&mut deltas, discarder, winner, amount, fan)?;
            (amount, None, SourceTag::LinearDiscard)
        }
        WinKind::Zimo { winner } => {
            for loser in winner.others() {
                transfer(&mut deltas, loser, winner, base, fan)?;
            }
            (base, Some(base), SourceTag::LinearZimo)
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
