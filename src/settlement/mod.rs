//! Settlement: turning a hand outcome into zero-sum per-seat deltas.
//!
//! - `traditional`: payout tables with gun-mode liability
//! - `linear`: flat cash per fan for custom tables
//! - `dispatcher`: picks a formula from the rules and validates the request
//!
//! Every path checks that the deltas sum to zero before returning.

pub mod outcome;
pub mod traditional;
pub mod linear;
pub mod dispatcher;

pub use outcome::{HandOutcome, SettlementResult, SettlementType, SourceTag, WinKind};
pub use dispatcher::compute_settlement;

use crate::core::{InvariantViolation, Quarters, RulesConfiguration, Seat, SeatMap, ValidationError};

/// Apply the minimum-fan floor, then the cap.
///
/// ```
/// use mahjong_ledger::core::RulesConfiguration;
/// use mahjong_ledger::settlement::effective_fan;
///
/// let rules = RulesConfiguration::default().with_min_fan(3).with_cap(10);
/// assert_eq!(effective_fan(&rules, 1), 3);
/// assert_eq!(effective_fan(&rules, 12), 10);
/// ```
#[must_use]
pub fn effective_fan(rules: &RulesConfiguration, fan: u32) -> u32 {
    let floored = fan.max(rules.min_fan_to_win);
    match rules.cap_fan {
        Some(cap) => floored.min(cap),
        None => floored,
    }
}

/// Move `amount` from `payer` to `payee`.
///
/// Fails with `PayoutOverflow` for `fan` if either running total leaves
/// the `i64` range; `deltas` is left untouched in that case.
pub(crate) fn transfer(
    deltas: &mut SeatMap<Quarters>,
    payer: Seat,
    payee: Seat,
    amount: Quarters,
    fan: u32,
) -> Result<(), ValidationError> {
    let overflow = ValidationError::PayoutOverflow { fan };
    let paid = deltas[payer].checked_sub(amount).ok_or(overflow.clone())?;
    let received = deltas[payee].checked_add(amount).ok_or(overflow)?;
    deltas[payer] = paid;
    deltas[payee] = received;
    Ok(())
}

/// Reject a delta set that does not sum to zero.
pub(crate) fn ensure_zero_sum(
    deltas: SeatMap<Quarters>,
) -> Result<SeatMap<Quarters>, InvariantViolation> {
    let violation = InvariantViolation::from_deltas(deltas.as_array());
    if violation.sum == 0 {
        Ok(deltas)
    } else {
        tracing::error!(
            deltas = ?violation.deltas,
            sum = violation.sum,
            "settlement is not zero-sum"
        );
        Err(violation)
    }
}
