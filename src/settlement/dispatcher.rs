//! Settlement entry point.

use crate::core::{RulesConfiguration, ScoringPreset, SettlementError};

use super::outcome::{HandOutcome, SettlementResult, WinKind};
use super::{linear, traditional};

/// Compute the zero-sum settlement for one hand.
///
/// `TraditionalFan` routes discard and zimo to their table-driven forms;
/// `CustomTable` routes both through the linear formula.
///
/// ```
/// use mahjong_ledger::core::{Quarters, RulesConfiguration, Seat};
/// use mahjong_ledger::settlement::{compute_settlement, HandOutcome};
///
/// let rules = RulesConfiguration::default();
/// let outcome = HandOutcome::zimo(10, Seat::new(0));
/// let result = compute_settlement(&rules, &outcome).unwrap();
/// assert_eq!(result.per_seat_deltas.as_array().map(Quarters::raw), [768, -256, -256, -256]);
/// ```
pub fn compute_settlement(
    rules: &RulesConfiguration,
    outcome: &HandOutcome,
) -> Result<SettlementResult, SettlementError> {
    rules.validate()?;
    let kind = outcome.kind()?;

    let result = match (rules.scoring_preset, kind) {
        (ScoringPreset::TraditionalFan, WinKind::Discard { winner, discarder }) => {
            traditional::discard(rules, outcome.fan, winner, discarder)
        }
        (ScoringPreset::TraditionalFan, WinKind::Zimo { winner }) => {
            traditional::zimo(rules, outcome.fan, winner)
        }
        (ScoringPreset::CustomTable, kind) => linear::compute(rules, outcome.fan, kind),
    }?;

    tracing::debug!(
        fan = outcome.fan,
        effective_fan = result.effective_fan,
        source = ?result.source_tag,
        winner = %kind.winner(),
        "settled hand"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GunMode, Quarters, Seat, StakePreset, ValidationError};
    use crate::settlement::{SettlementType, SourceTag};

    #[test]
    fn test_routes_traditional_discard() {
        let rules = RulesConfiguration::traditional(GunMode::FullGun, StakePreset::Tier1);
        let outcome = HandOutcome::discard(0, Seat::new(0), Seat::new(1));
        let result = compute_settlement(&rules, &outcome).unwrap();
        assert_eq!(result.source_tag, SourceTag::TraditionalDiscardFullGun);
        assert_eq!(result.discarder_pays, Quarters::new(4));
    }

    #[test]
    fn test_routes_custom_table_zimo() {
        let rules = RulesConfiguration::custom_table(1.0);
        let outcome = HandOutcome::zimo(2, Seat::new(1));
        let result = compute_settlement(&rules, &outcome).unwrap();
        assert_eq!(result.source_tag, SourceTag::LinearZimo);
        assert_eq!(result.per_seat_deltas.as_array().map(Quarters::raw), [-8, 24, -8, -8]);
    }

    #[test]
    fn test_rejects_missing_discarder() {
        let rules = RulesConfiguration::default();
        let outcome = HandOutcome {
            fan: 1,
            settlement_type: SettlementType::Discard,
            winner_seat: Seat::new(0),
            discarder_seat: None,
        };
        assert_eq!(
            compute_settlement(&rules, &outcome),
            Err(SettlementError::Validation(ValidationError::MissingDiscarder))
        );
    }

    #[test]
    fn test_rejects_invalid_rules_before_outcome() {
        let mut rules = RulesConfiguration::custom_table(1.0);
        rules.unit_per_fan = None;
        let outcome = HandOutcome::zimo(1, Seat::new(0));
        let err = compute_settlement(&rules, &outcome).unwrap_err();
        assert!(matches!(
            err,
            SettlementError::Validation(ValidationError::MissingRulesField(_))
        ));
    }
}
