//! Rules configuration.
//!
//! A table configures the engine once per game by providing:
//! - `ScoringPreset`: which settlement formula applies
//! - `GunMode`: who is liable on a discard-fed win
//! - `StakePreset`: which price tier scales the payout curve
//! - fan floor/ceiling and, for custom tables, the cash value of one fan
//!
//! The wire format is camelCase JSON, e.g.
//!
//! ```
//! use mahjong_ledger::core::{GunMode, RulesConfiguration, ScoringPreset};
//!
//! let rules = RulesConfiguration::from_json_str(
//!     r#"{"scoringPreset":"traditionalFan","gunMode":"fullGun","minFanToWin":3,"capFan":10}"#,
//! ).unwrap();
//! assert_eq!(rules.scoring_preset, ScoringPreset::TraditionalFan);
//! assert_eq!(rules.gun_mode, GunMode::FullGun);
//! assert_eq!(rules.cap_fan, Some(10));
//! ```

use serde::{Deserialize, Serialize};

use super::error::{RulesField, ValidationError};

/// Which settlement formula a table uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringPreset {
    /// Tiered payout tables with gun-mode liability.
    #[default]
    TraditionalFan,
    /// Flat cash per fan.
    CustomTable,
}

/// Discard liability variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GunMode {
    /// Discarder pays the larger share, each bystander a smaller share.
    #[default]
    HalfGun,
    /// Discarder alone pays.
    FullGun,
}

/// Fixed price tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StakePreset {
    #[default]
    Tier1,
    Tier2,
    Tier3,
}

impl StakePreset {
    pub const ALL: [StakePreset; 3] = [StakePreset::Tier1, StakePreset::Tier2, StakePreset::Tier3];

    /// Position in the per-tier tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            StakePreset::Tier1 => 0,
            StakePreset::Tier2 => 1,
            StakePreset::Tier3 => 2,
        }
    }
}

/// Complete rules configuration for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfiguration {
    pub scoring_preset: ScoringPreset,

    /// Ignored by `CustomTable`.
    pub gun_mode: GunMode,

    /// Ignored by `CustomTable`.
    pub stake_preset: StakePreset,

    /// Minimum fan a hand must reach to be a legal win.
    pub min_fan_to_win: u32,

    /// Fan ceiling. `None` for uncapped.
    pub cap_fan: Option<u32>,

    /// Display-currency value of one fan. Required by `CustomTable`.
    pub unit_per_fan: Option<f64>,
}

impl Default for RulesConfiguration {
    fn default() -> Self {
        Self {
            scoring_preset: ScoringPreset::TraditionalFan,
            gun_mode: GunMode::HalfGun,
            stake_preset: StakePreset::Tier1,
            min_fan_to_win: 0,
            cap_fan: None,
            unit_per_fan: None,
        }
    }
}

impl RulesConfiguration {
    /// Traditional fan table with the given gun mode and stake.
    pub fn traditional(gun_mode: GunMode, stake_preset: StakePreset) -> Self {
        Self {
            gun_mode,
            stake_preset,
            ..Self::default()
        }
    }

    /// Custom table paying `unit_per_fan` display units per fan.
    pub fn custom_table(unit_per_fan: f64) -> Self {
        Self {
            scoring_preset: ScoringPreset::CustomTable,
            unit_per_fan: Some(unit_per_fan),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON rules document.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let rules: Self =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidRules(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    #[must_use]
    pub fn with_gun_mode(mut self, gun_mode: GunMode) -> Self {
        self.gun_mode = gun_mode;
        self
    }

    #[must_use]
    pub fn with_stake(mut self, stake_preset: StakePreset) -> Self {
        self.stake_preset = stake_preset;
        self
    }

    #[must_use]
    pub fn with_min_fan(mut self, min_fan_to_win: u32) -> Self {
        self.min_fan_to_win = min_fan_to_win;
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap_fan: u32) -> Self {
        self.cap_fan = Some(cap_fan);
        self
    }

    /// Check the configuration is usable by its declared scoring preset.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cap_fan == Some(0) {
            return Err(ValidationError::InvalidRules(
                "capFan must be a positive integer".into(),
            ));
        }
        if self.scoring_preset == ScoringPreset::CustomTable {
            self.require_unit_per_fan()?;
        }
        Ok(())
    }

    /// The custom-table fan value, validated.
    pub fn require_unit_per_fan(&self) -> Result<f64, ValidationError> {
        match self.unit_per_fan {
            None => Err(ValidationError::MissingRulesField(RulesField::UnitPerFan)),
            Some(unit) if unit.is_finite() && unit > 0.0 => Ok(unit),
            Some(unit) => Err(ValidationError::InvalidRules(format!(
                "unitPerFan must be a positive number, got {unit}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RulesConfiguration::default();
        assert_eq!(rules.scoring_preset, ScoringPreset::TraditionalFan);
        assert_eq!(rules.gun_mode, GunMode::HalfGun);
        assert_eq!(rules.stake_preset, StakePreset::Tier1);
        assert_eq!(rules.min_fan_to_win, 0);
        assert_eq!(rules.cap_fan, None);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let rules = RulesConfiguration::traditional(GunMode::FullGun, StakePreset::Tier2)
            .with_min_fan(3)
            .with_cap(10);

        assert_eq!(rules.gun_mode, GunMode::FullGun);
        assert_eq!(rules.stake_preset, StakePreset::Tier2);
        assert_eq!(rules.min_fan_to_win, 3);
        assert_eq!(rules.cap_fan, Some(10));
    }

    #[test]
    fn test_json_defaults_missing_fields() {
        let rules = RulesConfiguration::from_json_str("{}").unwrap();
        assert_eq!(rules, RulesConfiguration::default());
    }

    #[test]
    fn test_json_custom_table() {
        let rules = RulesConfiguration::from_json_str(
            r#"{"scoringPreset":"customTable","unitPerFan":0.5,"stakePreset":"tier3"}"#,
        )
        .unwrap();
        assert_eq!(rules.scoring_preset, ScoringPreset::CustomTable);
        assert_eq!(rules.unit_per_fan, Some(0.5));
        assert_eq!(rules.stake_preset, StakePreset::Tier3);
    }

    #[test]
    fn test_custom_table_requires_unit() {
        let err = RulesConfiguration::from_json_str(r#"{"scoringPreset":"customTable"}"#)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingRulesField(RulesField::UnitPerFan));

        let rules = RulesConfiguration::custom_table(-1.0);
        assert!(matches!(rules.validate(), Err(ValidationError::InvalidRules(_))));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let rules = RulesConfiguration::default().with_cap(0);
        assert!(matches!(rules.validate(), Err(ValidationError::InvalidRules(_))));
    }

    #[test]
    fn test_unknown_enum_rejected() {
        let err = RulesConfiguration::from_json_str(r#"{"gunMode":"quarterGun"}"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRules(_)));
    }

    #[test]
    fn test_stake_index() {
        let indices: Vec<_> = StakePreset::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
