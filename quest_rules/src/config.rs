//! Engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::character::DEFAULT_BASELINE_STAT;
use crate::error::RulesError;
use crate::rules::DEFAULT_MAX_CHOICES;
use crate::time::TimeThresholds;

/// Tunables for the engine. Every field has a default.
///
/// ```toml
/// max_choices = 3
/// baseline_stat = 1
///
/// [time]
/// gap_after_hours = 48
/// long_gap_after_hours = 168
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Thresholds between `recent`, `gap` and `long_gap`.
    pub time: TimeThresholds,

    /// How many quests `available_quests` surfaces.
    pub max_choices: usize,

    /// Value of every stat for a newly created character.
    pub baseline_stat: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time: TimeThresholds::default(),
            max_choices: DEFAULT_MAX_CHOICES,
            baseline_stat: DEFAULT_BASELINE_STAT,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, RulesError> {
        let config: EngineConfig = toml::from_str(source).map_err(RulesError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.time.gap_after_hours == 0 {
            return Err(RulesError::InvalidConfig(
                "time.gap_after_hours must be greater than zero".to_string(),
            ));
        }
        if self.time.gap_after_hours >= self.time.long_gap_after_hours {
            return Err(RulesError::InvalidConfig(format!(
                "time.gap_after_hours ({}) must be below time.long_gap_after_hours ({})",
                self.time.gap_after_hours, self.time.long_gap_after_hours
            )));
        }
        if self.baseline_stat == 0 {
            return Err(RulesError::InvalidConfig(
                "baseline_stat must be at least 1".to_string(),
            ));
        }
        if self.max_choices == 0 {
            return Err(RulesError::InvalidConfig(
                "max_choices must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
