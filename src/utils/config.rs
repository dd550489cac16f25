//! Analytics Configuration
//!
//! Static tables and constants shared by the processors, the research
//! database builder and the ranking engine. Defaults reproduce the
//! reference behaviour; a JSON file can replace any subset of them.
//!
//! ```json
//! {
//!   "impact_scores": { "Physics": 9.2, "Geology": 7.1 },
//!   "impact_threshold": 20000.0
//! }
//! ```

use crate::error::{AnalyticsError, Result};
use crate::utils::impact_scores::ImpactScores;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// First names treated as female by the name heuristic.
///
/// "ChienShiung" is kept exactly as configured, so "Chien-Shiung Wu" does
/// not match it.
const DEFAULT_FEMALE_FIRST_NAMES: &[&str] = &[
    "Marie",
    "Barbara",
    "Dorothy",
    "Rosalind",
    "ChienShiung",
    "Rita",
    "Katherine",
];

pub const DEFAULT_IMPACT_THRESHOLD: f64 = 15_000.0;
pub const DEFAULT_NOBEL_BONUS: f64 = 1000.0;
pub const DEFAULT_FIELD_WEIGHT: f64 = 10.0;
pub const DEFAULT_LONGEVITY_HORIZON: i32 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Field → citation multiplier
    pub impact_scores: ImpactScores,
    /// Name heuristic set (first token of the name)
    pub female_first_names: FxHashSet<String>,
    /// Minimum `citations × field score` for a high-impact publication
    pub impact_threshold: f64,
    /// Ranking bonus for a Nobel winner
    pub nobel_bonus: f64,
    /// Ranking weight applied to the field impact score
    pub field_weight: f64,
    /// Longevity bonus is `max(0, horizon - age)`
    pub longevity_horizon: i32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            impact_scores: ImpactScores::default(),
            female_first_names: DEFAULT_FEMALE_FIRST_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            impact_threshold: DEFAULT_IMPACT_THRESHOLD,
            nobel_bonus: DEFAULT_NOBEL_BONUS,
            field_weight: DEFAULT_FIELD_WEIGHT,
            longevity_horizon: DEFAULT_LONGEVITY_HORIZON,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a JSON file, filling gaps with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| AnalyticsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded analytics config from {:?} ({} impact fields, threshold {})",
            path,
            config.impact_scores.len(),
            config.impact_threshold
        );

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make scores meaningless
    pub fn validate(&self) -> Result<()> {
        if self.impact_scores.is_empty() {
            tracing::warn!("Impact score table is empty; every field scores 0");
        }

        for (field, score) in self.impact_scores.iter() {
            if !score.is_finite() || score < 0.0 {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "impact score for '{}' must be finite and non-negative, got {}",
                    field, score
                )));
            }
        }

        if !self.impact_threshold.is_finite() || self.impact_threshold < 0.0 {
            return Err(AnalyticsError::InvalidConfig(format!(
                "impact_threshold must be finite and non-negative, got {}",
                self.impact_threshold
            )));
        }

        if !self.nobel_bonus.is_finite() || !self.field_weight.is_finite() {
            return Err(AnalyticsError::InvalidConfig(
                "ranking weights must be finite".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_impact_threshold(mut self, impact_threshold: f64) -> Self {
        self.impact_threshold = impact_threshold;
        self
    }
}
