//! SCIENTIST RANKING
//!
//! Scores each scientist, assigns a tier and sorts descending.
//!
//! **Score** = Nobel bonus (1000 if a prize is present)
//!           + field impact score × 10 (0 for unknown fields)
//!           + max(0, 150 - age), age = current_year - birth_year
//!
//! **Tiers**: >= 1200 Legendary, >= 800 Pioneering, >= 400 Influential, else Notable
//!
//! The current year is a parameter so rankings are reproducible;
//! `rank_scientists_now` reads it from the local clock.

use crate::data::Scientist;
use crate::utils::config::AnalyticsConfig;
use crate::utils::impact_scores::ImpactScores;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactCategory {
    Legendary,
    Pioneering,
    Influential,
    Notable,
}

impl ImpactCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 1200.0 {
            ImpactCategory::Legendary
        } else if score >= 800.0 {
            ImpactCategory::Pioneering
        } else if score >= 400.0 {
            ImpactCategory::Influential
        } else {
            ImpactCategory::Notable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactCategory::Legendary => "Legendary",
            ImpactCategory::Pioneering => "Pioneering",
            ImpactCategory::Influential => "Influential",
            ImpactCategory::Notable => "Notable",
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a ranking run. `rank` is 1-based and only meaningful within
/// the run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScientistRanking {
    pub scientist: Scientist,
    pub score: f64,
    pub rank: usize,
    pub category: ImpactCategory,
}

#[derive(Debug, Clone)]
pub struct ScientistRanker {
    impact_scores: ImpactScores,
    nobel_bonus: f64,
    field_weight: f64,
    longevity_horizon: i32,
}

impl Default for ScientistRanker {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}

impl ScientistRanker {
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            impact_scores: config.impact_scores.clone(),
            nobel_bonus: config.nobel_bonus,
            field_weight: config.field_weight,
            longevity_horizon: config.longevity_horizon,
        }
    }

    pub fn calculate_impact_score(&self, scientist: &Scientist, current_year: i32) -> f64 {
        let nobel = if scientist.has_nobel_prize() {
            self.nobel_bonus
        } else {
            0.0
        };
        let field = self.impact_scores.score(&scientist.field) * self.field_weight;

        let age = i64::from(current_year) - i64::from(scientist.birth_year);
        let longevity = (i64::from(self.longevity_horizon) - age).max(0);

        nobel + field + longevity as f64
    }

    /// Rank by score descending; equal scores keep input order
    pub fn rank_scientists(&self, scientists: &[Scientist], current_year: i32) -> Vec<ScientistRanking> {
        let mut scored: Vec<(f64, &Scientist)> = scientists
            .iter()
            .map(|s| (self.calculate_impact_score(s, current_year), s))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let rankings: Vec<ScientistRanking> = scored
            .into_iter()
            .enumerate()
            .map(|(idx, (score, scientist))| ScientistRanking {
                scientist: scientist.clone(),
                score,
                rank: idx + 1,
                category: ImpactCategory::from_score(score),
            })
            .collect();

        if let Some(top) = rankings.first() {
            tracing::debug!(
                "Ranked {} scientists for {}; top: {} ({:.1})",
                rankings.len(),
                current_year,
                top.scientist.name,
                top.score
            );
        }

        rankings
    }

    /// Rank using the local calendar year
    pub fn rank_scientists_now(&self, scientists: &[Scientist]) -> Vec<ScientistRanking> {
        let current_year = chrono::Local::now().year();
        self.rank_scientists(scientists, current_year)
    }
}
