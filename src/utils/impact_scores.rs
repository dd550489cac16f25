//! Field Impact Scores
//!
//! Fixed per-field multipliers used to weight citation counts and to add a
//! field bonus to ranking scores. Unknown fields score 0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Built-in multipliers: (field, score)
const DEFAULT_SCORES: &[(&str, f64)] = &[
    ("Physics", 9.2),
    ("Chemistry", 8.8),
    ("Biology", 9.0),
    ("Mathematics", 8.5),
];

/// Field name → impact multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactScores {
    scores: FxHashMap<String, f64>,
}

impl Default for ImpactScores {
    fn default() -> Self {
        DEFAULT_SCORES.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ImpactScores {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(f, s)| (f.into(), s)).collect(),
        }
    }
}

impl ImpactScores {
    /// Multiplier for a field (0.0 if the field is not in the table)
    pub fn score(&self, field: &str) -> f64 {
        self.scores.get(field).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(f, s)| (f.as_str(), *s))
    }
}
