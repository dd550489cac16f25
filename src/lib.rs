//! Scientist Analytics
//!
//! In-memory analytics over scientist and publication records: summary
//! statistics, per-field research summaries, reusable filters and an
//! impact-score ranking.
//!
//! - `data`: Record types and the reference dataset
//! - `utils/`: Impact table, configuration, processors, polars tables
//! - `metrics/`: Basic and field statistics, research database, ranking
//! - `filters`: Era, nationality and field-group predicates

pub mod error;
pub mod data;
pub mod utils;
pub mod metrics;
pub mod filters;

// Re-export commonly used types
pub use error::{AnalyticsError, Result};
pub use data::{Database, Publication, Research, Scientist, ScientistData};
pub use utils::{AnalyticsConfig, ImpactScores, ScientistProcessors, create_scientist_processors};
pub use metrics::*;
pub use filters::{apply_filter, create_era_filter, create_field_group_filter, create_nationality_filter};
