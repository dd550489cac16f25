//! Utility modules shared by the metrics
//!
//! - Impact scores: field → citation multiplier table
//! - Config: analytics constants and JSON loading
//! - Processors: per-scientist predicates and formatting
//! - Tables: polars views and CSV export

pub mod impact_scores;
pub mod config;
pub mod processors;
pub mod tables;

// Re-export commonly used types
pub use impact_scores::ImpactScores;
pub use config::AnalyticsConfig;
pub use processors::{create_scientist_processors, ScientistProcessors};
pub use tables::{field_stats_to_dataframe, rankings_to_dataframe, write_csv};
