//! Aggregation and ranking over scientist records
//!
//! Each computation lives in its own module; all of them are single passes
//! over in-memory slices and never fail.

pub mod basic_stats;
pub mod field_stats;
pub mod research_database;
pub mod ranking;

// Re-export computation entry points
pub use basic_stats::{calculate_basic_stats, BasicStats};
pub use field_stats::{calculate_field_statistics, FieldStats};
pub use research_database::{create_research_analyzer, ResearchAnalyzer};
pub use ranking::{ImpactCategory, ScientistRanker, ScientistRanking};
