//! FIELD STATISTICS
//!
//! Groups scientists by field and runs the basic aggregation on each group,
//! adding the Nobel-winning percentage.
//!
//! Output is a `BTreeMap`, so fields come back in alphabetical order.

use crate::data::Scientist;
use crate::metrics::basic_stats::calculate_basic_stats;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Statistics for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStats {
    pub count: usize,
    pub nobel_count: usize,
    pub avg_birth_year: f64,
    /// Nobel winners / count × 100 (0-100)
    pub nobel_percentage: f64,
}

pub fn calculate_field_statistics(scientists: &[Scientist]) -> BTreeMap<String, FieldStats> {
    let mut groups: FxHashMap<&str, Vec<Scientist>> = FxHashMap::default();
    for scientist in scientists {
        groups
            .entry(scientist.field.as_str())
            .or_default()
            .push(scientist.clone());
    }

    let stats: BTreeMap<String, FieldStats> = groups
        .into_iter()
        .map(|(field, members)| {
            let basic = calculate_basic_stats(&members);
            let count = members.len();
            let nobel_count = basic.nobel_count();
            let nobel_percentage = if count > 0 {
                (nobel_count as f64 / count as f64) * 100.0
            } else {
                0.0
            };

            (
                field.to_string(),
                FieldStats {
                    count,
                    nobel_count,
                    avg_birth_year: basic.avg_birth_year,
                    nobel_percentage,
                },
            )
        })
        .collect();

    tracing::debug!("Field statistics: {} fields from {} scientists", stats.len(), scientists.len());

    stats
}
