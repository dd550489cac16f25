//! Scientist Processors
//!
//! Small pure functions over one `Scientist`: Nobel check, name heuristic,
//! field prefix and display formatting.

use crate::data::Scientist;
use crate::utils::config::AnalyticsConfig;
use rustc_hash::FxHashSet;

/// Holds the name set used by `is_likely_female`
#[derive(Debug, Clone)]
pub struct ScientistProcessors {
    female_first_names: FxHashSet<String>,
}

/// Build processors from configuration
pub fn create_scientist_processors(config: &AnalyticsConfig) -> ScientistProcessors {
    ScientistProcessors {
        female_first_names: config.female_first_names.clone(),
    }
}

impl Default for ScientistProcessors {
    fn default() -> Self {
        create_scientist_processors(&AnalyticsConfig::default())
    }
}

impl ScientistProcessors {
    pub fn is_nobel_winner(&self, scientist: &Scientist) -> bool {
        scientist.has_nobel_prize()
    }

    /// HEURISTIC ONLY: true when the first whitespace token of the name is in
    /// the configured first-name set. Not a general classifier.
    pub fn is_likely_female(&self, scientist: &Scientist) -> bool {
        scientist
            .name
            .split_whitespace()
            .next()
            .is_some_and(|first| self.female_first_names.contains(first))
    }

    /// First 4 characters of the field (whole field if shorter)
    pub fn field_prefix(&self, scientist: &Scientist) -> String {
        scientist.field.chars().take(4).collect()
    }

    /// "{name} ({field}, {birth_year})"
    pub fn format_scientist(&self, scientist: &Scientist) -> String {
        format!("{} ({}, {})", scientist.name, scientist.field, scientist.birth_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScientistData;

    fn find<'a>(data: &'a ScientistData, name: &str) -> &'a Scientist {
        data.scientists.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_nobel_winner() {
        let data = ScientistData::sample();
        let p = ScientistProcessors::default();
        assert!(p.is_nobel_winner(find(&data, "Marie Curie")));
        assert!(!p.is_nobel_winner(find(&data, "Rosalind Franklin")));
    }

    #[test]
    fn test_name_heuristic() {
        let data = ScientistData::sample();
        let p = ScientistProcessors::default();
        assert!(p.is_likely_female(find(&data, "Barbara McClintock")));
        assert!(p.is_likely_female(find(&data, "Katherine Johnson")));
        assert!(!p.is_likely_female(find(&data, "Albert Einstein")));
        assert!(!p.is_likely_female(find(&data, "Francis Crick")));
    }

    #[test]
    fn test_name_heuristic_empty_name() {
        let p = ScientistProcessors::default();
        let nameless = Scientist::new("", "Physics", 1900, None, "French");
        assert!(!p.is_likely_female(&nameless));
    }

    #[test]
    fn test_field_prefix() {
        let data = ScientistData::sample();
        let p = ScientistProcessors::default();
        assert_eq!(p.field_prefix(find(&data, "Niels Bohr")), "Phys");
        assert_eq!(p.field_prefix(find(&data, "Katherine Johnson")), "Math");

        let short = Scientist::new("A B", "Art", 1900, None, "French");
        assert_eq!(p.field_prefix(&short), "Art");
    }

    #[test]
    fn test_format_scientist() {
        let data = ScientistData::sample();
        let p = ScientistProcessors::default();
        assert_eq!(
            p.format_scientist(find(&data, "Albert Einstein")),
            "Albert Einstein (Physics, 1879)"
        );
    }
}
