//! BASIC STATISTICS
//!
//! Single pass summary over a list of scientists: Nobel winners, birth year
//! sum and mean, uppercased names. An empty list gives a mean of 0.

use crate::data::Scientist;

/// Result of the basic aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStats {
    /// Scientists holding a Nobel prize, in input order
    pub nobel_winners: Vec<Scientist>,
    pub total_birth_years: i64,
    /// Mean birth year (0.0 for an empty input)
    pub avg_birth_year: f64,
    pub upper_names: Vec<String>,
}

impl BasicStats {
    pub fn nobel_count(&self) -> usize {
        self.nobel_winners.len()
    }
}

pub fn calculate_basic_stats(scientists: &[Scientist]) -> BasicStats {
    let nobel_winners: Vec<Scientist> = scientists
        .iter()
        .filter(|s| s.has_nobel_prize())
        .cloned()
        .collect();

    let total_birth_years: i64 = scientists.iter().map(|s| i64::from(s.birth_year)).sum();

    let avg_birth_year = if scientists.is_empty() {
        0.0
    } else {
        total_birth_years as f64 / scientists.len() as f64
    };

    let upper_names = scientists.iter().map(|s| s.name.to_uppercase()).collect();

    tracing::debug!(
        "Basic stats over {} scientists: {} Nobel winners, mean birth year {:.1}",
        scientists.len(),
        nobel_winners.len(),
        avg_birth_year
    );

    BasicStats {
        nobel_winners,
        total_birth_years,
        avg_birth_year,
        upper_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScientistData;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_input() {
        let stats = calculate_basic_stats(&[]);
        assert_eq!(stats.avg_birth_year, 0.0);
        assert_eq!(stats.total_birth_years, 0);
        assert!(stats.nobel_winners.is_empty());
        assert!(stats.upper_names.is_empty());
    }

    #[test]
    fn test_reference_dataset() {
        let data = ScientistData::sample();
        let stats = calculate_basic_stats(&data.scientists);

        // 1867 + 1879 + 1885 + 1901 + 1902 + 1910 + 1920 + 1928 + 1916 + 1912 + 1909 + 1918
        assert_eq!(stats.total_birth_years, 22847);
        assert_relative_eq!(stats.avg_birth_year, 22847.0 / 12.0, epsilon = 1e-9);
        assert_eq!(stats.nobel_count(), 9);
        assert_eq!(stats.upper_names[0], "MARIE CURIE");
        assert_eq!(stats.upper_names.len(), 12);
    }

    #[test]
    fn test_winners_keep_input_order() {
        let data = ScientistData::sample();
        let stats = calculate_basic_stats(&data.scientists);
        let names: Vec<&str> = stats.nobel_winners.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(&names[..3], &["Marie Curie", "Albert Einstein", "Niels Bohr"]);
    }
}
