//! RESEARCH DATABASE BUILDER
//!
//! Combines field statistics with a citation-impact filter to produce a
//! `Database` of high-impact publications and per-field `Research` summaries.
//!
//! **High-impact rule**: a publication qualifies when, for SOME scientist whose
//! name equals the publication's author,
//! `citations × impact_score(scientist.field) >= impact_threshold`.
//! Publications whose author matches no scientist never qualify.
//!
//! **Two filter passes**:
//!   1. Per field: publications authored by a member of that field, then the
//!      high-impact rule (evaluated against every scientist with that name)
//!   2. Global: the high-impact rule over the entire publication list. This
//!      pass is independent of the per-field results.

use crate::data::{Database, Publication, Research, Scientist};
use crate::metrics::field_stats::calculate_field_statistics;
use crate::utils::config::AnalyticsConfig;
use crate::utils::impact_scores::ImpactScores;

/// Database builder with a fixed impact threshold
#[derive(Debug, Clone)]
pub struct ResearchAnalyzer {
    impact_threshold: f64,
    impact_scores: ImpactScores,
}

/// Analyzer using the default impact table
pub fn create_research_analyzer(impact_threshold: f64) -> ResearchAnalyzer {
    ResearchAnalyzer {
        impact_threshold,
        impact_scores: ImpactScores::default(),
    }
}

impl ResearchAnalyzer {
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            impact_threshold: config.impact_threshold,
            impact_scores: config.impact_scores.clone(),
        }
    }

    /// Replace the field → multiplier table
    pub fn with_impact_scores(mut self, impact_scores: ImpactScores) -> Self {
        self.impact_scores = impact_scores;
        self
    }

    pub fn impact_threshold(&self) -> f64 {
        self.impact_threshold
    }

    /// Existential check across every scientist sharing the author's name
    pub fn is_high_impact(&self, publication: &Publication, scientists: &[Scientist]) -> bool {
        scientists
            .iter()
            .filter(|s| s.name == publication.author)
            .any(|s| {
                f64::from(publication.citations) * self.impact_scores.score(&s.field)
                    >= self.impact_threshold
            })
    }

    /// High-impact subset of `publications`, in input order
    pub fn high_impact_publications(
        &self,
        publications: &[Publication],
        scientists: &[Scientist],
    ) -> Vec<Publication> {
        publications
            .iter()
            .filter(|p| self.is_high_impact(p, scientists))
            .cloned()
            .collect()
    }

    /// Build the database for one scientist / publication set
    pub fn analyze(&self, scientists: &[Scientist], publications: &[Publication]) -> Database {
        let field_stats = calculate_field_statistics(scientists);

        let unmatched = publications
            .iter()
            .filter(|p| !scientists.iter().any(|s| s.name == p.author))
            .count();
        if unmatched > 0 {
            tracing::warn!(
                "{} of {} publications have no matching author and are excluded",
                unmatched,
                publications.len()
            );
        }

        let research_areas: Vec<Research> = field_stats
            .iter()
            .map(|(field, stats)| {
                let field_publications: Vec<Publication> = publications
                    .iter()
                    .filter(|p| {
                        scientists
                            .iter()
                            .any(|s| s.name == p.author && &s.field == field)
                    })
                    .cloned()
                    .collect();

                Research {
                    field: field.clone(),
                    total_scientists: stats.count,
                    avg_birth_year: stats.avg_birth_year,
                    nobel_winners: stats.nobel_count,
                    top_publications: self.high_impact_publications(&field_publications, scientists),
                }
            })
            .collect();

        // Global pass, deliberately not derived from the per-field lists
        let high_impact = self.high_impact_publications(publications, scientists);

        tracing::debug!(
            "Research database: {} fields, {}/{} publications at threshold {}",
            research_areas.len(),
            high_impact.len(),
            publications.len(),
            self.impact_threshold
        );

        Database {
            scientists: scientists.to_vec(),
            publications: high_impact,
            research_areas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScientistData;
    use approx::assert_relative_eq;

    fn titles(publications: &[Publication]) -> Vec<&str> {
        publications.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_reference_database() {
        let data = ScientistData::sample();
        let db = create_research_analyzer(15_000.0).analyze(&data.scientists, &data.publications);

        // Franklin (1200 × 8.8 = 10560) and McClintock (1500 × 9.0 = 13500) fall below
        assert_eq!(db.publications.len(), 6);
        assert!(!titles(&db.publications).contains(&"X-ray Studies of DNA"));
        assert!(!titles(&db.publications).contains(&"Genetic Control Systems"));

        let biology = db.research_area("Biology").unwrap();
        assert_eq!(biology.total_scientists, 4);
        assert_eq!(biology.nobel_winners, 4);
        assert_eq!(
            titles(&biology.top_publications),
            vec!["The Structure of DNA", "Nerve Growth Factor"]
        );

        let chemistry = db.research_area("Chemistry").unwrap();
        assert_relative_eq!(chemistry.avg_birth_year, (1901.0 + 1910.0 + 1920.0) / 3.0, epsilon = 1e-9);
        assert_eq!(chemistry.top_publications.len(), 2);

        let maths = db.research_area("Mathematics").unwrap();
        assert!(maths.top_publications.is_empty());
        assert_eq!(db.scientists.len(), 12);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let data = ScientistData::sample();
        // Bohr: 2500 × 9.2 = 23000
        let analyzer = create_research_analyzer(23_000.0);
        let bohr = &data.publications[0];
        assert!(analyzer.is_high_impact(bohr, &data.scientists));

        let analyzer = create_research_analyzer(23_000.5);
        assert!(!analyzer.is_high_impact(bohr, &data.scientists));
    }

    #[test]
    fn test_unmatched_author_excluded() {
        let data = ScientistData::sample();
        let orphan = Publication::new("Lost Paper", "Nobody Known", 1950, 1_000_000, "Nature");
        let analyzer = create_research_analyzer(0.0);
        assert!(!analyzer.is_high_impact(&orphan, &data.scientists));

        let db = analyzer.analyze(&data.scientists, &[orphan]);
        assert!(db.publications.is_empty());
        assert!(db.research_areas.iter().all(|r| r.top_publications.is_empty()));
    }

    #[test]
    fn test_shared_author_name_is_existential() {
        let scientists = vec![
            Scientist::new("Jo Smith", "Alchemy", 1900, None, "British"),
            Scientist::new("Jo Smith", "Mathematics", 1950, None, "American"),
        ];
        let paper = Publication::new("Shared Name", "Jo Smith", 1980, 2000, "Annals");

        // Alchemy scores 0, Mathematics 2000 × 8.5 = 17000
        let analyzer = create_research_analyzer(15_000.0);
        assert!(analyzer.is_high_impact(&paper, &scientists));

        let db = analyzer.analyze(&scientists, &[paper]);
        assert_eq!(db.publications.len(), 1);
        assert_eq!(db.research_area("Mathematics").unwrap().top_publications.len(), 1);
    }

    #[test]
    fn test_custom_impact_scores() {
        let data = ScientistData::sample();
        let scores: ImpactScores = [("Physics", 100.0)].into_iter().collect();
        let db = create_research_analyzer(200_000.0)
            .with_impact_scores(scores)
            .analyze(&data.scientists, &data.publications);

        // Only Physics papers can score: Bohr 250000, Curie 300000
        assert_eq!(titles(&db.publications), vec![
            "On the Constitution of Atoms and Molecules",
            "Radioactive Substances",
        ]);
    }
}
