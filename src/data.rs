//! Record Types and Dataset Holder
//!
//! Immutable value records for scientists, publications and the derived
//! per-field research summaries, plus the reference dataset used by the
//! report binary and the tests.
//!
//! Publications point at their author by name only. Nothing enforces that
//! a matching `Scientist` exists; unmatched publications simply drop out of
//! any per-field attribution.

use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single scientist record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scientist {
    pub name: String,
    /// Research field, e.g. "Physics"
    pub field: String,
    pub birth_year: i32,
    /// Prize description such as "Physics 1921"; `None` = no prize
    pub nobel_prize: Option<String>,
    pub nationality: String,
}

impl Scientist {
    pub fn new(
        name: &str,
        field: &str,
        birth_year: i32,
        nobel_prize: Option<&str>,
        nationality: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            field: field.to_string(),
            birth_year,
            nobel_prize: nobel_prize.map(str::to_string),
            nationality: nationality.to_string(),
        }
    }

    /// True when a prize description is present and not blank
    pub fn has_nobel_prize(&self) -> bool {
        self.nobel_prize
            .as_deref()
            .is_some_and(|prize| !prize.trim().is_empty())
    }
}

/// A single publication record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    /// Matches `Scientist::name` by exact string equality
    pub author: String,
    pub year: i32,
    pub citations: u32,
    pub journal: String,
}

impl Publication {
    pub fn new(title: &str, author: &str, year: i32, citations: u32, journal: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            citations,
            journal: journal.to_string(),
        }
    }
}

/// Per-field research summary (computed fresh on every database build)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Research {
    pub field: String,
    pub total_scientists: usize,
    pub avg_birth_year: f64,
    pub nobel_winners: usize,
    pub top_publications: Vec<Publication>,
}

/// Aggregate root produced by one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub scientists: Vec<Scientist>,
    /// High-impact publications across the whole input
    pub publications: Vec<Publication>,
    pub research_areas: Vec<Research>,
}

impl Database {
    /// Look up the research summary for one field
    pub fn research_area(&self, field: &str) -> Option<&Research> {
        self.research_areas.iter().find(|r| r.field == field)
    }
}

/// Scientist and publication lists analysed together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScientistData {
    pub scientists: Vec<Scientist>,
    pub publications: Vec<Publication>,
}

impl ScientistData {
    /// Reference dataset: 12 scientists and 8 landmark publications
    pub fn sample() -> Self {
        let scientists = vec![
            Scientist::new("Marie Curie", "Physics", 1867, Some("Physics 1903, Chemistry 1911"), "French"),
            Scientist::new("Albert Einstein", "Physics", 1879, Some("Physics 1921"), "German"),
            Scientist::new("Niels Bohr", "Physics", 1885, Some("Physics 1922"), "Danish"),
            Scientist::new("Linus Pauling", "Chemistry", 1901, Some("Chemistry 1954, Peace 1962"), "American"),
            Scientist::new("Barbara McClintock", "Biology", 1902, Some("Physiology/Medicine 1983"), "American"),
            Scientist::new("Dorothy Hodgkin", "Chemistry", 1910, Some("Chemistry 1964"), "British"),
            Scientist::new("Rosalind Franklin", "Chemistry", 1920, None, "British"),
            Scientist::new("James Watson", "Biology", 1928, Some("Physiology/Medicine 1962"), "American"),
            Scientist::new("Francis Crick", "Biology", 1916, Some("Physiology/Medicine 1962"), "British"),
            Scientist::new("Chien-Shiung Wu", "Physics", 1912, None, "Chinese"),
            Scientist::new("Rita Levi-Montalcini", "Biology", 1909, Some("Physiology/Medicine 1986"), "Italian"),
            Scientist::new("Katherine Johnson", "Mathematics", 1918, None, "American"),
        ];

        let publications = vec![
            Publication::new("On the Constitution of Atoms and Molecules", "Niels Bohr", 1913, 2500, "Philosophical Magazine"),
            Publication::new("The Structure of DNA", "James Watson", 1953, 8000, "Nature"),
            Publication::new("X-ray Studies of DNA", "Rosalind Franklin", 1953, 1200, "Acta Crystallographica"),
            Publication::new("The Nature of the Chemical Bond", "Linus Pauling", 1939, 5000, "Journal of American Chemical Society"),
            Publication::new("Radioactive Substances", "Marie Curie", 1904, 3000, "Annales de Physique"),
            Publication::new("Genetic Control Systems", "Barbara McClintock", 1961, 1500, "Cold Spring Harbor Symposia"),
            Publication::new("Protein Crystallography", "Dorothy Hodgkin", 1935, 2200, "Nature"),
            Publication::new("Nerve Growth Factor", "Rita Levi-Montalcini", 1960, 1800, "Science"),
        ];

        Self { scientists, publications }
    }

    /// Load a replacement dataset from JSON
    ///
    /// Expected shape: `{ "scientists": [...], "publications": [...] }`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| AnalyticsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let data: ScientistData = serde_json::from_str(&contents)?;
        tracing::info!(
            "Loaded dataset from {:?}: {} scientists, {} publications",
            path,
            data.scientists.len(),
            data.publications.len()
        );

        Ok(data)
    }
}
