//! Polars table views
//!
//! Converts ranking runs and field statistics into `DataFrame`s for console
//! display and CSV export.

use crate::error::Result;
use crate::metrics::field_stats::FieldStats;
use crate::metrics::ranking::ScientistRanking;
use polars::prelude::*;
use std::collections::BTreeMap;
use std::io::Write;

/// Columns: rank, name, field, birth_year, score, category
pub fn rankings_to_dataframe(rankings: &[ScientistRanking]) -> Result<DataFrame> {
    let ranks: Vec<u64> = rankings.iter().map(|r| r.rank as u64).collect();
    let names: Vec<String> = rankings.iter().map(|r| r.scientist.name.clone()).collect();
    let fields: Vec<String> = rankings.iter().map(|r| r.scientist.field.clone()).collect();
    let birth_years: Vec<i32> = rankings.iter().map(|r| r.scientist.birth_year).collect();
    let scores: Vec<f64> = rankings.iter().map(|r| r.score).collect();
    let categories: Vec<&str> = rankings.iter().map(|r| r.category.as_str()).collect();

    let df = df!(
        "rank" => ranks,
        "name" => names,
        "field" => fields,
        "birth_year" => birth_years,
        "score" => scores,
        "category" => categories,
    )?;

    Ok(df)
}

/// Columns: field, count, nobel_count, avg_birth_year, nobel_percentage
pub fn field_stats_to_dataframe(stats: &BTreeMap<String, FieldStats>) -> Result<DataFrame> {
    let fields: Vec<&str> = stats.keys().map(String::as_str).collect();
    let counts: Vec<u64> = stats.values().map(|s| s.count as u64).collect();
    let nobel_counts: Vec<u64> = stats.values().map(|s| s.nobel_count as u64).collect();
    let avg_birth_years: Vec<f64> = stats.values().map(|s| s.avg_birth_year).collect();
    let percentages: Vec<f64> = stats.values().map(|s| s.nobel_percentage).collect();

    let df = df!(
        "field" => fields,
        "count" => counts,
        "nobel_count" => nobel_counts,
        "avg_birth_year" => avg_birth_years,
        "nobel_percentage" => percentages,
    )?;

    Ok(df)
}

/// Write a table as CSV with a header row
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer).include_header(true).finish(df)?;
    Ok(())
}
