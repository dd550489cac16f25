// Scientist analytics report
//
// Prints processors, statistics, the research database, filter results and
// the impact ranking for the reference dataset (or a JSON replacement).
//
// Usage: cargo run --bin scientist_report
//
// Environment:
//   ANALYTICS_CONFIG   JSON config path (impact table, threshold, name set)
//   SCIENTIST_DATASET  JSON dataset path ({"scientists": [...], "publications": [...]})
//   IMPACT_THRESHOLD   overrides the configured threshold
//   REPORT_YEAR        pins the ranking year (default: current year)
//   RANKINGS_CSV       writes the ranking table to this path

use anyhow::{Context, Result};
use scientist_analytics::utils::tables::{field_stats_to_dataframe, rankings_to_dataframe, write_csv};
use scientist_analytics::{
    apply_filter, calculate_basic_stats, calculate_field_statistics, create_era_filter,
    create_field_group_filter, create_nationality_filter, create_scientist_processors,
    AnalyticsConfig, ResearchAnalyzer, ScientistData, ScientistRanker,
};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scientist_analytics=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match std::env::var("ANALYTICS_CONFIG") {
        Ok(path) => AnalyticsConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load config {}", path))?,
        Err(_) => AnalyticsConfig::default(),
    };

    if let Ok(raw) = std::env::var("IMPACT_THRESHOLD") {
        let threshold: f64 = raw
            .parse()
            .with_context(|| format!("IMPACT_THRESHOLD is not a number: {}", raw))?;
        config = config.with_impact_threshold(threshold);
        config.validate()?;
    }

    let data = match std::env::var("SCIENTIST_DATASET") {
        Ok(path) => ScientistData::from_json_file(Path::new(&path))
            .with_context(|| format!("Failed to load dataset {}", path))?,
        Err(_) => ScientistData::sample(),
    };

    let report_year = parse_report_year(std::env::var("REPORT_YEAR").ok())?;

    print_section("PROCESSORS");
    let processors = create_scientist_processors(&config);
    for scientist in &data.scientists {
        println!("Scientist: {}", scientist.name);
        println!("  Is Nobel Winner: {}", processors.is_nobel_winner(scientist));
        println!("  Is Female (name heuristic): {}", processors.is_likely_female(scientist));
        println!("  Field Prefix: {}", processors.field_prefix(scientist));
        println!("  Formatted: {}", processors.format_scientist(scientist));
    }

    print_section("BASIC STATISTICS");
    let basic = calculate_basic_stats(&data.scientists);
    println!("Scientists:        {}", data.scientists.len());
    println!("Nobel winners:     {}", basic.nobel_count());
    println!("Total birth years: {}", basic.total_birth_years);
    println!("Mean birth year:   {:.2}", basic.avg_birth_year);
    println!("Names: {}", basic.upper_names.join(", "));

    print_section("FIELD STATISTICS");
    let field_stats = calculate_field_statistics(&data.scientists);
    println!("{}", field_stats_to_dataframe(&field_stats)?);

    print_section("RESEARCH DATABASE");
    let analyzer = ResearchAnalyzer::from_config(&config);
    let database = analyzer.analyze(&data.scientists, &data.publications);
    println!(
        "High-impact publications (threshold {}): {}",
        analyzer.impact_threshold(),
        database.publications.len()
    );
    for publication in &database.publications {
        println!("  {} - {} ({}, {} citations)", publication.title, publication.author, publication.year, publication.citations);
    }
    for area in &database.research_areas {
        println!(
            "{}: {} scientists, mean birth year {:.1}, {} Nobel winners, {} top publications",
            area.field,
            area.total_scientists,
            area.avg_birth_year,
            area.nobel_winners,
            area.top_publications.len()
        );
    }

    print_section("FILTERS");
    let early = apply_filter(&data.scientists, create_era_filter(1900, 1915));
    println!("Born 1900-1915: {}", names(&early));

    let anglo = apply_filter(&data.scientists, create_nationality_filter(["American", "British"]));
    println!("American or British: {}", names(&anglo));

    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    groups.insert("physical", vec!["Physics", "Chemistry"]);
    groups.insert("life", vec!["Biology"]);
    let natural = apply_filter(&data.scientists, create_field_group_filter(groups));
    println!("Natural sciences: {}", names(&natural));

    print_section("IMPACT RANKING");
    let ranker = ScientistRanker::from_config(&config);
    let rankings = match report_year {
        Some(year) => ranker.rank_scientists(&data.scientists, year),
        None => ranker.rank_scientists_now(&data.scientists),
    };
    let mut ranking_table = rankings_to_dataframe(&rankings)?;
    println!("{}", ranking_table);

    if let Ok(path) = std::env::var("RANKINGS_CSV") {
        let file = File::create(&path).with_context(|| format!("Failed to create {}", path))?;
        write_csv(&mut ranking_table, file)?;
        tracing::info!("Wrote {} rankings to {}", rankings.len(), path);
    }

    Ok(())
}

/// Unset means "use the wall clock"; a set but unparsable value is an error
fn parse_report_year(raw: Option<String>) -> Result<Option<i32>> {
    raw.map(|raw| {
        raw.trim()
            .parse::<i32>()
            .with_context(|| format!("REPORT_YEAR is not a year: {}", raw))
    })
    .transpose()
}

fn print_section(title: &str) {
    println!("\n{}", "=".repeat(70));
    println!("{}", title);
    println!("{}", "=".repeat(70));
}

fn names(scientists: &[scientist_analytics::Scientist]) -> String {
    scientists
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
