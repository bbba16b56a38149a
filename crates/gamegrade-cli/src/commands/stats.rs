//! The `gamegrade stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gamegrade_core::catalog::CatalogStats;

pub fn execute(config_path: Option<PathBuf>, catalog: Option<PathBuf>, json: bool) -> Result<()> {
    let (config, games) = super::load_games(config_path, catalog)?;
    let stats = CatalogStats::compute(&games, &config.languages);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total games: {}", stats.total_games);
    println!("Languages: {}", stats.languages_supported.join(", "));

    let mut table = Table::new();
    table.set_header(vec!["Category", "Games", "Titles"]);
    for (category, count) in &stats.categories {
        let titles = stats
            .games_by_category
            .get(category)
            .map(|t| t.join(", "))
            .unwrap_or_default();
        table.add_row(vec![category.clone(), count.to_string(), titles]);
    }
    println!("{table}");

    let distribution: Vec<String> = stats
        .difficulty_distribution
        .iter()
        .map(|(d, n)| format!("{d}={n}"))
        .collect();
    println!("Difficulty: {}", distribution.join(" "));

    Ok(())
}
