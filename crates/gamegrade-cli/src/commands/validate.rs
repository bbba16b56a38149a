//! The `gamegrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gamegrade_core::catalog::validate_catalog;

pub fn execute(config_path: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<()> {
    let (_, games) = super::load_games(config_path, catalog)?;
    println!("Catalog: {} games", games.len());

    let warnings = validate_catalog(&games);
    for w in &warnings {
        let prefix = w
            .game_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
