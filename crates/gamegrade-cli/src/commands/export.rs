//! The `gamegrade export` command.

use std::path::PathBuf;

use anyhow::Result;

use gamegrade_core::catalog::CatalogExport;

pub fn execute(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let (config, games) = super::load_games(config_path, catalog)?;
    let output = output.unwrap_or_else(|| config.output_dir.join("games_export.json"));

    let export = CatalogExport::new(config.platform, games, &config.languages);
    export.save_json(&output)?;
    println!(
        "Exported {} games to {}",
        export.statistics.total_games,
        output.display()
    );

    Ok(())
}
