//! The `gamegrade extract` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

pub fn execute(config_path: Option<PathBuf>, catalog: Option<PathBuf>, json: bool) -> Result<()> {
    let (_, games) = super::load_games(config_path, catalog)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Category", "Icon", "Description"]);
    for game in &games {
        table.add_row(vec![
            game.id.as_str(),
            game.title.as_str(),
            game.category.as_str(),
            game.icon.as_deref().unwrap_or("-"),
            game.description.as_str(),
        ]);
    }
    println!("{table}");
    println!("{} game(s)", games.len());

    Ok(())
}
