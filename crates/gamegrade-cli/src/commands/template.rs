//! The `gamegrade template` command.

use anyhow::Result;

use gamegrade_core::catalog::game_template;
use gamegrade_core::model::Category;

pub fn execute(
    id: String,
    title: String,
    category: String,
    description: String,
    icon: String,
) -> Result<()> {
    anyhow::ensure!(!id.trim().is_empty(), "game ID must not be empty");
    if Category::from_name(&category).is_none() {
        eprintln!("Warning: category '{category}' has no scoring table entry, defaults apply.");
    }
    println!("{}", game_template(&id, &title, &category, &description, &icon)?);
    Ok(())
}
