//! The `gamegrade problems` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gamegrade_core::config::load_config_from;
use gamegrade_core::problems::generate_problems;

pub fn execute(
    config_path: Option<PathBuf>,
    count: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut rng = super::make_rng(seed.or(config.seed));
    let problems = generate_problems(&mut rng, count);

    if json {
        println!("{}", serde_json::to_string_pretty(&problems)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer", "Difficulty"]);
    for (i, p) in problems.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            p.question.clone(),
            p.answer.to_string(),
            p.difficulty.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
