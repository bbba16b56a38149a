//! The `gamegrade check` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gamegrade_core::checks::run_checks;
use gamegrade_core::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, seed: Option<u64>, output: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut rng = super::make_rng(seed.or(config.seed));
    let suite = run_checks(&mut rng);

    let mut table = Table::new();
    table.set_header(vec!["Check", "Result"]);
    table.add_row(vec![
        "Arithmetic quiz".to_string(),
        format!(
            "{}/{} correct ({:.1}%)",
            suite.arithmetic.overall.correct,
            suite.arithmetic.overall.total,
            suite.arithmetic.overall.accuracy()
        ),
    ]);
    table.add_row(vec![
        "Sudoku".to_string(),
        (if suite.sudoku.valid { "valid" } else { "INVALID" }).to_string(),
    ]);
    table.add_row(vec![
        "Memory".to_string(),
        format!(
            "{} pairs in {} moves ({:.1}% efficiency)",
            suite.memory.matched_pairs, suite.memory.total_moves, suite.memory.efficiency
        ),
    ]);
    table.add_row(vec![
        "CrossMath".to_string(),
        (if suite.crossmath.solution_found {
            "solved"
        } else {
            "NO SOLUTION"
        })
        .to_string(),
    ]);
    println!("{table}");

    for (op, tally) in &suite.arithmetic.operations {
        println!("  {op}: {}/{} ({:.1}%)", tally.correct, tally.total, tally.accuracy());
    }
    println!("Completed in {}ms", suite.duration_ms);

    if let Some(path) = output {
        suite.save_json(&path)?;
        eprintln!("Results saved to: {}", path.display());
    }

    anyhow::ensure!(suite.logic_passed(), "game-logic checks failed");
    Ok(())
}
