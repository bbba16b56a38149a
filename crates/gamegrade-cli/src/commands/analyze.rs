//! The `gamegrade analyze` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gamegrade_core::config::load_config_from;
use gamegrade_core::extract::load_catalog_or_empty;
use gamegrade_core::report::AnalysisReport;
use gamegrade_core::scoring::Scorer;
use gamegrade_core::statistics::by_complexity_desc;
use gamegrade_report::html::write_html_report;
use gamegrade_report::text::{generate_text, write_text_report};

pub fn execute(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let formats: Vec<&str> = if format == "all" {
        vec!["text", "json", "html"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    for fmt in &formats {
        anyhow::ensure!(
            matches!(*fmt, "text" | "json" | "html"),
            "unknown format '{fmt}' (expected text, json, html or all)"
        );
    }

    let config = load_config_from(config_path.as_deref())?;
    let catalog = catalog.unwrap_or_else(|| config.catalog.clone());

    let games = load_catalog_or_empty(&catalog);
    let report = AnalysisReport::analyze(&config.platform.name, &Scorer::default(), &games);

    // Plain `--format text` without `--output` goes to stdout; anything else
    // is written to files.
    if output.is_none() && formats == ["text"] {
        println!("{}", generate_text(&report));
        return Ok(());
    }
    let output = output.unwrap_or_else(|| config.output_dir.clone());

    print_summary(&report);

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    for fmt in &formats {
        match *fmt {
            "text" => {
                let path = output.join(format!("analysis-{timestamp}.txt"));
                write_text_report(&report, &path)?;
                eprintln!("Text report: {}", path.display());
            }
            "json" => {
                let path = output.join(format!("analysis-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("analysis-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => unreachable!("formats validated above"),
        }
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "Game",
        "Category",
        "Complexity",
        "Educational",
        "Engagement",
        "Overall",
    ]);

    for a in by_complexity_desc(&report.analyses) {
        table.add_row(vec![
            Cell::new(&a.title),
            Cell::new(&a.category),
            Cell::new(format!("{:.2}", a.complexity_score)),
            Cell::new(format!("{:.2}", a.educational_value)),
            Cell::new(format!("{:.2}", a.user_engagement)),
            Cell::new(format!("{:.2}", a.overall_score())),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "{} games, average overall score {:.2}",
        report.summary.total_games, report.summary.avg_overall
    );
}
