//! Plain-text report generator.

use std::path::Path;

use anyhow::{Context, Result};

use gamegrade_core::report::AnalysisReport;
use gamegrade_core::statistics::by_complexity_desc;

/// Suggestions shown per game in the text report.
pub const SUGGESTIONS_SHOWN: usize = 2;

/// Render the report as plain text.
///
/// Games are listed by complexity, highest first; ties keep catalog order.
pub fn generate_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    out.push_str(&format!("🎮 {} Game Analysis Report\n", report.platform));
    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push('\n');

    out.push_str("📊 Overall Statistics:\n");
    out.push_str(&format!("  Total Games: {}\n", summary.total_games));
    out.push_str(&format!("  Average Complexity: {:.2}\n", summary.avg_complexity));
    out.push_str(&format!(
        "  Average Educational Value: {:.2}\n",
        summary.avg_educational_value
    ));
    out.push_str(&format!("  Average Engagement: {:.2}\n", summary.avg_engagement));
    out.push_str(&format!("  Average Overall Score: {:.2}\n", summary.avg_overall));
    out.push('\n');

    out.push_str("🎯 Individual Game Analysis:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');

    for analysis in by_complexity_desc(&report.analyses) {
        out.push_str(&format!("\n🎮 {}\n", analysis.title));
        out.push_str(&format!("   Category: {}\n", analysis.category));
        out.push_str(&format!("   Complexity: {:.2}\n", analysis.complexity_score));
        out.push_str(&format!("   Educational Value: {:.2}\n", analysis.educational_value));
        out.push_str(&format!("   Engagement: {:.2}\n", analysis.user_engagement));
        out.push_str(&format!("   Overall Score: {:.2}\n", analysis.overall_score()));

        if !analysis.suggestions.is_empty() {
            out.push_str("   💡 Suggestions:\n");
            for suggestion in analysis.suggestions.iter().take(SUGGESTIONS_SHOWN) {
                out.push_str(&format!("      - {suggestion}\n"));
            }
        }
    }

    out
}

/// Write a text report to a file.
pub fn write_text_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_text(report))
        .with_context(|| format!("failed to write text report to {}", path.display()))?;
    Ok(())
}
