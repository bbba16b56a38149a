//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use gamegrade_core::model::GameAnalysis;
use gamegrade_core::recommend::{NEEDS_IMPROVEMENT_THRESHOLD, TOP_PERFORMER_THRESHOLD};
use gamegrade_core::report::AnalysisReport;
use gamegrade_core::statistics::by_complexity_desc;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn score_class(score: f64) -> &'static str {
    if score > TOP_PERFORMER_THRESHOLD {
        "pass"
    } else if score < NEEDS_IMPROVEMENT_THRESHOLD {
        "fail"
    } else {
        "mid"
    }
}

/// Generate an HTML page from an analysis report.
pub fn generate_html(report: &AnalysisReport) -> String {
    let mut html = String::new();
    let summary = &report.summary;

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} game analysis</title>\n",
        html_escape(&report.platform)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>{} Game Analysis Report</h1>\n",
        html_escape(&report.platform)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} games | {}</p>\n",
        summary.total_games,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Overall Statistics</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Total Games</th><th>Complexity</th><th>Educational Value</th><th>Engagement</th><th>Code Quality</th><th>Overall</th></tr></thead>\n");
    html.push_str(&format!(
        "<tbody><tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr></tbody>\n",
        summary.total_games,
        summary.avg_complexity,
        summary.avg_educational_value,
        summary.avg_engagement,
        summary.avg_code_quality,
        summary.avg_overall,
    ));
    html.push_str("</table>\n");

    if !report.analyses.is_empty() {
        html.push_str(&generate_bar_chart(&report.analyses));
    }
    html.push_str("</section>\n");

    // Per-game results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Games</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"results\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Game</th><th onclick=\"sortTable(1)\">Category</th><th onclick=\"sortTable(2)\">Complexity</th><th onclick=\"sortTable(3)\">Educational</th><th onclick=\"sortTable(4)\">Engagement</th><th onclick=\"sortTable(5)\">Overall</th><th>Suggestions</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for a in by_complexity_desc(&report.analyses) {
        let overall = a.overall_score();
        let suggestions = a
            .suggestions
            .iter()
            .map(|s| format!("<li>{}</li>", html_escape(s)))
            .collect::<String>();
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td class=\"{}\">{:.2}</td><td><ul>{}</ul></td></tr>\n",
            html_escape(&a.title),
            html_escape(&a.category),
            a.complexity_score,
            a.educational_value,
            a.user_engagement,
            score_class(overall),
            overall,
            suggestions,
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Recommendations
    let recs = &report.recommendations;
    html.push_str("<section class=\"recommendations\">\n");
    html.push_str("<h2>Recommendations</h2>\n");

    html.push_str("<h3>Top performing</h3>\n<ul>\n");
    for t in &recs.top_performing {
        html.push_str(&format!(
            "<li class=\"pass\">{} ({}) {:.2}</li>\n",
            html_escape(&t.title),
            html_escape(&t.category),
            t.score
        ));
    }
    html.push_str("</ul>\n");

    html.push_str("<h3>Needs improvement</h3>\n<ul>\n");
    for n in &recs.needs_improvement {
        html.push_str(&format!(
            "<li class=\"fail\">{} {:.2}</li>\n",
            html_escape(&n.title),
            n.score
        ));
    }
    html.push_str("</ul>\n");

    html.push_str("<h3>Category balance</h3>\n<table>\n<thead><tr><th>Category</th><th>Games</th></tr></thead>\n<tbody>\n");
    for (category, count) in &recs.category_balance {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            html_escape(category),
            count
        ));
    }
    html.push_str("</tbody></table>\n");

    html.push_str("<h3>Platform suggestions</h3>\n<ul>\n");
    for s in &recs.overall_suggestions {
        html.push_str(&format!("<li>{}</li>\n", html_escape(s)));
    }
    html.push_str("</ul>\n</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

/// Horizontal bars of overall score, one per game.
fn generate_bar_chart(analyses: &[GameAnalysis]) -> String {
    let bar_height = 24;
    let max_width = 400;
    let padding = 8;
    let label_width = 200;

    let total_height = analyses.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, a) in analyses.iter().enumerate() {
        let score = a.overall_score();
        let y = i * (bar_height + padding) + padding;
        let width = (score * max_width as f64) as usize;

        let color = match score_class(score) {
            "pass" => "#22c55e",
            "mid" => "#eab308",
            _ => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&a.title)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.2}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --mid: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --mid: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; vertical-align: top; }
th { background: var(--border); cursor: pointer; }
td ul { margin: 0; padding-left: 1.2rem; }
.pass { background: var(--pass); }
.mid { background: var(--mid); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('results');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    const na = parseFloat(va), nb = parseFloat(vb);
    const cmp = isNaN(na) || isNaN(nb) ? va.localeCompare(vb) : na - nb;
    return asc ? cmp : -cmp;
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
