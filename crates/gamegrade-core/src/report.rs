//! Analysis report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{GameAnalysis, GameRecord};
use crate::recommend::Recommendations;
use crate::scoring::Scorer;
use crate::statistics::AnalysisSummary;

/// A complete analysis run over one catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Platform name shown in report headers.
    pub platform: String,
    /// One analysis per catalog entry, in catalog order.
    pub analyses: Vec<GameAnalysis>,
    pub recommendations: Recommendations,
    pub summary: AnalysisSummary,
}

impl AnalysisReport {
    /// Score every record and assemble the report.
    pub fn analyze(platform: impl Into<String>, scorer: &Scorer, records: &[GameRecord]) -> Self {
        Self::from_analyses(platform, scorer.analyze_all(records))
    }

    pub fn from_analyses(platform: impl Into<String>, analyses: Vec<GameAnalysis>) -> Self {
        let recommendations = Recommendations::build(&analyses);
        let summary = AnalysisSummary::compute(&analyses);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            platform: platform.into(),
            analyses,
            recommendations,
            summary,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_games() -> Vec<GameRecord> {
        vec![
            GameRecord::new("addition-sprint", "Addition Sprint", "arithmetic", "Fast-paced addition practice game"),
            GameRecord::new("sudoku", "Sudoku", "puzzle", "Classic number puzzle game"),
            GameRecord::new("memory-cards", "Memory Cards", "memory", "Match pairs of cards to test your memory"),
            GameRecord::new("crossmath", "CrossMath", "puzzle", "Mathematical crossword puzzle"),
        ]
    }

    #[test]
    fn analyze_builds_everything() {
        let report = AnalysisReport::analyze("MathWorld", &Scorer::default(), &sample_games());
        assert_eq!(report.analyses.len(), 4);
        assert_eq!(report.summary.total_games, 4);
        assert_eq!(report.recommendations.category_balance.get("puzzle"), Some(&2));
        // Sudoku: 0.4*0.8 + 0.3*1.0 + 0.2*0.7 + 0.1*0.8 = 0.84
        assert!(report
            .recommendations
            .top_performing
            .iter()
            .any(|t| t.title == "Sudoku"));
    }

    #[test]
    fn empty_catalog_report() {
        let report = AnalysisReport::analyze("MathWorld", &Scorer::default(), &[]);
        assert!(report.analyses.is_empty());
        assert!(report.summary.is_empty());
        assert_eq!(report.recommendations.overall_suggestions.len(), 5);
    }

    #[test]
    fn json_roundtrip() {
        let report = AnalysisReport::analyze("MathWorld", &Scorer::default(), &sample_games());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = AnalysisReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.analyses.len(), report.analyses.len());
        for (a, b) in loaded.analyses.iter().zip(&report.analyses) {
            assert_eq!(a.game_id, b.game_id);
            assert_eq!(a.suggestions, b.suggestions);
            assert!((a.overall_score() - b.overall_score()).abs() < 1e-9);
        }
        assert_eq!(
            loaded.recommendations.category_balance,
            report.recommendations.category_balance
        );
    }
}
