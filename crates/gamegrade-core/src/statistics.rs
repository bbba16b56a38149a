//! Aggregate statistics across analyzed games.

use serde::{Deserialize, Serialize};

use crate::model::GameAnalysis;

/// Mean of every score dimension across a set of analyses.
///
/// An empty set reports zero for every mean rather than dividing by zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_games: usize,
    pub avg_complexity: f64,
    pub avg_educational_value: f64,
    pub avg_engagement: f64,
    pub avg_code_quality: f64,
    pub avg_overall: f64,
}

impl AnalysisSummary {
    pub fn compute(analyses: &[GameAnalysis]) -> Self {
        if analyses.is_empty() {
            return Self::default();
        }

        let n = analyses.len() as f64;
        let mean = |f: fn(&GameAnalysis) -> f64| analyses.iter().map(f).sum::<f64>() / n;

        Self {
            total_games: analyses.len(),
            avg_complexity: mean(|a| a.complexity_score),
            avg_educational_value: mean(|a| a.educational_value),
            avg_engagement: mean(|a| a.user_engagement),
            avg_code_quality: mean(|a| a.code_quality),
            avg_overall: mean(GameAnalysis::overall_score),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_games == 0
    }
}

/// Analyses ordered by complexity, highest first. Ties keep input order.
pub fn by_complexity_desc(analyses: &[GameAnalysis]) -> Vec<&GameAnalysis> {
    let mut sorted: Vec<&GameAnalysis> = analyses.iter().collect();
    sorted.sort_by(|a, b| b.complexity_score.total_cmp(&a.complexity_score));
    sorted
}
