//! Platform-wide recommendations built from per-game analyses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::GameAnalysis;
use crate::scoring::ScoreWeights;

/// Overall scores strictly above this are top performers.
pub const TOP_PERFORMER_THRESHOLD: f64 = 0.7;
/// Overall scores strictly below this need improvement.
pub const NEEDS_IMPROVEMENT_THRESHOLD: f64 = 0.5;

pub const PLATFORM_SUGGESTIONS: [&str; 5] = [
    "Consider adding more interactive elements to arithmetic games",
    "Implement a unified achievement system across all games",
    "Add difficulty progression for better user experience",
    "Include more visual and audio feedback",
    "Consider adding collaborative or competitive features",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub title: String,
    pub score: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedsImprovement {
    pub title: String,
    pub score: f64,
    pub suggestions: Vec<String>,
}

/// Aggregate recommendations for a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub top_performing: Vec<TopPerformer>,
    pub needs_improvement: Vec<NeedsImprovement>,
    /// Number of analyzed games per category string.
    pub category_balance: BTreeMap<String, usize>,
    pub overall_suggestions: Vec<String>,
}

impl Recommendations {
    /// Classify analyses by overall score and tally categories.
    ///
    /// Games scoring within `[0.5, 0.7]` land in neither list.
    pub fn build(analyses: &[GameAnalysis]) -> Self {
        Self::build_with(analyses, &ScoreWeights::default())
    }

    pub fn build_with(analyses: &[GameAnalysis], weights: &ScoreWeights) -> Self {
        let mut top_performing = Vec::new();
        let mut needs_improvement = Vec::new();
        let mut category_balance = BTreeMap::new();

        for analysis in analyses {
            let score = weights.overall(analysis);
            if score > TOP_PERFORMER_THRESHOLD {
                top_performing.push(TopPerformer {
                    title: analysis.title.clone(),
                    score,
                    category: analysis.category.clone(),
                });
            } else if score < NEEDS_IMPROVEMENT_THRESHOLD {
                needs_improvement.push(NeedsImprovement {
                    title: analysis.title.clone(),
                    score,
                    suggestions: analysis.suggestions.clone(),
                });
            }

            *category_balance.entry(analysis.category.clone()).or_insert(0) += 1;
        }

        tracing::debug!(
            top = top_performing.len(),
            needs_improvement = needs_improvement.len(),
            categories = category_balance.len(),
            "built recommendations"
        );

        Self {
            top_performing,
            needs_improvement,
            category_balance,
            overall_suggestions: PLATFORM_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
