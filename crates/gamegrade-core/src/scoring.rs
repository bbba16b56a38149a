//! Heuristic game scoring.
//!
//! Each scorer starts from a per-category value and adds keyword bonuses
//! found by substring search in the record text. All scores are clamped into
//! `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::model::{Category, GameAnalysis, GameRecord};

/// A per-category value with a fallback for categories outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub arithmetic: f64,
    pub puzzle: f64,
    pub memory: f64,
    pub logic: f64,
    pub geometry: f64,
    pub advanced: f64,
    pub fallback: f64,
}

impl CategoryTable {
    pub fn get(&self, category: Option<Category>) -> f64 {
        match category {
            Some(Category::Arithmetic) => self.arithmetic,
            Some(Category::Puzzle) => self.puzzle,
            Some(Category::Memory) => self.memory,
            Some(Category::Logic) => self.logic,
            Some(Category::Geometry) => self.geometry,
            Some(Category::Advanced) => self.advanced,
            None => self.fallback,
        }
    }
}

/// Base complexity per category.
pub const COMPLEXITY_BASE: CategoryTable = CategoryTable {
    arithmetic: 0.3,
    puzzle: 0.7,
    memory: 0.4,
    logic: 0.8,
    geometry: 0.6,
    advanced: 0.9,
    fallback: 0.5,
};

/// Base educational value per category.
pub const EDUCATIONAL_BASE: CategoryTable = CategoryTable {
    arithmetic: 0.9,
    puzzle: 0.8,
    memory: 0.6,
    logic: 0.9,
    geometry: 0.8,
    advanced: 0.7,
    fallback: 0.5,
};

/// Engagement bonus per category, added on top of [`ENGAGEMENT_FLOOR`].
pub const ENGAGEMENT_BONUS: CategoryTable = CategoryTable {
    arithmetic: 0.6,
    puzzle: 0.9,
    memory: 0.8,
    logic: 0.8,
    geometry: 0.7,
    advanced: 0.5,
    fallback: 0.0,
};

pub const ENGAGEMENT_FLOOR: f64 = 0.5;

/// Placeholder until games ship with analyzable source.
pub const CODE_QUALITY_PLACEHOLDER: f64 = 0.8;

/// Difficulty tiers used by the complexity scorer, with per-keyword increments.
pub const DIFFICULTY_TIERS: &[(&str, &[&str], f64)] = &[
    ("easy", &["basic", "simple", "beginner", "elementary"], 0.1),
    ("medium", &["intermediate", "moderate", "standard"], 0.3),
    ("hard", &["advanced", "expert", "challenging", "complex"], 0.5),
];

pub const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "math",
    "mathematics",
    "calculate",
    "solve",
    "problem",
    "equation",
    "formula",
    "geometry",
    "algebra",
    "fraction",
    "percentage",
    "statistics",
    "probability",
    "logic",
    "reasoning",
];

pub const ENGAGEMENT_KEYWORDS: &[&str] = &[
    "game",
    "challenge",
    "puzzle",
    "match",
    "find",
    "solve",
    "interactive",
    "fun",
    "exciting",
    "adventure",
    "quest",
];

const ARITHMETIC_SUGGESTIONS: [&str; 4] = [
    "Add progressive difficulty levels",
    "Include visual aids and animations",
    "Add time-based challenges",
    "Implement streak tracking",
];

const PUZZLE_SUGGESTIONS: [&str; 4] = [
    "Add hint system for difficult puzzles",
    "Implement multiple difficulty levels",
    "Add puzzle generation algorithms",
    "Include solution explanations",
];

const MEMORY_SUGGESTIONS: [&str; 4] = [
    "Add sound effects for better engagement",
    "Implement memory training exercises",
    "Add difficulty progression",
    "Include memory tips and strategies",
];

const LOGIC_SUGGESTIONS: [&str; 4] = [
    "Add step-by-step solution guides",
    "Implement logical reasoning explanations",
    "Add multiple solution paths",
    "Include logical thinking tips",
];

pub const GENERAL_SUGGESTIONS: [&str; 4] = [
    "Add achievement system",
    "Implement progress tracking",
    "Add multiplayer or competitive modes",
    "Include accessibility features",
];

pub const MAX_SUGGESTIONS: usize = 4;

/// Category-specific suggestions. Geometry and advanced games have none.
pub fn category_suggestions(category: Option<Category>) -> &'static [&'static str] {
    match category {
        Some(Category::Arithmetic) => &ARITHMETIC_SUGGESTIONS,
        Some(Category::Puzzle) => &PUZZLE_SUGGESTIONS,
        Some(Category::Memory) => &MEMORY_SUGGESTIONS,
        Some(Category::Logic) => &LOGIC_SUGGESTIONS,
        _ => &[],
    }
}

/// Weights of the overall score. They sum to 1.0, so the overall score of
/// in-range inputs stays in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub educational: f64,
    pub engagement: f64,
    pub complexity: f64,
    pub code_quality: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            educational: 0.4,
            engagement: 0.3,
            complexity: 0.2,
            code_quality: 0.1,
        }
    }
}

impl ScoreWeights {
    pub fn overall(&self, analysis: &GameAnalysis) -> f64 {
        self.combine(
            analysis.educational_value,
            analysis.user_engagement,
            analysis.complexity_score,
            analysis.code_quality,
        )
    }

    pub fn combine(&self, educational: f64, engagement: f64, complexity: f64, code_quality: f64) -> f64 {
        educational * self.educational
            + engagement * self.engagement
            + complexity * self.complexity
            + code_quality * self.code_quality
    }
}

/// The three category tables a [`Scorer`] reads from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringTables {
    pub complexity: CategoryTable,
    pub educational: CategoryTable,
    pub engagement: CategoryTable,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            complexity: COMPLEXITY_BASE,
            educational: EDUCATIONAL_BASE,
            engagement: ENGAGEMENT_BONUS,
        }
    }
}

/// Number of keywords from `keywords` that occur anywhere in `text`.
///
/// Substring containment, not word matching: "mathematics" also counts
/// "math".
fn keyword_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// Scores game records against fixed category tables and keyword lists.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    tables: ScoringTables,
}

impl Scorer {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Category base plus a per-keyword increment for each difficulty keyword
    /// found in the description.
    pub fn complexity(&self, record: &GameRecord) -> f64 {
        let description = record.description.to_lowercase();
        // One addition per hit, in tier order, so float rounding matches a
        // running total.
        DIFFICULTY_TIERS
            .iter()
            .flat_map(|(_, keywords, step)| {
                keywords
                    .iter()
                    .filter(|k| description.contains(*k))
                    .map(move |_| *step)
            })
            .fold(self.tables.complexity.get(record.kind()), |acc, step| acc + step)
            .min(1.0)
    }

    pub fn educational_value(&self, record: &GameRecord) -> f64 {
        let hits = keyword_hits(&record.search_text(), EDUCATIONAL_KEYWORDS);
        let bonus = (hits as f64 * 0.1).min(0.3);
        (self.tables.educational.get(record.kind()) + bonus).min(1.0)
    }

    pub fn engagement(&self, record: &GameRecord) -> f64 {
        let hits = keyword_hits(&record.search_text(), ENGAGEMENT_KEYWORDS);
        let bonus = (hits as f64 * 0.05).min(0.2);
        (ENGAGEMENT_FLOOR + self.tables.engagement.get(record.kind()) + bonus).min(1.0)
    }

    /// Category suggestions followed by the general list, truncated to four.
    ///
    /// Every category with its own list fills all four slots, so the general
    /// suggestions only appear for the remaining categories.
    pub fn suggestions(&self, record: &GameRecord) -> Vec<String> {
        category_suggestions(record.kind())
            .iter()
            .chain(GENERAL_SUGGESTIONS.iter())
            .take(MAX_SUGGESTIONS)
            .map(|s| s.to_string())
            .collect()
    }

    pub fn analyze(&self, record: &GameRecord) -> GameAnalysis {
        let analysis = GameAnalysis {
            game_id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            complexity_score: self.complexity(record),
            educational_value: self.educational_value(record),
            user_engagement: self.engagement(record),
            code_quality: CODE_QUALITY_PLACEHOLDER,
            suggestions: self.suggestions(record),
        };
        tracing::debug!(
            game = %analysis.game_id,
            complexity = analysis.complexity_score,
            educational = analysis.educational_value,
            engagement = analysis.user_engagement,
            "scored game"
        );
        analysis
    }

    /// Analyze every record, preserving input order.
    pub fn analyze_all(&self, records: &[GameRecord]) -> Vec<GameAnalysis> {
        records.iter().map(|r| self.analyze(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, title: &str, description: &str) -> GameRecord {
        GameRecord::new("test", title, category, description)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn complexity_basic_arithmetic() {
        let scorer = Scorer::default();
        let score = scorer.complexity(&record("arithmetic", "", "basic addition practice"));
        assert!(close(score, 0.4), "got {score}");
    }

    #[test]
    fn complexity_logic_without_keywords() {
        let scorer = Scorer::default();
        assert!(close(scorer.complexity(&record("logic", "", "")), 0.8));
    }

    #[test]
    fn complexity_accumulates_across_keywords_and_clamps() {
        let scorer = Scorer::default();
        // 0.5 fallback + simple (0.1) + basic (0.1)
        let score = scorer.complexity(&record("addition", "", "A simple, basic drill"));
        assert!(close(score, 0.7), "got {score}");

        let score = scorer.complexity(&record("puzzle", "", "An advanced expert challenge"));
        assert!(close(score, 1.0));
    }

    #[test]
    fn complexity_adds_each_hit_to_a_running_total() {
        let scorer = Scorer::default();
        let geometry = scorer.complexity(&record("geometry", "", ""));
        let memory = scorer.complexity(&record("memory", "", "a basic simple deck"));
        // 0.4 + 0.1 + 0.1, not 0.4 + 0.2
        assert_eq!(memory, 0.4 + 0.1 + 0.1);
        assert_eq!(geometry, 0.6);
        assert_eq!(memory, geometry);
    }

    #[test]
    fn equal_complexity_keeps_catalog_order() {
        let scorer = Scorer::default();
        let analyses = scorer.analyze_all(&[
            GameRecord::new("geo", "Geo", "geometry", ""),
            GameRecord::new("mem", "Mem", "memory", "a basic simple deck"),
        ]);
        let order: Vec<&str> = crate::statistics::by_complexity_desc(&analyses)
            .iter()
            .map(|a| a.game_id.as_str())
            .collect();
        assert_eq!(order, vec!["geo", "mem"]);
    }

    #[test]
    fn complexity_ignores_title() {
        let scorer = Scorer::default();
        let score = scorer.complexity(&record("memory", "Expert Memory", "Match pairs"));
        assert!(close(score, 0.4));
    }

    #[test]
    fn educational_value_keyword_bonus_is_capped() {
        let scorer = Scorer::default();
        // "mathematics" also contains "math": two hits
        let score = scorer.educational_value(&record("memory", "Mathematics", ""));
        assert!(close(score, 0.8), "got {score}");

        let score = scorer.educational_value(&record(
            "unknown",
            "Algebra",
            "solve an equation with a formula",
        ));
        assert!(close(score, 0.8), "got {score}");
    }

    #[test]
    fn educational_value_clamps_to_one() {
        let scorer = Scorer::default();
        let score = scorer.educational_value(&record("logic", "Logic Math", "solve it"));
        assert!(close(score, 1.0));
    }

    #[test]
    fn engagement_adds_category_bonus_to_floor() {
        let scorer = Scorer::default();
        assert!(close(scorer.engagement(&record("addition", "", "")), 0.5));
        let score = scorer.engagement(&record("advanced", "Percentage Pro", ""));
        assert!(close(score, 1.0));
        let score = scorer.engagement(&record("unknown", "Fun Quest", "Find the treasure"));
        // fun, quest, find
        assert!(close(score, 0.65), "got {score}");
    }

    #[test]
    fn engagement_keyword_bonus_is_capped() {
        let scorer = Scorer::default();
        let score = scorer.engagement(&record(
            "x",
            "Fun game",
            "an exciting interactive adventure quest",
        ));
        assert!(close(score, 0.7), "got {score}");
    }

    #[test]
    fn suggestions_for_known_categories_are_category_specific() {
        let scorer = Scorer::default();
        for category in [Category::Arithmetic, Category::Puzzle, Category::Memory, Category::Logic] {
            let got = scorer.suggestions(&record(category.as_str(), "", ""));
            let expected: Vec<String> = category_suggestions(Some(category))
                .iter()
                .map(|s| s.to_string())
                .collect();
            assert_eq!(got, expected);
            assert!(got.iter().all(|s| !GENERAL_SUGGESTIONS.contains(&s.as_str())));
        }
    }

    #[test]
    fn suggestions_for_other_categories_are_general() {
        let scorer = Scorer::default();
        for category in ["geometry", "advanced", "fractions", "unknown", ""] {
            let got = scorer.suggestions(&record(category, "", ""));
            assert_eq!(got, GENERAL_SUGGESTIONS.map(String::from).to_vec());
        }
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let scorer = Scorer::default();
        let texts = [
            "",
            "basic simple beginner elementary intermediate moderate standard advanced expert challenging complex",
            "math mathematics calculate solve problem equation formula geometry algebra fraction",
            "game challenge puzzle match find solve interactive fun exciting adventure quest",
        ];
        for category in ["arithmetic", "puzzle", "memory", "logic", "geometry", "advanced", "other"] {
            for text in texts {
                let r = record(category, text, text);
                for score in [scorer.complexity(&r), scorer.educational_value(&r), scorer.engagement(&r)] {
                    assert!((0.0..=1.0).contains(&score), "{category}: {score}");
                }
            }
        }
    }

    #[test]
    fn overall_score_example() {
        let weights = ScoreWeights::default();
        let overall = weights.combine(0.9, 0.8, 0.8, 0.8);
        assert!(close(overall, 0.84), "got {overall}");
    }

    #[test]
    fn overall_score_is_monotonic_in_each_input() {
        let weights = ScoreWeights::default();
        let base = [0.5, 0.5, 0.5, 0.5];
        for i in 0..4 {
            let mut prev = f64::NEG_INFINITY;
            for step in 0..=10 {
                let mut v = base;
                v[i] = step as f64 / 10.0;
                let overall = weights.combine(v[0], v[1], v[2], v[3]);
                assert!(overall >= prev);
                prev = overall;
            }
        }
    }

    #[test]
    fn analyze_all_preserves_order_and_defaults() {
        let scorer = Scorer::default();
        let records = vec![
            record("puzzle", "Sudoku", "Classic number puzzle game"),
            serde_json::from_str::<GameRecord>("{}").unwrap(),
        ];
        let analyses = scorer.analyze_all(&records);
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].title, "Sudoku");
        assert_eq!(analyses[1].game_id, "unknown");
        assert_eq!(analyses[1].title, "Unknown");
        assert!(analyses.iter().all(|a| a.code_quality == CODE_QUALITY_PLACEHOLDER));
        assert!(analyses.iter().all(|a| a.suggestions.len() == 4));
    }
}
