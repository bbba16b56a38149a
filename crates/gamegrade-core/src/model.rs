//! Core data model types for gamegrade.
//!
//! These are the fundamental types that the whole system uses to represent
//! catalog entries and their computed analyses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::scoring::ScoreWeights;

/// Placeholder for an unknown id or category.
pub const UNKNOWN: &str = "unknown";
/// Placeholder for an unknown title.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Game categories with dedicated scoring entries.
///
/// Catalogs use many more category strings than these (e.g. "addition",
/// "fractions"); anything outside this set scores with the table defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arithmetic,
    Puzzle,
    Memory,
    Logic,
    Geometry,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Arithmetic,
        Category::Puzzle,
        Category::Memory,
        Category::Logic,
        Category::Geometry,
        Category::Advanced,
    ];

    /// Exact, case-sensitive lookup of a category name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Arithmetic => "arithmetic",
            Category::Puzzle => "puzzle",
            Category::Memory => "memory",
            Category::Logic => "logic",
            Category::Geometry => "geometry",
            Category::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared difficulty of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A record with every field optional, as found in loosely structured input.
///
/// Converting into a [`GameRecord`] is the single place where defaults are
/// filled in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl PartialRecord {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.icon.is_none()
            && self.difficulty.is_none()
    }
}

impl From<PartialRecord> for GameRecord {
    fn from(p: PartialRecord) -> Self {
        GameRecord {
            id: p.id.unwrap_or_else(|| UNKNOWN.to_string()),
            title: p.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            category: p.category.unwrap_or_else(|| UNKNOWN.to_string()),
            description: p.description.unwrap_or_default(),
            icon: p.icon,
            difficulty: p.difficulty,
        }
    }
}

/// One catalog entry. Immutable input to the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialRecord")]
pub struct GameRecord {
    /// Unique identifier (e.g. "addition-sprint").
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Category string as it appears in the catalog.
    pub category: String,
    /// Short description shown to players.
    pub description: String,
    /// Display icon, usually a single emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Declared difficulty, if the catalog carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl GameRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            description: description.into(),
            icon: None,
            difficulty: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// The scoring category, if the category string names one.
    pub fn kind(&self) -> Option<Category> {
        Category::from_name(&self.category)
    }

    /// Lower-cased `title description`, the text keyword scorers search.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// Computed scores for a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameAnalysis {
    pub game_id: String,
    pub title: String,
    pub category: String,
    /// How demanding the game is, in `[0, 1]`.
    pub complexity_score: f64,
    /// How much the game teaches, in `[0, 1]`.
    pub educational_value: f64,
    /// Estimated player engagement, in `[0, 1]`.
    pub user_engagement: f64,
    /// Code quality placeholder, in `[0, 1]`.
    pub code_quality: f64,
    /// Up to four improvement suggestions, most relevant first.
    pub suggestions: Vec<String>,
}

impl GameAnalysis {
    /// Weighted overall score using the default weights.
    pub fn overall_score(&self) -> f64 {
        ScoreWeights::default().overall(self)
    }
}
