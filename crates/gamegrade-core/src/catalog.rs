//! Catalog statistics, JSON export, templates, and validation.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::PlatformInfo;
use crate::model::{Difficulty, GameRecord};

/// Summary statistics over a raw catalog (before scoring).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_games: usize,
    /// Game count per category string.
    pub categories: BTreeMap<String, usize>,
    /// Game titles per category string, in catalog order.
    pub games_by_category: BTreeMap<String, Vec<String>>,
    pub languages_supported: Vec<String>,
    /// Declared difficulties; games without one are not counted.
    pub difficulty_distribution: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn compute(games: &[GameRecord], languages: &[String]) -> Self {
        let mut categories = BTreeMap::new();
        let mut games_by_category: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut difficulty_distribution: BTreeMap<String, usize> =
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
                .into_iter()
                .map(|d| (d.to_string(), 0))
                .collect();

        for game in games {
            *categories.entry(game.category.clone()).or_insert(0) += 1;
            games_by_category
                .entry(game.category.clone())
                .or_default()
                .push(game.title.clone());
            if let Some(difficulty) = game.difficulty {
                *difficulty_distribution.entry(difficulty.to_string()).or_insert(0) += 1;
            }
        }

        Self {
            total_games: games.len(),
            categories,
            games_by_category,
            languages_supported: languages.to_vec(),
            difficulty_distribution,
        }
    }
}

/// A catalog snapshot written as JSON and readable by
/// [`load_catalog`](crate::extract::load_catalog).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExport {
    pub platform_info: PlatformInfo,
    pub statistics: CatalogStats,
    pub games: Vec<GameRecord>,
}

impl CatalogExport {
    pub fn new(platform_info: PlatformInfo, games: Vec<GameRecord>, languages: &[String]) -> Self {
        let statistics = CatalogStats::compute(&games, languages);
        Self {
            platform_info,
            statistics,
            games,
        }
    }

    /// Save the export as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize catalog")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write catalog export to {}", path.display()))?;
        tracing::info!("exported {} games to {}", self.games.len(), path.display());
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog export from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse catalog export JSON")
    }
}

/// Quote `value` for a catalog object literal, preferring single quotes.
///
/// Values the extractor could not read back are rejected: both quote
/// styles at once, a closing brace, a `];` sequence, or a line break.
fn quote_field(field: &str, value: &str) -> Result<String> {
    anyhow::ensure!(
        !value.contains('}') && !value.contains("];") && !value.contains('\n'),
        "{field} must not contain '}}', '];' or line breaks: {value:?}"
    );
    if !value.contains('\'') {
        Ok(format!("'{value}'"))
    } else if !value.contains('"') {
        Ok(format!("\"{value}\""))
    } else {
        anyhow::bail!("{field} must not contain both ' and \": {value:?}")
    }
}

/// Render a JavaScript object literal for a new catalog entry.
///
/// Running the result through [`extract_games`](crate::extract::extract_games)
/// yields the same record.
pub fn game_template(
    id: &str,
    title: &str,
    category: &str,
    description: &str,
    icon: &str,
) -> Result<String> {
    Ok(format!(
        "    {{\n        id: {},\n        title: {},\n        category: {},\n        description: {},\n        icon: {}\n    }}",
        quote_field("id", id)?,
        quote_field("title", title)?,
        quote_field("category", category)?,
        quote_field("description", description)?,
        quote_field("icon", icon)?,
    ))
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct CatalogWarning {
    /// The game ID (if applicable).
    pub game_id: Option<String>,
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(games: &[GameRecord]) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();

    if games.is_empty() {
        warnings.push(CatalogWarning {
            game_id: None,
            message: "catalog contains no games".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for game in games {
        if !seen_ids.insert(&game.id) {
            warnings.push(CatalogWarning {
                game_id: Some(game.id.clone()),
                message: format!("duplicate game ID: {}", game.id),
            });
        }
    }

    for game in games {
        if game.kind().is_none() {
            warnings.push(CatalogWarning {
                game_id: Some(game.id.clone()),
                message: format!(
                    "category '{}' has no scoring table entry, defaults apply",
                    game.category
                ),
            });
        }
    }

    for game in games {
        if game.title.trim().is_empty() {
            warnings.push(CatalogWarning {
                game_id: Some(game.id.clone()),
                message: "title is empty".into(),
            });
        }
        if game.description.trim().is_empty() {
            warnings.push(CatalogWarning {
                game_id: Some(game.id.clone()),
                message: "description is empty".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_games, load_catalog};
    use crate::scoring::Scorer;

    fn sample_games() -> Vec<GameRecord> {
        vec![
            GameRecord::new("addition-sprint", "Addition Sprint", "arithmetic", "Fast-paced addition practice game")
                .with_icon("➕"),
            GameRecord::new("sudoku", "Sudoku", "puzzle", "Classic number puzzle game")
                .with_difficulty(Difficulty::Hard),
            GameRecord::new("memory-cards", "Memory Cards", "memory", "Match pairs of cards to test your memory"),
            GameRecord::new("crossmath", "CrossMath", "puzzle", "Mathematical crossword puzzle"),
        ]
    }

    fn languages() -> Vec<String> {
        vec!["en".into(), "ar".into(), "fr".into()]
    }

    #[test]
    fn stats_group_by_category() {
        let stats = CatalogStats::compute(&sample_games(), &languages());
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.categories.get("puzzle"), Some(&2));
        assert_eq!(
            stats.games_by_category.get("puzzle").unwrap(),
            &vec!["Sudoku".to_string(), "CrossMath".to_string()]
        );
        assert_eq!(stats.difficulty_distribution.get("hard"), Some(&1));
        assert_eq!(stats.difficulty_distribution.get("easy"), Some(&0));
        assert_eq!(stats.languages_supported.len(), 3);
    }

    #[test]
    fn export_roundtrip_reproduces_records_and_analyses() {
        let games = sample_games();
        let export = CatalogExport::new(PlatformInfo::default(), games.clone(), &languages());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games_export.json");

        export.save_json(&path).unwrap();
        let reloaded = load_catalog(&path).unwrap();
        assert_eq!(reloaded, games);

        let scorer = Scorer::default();
        assert_eq!(scorer.analyze_all(&reloaded), scorer.analyze_all(&games));

        let loaded = CatalogExport::load_json(&path).unwrap();
        assert_eq!(loaded.statistics.total_games, 4);
        assert_eq!(loaded.platform_info.name, "MathWorld");
    }

    #[test]
    fn template_is_extractable() {
        let snippet =
            game_template("ratio-race", "Ratio Race", "advanced", "Compare ratios fast", "⚖️").unwrap();
        let source = format!("const games = [\n{snippet}\n];");
        let games = extract_games(&source);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, "ratio-race");
        assert_eq!(games[0].category, "advanced");
        assert_eq!(games[0].icon.as_deref(), Some("⚖️"));
    }

    #[test]
    fn template_with_apostrophes_roundtrips() {
        let snippet = game_template(
            "kids-math",
            "Kid's Math",
            "arithmetic",
            "Count the cat's toys",
            "🐱",
        )
        .unwrap();
        assert!(snippet.contains(r#"title: "Kid's Math""#));

        let games = extract_games(&format!("const games = [\n{snippet}\n];"));
        assert_eq!(
            games,
            vec![GameRecord::new("kids-math", "Kid's Math", "arithmetic", "Count the cat's toys")
                .with_icon("🐱")]
        );
    }

    #[test]
    fn template_rejects_unreadable_values() {
        let both = game_template("x", r#"It's "fun""#, "logic", "d", "🎮").unwrap_err();
        assert!(both.to_string().contains("title"));
        assert!(game_template("x", "X", "logic", "close } brace", "🎮").is_err());
        assert!(game_template("x", "X", "logic", "two\nlines", "🎮").is_err());
    }

    #[test]
    fn validate_duplicates_and_unknown_categories() {
        let mut games = sample_games();
        games.push(GameRecord::new("sudoku", "Sudoku Again", "fractions", ""));
        let warnings = validate_catalog(&games);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("'fractions'")));
        assert!(warnings.iter().any(|w| w.message == "description is empty"));
    }

    #[test]
    fn validate_empty_catalog() {
        let warnings = validate_catalog(&[]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].game_id.is_none());
    }
}
