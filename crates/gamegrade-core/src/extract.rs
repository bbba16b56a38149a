//! Catalog extraction from JavaScript sources and JSON exports.
//!
//! The JavaScript catalog is a `const games = [ ... ];` array of object
//! literals. Each object with a quoted `id` becomes one [`GameRecord`].

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::CatalogExport;
use crate::error::CatalogError;
use crate::model::{GameRecord, PartialRecord};

static GAMES_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)const games = \[(.*?)\];").expect("valid games regex"));

static GAME_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{[^}]*id:\s*(?:'[^']+'|"[^"]+")[^}]*\}"#).expect("valid block regex")
});

/// Field names captured from each block, with the pattern for each.
static FIELDS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ["id", "title", "category", "description", "icon"]
        .into_iter()
        .map(|name| {
            let re = Regex::new(&format!(r#"{name}:\s*(?:'([^']+)'|"([^"]+)")"#))
                .expect("valid field regex");
            (name, re)
        })
        .collect()
});

/// The first participating capture group. Quoted fields use one group per
/// quote style.
fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|c| c.iter().skip(1).flatten().next())
        .map(|m| m.as_str())
}

/// Parse a single object-literal block into a partial record.
fn parse_block(block: &str) -> PartialRecord {
    let mut partial = PartialRecord::default();
    for (name, re) in FIELDS.iter() {
        let Some(value) = capture(re, block).map(str::to_string) else {
            continue;
        };
        match *name {
            "id" => partial.id = Some(value),
            "title" => partial.title = Some(value),
            "category" => partial.category = Some(value),
            "description" => partial.description = Some(value),
            "icon" => partial.icon = Some(value),
            _ => {}
        }
    }
    partial
}

/// Extract game records from JavaScript source text.
///
/// Returns an empty list when the text has no games array. Blocks without
/// an `id` are skipped; other missing fields take the record defaults.
pub fn extract_games(source: &str) -> Vec<GameRecord> {
    let Some(array) = capture(&GAMES_ARRAY, source) else {
        tracing::debug!("no games array found in source");
        return Vec::new();
    };

    GAME_BLOCK
        .find_iter(array)
        .map(|m| parse_block(m.as_str()))
        .filter(|partial| !partial.is_empty())
        .map(GameRecord::from)
        .collect()
}

/// Parse JSON catalog text: either a full [`CatalogExport`] or a bare array
/// of records.
pub fn parse_json_catalog(content: &str) -> serde_json::Result<Vec<GameRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        let export: CatalogExport = serde_json::from_value(value)?;
        Ok(export.games)
    }
}

/// Load a catalog from disk.
///
/// `.json` files are read as exports; anything else is treated as
/// JavaScript source and run through [`extract_games`].
pub fn load_catalog(path: &Path) -> Result<Vec<GameRecord>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let games = if path.extension().is_some_and(|ext| ext == "json") {
        parse_json_catalog(&content).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        extract_games(&content)
    };

    tracing::info!("loaded {} games from {}", games.len(), path.display());
    Ok(games)
}

/// Like [`load_catalog`], but logs failures and returns an empty catalog so
/// the caller can keep going.
pub fn load_catalog_or_empty(path: &Path) -> Vec<GameRecord> {
    match load_catalog(path) {
        Ok(games) => games,
        Err(e) => {
            tracing::warn!("continuing with empty catalog: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"
// Game catalog
const translations = { en: { title: 'MathWorld' } };

const games = [
    {
        id: 'addition-sprint',
        title: 'Addition Sprint',
        category: 'addition',
        description: 'Solve addition problems quickly!',
        icon: '➕'
    },
    {
        id: "memory-match",
        title: "Memory Match",
        category: "memory",
        description: "Find matching pairs!"
    },
    {
        title: 'No Id Here',
        category: 'puzzle'
    },
    {
        id: 'bare'
    }
];

function startGame(id) {}
"#;

    #[test]
    fn extracts_blocks_with_ids() {
        let games = extract_games(SOURCE);
        let ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["addition-sprint", "memory-match", "bare"]);

        assert_eq!(games[0].title, "Addition Sprint");
        assert_eq!(games[0].category, "addition");
        assert_eq!(games[0].icon.as_deref(), Some("➕"));
        assert_eq!(games[1].description, "Find matching pairs!");
        assert!(games[1].icon.is_none());
    }

    #[test]
    fn quotes_of_the_other_style_stay_in_the_value() {
        let source = r#"const games = [
    {
        id: "kids-math",
        title: "Kid's Math",
        description: 'Say "seven"'
    }
];"#;
        let games = extract_games(source);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title, "Kid's Math");
        assert_eq!(games[0].description, "Say \"seven\"");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let games = extract_games(SOURCE);
        let bare = &games[2];
        assert_eq!(bare.title, "Unknown");
        assert_eq!(bare.category, "unknown");
        assert_eq!(bare.description, "");
    }

    #[test]
    fn no_games_array_is_empty() {
        assert!(extract_games("const other = [];").is_empty());
        assert!(extract_games("").is_empty());
    }

    #[test]
    fn json_catalog_accepts_bare_arrays() {
        let json = r#"[{"id": "sudoku", "title": "Sudoku", "category": "puzzle"}]"#;
        let games = parse_json_catalog(json).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].description, "");
    }

    #[test]
    fn load_catalog_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let js = dir.path().join("script.js");
        std::fs::write(&js, SOURCE).unwrap();
        assert_eq!(load_catalog(&js).unwrap().len(), 3);

        let json = dir.path().join("games.json");
        std::fs::write(&json, r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
        assert_eq!(load_catalog(&json).unwrap().len(), 2);
    }

    #[test]
    fn load_catalog_reports_io_and_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.js");
        let err = load_catalog(&missing).unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.path(), missing.as_path());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        assert!(matches!(load_catalog(&bad), Err(CatalogError::Json { .. })));

        assert!(load_catalog_or_empty(&missing).is_empty());
    }
}
