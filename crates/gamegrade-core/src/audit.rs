//! Platform structure validation and source audits.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::extract_games;

pub const INDEX_HTML: &str = "index.html";
pub const SCRIPT_JS: &str = "script.js";
pub const README_MD: &str = "README.md";

/// Files that make up a deployable platform, in backup order.
pub const PLATFORM_FILES: [&str; 3] = [INDEX_HTML, SCRIPT_JS, README_MD];

static FUNCTION_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+\w+").expect("valid function regex"));

static TRANSLATION_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"][\w\s]+['"]:\s*['"][^'"]+['"]"#).expect("valid translation regex")
});

/// Which platform files exist and look sane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformValidation {
    pub index_html_exists: bool,
    pub script_js_exists: bool,
    pub readme_exists: bool,
    pub files_readable: bool,
    /// `None` when `index.html` is missing.
    pub html_has_games: Option<bool>,
    /// `None` when `script.js` is missing.
    pub js_has_games_array: Option<bool>,
    pub js_has_translations: Option<bool>,
}

impl PlatformValidation {
    /// Every check as a `(label, passed)` pair, skipping checks that did not run.
    pub fn checks(&self) -> Vec<(&'static str, bool)> {
        let mut checks = vec![
            ("index.html exists", self.index_html_exists),
            ("script.js exists", self.script_js_exists),
            ("README.md exists", self.readme_exists),
            ("files readable", self.files_readable),
        ];
        let optional = [
            ("index.html mentions games", self.html_has_games),
            ("script.js has games array", self.js_has_games_array),
            ("script.js has translations", self.js_has_translations),
        ];
        checks.extend(optional.into_iter().filter_map(|(label, v)| v.map(|v| (label, v))));
        checks
    }

    pub fn all_passed(&self) -> bool {
        self.checks().iter().all(|(_, passed)| *passed)
    }
}

/// Check the platform layout under `base`.
pub fn validate_platform(base: &Path) -> PlatformValidation {
    let html = base.join(INDEX_HTML);
    let js = base.join(SCRIPT_JS);
    let mut validation = PlatformValidation {
        index_html_exists: html.exists(),
        script_js_exists: js.exists(),
        readme_exists: base.join(README_MD).exists(),
        files_readable: true,
        ..Default::default()
    };

    let read = |path: &PathBuf| match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            None
        }
    };

    if validation.index_html_exists {
        match read(&html) {
            Some(content) => validation.html_has_games = Some(content.to_lowercase().contains("games")),
            None => validation.files_readable = false,
        }
    }

    if validation.script_js_exists {
        match read(&js) {
            Some(content) => {
                validation.js_has_games_array = Some(content.contains("const games"));
                validation.js_has_translations = Some(content.contains("translations"));
            }
            None => validation.files_readable = false,
        }
    }

    validation
}

/// Static metrics and smells found in a platform script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceAudit {
    pub total_lines: usize,
    pub functions_count: usize,
    pub games_count: usize,
    pub translations_count: usize,
    pub potential_issues: Vec<String>,
}

/// Audit JavaScript source text.
pub fn audit_source(content: &str) -> SourceAudit {
    let mut potential_issues = Vec::new();
    if content.contains("console.log") {
        potential_issues.push("Found console.log statements".to_string());
    }
    if content.contains("alert(") {
        potential_issues.push("Found alert() statements".to_string());
    }
    if content.contains("TODO") || content.contains("FIXME") {
        potential_issues.push("Found TODO/FIXME comments".to_string());
    }

    SourceAudit {
        total_lines: content.split('\n').count(),
        functions_count: FUNCTION_DECL.find_iter(content).count(),
        games_count: extract_games(content).len(),
        translations_count: TRANSLATION_PAIR.find_iter(content).count(),
        potential_issues,
    }
}
