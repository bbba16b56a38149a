//! gamegrade configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Metadata about the platform whose catalog is being analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformInfo {
    #[serde(default = "default_platform_name")]
    pub name: String,
    #[serde(default = "default_platform_version")]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: String,
}

impl Default for PlatformInfo {
    fn default() -> Self {
        Self {
            name: default_platform_name(),
            version: default_platform_version(),
            author: String::new(),
            year: String::new(),
        }
    }
}

fn default_platform_name() -> String {
    "MathWorld".to_string()
}
fn default_platform_version() -> String {
    "1.0".to_string()
}

/// Top-level gamegrade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamegradeConfig {
    #[serde(default)]
    pub platform: PlatformInfo,
    /// Catalog source: a JavaScript file or a JSON export.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Output directory for reports and exports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Backup directory, relative to the platform root.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
    /// Languages the platform ships translations for.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Seed for problem generation and simulated checks.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("script.js")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./gamegrade-results")
}
fn default_backup_dir() -> PathBuf {
    PathBuf::from("backups")
}
fn default_languages() -> Vec<String> {
    vec!["en".into(), "ar".into(), "fr".into()]
}

impl Default for GamegradeConfig {
    fn default() -> Self {
        Self {
            platform: PlatformInfo::default(),
            catalog: default_catalog(),
            output_dir: default_output_dir(),
            backup_dir: default_backup_dir(),
            languages: default_languages(),
            seed: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

impl GamegradeConfig {
    fn resolve_env(mut self) -> Self {
        self.platform.name = resolve_env_vars(&self.platform.name);
        self.platform.author = resolve_env_vars(&self.platform.author);
        self.catalog = resolve_path(&self.catalog);
        self.output_dir = resolve_path(&self.output_dir);
        self.backup_dir = resolve_path(&self.backup_dir);
        self
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `gamegrade.toml` in the current directory
/// 2. `~/.config/gamegrade/config.toml`
///
/// `GAMEGRADE_CATALOG` overrides the catalog path.
pub fn load_config() -> Result<GamegradeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GamegradeConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("gamegrade.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            toml::from_str::<GamegradeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GamegradeConfig::default(),
    };

    let mut config = config.resolve_env();
    if let Ok(catalog) = std::env::var("GAMEGRADE_CATALOG") {
        config.catalog = PathBuf::from(catalog);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gamegrade"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_GAMEGRADE_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_GAMEGRADE_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_GAMEGRADE_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no vars"), "no vars");
        assert_eq!(resolve_env_vars("broken ${"), "broken ${");
        std::env::remove_var("_GAMEGRADE_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = GamegradeConfig::default();
        assert_eq!(config.platform.name, "MathWorld");
        assert_eq!(config.catalog, PathBuf::from("script.js"));
        assert_eq!(config.languages, vec!["en", "ar", "fr"]);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
catalog = "web/script.js"
seed = 42

[platform]
name = "NumberLand"
author = "Platform Team"
"#;
        let config: GamegradeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog, PathBuf::from("web/script.js"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.platform.name, "NumberLand");
        assert_eq!(config.platform.version, "1.0");
        assert_eq!(config.backup_dir, PathBuf::from("backups"));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("/nonexistent/gamegrade.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamegrade.toml");
        std::fs::write(&path, "output_dir = \"out\"\nlanguages = [\"en\"]\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.languages, vec!["en"]);
    }
}
