pub mod analyze;
pub mod audit;
pub mod backup;
pub mod check;
pub mod export;
pub mod extract;
pub mod init;
pub mod problems;
pub mod stats;
pub mod template;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gamegrade_core::config::{load_config_from, GamegradeConfig};
use gamegrade_core::extract::load_catalog;
use gamegrade_core::model::GameRecord;

/// Load the config and read the catalog, preferring an explicit path.
pub(crate) fn load_games(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
) -> Result<(GamegradeConfig, Vec<GameRecord>)> {
    let config = load_config_from(config_path.as_deref())?;
    let path = catalog.unwrap_or_else(|| config.catalog.clone());
    let games = load_catalog(&path)?;
    Ok((config, games))
}

/// Seeded when a seed is given, otherwise from OS entropy.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
