//! The `gamegrade backup` command.

use std::path::PathBuf;

use anyhow::Result;

use gamegrade_core::backup::create_backup;
use gamegrade_core::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, path: PathBuf, name: Option<String>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let target = create_backup(&path, &config.backup_dir, name.as_deref())?;
    println!("Backup created: {}", target.display());
    Ok(())
}
