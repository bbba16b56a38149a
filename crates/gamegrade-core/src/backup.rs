//! Timestamped backups of platform files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::audit::PLATFORM_FILES;

/// Default backup name for the current local time.
pub fn default_backup_name() -> String {
    format!(
        "mathworld_backup_{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Copy the platform files that exist under `base` into
/// `base/backup_dir/name`, returning the backup directory.
pub fn create_backup(base: &Path, backup_dir: &Path, name: Option<&str>) -> Result<PathBuf> {
    let name = name.map(str::to_string).unwrap_or_else(default_backup_name);
    let target = base.join(backup_dir).join(&name);
    std::fs::create_dir_all(&target)
        .with_context(|| format!("failed to create backup directory {}", target.display()))?;

    let mut copied = 0usize;
    for file in PLATFORM_FILES {
        let source = base.join(file);
        if !source.exists() {
            tracing::debug!("skipping missing {}", source.display());
            continue;
        }
        std::fs::copy(&source, target.join(file))
            .with_context(|| format!("failed to back up {}", source.display()))?;
        copied += 1;
    }

    tracing::info!("backed up {copied} file(s) to {}", target.display());
    Ok(target)
}
