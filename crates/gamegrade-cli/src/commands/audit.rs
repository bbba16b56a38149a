//! The `gamegrade audit` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gamegrade_core::audit::{audit_source, validate_platform, SCRIPT_JS};

pub fn execute(path: PathBuf, strict: bool) -> Result<()> {
    let validation = validate_platform(&path);

    println!("Platform structure ({}):", path.display());
    for (label, passed) in validation.checks() {
        let status = if passed { "OK" } else { "FAIL" };
        println!("  [{status}] {label}");
    }

    if validation.script_js_exists {
        let script = path.join(SCRIPT_JS);
        let content = std::fs::read_to_string(&script)
            .with_context(|| format!("failed to read {}", script.display()))?;
        let audit = audit_source(&content);

        println!("\nScript audit:");
        println!("  Lines: {}", audit.total_lines);
        println!("  Functions: {}", audit.functions_count);
        println!("  Games: {}", audit.games_count);
        println!("  Translations: {}", audit.translations_count);
        if audit.potential_issues.is_empty() {
            println!("  No potential issues found.");
        } else {
            for issue in &audit.potential_issues {
                println!("  WARNING: {issue}");
            }
        }
    }

    if strict && !validation.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
