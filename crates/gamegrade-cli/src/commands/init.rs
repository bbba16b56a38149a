//! The `gamegrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gamegrade.toml").exists() {
        println!("gamegrade.toml already exists, skipping.");
    } else {
        std::fs::write("gamegrade.toml", SAMPLE_CONFIG)?;
        println!("Created gamegrade.toml");
    }

    std::fs::create_dir_all("catalogs")?;
    let example_path = std::path::Path::new("catalogs/example.js");
    if example_path.exists() {
        println!("catalogs/example.js already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_CATALOG)?;
        println!("Created catalogs/example.js");
    }

    println!("\nNext steps:");
    println!("  1. Edit gamegrade.toml to point at your platform's script.js");
    println!("  2. Run: gamegrade validate --catalog catalogs/example.js");
    println!("  3. Run: gamegrade analyze --catalog catalogs/example.js");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gamegrade configuration

catalog = "script.js"
output_dir = "./gamegrade-results"
backup_dir = "backups"
languages = ["en", "ar", "fr"]
# seed = 42

[platform]
name = "MathWorld"
version = "1.0"
author = "${USER}"
year = "2025"
"#;

const EXAMPLE_CATALOG: &str = r#"// Example game catalog
const games = [
    {
        id: 'addition-sprint',
        title: 'Addition Sprint',
        category: 'arithmetic',
        description: 'Fast-paced addition practice game',
        icon: '➕'
    },
    {
        id: 'sudoku',
        title: 'Sudoku',
        category: 'puzzle',
        description: 'Classic number puzzle game',
        icon: '🔢'
    },
    {
        id: 'memory-cards',
        title: 'Memory Cards',
        category: 'memory',
        description: 'Match pairs of cards to test your memory',
        icon: '🃏'
    }
];
"#;
