//! gamegrade CLI, the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "gamegrade",
    version,
    about = "Score and audit an educational math game catalog"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every game and write an analysis report
    Analyze {
        /// Catalog file (.js or .json); defaults to the configured catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, html, all
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the games found in a catalog
    Extract {
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export a catalog with statistics as JSON
    Export {
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output file (default: <output_dir>/games_export.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show catalog statistics
    Stats {
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Check a catalog for duplicate IDs, unknown categories and empty fields
    Validate {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Check the platform layout and audit its script
    Audit {
        /// Platform root directory
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Exit code 1 if any structure check fails
        #[arg(long)]
        strict: bool,
    },

    /// Generate random arithmetic practice problems
    Problems {
        #[arg(long, default_value = "10")]
        count: usize,

        /// RNG seed (default: configured seed, else random)
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        json: bool,
    },

    /// Run the game-logic checks and simulations
    Check {
        #[arg(long)]
        seed: Option<u64>,

        /// Save the results as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Back up the platform files
    Backup {
        /// Platform root directory
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Backup name (default: mathworld_backup_<timestamp>)
        #[arg(long)]
        name: Option<String>,
    },

    /// Print a catalog entry for a new game
    Template {
        #[arg(long)]
        id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "🎮")]
        icon: String,
    },

    /// Create a starter gamegrade.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gamegrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Analyze {
            catalog,
            output,
            format,
        } => commands::analyze::execute(config, catalog, output, format),
        Commands::Extract { catalog, json } => commands::extract::execute(config, catalog, json),
        Commands::Export { catalog, output } => commands::export::execute(config, catalog, output),
        Commands::Stats { catalog, json } => commands::stats::execute(config, catalog, json),
        Commands::Validate { catalog } => commands::validate::execute(config, catalog),
        Commands::Audit { path, strict } => commands::audit::execute(path, strict),
        Commands::Problems { count, seed, json } => {
            commands::problems::execute(config, count, seed, json)
        }
        Commands::Check { seed, output } => commands::check::execute(config, seed, output),
        Commands::Backup { path, name } => commands::backup::execute(config, path, name),
        Commands::Template {
            id,
            title,
            category,
            description,
            icon,
        } => commands::template::execute(id, title, category, description, icon),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
