//! Roster CLI - manage departments, roles and employees from a menu

use clap::Parser;
use roster::config;
use roster::storage::SqliteStore;
use roster::ui::{self, Icons};
use roster::{App, TerminalPrompter};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Manage departments, roles and employees from an interactive menu")]
#[command(long_about = r#"
Roster keeps departments, roles and employees in a SQLite database and lets
you add, list and reassign them from a menu. Press Ctrl-C to leave.

Example usage:
  roster
  roster --database ./company.db
"#)]
struct Cli {
    /// Path to the database file
    #[arg(short, long, env = "ROSTER_DATABASE")]
    database: Option<PathBuf>,

    /// Path to the config file (defaults to ./roster.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with tables on stdout
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?;
    let database = config::resolve_database_path(cli.database, file_config.as_ref());
    config::ensure_db_dir(&database)?;

    tracing::info!("Opening database {}", database.display());
    let store = SqliteStore::open(&database)?;

    ui::header("Roster");
    ui::info("Database", &database.display().to_string());
    ui::section(&format!("{} Current totals", Icons::STATS));
    println!("{}", ui::stats_table(&store.stats()?.rows()));

    let mut app = App::new(store, TerminalPrompter::detect());
    app.run()?;
    Ok(())
}
