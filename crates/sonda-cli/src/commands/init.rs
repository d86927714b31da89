//! Initialize Sonda.

use super::get_paths;
use anyhow::{Context, Result};
use colored::Colorize;
use sonda_config::Config;
use sonda_db::Database;

pub fn run() -> Result<()> {
    let paths = get_paths()?;

    // Check if already initialized
    if paths.is_initialized() {
        println!("{} Sonda is already initialized.", "Note:".yellow().bold());
        println!("  Config: {}", paths.config_file.display());
        println!("  Database: {}", paths.database_file.display());
        return Ok(());
    }

    println!("{}", "Initializing Sonda...".cyan().bold());

    // Create directories
    paths.ensure_dirs().context("Failed to create directories")?;
    println!("  {} Created directories", "✓".green());

    // Create config file
    Config::create_default_file(&paths.config_file).context("Failed to create config file")?;
    println!(
        "  {} Created config: {}",
        "✓".green(),
        paths.config_file.display()
    );

    // Initialize database
    let _db = Database::open(&paths.database_file).context("Failed to initialize database")?;
    println!(
        "  {} Created database: {}",
        "✓".green(),
        paths.database_file.display()
    );

    println!();
    println!("{}", "Sonda initialized successfully!".green().bold());
    println!();
    println!("Next steps:");
    println!(
        "  1. Set your API key: {}",
        "sonda config set gemini.api_key <key>".cyan()
    );
    println!(
        "  2. Analyze a manual: {}",
        "sonda analyze manual.pdf --name \"Pressa 01\"".cyan()
    );
    println!("  3. Browse the archive: {}", "sonda list".cyan());

    Ok(())
}
