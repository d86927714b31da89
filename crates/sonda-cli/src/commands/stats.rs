//! Stats command - archive statistics.

use super::{format_size, get_database, get_paths};
use anyhow::Result;
use colored::Colorize;
use sonda_db::Database;

pub fn run() -> Result<()> {
    let paths = get_paths()?;
    let db = get_database()?;
    let stats = db.get_stats()?;

    println!("{}", "Sonda Statistics".cyan().bold());
    println!("{}", "─".repeat(50));

    println!();
    println!("{}", "Archive".white().bold());
    println!(
        "  Machines: {}",
        stats.total_machines.to_string().green()
    );
    println!("  Variables: {}", stats.total_variables);

    println!();
    println!("{}", "Storage".white().bold());
    println!("  Database: {}", paths.database_file.display());
    if let Ok(size) = Database::file_size(&paths.database_file) {
        println!("  Size: {}", format_size(size));
    }

    Ok(())
}
