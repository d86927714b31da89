//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;

use anyhow::{Context, Result};
use colored::Colorize;
use sonda_config::AppPaths;
use sonda_core::Variable;
use sonda_db::Database;

/// Get the application paths.
pub fn get_paths() -> Result<AppPaths> {
    AppPaths::new().context("Failed to determine application directories")
}

/// Get a database connection, ensuring sonda is initialized.
pub fn get_database() -> Result<Database> {
    let paths = get_paths()?;

    if !paths.is_initialized() {
        anyhow::bail!("Sonda is not initialized. Run 'sonda init' first.");
    }

    Database::open(&paths.database_file).context("Failed to open database")
}

/// Format a file size in human-readable form.
pub fn format_size(bytes: i64) -> String {
    const KB: i64 = 1024;
    const MB: i64 = KB * 1024;
    const GB: i64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Print a machine's variable table aligned in columns.
pub fn print_variable_table(variables: &[Variable]) {
    if variables.is_empty() {
        println!(
            "{} No variables found for this machine.",
            "Note:".yellow()
        );
        return;
    }

    let headers = ["Name", "Address", "Type", "Access", "Description"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for var in variables {
        let cells = [
            &var.name,
            &var.address,
            &var.data_type,
            &var.access,
            &var.description,
        ];
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    println!("  {}", header_line.join("  ").bold());

    for var in variables {
        let cells = [
            &var.name,
            &var.address,
            &var.data_type,
            &var.access,
            &var.description,
        ];
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect();
        println!("  {}", line.join("  "));
    }
}
