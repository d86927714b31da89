//! Analyze command - run the extraction pipeline over PDF manuals.

use super::{get_database, print_variable_table};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sonda_config::Config;
use sonda_ingest::Analyzer;
use sonda_llm::GeminiClient;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Analyze each file in turn under the same machine name. A failing file is
/// reported and the remaining files are still processed.
pub fn run(files: &[PathBuf], machine_name: &str) -> Result<()> {
    let db = get_database()?;
    let config = Config::load().context("Failed to load configuration")?;

    // A missing credential fails here, before any file is touched: the same
    // gap would apply to every chunk of every file.
    let client =
        GeminiClient::from_config(&config.gemini).context("Failed to create Gemini client")?;

    let analyzer = Analyzer::new(db, client, config.processing.chunk_size);
    let rt = Runtime::new().context("Failed to create async runtime")?;

    let mut failed = 0usize;

    for path in files {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Analyzing {}...", path.display()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = rt.block_on(analyzer.analyze_file(path, machine_name));
        spinner.finish_and_clear();

        match result {
            Ok(outcome) => {
                println!(
                    "{} Manual '{}' analyzed successfully ({} of {} chunks used).",
                    "✓".green(),
                    path.display(),
                    outcome.chunks_used,
                    outcome.chunks_total
                );
                println!();
                println!("{} {}", "Machine:".white().bold(), machine_name);
                println!(
                    "  {}: {}",
                    "Id".cyan(),
                    outcome.machine_id.to_string().green()
                );
                println!(
                    "  {}: {}",
                    "Protocol".cyan(),
                    display_or_dash(&outcome.record.protocol)
                );
                println!(
                    "  {}: {}",
                    "Endpoint".cyan(),
                    display_or_dash(&outcome.record.endpoint)
                );
                println!();
                print_variable_table(&outcome.record.variables);
                println!();
            }
            Err(e) => {
                failed += 1;
                println!(
                    "{} Failed to analyze '{}': {}",
                    "✗".red(),
                    path.display(),
                    e
                );
            }
        }
    }

    if failed == files.len() {
        anyhow::bail!("No manual was analyzed successfully");
    }

    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
