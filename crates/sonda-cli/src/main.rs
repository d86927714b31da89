//! Sonda CLI - Analyze industrial machine manuals and archive the results.

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sonda - Technical manual analyzer for industrial machines
#[derive(Parser)]
#[command(name = "sonda")]
#[command(version)]
#[command(about = "Extract machine communication metadata from PDF manuals", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Sonda (create config and database)
    Init,

    /// Analyze one or more PDF manuals of a machine
    Analyze {
        /// PDF files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Name/identifier of the machine the manuals describe
        #[arg(short, long)]
        name: String,
    },

    /// List archived machines
    List,

    /// Show one machine and its variable table
    Show {
        /// Machine id
        id: i64,
    },

    /// Export a machine's variable table as CSV
    Export {
        /// Machine id
        id: i64,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a machine from the archive
    Delete {
        /// Machine id
        id: i64,
    },

    /// Show archive statistics
    Stats,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config file in editor
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., gemini.model)
        key: String,

        /// Value to set
        value: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sonda=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sonda=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Analyze { files, name } => commands::analyze::run(&files, &name),
        Commands::List => commands::list::run(),
        Commands::Show { id } => commands::show::run(id),
        Commands::Export { id, output } => commands::export::run(id, output),
        Commands::Delete { id } => commands::delete::run(id),
        Commands::Stats => commands::stats::run(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Edit => commands::config::edit(),
            ConfigCommands::Set { key, value } => commands::config::set(&key, &value),
        },
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
