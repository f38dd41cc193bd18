//! sqlcheck CLI
//!
//! Command-line tool for checking SQL source files.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlcheck_cli::prelude::*;

/// Lexical, syntax and semantic checks for SQL source files.
#[derive(Parser)]
#[command(name = "sqlcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the source files.
    #[arg(short, long, env = "SQLCHECK_SOURCES_DIR", default_value = ".")]
    sources_dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a source file, or standard input when no file is given.
    Analyze {
        /// Source file, relative to the sources directory.
        file: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List the `.sql` files in the sources directory.
    Files,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay clean.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze { file, format } => {
            let source = match &file {
                Some(file) => load_source(&cli.sources_dir, file)?,
                None => read_source(io::stdin().lock())?,
            };

            let analysis = sqlcheck_core::analyze(&source);
            println!("{}", render(&analysis, format)?);

            info!(
                "Analysis finished with {} error(s).",
                analysis.error_count()
            );
            if !analysis.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Files => {
            let files = list_sql_files(&cli.sources_dir)?;
            if files.is_empty() {
                info!(
                    "No .sql files found in {}.",
                    cli.sources_dir.display()
                );
            }
            for file in files {
                println!("{file}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
