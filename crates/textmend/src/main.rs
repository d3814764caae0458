//! Textmend launcher
//!
//! Thin dispatch over the CLI commands: parse arguments, initialize logging,
//! map per-command results to an exit code.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use textmend::cli;
use textmend_logging::{init_logging, LogConfig};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "textmend", about = "Detect and repair text file encodings")]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report the likely encoding of a file
    Detect {
        /// File to inspect
        path: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-encode a file to UTF-8
    Fix {
        /// File to convert
        path: PathBuf,

        /// Write converted content here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the .bak backup before an in-place overwrite
        #[arg(long)]
        no_backup: bool,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect (or fix, with --fix) every file under a directory
    Batch {
        /// Directory to walk
        path: PathBuf,

        /// Filter by file type (e.g. txt, tex, csv)
        #[arg(short = 't', long = "type")]
        types: Vec<String>,

        /// Maximum directory depth to walk
        #[arg(short, long)]
        depth: Option<usize>,

        /// Convert files in place instead of only reporting
        #[arg(long)]
        fix: bool,

        /// Skip the .bak backups when fixing in place
        #[arg(long)]
        no_backup: bool,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(LogConfig {
        app_name: "textmend",
        verbose: cli.verbose,
    }) {
        eprintln!("Failed to initialize logging: {err:#}");
        return ExitCode::FAILURE;
    }

    match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("command failed: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Detect { path, json } => cli::detect::run(cli::detect::DetectArgs { path, json }),
        Commands::Fix {
            path,
            output,
            no_backup,
            dry_run,
            json,
        } => cli::fix::run(cli::fix::FixArgs {
            path,
            output,
            backup: !no_backup,
            dry_run,
            json,
        }),
        Commands::Batch {
            path,
            types,
            depth,
            fix,
            no_backup,
            dry_run,
            json,
        } => cli::batch::run(cli::batch::BatchArgs {
            path,
            types,
            depth,
            fix,
            backup: !no_backup,
            dry_run,
            json,
        }),
    }
}
