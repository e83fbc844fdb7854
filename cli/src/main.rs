//! # Tarbit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the `tarbit` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the archive command and mapping failures to exit code 1
//!
//! ## Examples
//!
//! ```bash
//! # Create data.tar.gz from ./data, or extract data.tar.gz into ./data
//! tarbit data.tar.gz
//!
//! # Same, with debug logging on stderr
//! tarbit -vv data.tar.gz
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap (usage errors exit with code 1)
//! 2. Configure logging based on verbosity level or `RUST_LOG`
//! 3. Run `commands::archive::handle_archive`
//! 4. Print any error to stderr and exit with code 1
//!
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command-line handlers
mod common; // Archive logic, filesystem and process collaborators
mod core; // Errors and configuration

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "tarbit",
    about = "Extract an archive, or create it from the directory of the same name.",
    long_about = "Extracts ARCHIVE into a directory named after it when the archive exists,\n\
                  or creates ARCHIVE from that directory when it does not.\n\
                  Compression (gzip, bzip2, xz) is chosen from the file extension.",
    version
)]
struct Cli {
    #[command(flatten)]
    archive: commands::archive::ArchiveArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors exit with 1 like every other failure.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::archive::handle_archive(cli.archive) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
