//! # Tarbit Archive Command
//!
//! File: cli/src/commands/archive.rs
//!
//! ## Overview
//!
//! The single command tarbit offers: given one path, extract it if it is an
//! existing archive, or create it from the matching directory if it is not.
//!
//! ## Architecture
//!
//! `handle_archive` wires the real collaborators together:
//!
//! 1. Load configuration (`core::config::load_config`) for the tool name and
//!    compression registry.
//! 2. Build a `CompressionDetector` over that registry.
//! 3. Build an `ArchiveHandler` with `OsFileSystem`, `SystemRunner`, and the
//!    current directory as the working directory.
//! 4. Run `ArchiveHandler::process` on the given path.
//!
//! ## Examples
//!
//! ```bash
//! # ./backup exists, backup.tar.gz does not: creates backup.tar.gz
//! tarbit backup.tar.gz
//!
//! # backup.tgz exists: extracts it into ./backup
//! tarbit backup.tgz
//!
//! # Use a custom scheme table
//! tarbit --config ./schemes.toml backup.tar.zst
//! ```
//!
use crate::common::archive::{detect::CompressionDetector, handler::ArchiveHandler};
use crate::common::{fs::probe::OsFileSystem, process::SystemRunner};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for extracting or creating an archive.
#[derive(Args, Debug)]
pub struct ArchiveArgs {
    /// Archive to extract, or to create from the directory of the same name.
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Read configuration from this file instead of the user and project files.
    #[arg(short, long, value_name = "PATH", env = "TARBIT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Handler for the archive command.
pub fn handle_archive(args: ArchiveArgs) -> Result<()> {
    info!("Handling archive command for {:?}", args.archive);

    let cfg = config::load_config(args.config.as_deref())?;
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    debug!("Working directory: {}", working_dir.display());

    let detector = CompressionDetector::new(cfg.registry());
    let handler = ArchiveHandler::new(OsFileSystem, SystemRunner, detector, working_dir)
        .with_tool(cfg.tool.program());

    handler
        .process(&args.archive)
        .with_context(|| format!("Failed to process {}", args.archive.display()))
}
