//! # Tarbit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout tarbit. Every failure
//! aborts the single requested operation, so the errors exist to tell the user
//! *which* path was involved and *what* went wrong, not to drive recovery.
//!
//! ## Architecture
//!
//! The error system consists of two parts:
//! - `TarbitError`: a `thiserror` enum naming each failure kind
//! - `Result<T>`: an alias for `anyhow::Result<T>` so callers can attach context
//!
//! The failure kinds are:
//! - Filesystem probes that could not read state (`Probe`)
//! - Paths where neither an archive nor a directory exists (`UnresolvableOperation`)
//! - Filenames whose compression cannot be detected (`UnsupportedFormat`)
//! - Resource directories that could not be created (`DirectoryCreation`)
//! - The external archiving tool failing or not starting (`ExternalCommand`)
//! - Invalid configuration (`Config`)
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error kind, wrapped in anyhow
//! anyhow::bail!(TarbitError::UnsupportedFormat { path: archive.to_path_buf() });
//!
//! // Check for a specific kind further up the stack
//! let unsupported = err
//!     .downcast_ref::<TarbitError>()
//!     .map_or(false, |e| matches!(e, TarbitError::UnsupportedFormat { .. }));
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for tarbit.
#[derive(Error, Debug)]
pub enum TarbitError {
    #[error("Failed to inspect '{}': {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Neither archive nor directory exists: {}", path.display())]
    UnresolvableOperation { path: PathBuf },

    #[error("Unsupported archive format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Unsupported operation for {}", path.display())]
    UnsupportedOperation { path: PathBuf },

    #[error("Failed to create directory '{}': {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TarbitError {
    /// Finds the first `TarbitError` in an `anyhow` error chain, skipping any
    /// context layers added on the way up.
    pub fn find(err: &anyhow::Error) -> Option<&TarbitError> {
        err.chain().find_map(|cause| cause.downcast_ref::<TarbitError>())
    }
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
