//! # Tarbit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module holds the `std::fs` calls tarbit makes: checking whether a path
//! is an existing file or directory, and creating the resource directory before
//! an extraction. They are thin wrappers that turn raw I/O errors into
//! `TarbitError` values naming the path involved.
//!
//! ## Architecture
//!
//! - **`is_file` / `is_dir`**: stat the path. A missing path is `Ok(false)`; any
//!   other I/O failure (permissions, broken mounts) is a `TarbitError::Probe`.
//!   A directory is never a file and vice versa.
//! - **`ensure_dir_exists`**: creates the directory and any missing parents with
//!   the given permission bits (like `mkdir -p -m`). Calling it on an existing
//!   directory is a no-op, so repeating it never fails. A path occupied by a
//!   file is an error.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let target = Path::new("./data");
//! if !io::is_dir(target)? {
//!     io::ensure_dir_exists(target, 0o755)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, TarbitError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Reads metadata for `path`, mapping "not found" to `None`.
fn metadata(path: &Path) -> Result<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(TarbitError::Probe {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

/// Returns `true` if `path` exists and is not a directory.
pub fn is_file(path: &Path) -> Result<bool> {
    Ok(metadata(path)?.map_or(false, |meta| !meta.is_dir()))
}

/// Returns `true` if `path` exists and is a directory.
pub fn is_dir(path: &Path) -> Result<bool> {
    Ok(metadata(path)?.map_or(false, |meta| meta.is_dir()))
}

/// Ensures that a directory exists at `path`, creating it and any missing
/// parents with permission bits `mode` (ignored on non-Unix platforms).
///
/// # Errors
///
/// Returns `TarbitError::DirectoryCreation` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path, mode: u32) -> Result<()> {
    if is_dir(path)? {
        debug!("Directory already exists: {:?}", path);
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(path)
        .map_err(|source| TarbitError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Created directory: {:?}", path);
    Ok(())
}
