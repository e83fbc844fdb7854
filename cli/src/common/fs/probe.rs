//! # Tarbit Filesystem Probe (`common::fs::probe`)
//!
//! File: cli/src/common/fs/probe.rs
//!
//! The narrow view of the filesystem the archive logic depends on. The real
//! implementation delegates to `common::fs::io`; tests substitute an in-memory
//! one.
//!
use super::io;
use crate::core::error::Result;
use std::path::Path;

/// Filesystem operations needed to pick and prepare an archive operation.
pub trait FileSystem {
    /// `true` if `path` exists and is not a directory.
    fn file_exists(&self, path: &Path) -> Result<bool>;
    /// `true` if `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> Result<bool>;
    /// Creates `path` and any missing parents; succeeds if it already exists.
    fn ensure_dir(&self, path: &Path, mode: u32) -> Result<()>;
}

/// `FileSystem` backed by the real OS filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn file_exists(&self, path: &Path) -> Result<bool> {
        io::is_file(path)
    }

    fn dir_exists(&self, path: &Path) -> Result<bool> {
        io::is_dir(path)
    }

    fn ensure_dir(&self, path: &Path, mode: u32) -> Result<()> {
        io::ensure_dir_exists(path, mode)
    }
}
