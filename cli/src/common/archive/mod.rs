//! # Tarbit Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Everything tarbit knows about archives lives here: which compression a
//! filename implies, which directory an archive belongs to, whether to extract
//! or compress, and what `tar` command does the job. The byte-level work is
//! always left to the external `tar` program.
//!
//! ## Architecture
//!
//! Leaf modules first:
//!
//! - **`compression`**: the `CompressionRegistry` of schemes (flag, extensions,
//!   MIME types, compound extensions).
//! - **`detect`**: `CompressionDetector`, filename to `tar` flag.
//! - **`paths`**: `directory_for`, archive path to resource directory.
//! - **`operation`**: `OperationKind` and `resolve`, extract vs. compress.
//! - **`tar`**: builders for the extract and compress invocations.
//! - **`handler`**: `ArchiveHandler`, which runs the whole flow for one path.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{
//!     compression::CompressionRegistry, detect::CompressionDetector, handler::ArchiveHandler,
//! };
//! use crate::common::{fs::probe::OsFileSystem, process::SystemRunner};
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! let detector = CompressionDetector::new(CompressionRegistry::default());
//! let handler = ArchiveHandler::new(OsFileSystem, SystemRunner, detector, std::env::current_dir()?);
//! handler.process(Path::new("backup.tar.gz"))?;
//! # Ok(())
//! # }
//! ```
//!

pub mod compression;
pub mod detect;
pub mod handler;
pub mod operation;
pub mod paths;
pub mod tar;
