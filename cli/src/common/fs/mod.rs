//! # Tarbit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem access tarbit needs. The archive logic
//! never calls `std::fs` directly; it goes through the `FileSystem` trait so
//! the decision logic can be tested without touching disk.
//!
//! ## Architecture
//!
//! - **`io`**: free functions over `std::fs` (`is_file`, `is_dir`,
//!   `ensure_dir_exists`) with errors mapped to `TarbitError`.
//! - **`probe`**: the `FileSystem` trait and `OsFileSystem`, its implementation
//!   on top of `io`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::probe::{FileSystem, OsFileSystem};
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let fs = OsFileSystem;
//! if fs.dir_exists(Path::new("./data"))? {
//!     println!("ready to compress");
//! }
//! # Ok(())
//! # }
//! ```
//!

/// Basic `std::fs` wrappers (existence probes, directory creation).
pub mod io;
/// The `FileSystem` trait consumed by the archive logic.
pub mod probe;
