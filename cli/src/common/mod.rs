//! # Tarbit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the root for the shared building blocks behind the `tarbit`
//! command: the archive decision logic and the two external collaborators it
//! relies on, the filesystem and process execution.
//!
//! Keeping them here separates the command-line glue (`commands::`) and the
//! core infrastructure (`core::`) from the logic that actually decides what
//! happens to an archive.
//!
//! ## Architecture
//!
//! - **`archive`**: compression registry and detection, resource directory
//!   derivation, operation resolution, `tar` command construction, and the
//!   `ArchiveHandler` that runs them in order.
//! - **`fs`**: existence probes and directory creation, behind the `FileSystem` trait.
//! - **`process`**: `ToolCommand` and the `CommandRunner` trait for running `tar`.
//!

/// Archive decision logic (detection, paths, operation resolution, handler).
pub mod archive;
/// Filesystem probes and directory creation.
pub mod fs;
/// External command description and execution.
pub mod process;
