//! # Tarbit Command Handlers
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Command-line glue: argument definitions and the handler that connects them
//! to the archive logic in `common::archive`. tarbit has a single command, so
//! there are no subcommands to route.
//!

/// Extract-or-create for a single archive path.
pub mod archive;
