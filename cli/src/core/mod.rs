//! # Tarbit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure the rest of tarbit builds on:
//!
//! - `config`: configuration loading, merging, and validation
//! - `error`: the `TarbitError` enum and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{Result, TarbitError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
