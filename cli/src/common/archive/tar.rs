//! # Tarbit TAR Invocations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! This module builds the two `tar` invocations tarbit ever runs. The argument
//! order is fixed; only the compression flag and the paths vary.
//!
//! - **Extract**: `tar xf<flag> <absolute archive>`, run inside the resource
//!   directory so the archive contents land there.
//! - **Compress**: `tar cf<flag> <archive> <resource name>`, run in the resource
//!   directory's parent so the archive stores paths starting at the resource name.
//!
//! The commands are returned as `ToolCommand` values; nothing here spawns a
//! process.
//!
use crate::common::process::ToolCommand;
use std::ffi::OsString;
use std::path::Path;

/// Default archiving program.
pub const DEFAULT_TOOL: &str = "tar";

/// Builds `tar xf<flag> <archive>` running in `target_dir`.
///
/// `absolute_archive` must already be absolute: the tool runs with `target_dir`
/// as its working directory, where a relative path would no longer resolve.
pub fn extract_command(
    tool: &str,
    flag: char,
    absolute_archive: &Path,
    target_dir: &Path,
) -> ToolCommand {
    ToolCommand::new(tool)
        .arg(format!("xf{}", flag))
        .arg(absolute_archive)
        .current_dir(target_dir)
}

/// Builds `tar cf<flag> <archive> <name>` running in `root`, where `name` is
/// the resource directory's final component and `root` its parent.
pub fn compress_command(
    tool: &str,
    flag: char,
    archive: &Path,
    resource_dir: &Path,
    root: &Path,
) -> ToolCommand {
    let name: OsString = resource_dir
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("."));
    ToolCommand::new(tool)
        .arg(format!("cf{}", flag))
        .arg(archive)
        .arg(name)
        .current_dir(root)
}
