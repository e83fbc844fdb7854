//! # Tarbit Archive Handler (`common::archive::handler`)
//!
//! File: cli/src/common/archive/handler.rs
//!
//! ## Overview
//!
//! `ArchiveHandler` ties the archive pieces together for one path:
//!
//! 1. resolve the operation from filesystem state (`operation::resolve`),
//! 2. detect the compression flag from the filename (`CompressionDetector`),
//! 3. prepare the resource directory when extracting,
//! 4. build the `tar` invocation (`archive::tar`), print it, and run it.
//!
//! The handler owns its collaborators (`FileSystem`, `CommandRunner`, the
//! detector), so the whole flow runs against in-memory fakes in tests.
//!
//! The format check happens *after* resolution: an existing `data.zip` fails as
//! an unsupported format, while a missing one fails as unresolvable.
//!
use super::detect::{CompressionDetector, MimeGuessLookup, MimeLookup};
use super::operation::{self, OperationKind};
use super::paths::directory_for;
use super::tar::{self, DEFAULT_TOOL};
use crate::common::fs::probe::FileSystem;
use crate::common::process::{CommandRunner, ToolCommand};
use crate::core::error::{Result, TarbitError};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Permission bits for resource directories created during extraction.
pub const RESOURCE_DIR_MODE: u32 = 0o755;

pub struct ArchiveHandler<F, R, M = MimeGuessLookup>
where
    F: FileSystem,
    R: CommandRunner,
    M: MimeLookup,
{
    fs: F,
    runner: R,
    detector: CompressionDetector<M>,
    working_dir: PathBuf,
    tool: String,
}

impl<F, R, M> ArchiveHandler<F, R, M>
where
    F: FileSystem,
    R: CommandRunner,
    M: MimeLookup,
{
    pub fn new(fs: F, runner: R, detector: CompressionDetector<M>, working_dir: PathBuf) -> Self {
        Self {
            fs,
            runner,
            detector,
            working_dir,
            tool: DEFAULT_TOOL.to_string(),
        }
    }

    /// Uses `tool` instead of `tar` as the archiving program.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    #[cfg(test)]
    pub fn fs(&self) -> &F {
        &self.fs
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Extracts or creates `archive_path`, whichever the filesystem calls for.
    pub fn process(&self, archive_path: &Path) -> Result<()> {
        let kind = operation::resolve(&self.fs, archive_path, &self.working_dir)
            .context("Failed to determine operation")?;
        info!("Resolved {:?} to {}", archive_path, kind);
        self.dispatch(kind, archive_path)
    }

    /// Runs an already resolved operation.
    pub fn dispatch(&self, kind: OperationKind, archive_path: &Path) -> Result<()> {
        match kind {
            OperationKind::Extract => self.extract(archive_path),
            OperationKind::Compress => self.compress(archive_path),
            OperationKind::Unknown => Err(TarbitError::UnsupportedOperation {
                path: archive_path.to_path_buf(),
            }
            .into()),
        }
    }

    fn detect(&self, archive_path: &Path) -> Result<char> {
        let flag = self
            .detector
            .detect_flag(archive_path)
            .ok_or_else(|| TarbitError::UnsupportedFormat {
                path: archive_path.to_path_buf(),
            })?;
        debug!("Detected compression flag '{}' for {:?}", flag, archive_path);
        Ok(flag)
    }

    fn extract(&self, archive_path: &Path) -> Result<()> {
        let flag = self.detect(archive_path)?;

        let absolute_archive = std::path::absolute(archive_path).with_context(|| {
            format!("Failed to get absolute path of {}", archive_path.display())
        })?;

        let target_dir = directory_for(archive_path, &self.working_dir);
        self.fs
            .ensure_dir(&target_dir, RESOURCE_DIR_MODE)
            .context("Failed to create target directory")?;

        let command = tar::extract_command(&self.tool, flag, &absolute_archive, &target_dir);
        self.run(&command).context("Extraction failed")
    }

    fn compress(&self, archive_path: &Path) -> Result<()> {
        let flag = self.detect(archive_path)?;

        let resource_dir = directory_for(archive_path, &self.working_dir);
        let command = tar::compress_command(
            &self.tool,
            flag,
            archive_path,
            &resource_dir,
            &self.working_dir,
        );
        self.run(&command).context("Compression failed")
    }

    fn run(&self, command: &ToolCommand) -> Result<()> {
        println!("Command: {}", command);
        self.runner.execute(command)
    }
}
