//! # Tarbit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module runs the external archiving tool. A command is described by a
//! `ToolCommand` (program, argument vector, working directory) and handed to a
//! `CommandRunner`, which runs it to completion.
//!
//! ## Architecture
//!
//! - **`ToolCommand`**: the description of one invocation. Its `Display` output is
//!   the human-readable line shown before execution, in the form
//!   `cd <dir> && <program> <args...>`.
//! - **`CommandRunner`**: trait seam between the archive logic and process
//!   spawning. Tests record commands instead of running them.
//! - **`SystemRunner`**: spawns the program directly through
//!   `std::process::Command` with a discrete argument vector. No shell is
//!   involved, so paths containing spaces, quotes or `;` reach the tool
//!   untouched. Standard input, output and error are inherited.
//!
//! A non-zero exit or a failure to start is reported as
//! `TarbitError::ExternalCommand`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::{CommandRunner, SystemRunner, ToolCommand};
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let cmd = ToolCommand::new("tar").arg("tfz").arg("backup.tar.gz");
//! println!("Command: {}", cmd);
//! SystemRunner.execute(&cmd)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, TarbitError};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, error, info};

/// One invocation of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The arguments as lossy UTF-8 strings, for assertions.
    #[cfg(test)]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Quotes a word for display if a shell would split or interpret it.
fn display_word(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:+,@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dir) = &self.current_dir {
            write!(f, "cd {} && ", display_word(&dir.to_string_lossy()))?;
        }
        write!(f, "{}", display_word(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", display_word(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

/// Runs a `ToolCommand` to completion.
pub trait CommandRunner {
    fn execute(&self, command: &ToolCommand) -> Result<()>;
}

/// `CommandRunner` that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, command: &ToolCommand) -> Result<()> {
        info!("Executing command: {}", command);
        let mut process = Command::new(&command.program);
        process.args(&command.args);
        if let Some(dir) = &command.current_dir {
            process.current_dir(dir);
        }
        process
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = process.status().map_err(|e| TarbitError::ExternalCommand {
            cmd: command.to_string(),
            status: format!("failed to start ({})", e),
        })?;

        if !status.success() {
            let exit_code = status
                .code()
                .map_or("terminated by signal".to_string(), |c| c.to_string());
            error!("Command '{}' failed with exit code {}", command, exit_code);
            return Err(TarbitError::ExternalCommand {
                cmd: command.to_string(),
                status: exit_code,
            }
            .into());
        }

        debug!("Command '{}' completed successfully.", command);
        Ok(())
    }
}


// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_display_plain() {
        let cmd = ToolCommand::new("tar")
            .arg("xfz")
            .arg("/tmp/data.tar.gz")
            .current_dir("/tmp/data");
        assert_eq!(cmd.to_string(), "cd /tmp/data && tar xfz /tmp/data.tar.gz");
    }

    #[test]
    fn test_args_lossy() {
        let cmd = ToolCommand::new("tar").arg("cfz").arg("out.tar.gz");
        assert_eq!(cmd.args_lossy(), vec!["cfz", "out.tar.gz"]);
    }

    #[test]
    fn test_display_quotes_unsafe_words() {
        let cmd = ToolCommand::new("tar").arg("cfz").arg("my data.tar.gz").arg("it's");
        assert_eq!(cmd.to_string(), r"tar cfz 'my data.tar.gz' 'it'\''s'");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_success_and_cwd() -> Result<()> {
        let dir = tempdir()?;
        let cmd = ToolCommand::new("touch").arg("marker").current_dir(dir.path());
        SystemRunner.execute(&cmd)?;
        assert!(dir.path().join("marker").is_file());
        Ok(())
    }

    /// Arguments are passed verbatim; shell metacharacters are not interpreted.
    #[cfg(unix)]
    #[test]
    fn test_system_runner_no_shell_interpretation() -> Result<()> {
        let dir = tempdir()?;
        let cmd = ToolCommand::new("touch")
            .arg("a; touch injected")
            .current_dir(dir.path());
        SystemRunner.execute(&cmd)?;
        assert!(dir.path().join("a; touch injected").is_file());
        assert!(!dir.path().join("injected").exists());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_nonzero_exit() {
        let err = SystemRunner.execute(&ToolCommand::new("false")).unwrap_err();
        match TarbitError::find(&err) {
            Some(TarbitError::ExternalCommand { status, .. }) => assert_eq!(status, "1"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_system_runner_missing_program() {
        let err = SystemRunner
            .execute(&ToolCommand::new("tarbit-test-no-such-program"))
            .unwrap_err();
        assert!(matches!(
            TarbitError::find(&err),
            Some(TarbitError::ExternalCommand { .. })
        ));
        assert!(err.to_string().contains("failed to start"));
    }
}
