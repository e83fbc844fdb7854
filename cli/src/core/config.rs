//! # Tarbit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads tarbit's optional configuration: which archiving program
//! to run and which compression schemes to recognise. With no configuration
//! files present, tarbit runs `tar` with the built-in gzip/bzip2/xz registry.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` / `TARBIT_CONFIG` (replaces 2 and 3)
//! 2. Project-specific `.tarbit.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/tarbit/config.toml`)
//! 4. Default values defined in the code
//!
//! A layer's non-empty `[[compression]]` list replaces the lower layer's list
//! as a whole, since scheme order matters for lookups. `tool.program` overrides
//! whenever the higher layer sets it, even to the default `tar`.
//!
//! After merging, paths are expanded (`~`), extensions are lowercased, and the
//! result is validated. Schemes whose extensions or MIME types overlap are
//! accepted with a warning: the first scheme listed wins those lookups.
//!
//! ## Examples
//!
//! ```toml
//! [tool]
//! program = "gtar"
//!
//! [[compression]]
//! name = "zstd"
//! flag = "I"
//! extensions = [".zst"]
//! compound_extensions = [".tzst"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let registry = cfg.registry();
//! let program = cfg.tool.program();
//! ```
//!
use crate::common::archive::compression::{CompressionRegistry, CompressionScheme};
use crate::common::archive::tar::DEFAULT_TOOL;
use crate::core::error::{Result, TarbitError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,
    /// Compression schemes, in lookup order. Empty means the built-in set.
    #[serde(default)]
    pub compression: Vec<SchemeConfig>,
}

/// Settings for the external archiving program.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Program name or path (can use ~). Will be expanded. Unset means `tar`.
    #[serde(default)]
    pub program: Option<String>,
}

impl ToolConfig {
    /// The program to run, falling back to `tar`.
    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_TOOL)
    }
}

/// One `[[compression]]` entry.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SchemeConfig {
    pub name: String,
    /// Must be exactly one ASCII letter or digit.
    pub flag: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub mime_types: Vec<String>,
    #[serde(default)]
    pub compound_extensions: Vec<String>,
}

impl Config {
    /// Builds the compression registry this configuration describes.
    ///
    /// Assumes the configuration passed `validate_config`; a flag that is not a
    /// single character falls back to its first character.
    pub fn registry(&self) -> CompressionRegistry {
        if self.compression.is_empty() {
            return CompressionRegistry::default();
        }
        let schemes = self
            .compression
            .iter()
            .filter_map(|s| {
                let flag = s.flag.chars().next()?;
                Some(CompressionScheme {
                    name: s.name.clone(),
                    flag,
                    extensions: s.extensions.clone(),
                    mime_types: s.mime_types.clone(),
                    compound_extensions: s.compound_extensions.clone(),
                })
            })
            .collect();
        CompressionRegistry::new(schemes)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".tarbit.toml";

/// Loads, merges, normalizes and validates the configuration.
///
/// `explicit` is the `--config` path; when given, it is the only file read.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = match find_project_config_path(&current_dir) {
                Some(path) => {
                    info!("Loading project configuration from: {}", path.display());
                    Some(load_config_from_path(&path)?)
                }
                None => {
                    debug!("No project configuration file ({}) found.", PROJECT_CONFIG_FILENAME);
                    None
                }
            };
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    normalize_config(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    warn_overlaps(&config);
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "tarbit") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

/// Walks from `start` up through its ancestors looking for `.tarbit.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        tool: ToolConfig {
            program: project.tool.program.or(user.tool.program),
        },
        compression: if !project.compression.is_empty() {
            project.compression
        } else {
            user.compression
        },
    }
}

fn normalize_config(config: &mut Config) {
    if let Some(program) = &mut config.tool.program {
        *program = shellexpand::tilde(program.as_str()).into_owned();
        debug!("Expanded tool program: {}", program);
    }
    for scheme in &mut config.compression {
        for ext in scheme
            .extensions
            .iter_mut()
            .chain(scheme.compound_extensions.iter_mut())
        {
            *ext = ext.to_lowercase();
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.tool.program().trim().is_empty() {
        return Err(anyhow!(TarbitError::Config(
            "tool.program cannot be empty.".to_string()
        )));
    }
    for scheme in &config.compression {
        let mut chars = scheme.flag.chars();
        let valid_flag = match (chars.next(), chars.next()) {
            (Some(c), None) => c.is_ascii_alphanumeric(),
            _ => false,
        };
        if !valid_flag {
            return Err(anyhow!(TarbitError::Config(format!(
                "Invalid flag '{}' for compression '{}'. Expected a single letter or digit.",
                scheme.flag, scheme.name
            ))));
        }
        if let Some(ext) = scheme
            .extensions
            .iter()
            .chain(scheme.compound_extensions.iter())
            .find(|e| e.len() < 2 || !e.starts_with('.'))
        {
            return Err(anyhow!(TarbitError::Config(format!(
                "Invalid extension '{}' for compression '{}'. Extensions start with '.', e.g. \".gz\".",
                ext, scheme.name
            ))));
        }
    }
    Ok(())
}

fn warn_overlaps(config: &Config) {
    for (key, owners) in config.registry().overlaps() {
        warn!(
            "'{}' is claimed by several compression schemes ({}); '{}' wins.",
            key,
            owners.join(", "),
            owners[0]
        );
    }
}
