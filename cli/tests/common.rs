//! # Tarbit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs the
//! compiled `tarbit` binary inside its own temporary directory, with the user
//! configuration directory pointed at that directory so a developer's own
//! `~/.config/tarbit/config.toml` cannot change the outcome.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// # Get Tarbit Command (`tarbit_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `tarbit` binary.
///
/// ## Panics
/// Panics if the `tarbit` binary cannot be found via `Command::cargo_bin`.
pub fn tarbit_cmd() -> Command {
    Command::cargo_bin("tarbit").expect("Failed to find tarbit binary for testing")
}

/// `tarbit_cmd` running in `dir`, isolated from user and environment configuration.
pub fn tarbit_in(dir: &Path) -> Command {
    let mut cmd = tarbit_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("TARBIT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a gzipped tarball at `archive` holding `files` (relative path, content)
/// at the archive root.
pub fn write_tar_gz(archive: &Path, files: &[(&str, &str)]) {
    let staging = tempfile::tempdir().expect("staging dir");
    for (name, content) in files {
        let path = staging.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parent");
        }
        fs::write(&path, content).expect("write fixture file");
    }

    let file = fs::File::create(archive).expect("create fixture archive");
    let enc = GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(enc);
    builder
        .append_dir_all(".", staging.path())
        .expect("add fixture files");
    builder
        .into_inner()
        .expect("finish tar")
        .finish()
        .expect("finish gzip");
}

/// Paths of the regular files stored in a gzipped tarball.
pub fn tar_gz_file_entries(archive: &Path) -> BTreeSet<String> {
    let file = fs::File::open(archive).expect("open archive");
    let mut tar_archive = tar::Archive::new(GzDecoder::new(file));
    let mut found = BTreeSet::new();
    for entry in tar_archive.entries().expect("read entries") {
        let entry = entry.expect("read entry");
        if entry.header().entry_type().is_file() {
            let path = entry.path().expect("entry path").to_string_lossy().to_string();
            found.insert(path.replace('\\', "/"));
        }
    }
    found
}
