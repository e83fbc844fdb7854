//! # Tarbit Resource Directory Paths (`common::archive::paths`)
//!
//! File: cli/src/common/archive/paths.rs
//!
//! Maps an archive path to the directory whose contents it holds. The directory
//! always lives under the working directory, whatever directory the archive
//! itself sits in.
//!
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Compression suffixes that wrap a `.tar` (as in `name.tar.gz`). Compound
/// suffixes such as `.tgz` are deliberately absent: they are stripped once.
const WRAPPING_EXTENSIONS: [&str; 3] = ["gz", "bz2", "xz"];

const TAR_EXTENSION: &str = "tar";

/// Returns the resource directory for `archive_path` under `working_dir`.
///
/// `archive.tar.gz` and `archive.tgz` both map to `{working_dir}/archive`. A path
/// without a final component maps to `working_dir` itself.
pub fn directory_for(archive_path: &Path, working_dir: &Path) -> PathBuf {
    working_dir.join(resource_name(archive_path))
}

/// The bare resource name for `archive_path` (no directories, no suffixes).
///
/// Works on the raw `OsStr` so names that are not valid UTF-8 map to the
/// directory that actually holds them.
pub fn resource_name(archive_path: &Path) -> OsString {
    let Some(stem) = archive_path.file_stem() else {
        return OsString::new();
    };
    let wrapped = archive_path
        .extension()
        .map_or(false, |ext| WRAPPING_EXTENSIONS.iter().any(|w| ext == *w));
    if !wrapped {
        return stem.to_os_string();
    }

    // `Path` treats a lone `.tar` as a dotfile with no extension.
    if stem == ".tar" {
        return OsString::new();
    }
    let inner = Path::new(stem);
    match (inner.extension(), inner.file_stem()) {
        (Some(ext), Some(name)) if ext == TAR_EXTENSION => name.to_os_string(),
        _ => stem.to_os_string(),
    }
}
