//! # Tarbit Operation Resolution (`common::archive::operation`)
//!
//! File: cli/src/common/archive/operation.rs
//!
//! ## Overview
//!
//! Decides whether a path should be extracted or created, purely from what
//! exists on disk:
//!
//! - the archive exists as a file: **extract** it;
//! - otherwise its resource directory exists: **compress** that directory;
//! - otherwise there is nothing to work with and resolution fails.
//!
//! When both the archive and its directory exist, extraction wins. This is
//! logged as a warning because the extraction writes into a directory that
//! already has content.
//!
use super::paths::directory_for;
use crate::common::fs::probe::FileSystem;
use crate::core::error::{Result, TarbitError};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// What to do with an archive path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Not resolved. Never acted upon.
    #[default]
    Unknown,
    Extract,
    Compress,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Unknown => "unknown",
            OperationKind::Extract => "extract",
            OperationKind::Compress => "compress",
        };
        f.write_str(name)
    }
}

/// Resolves the operation for `archive_path`, deriving its resource directory
/// under `working_dir`. Probe errors are propagated unchanged.
pub fn resolve<F: FileSystem + ?Sized>(
    fs: &F,
    archive_path: &Path,
    working_dir: &Path,
) -> Result<OperationKind> {
    let resource_dir = directory_for(archive_path, working_dir);

    if fs.file_exists(archive_path)? {
        match fs.dir_exists(&resource_dir) {
            Ok(true) => warn!(
                "Both {:?} and {:?} exist; extracting into the existing directory",
                archive_path, resource_dir
            ),
            Ok(false) => {}
            Err(e) => debug!("Could not probe {:?}, extracting anyway: {:#}", resource_dir, e),
        }
        debug!("Archive {:?} exists, resolved to extract", archive_path);
        return Ok(OperationKind::Extract);
    }

    if fs.dir_exists(&resource_dir)? {
        debug!("Directory {:?} exists, resolved to compress", resource_dir);
        return Ok(OperationKind::Compress);
    }

    Err(TarbitError::UnresolvableOperation {
        path: archive_path.to_path_buf(),
    }
    .into())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::fs::probe::mock::MemoryFileSystem;
    use std::path::PathBuf;

    struct Case {
        name: &'static str,
        file_exists: bool,
        dir_exists: bool,
        want: Option<OperationKind>,
    }

    #[test]
    fn test_resolve_table() {
        let cases = [
            Case {
                name: "archive exists",
                file_exists: true,
                dir_exists: false,
                want: Some(OperationKind::Extract),
            },
            Case {
                name: "directory exists",
                file_exists: false,
                dir_exists: true,
                want: Some(OperationKind::Compress),
            },
            Case {
                name: "neither exists",
                file_exists: false,
                dir_exists: false,
                want: None,
            },
            Case {
                name: "both exist, extract wins",
                file_exists: true,
                dir_exists: true,
                want: Some(OperationKind::Extract),
            },
        ];

        for case in cases {
            let mut fs = MemoryFileSystem::default();
            if case.file_exists {
                fs = fs.with_file("test.tar.gz");
            }
            if case.dir_exists {
                fs = fs.with_dir("/work/test");
            }

            let got = resolve(&fs, Path::new("test.tar.gz"), Path::new("/work"));
            match case.want {
                Some(kind) => assert_eq!(got.unwrap(), kind, "{}", case.name),
                None => {
                    let err = got.unwrap_err();
                    assert!(
                        matches!(
                            TarbitError::find(&err),
                            Some(TarbitError::UnresolvableOperation { .. })
                        ),
                        "{}",
                        case.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve_uses_working_dir_not_archive_dir() {
        let fs = MemoryFileSystem::default().with_dir("/work/archive");
        let got = resolve(&fs, Path::new("/elsewhere/archive.tar.xz"), Path::new("/work"));
        assert_eq!(got.unwrap(), OperationKind::Compress);
    }

    #[test]
    fn test_resolve_propagates_probe_errors() {
        let mut fs = MemoryFileSystem::default();
        fs.unreadable.insert(PathBuf::from("locked.tar.gz"));
        let err = resolve(&fs, Path::new("locked.tar.gz"), Path::new("/work")).unwrap_err();
        assert!(matches!(
            TarbitError::find(&err),
            Some(TarbitError::Probe { .. })
        ));

        let mut fs = MemoryFileSystem::default();
        fs.unreadable.insert(PathBuf::from("/work/locked"));
        let err = resolve(&fs, Path::new("locked.tar.gz"), Path::new("/work")).unwrap_err();
        assert!(matches!(
            TarbitError::find(&err),
            Some(TarbitError::Probe { .. })
        ));
    }

    /// An unreadable resource directory does not block extraction.
    #[test]
    fn test_resolve_extract_ignores_directory_probe_error() {
        let mut fs = MemoryFileSystem::default().with_file("locked.tar.gz");
        fs.unreadable.insert(PathBuf::from("/work/locked"));
        let got = resolve(&fs, Path::new("locked.tar.gz"), Path::new("/work"));
        assert_eq!(got.unwrap(), OperationKind::Extract);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_non_utf8_directory_on_disk() {
        use crate::common::fs::probe::OsFileSystem;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let work = tempfile::tempdir().unwrap();
        std::fs::create_dir(work.path().join(OsStr::from_bytes(b"caf\xe9"))).unwrap();

        let archive = work.path().join(OsStr::from_bytes(b"caf\xe9.tar.gz"));
        let got = resolve(&OsFileSystem, &archive, work.path());
        assert_eq!(got.unwrap(), OperationKind::Compress);
    }

    #[test]
    fn test_operation_kind_default_is_unknown() {
        assert_eq!(OperationKind::default(), OperationKind::Unknown);
        assert_eq!(OperationKind::Compress.to_string(), "compress");
    }
}
