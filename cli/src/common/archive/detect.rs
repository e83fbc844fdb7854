//! # Tarbit Compression Detection (`common::archive::detect`)
//!
//! File: cli/src/common/archive/detect.rs
//!
//! ## Overview
//!
//! Resolves a filename to the `tar` compression flag that handles it. Detection
//! only looks at the name, never at file contents, so it works the same for an
//! archive that exists and one that is about to be created.
//!
//! ## Architecture
//!
//! `CompressionDetector::detect_flag` tries, in strict order:
//!
//! 1. the registry's compound extensions (`.tgz`, `.tbz2`),
//! 2. the registry's plain extensions (`.gz`, `.bz2`, `.xz`, ...),
//! 3. the MIME type of the extension, via a `MimeLookup`, matched against the
//!    registry's MIME sets.
//!
//! An unknown format is `None`, not an error; callers decide how to report it.
//!
use super::compression::CompressionRegistry;
use std::path::Path;
use tracing::{debug, trace};

/// Maps a file extension (with leading dot) to a MIME type.
pub trait MimeLookup {
    fn mime_type(&self, extension: &str) -> Option<String>;
}

/// `MimeLookup` backed by the `mime_guess` database.
#[derive(Debug, Default, Clone, Copy)]
pub struct MimeGuessLookup;

impl MimeLookup for MimeGuessLookup {
    fn mime_type(&self, extension: &str) -> Option<String> {
        let bare = extension.trim_start_matches('.');
        if bare.is_empty() {
            return None;
        }
        mime_guess::from_ext(bare).first_raw().map(str::to_string)
    }
}

/// Detects compression flags from filenames using an injected registry.
pub struct CompressionDetector<M: MimeLookup = MimeGuessLookup> {
    registry: CompressionRegistry,
    mime: M,
}

impl CompressionDetector<MimeGuessLookup> {
    pub fn new(registry: CompressionRegistry) -> Self {
        Self::with_mime_lookup(registry, MimeGuessLookup)
    }
}

impl<M: MimeLookup> CompressionDetector<M> {
    pub fn with_mime_lookup(registry: CompressionRegistry, mime: M) -> Self {
        Self { registry, mime }
    }

    /// Returns the `tar` flag for `filename`, or `None` when the format is not
    /// recognised.
    pub fn detect_flag(&self, filename: &Path) -> Option<char> {
        let ext = lowercase_extension(filename);
        if ext.is_empty() {
            debug!("No extension on {:?}, cannot detect compression", filename);
            return None;
        }

        if let Some(scheme) = self.registry.find_by_compound(&ext) {
            trace!("Compound extension {} matched {}", ext, scheme.name);
            return Some(scheme.flag);
        }

        if let Some(scheme) = self.registry.find_by_extension(&ext) {
            trace!("Extension {} matched {}", ext, scheme.name);
            return Some(scheme.flag);
        }

        let mime_type = self.mime.mime_type(&ext)?;
        let scheme = self.registry.find_by_mime(&mime_type);
        match scheme {
            Some(s) => trace!("MIME type {} ({}) matched {}", mime_type, ext, s.name),
            None => debug!("MIME type {} ({}) matched no scheme", mime_type, ext),
        }
        scheme.map(|s| s.flag)
    }
}

/// The extension of `path`, lowercased, with its leading dot (`".gz"`), or an
/// empty string when there is none.
///
/// Follows `Path::extension`: a name that is only a dotted suffix, such as
/// `.gz`, is a hidden file with no extension and so is never detected.
fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::archive::compression::CompressionScheme;
    use std::collections::HashMap;

    /// Fixed MIME table so tests do not depend on the `mime_guess` database.
    struct TableLookup(HashMap<&'static str, &'static str>);

    impl MimeLookup for TableLookup {
        fn mime_type(&self, extension: &str) -> Option<String> {
            self.0.get(extension).map(|m| m.to_string())
        }
    }

    fn default_detector() -> CompressionDetector<TableLookup> {
        CompressionDetector::with_mime_lookup(
            CompressionRegistry::default(),
            TableLookup(HashMap::new()),
        )
    }

    #[test]
    fn test_detect_tar_suffixes() {
        let detector = default_detector();
        let cases = [
            ("backup.tar.gz", Some('z')),
            ("backup.tar.bz2", Some('j')),
            ("backup.tar.xz", Some('J')),
            ("backup.tgz", Some('z')),
            ("backup.tbz2", Some('j')),
            ("backup.txz", Some('J')),
            ("/some/dir/backup.gz", Some('z')),
        ];
        for (name, expected) in cases {
            assert_eq!(detector.detect_flag(Path::new(name)), expected, "{}", name);
        }
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        let detector = default_detector();
        assert_eq!(detector.detect_flag(Path::new("BACKUP.TAR.GZ")), Some('z'));
        assert_eq!(detector.detect_flag(Path::new("Backup.TBZ2")), Some('j'));
    }

    #[test]
    fn test_detect_unknown() {
        let detector = default_detector();
        assert_eq!(detector.detect_flag(Path::new("data.zip")), None);
        assert_eq!(detector.detect_flag(Path::new("data.tar")), None);
        assert_eq!(detector.detect_flag(Path::new("no_extension")), None);
        assert_eq!(detector.detect_flag(Path::new(".gz")), None);
    }

    /// Compound extensions take priority over the plain extension lists, even
    /// when a later scheme claims the same suffix.
    #[test]
    fn test_compound_beats_extension() {
        let registry = CompressionRegistry::new(vec![
            CompressionScheme::new("custom", 'X').with_extensions(&[".tgz"]),
            CompressionScheme::new("gzip", 'z').with_compound_extensions(&[".tgz"]),
        ]);
        let detector = CompressionDetector::with_mime_lookup(registry, TableLookup(HashMap::new()));
        assert_eq!(detector.detect_flag(Path::new("a.tgz")), Some('z'));
    }

    #[test]
    fn test_mime_fallback() {
        let registry = CompressionRegistry::new(vec![CompressionScheme::new("gzip", 'z')
            .with_mime_types(&["application/gzip"])]);
        let lookup = TableLookup(HashMap::from([(".gzip", "application/gzip")]));
        let detector = CompressionDetector::with_mime_lookup(registry, lookup);
        assert_eq!(detector.detect_flag(Path::new("a.gzip")), Some('z'));
        assert_eq!(detector.detect_flag(Path::new("a.other")), None);
    }

    #[test]
    fn test_mime_resolved_but_unmatched() {
        let lookup = TableLookup(HashMap::from([(".zip", "application/zip")]));
        let detector = CompressionDetector::with_mime_lookup(CompressionRegistry::default(), lookup);
        assert_eq!(detector.detect_flag(Path::new("a.zip")), None);
    }

    #[test]
    fn test_mime_guess_lookup_handles_empty() {
        assert_eq!(MimeGuessLookup.mime_type(""), None);
        assert_eq!(MimeGuessLookup.mime_type("."), None);
    }

    /// With the real MIME database, a registry holding only MIME types still
    /// recognises gzip files.
    #[test]
    fn test_mime_guess_lookup_gzip() {
        let registry = CompressionRegistry::new(vec![CompressionScheme::new("gzip", 'z')
            .with_mime_types(&["application/gzip", "application/x-gzip"])]);
        let detector = CompressionDetector::new(registry);
        assert_eq!(detector.detect_flag(Path::new("a.gz")), Some('z'));
    }
}
