//! # Tarbit Compression Registry (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! This module holds the table of compression schemes tarbit knows about. Each
//! scheme pairs the single-character flag handed to `tar` (`z`, `j`, `J`) with
//! the file extensions and MIME types that identify it.
//!
//! ## Architecture
//!
//! - **`CompressionScheme`**: one immutable record (name, flag, extensions,
//!   MIME types, compound extensions).
//! - **`CompressionRegistry`**: an ordered list of schemes, built once per
//!   invocation and handed to the detector. There is no global table.
//!
//! Lookups are linear scans where the first matching scheme wins. Extension and
//! MIME sets are expected not to overlap; when a configured registry does overlap,
//! registration order decides and `overlaps` reports the collisions so the
//! configuration loader can warn about them.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::compression::CompressionRegistry;
//!
//! let registry = CompressionRegistry::default();
//! let gzip = registry.find_by_extension(".gz").unwrap();
//! assert_eq!(gzip.flag, 'z');
//! ```
//!
use std::collections::HashMap;

/// A compression scheme understood by the archiving tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionScheme {
    /// Human-readable name (e.g. "gzip"), used in logs and configuration.
    pub name: String,
    /// Single character passed to `tar` to select this compression.
    pub flag: char,
    /// Lowercase extensions including the leading dot (e.g. ".gz").
    pub extensions: Vec<String>,
    /// MIME types identifying this compression.
    pub mime_types: Vec<String>,
    /// Extensions that encode "tar + this compression" in a single token (e.g. ".tgz").
    pub compound_extensions: Vec<String>,
}

impl CompressionScheme {
    pub fn new(name: &str, flag: char) -> Self {
        Self {
            name: name.to_string(),
            flag,
            extensions: Vec::new(),
            mime_types: Vec::new(),
            compound_extensions: Vec::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn with_mime_types(mut self, mime_types: &[&str]) -> Self {
        self.mime_types = mime_types.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_compound_extensions(mut self, extensions: &[&str]) -> Self {
        self.compound_extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }
}

/// Ordered, immutable set of compression schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRegistry {
    schemes: Vec<CompressionScheme>,
}

impl CompressionRegistry {
    pub fn new(schemes: Vec<CompressionScheme>) -> Self {
        Self { schemes }
    }

    pub fn schemes(&self) -> &[CompressionScheme] {
        &self.schemes
    }

    /// First scheme listing `ext` as a compound (tar + compression) extension.
    pub fn find_by_compound(&self, ext: &str) -> Option<&CompressionScheme> {
        self.schemes
            .iter()
            .find(|s| s.compound_extensions.iter().any(|e| e == ext))
    }

    /// First scheme whose extension set contains `ext`.
    pub fn find_by_extension(&self, ext: &str) -> Option<&CompressionScheme> {
        self.schemes
            .iter()
            .find(|s| s.extensions.iter().any(|e| e == ext))
    }

    /// First scheme whose MIME set contains `mime_type`.
    pub fn find_by_mime(&self, mime_type: &str) -> Option<&CompressionScheme> {
        if mime_type.is_empty() {
            return None;
        }
        self.schemes
            .iter()
            .find(|s| s.mime_types.iter().any(|m| m == mime_type))
    }

    /// Extensions and MIME types claimed by more than one scheme, with the
    /// names of the claiming schemes in registration order.
    pub fn overlaps(&self) -> Vec<(String, Vec<String>)> {
        let mut claims: HashMap<&str, Vec<String>> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for scheme in &self.schemes {
            let keys = scheme
                .extensions
                .iter()
                .chain(scheme.compound_extensions.iter())
                .chain(scheme.mime_types.iter());
            for key in keys {
                let owners = claims.entry(key.as_str()).or_insert_with(|| {
                    order.push(key.as_str());
                    Vec::new()
                });
                if !owners.contains(&scheme.name) {
                    owners.push(scheme.name.clone());
                }
            }
        }
        order
            .into_iter()
            .filter_map(|key| {
                let owners = &claims[key];
                (owners.len() > 1).then(|| (key.to_string(), owners.clone()))
            })
            .collect()
    }
}

impl Default for CompressionRegistry {
    /// gzip, bzip2 and xz, in that order.
    fn default() -> Self {
        Self::new(vec![
            CompressionScheme::new("gzip", 'z')
                .with_extensions(&[".gz", ".tgz"])
                .with_mime_types(&["application/gzip", "application/x-gzip"])
                .with_compound_extensions(&[".tgz"]),
            CompressionScheme::new("bzip2", 'j')
                .with_extensions(&[".bz2", ".tbz2"])
                .with_mime_types(&["application/x-bzip2"])
                .with_compound_extensions(&[".tbz2"]),
            CompressionScheme::new("xz", 'J')
                .with_extensions(&[".xz", ".txz"])
                .with_mime_types(&["application/x-xz"]),
        ])
    }
}
