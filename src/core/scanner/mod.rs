//! # Scanner Module
//!
//! Collects the quoted type names that open a brace in a source file, e.g.
//! `"RECTANGLE{` style keys in the Figma parser.
//!
//! ## Example
//! ```rust,ignore
//! use figmaqml_tools::core::scanner::IdentifierScanner;
//!
//! let names = IdentifierScanner::new().scan_file("src/figmaparser.cpp".as_ref())?;
//! for name in names.iter() {
//!     println!("{name}");
//! }
//! ```

mod pattern;

pub use pattern::{IdentifierPattern, IDENTIFIER_PATTERN};

use crate::error::ScanError;
use std::collections::hash_set;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Source file scanned when no path is given
pub const DEFAULT_SOURCE_PATH: &str = "src/figmaparser.cpp";

/// Unique identifiers found during a scan
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    names: HashSet<String>,
}

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier. Returns `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.names.iter()
    }

    /// Identifiers in lexical order
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<'a> IntoIterator for &'a IdentifierSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Scans text line by line, recording the first identifier match of each line
#[derive(Debug, Clone, Default)]
pub struct IdentifierScanner {
    pattern: IdentifierPattern,
}

impl IdentifierScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the first qualifying token in `line`
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern.first_match(line)
    }

    /// Scan every line from `reader`
    pub fn scan_reader<R: BufRead>(&self, reader: R) -> io::Result<IdentifierSet> {
        let mut names = IdentifierSet::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(name) = self.match_line(&line) {
                names.insert(name);
            }
        }
        Ok(names)
    }

    /// Open and scan a file
    pub fn scan_file(&self, path: &Path) -> Result<IdentifierSet, ScanError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScanError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ScanError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let names = self
            .scan_reader(BufReader::new(file))
            .map_err(|e| ScanError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), found = names.len(), "scan complete");
        Ok(names)
    }
}

/// Scan `path` with the standard identifier pattern
pub fn scan(path: &Path) -> Result<IdentifierSet, ScanError> {
    IdentifierScanner::new().scan_file(path)
}
