//! amala-ingest: turns a directory of daily log files into [`LogEntry`] values.
//!
//! Each file is parsed in isolation. A file that cannot be read, lacks a
//! `---`-delimited header, or carries an undecodable header is reported as an
//! [`EntryError`] and skipped; the rest of the batch continues. A missing
//! root directory means "no data" and yields an empty [`ParseReport`].
//!
//! Files are read and decoded in parallel with rayon. The report lists
//! entries and errors in discovery (path) order regardless of scheduling.

pub mod discovery;
pub mod error;
pub mod header;
pub mod segments;

pub use error::EntryError;
pub use header::EntryHeader;
pub use segments::{split_segments, Segments, SENTINEL};

use amala_core::config::PathsConfig;
use amala_core::LogEntry;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome of parsing one log directory.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// Successfully parsed entries, in discovery order.
    pub entries: Vec<LogEntry>,
    /// One error per skipped file, in discovery order.
    pub errors: Vec<EntryError>,
    /// Number of candidate files found.
    pub discovered: usize,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.errors.len()
    }
}

/// Parses every daily log under a root directory.
#[derive(Debug, Clone)]
pub struct EntryParser {
    root: PathBuf,
    link_prefix: String,
    extension: String,
    reserved_name: String,
}

impl EntryParser {
    /// Parser for `root` with the default `md` extension and `index.md`
    /// reserved name. `link_prefix` is prepended to each file name to form
    /// the entry's source link.
    pub fn new(root: impl Into<PathBuf>, link_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            link_prefix: link_prefix.into(),
            extension: "md".to_string(),
            reserved_name: "index.md".to_string(),
        }
    }

    /// Parser for `<workdir>/<logs_dir>` as configured in `[paths]`.
    pub fn from_config(workdir: &Path, paths: &PathsConfig) -> Self {
        Self::new(workdir.join(&paths.logs_dir), paths.logs_dir.clone())
            .with_extension(paths.log_extension.clone())
            .with_reserved_name(paths.archive_file.clone())
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_reserved_name(mut self, name: impl Into<String>) -> Self {
        self.reserved_name = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover and parse every log file under the root.
    pub fn parse_dir(&self) -> ParseReport {
        if !self.root.is_dir() {
            tracing::warn!(path = %self.root.display(), "log directory not found");
            return ParseReport::default();
        }

        let files = discovery::discover(&self.root, &self.extension, &self.reserved_name);
        tracing::info!(path = %self.root.display(), count = files.len(), "log files found");

        let results: Vec<Result<LogEntry, EntryError>> =
            files.par_iter().map(|path| self.parse_file(path)).collect();

        let mut report = ParseReport {
            discovered: files.len(),
            ..ParseReport::default()
        };
        for result in results {
            match result {
                Ok(entry) => {
                    tracing::debug!(link = %entry.source_link, date = %entry.date, "parsed entry");
                    report.entries.push(entry);
                }
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e, "skipping log file");
                    report.errors.push(e);
                }
            }
        }
        report
    }

    /// Parse a single log file.
    pub fn parse_file(&self, path: &Path) -> Result<LogEntry, EntryError> {
        let content = std::fs::read_to_string(path).map_err(|source| EntryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (header, body) = match split_segments(&content) {
            Segments::Entry { header, body } => (header, body),
            Segments::Malformed { found } => {
                return Err(EntryError::Malformed {
                    path: path.to_path_buf(),
                    found,
                })
            }
        };

        let header = EntryHeader::decode(header).map_err(|source| EntryError::Header {
            path: path.to_path_buf(),
            source,
        })?;
        header.validate().map_err(|reason| EntryError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;

        Ok(header.into_entry(self.source_link(path), body.trim().to_string()))
    }

    fn source_link(&self, path: &Path) -> String {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix = self.link_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
