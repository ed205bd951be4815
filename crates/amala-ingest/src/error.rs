//! Per-file ingest errors.
//!
//! None of these is fatal to a run: the parser records one per rejected file
//! and moves on to the next.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntryError {
    /// The file could not be read (permissions, invalid UTF-8, vanished).
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content does not split into preamble, header and body.
    #[error(
        "malformed entry {}: expected a header between two `---` sentinels, found {found} segment(s)",
        .path.display()
    )]
    Malformed { path: PathBuf, found: usize },

    /// The header is not a YAML mapping of the expected shape, or lacks a
    /// valid `date`.
    #[error("bad header in {}: {source}", .path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The header decoded but holds an impossible value.
    #[error("invalid header in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl EntryError {
    /// The file this error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            EntryError::Read { path, .. }
            | EntryError::Malformed { path, .. }
            | EntryError::Header { path, .. }
            | EntryError::Invalid { path, .. } => path,
        }
    }
}
