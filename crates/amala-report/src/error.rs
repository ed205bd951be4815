use std::path::PathBuf;
use thiserror::Error;

/// Failures while assembling report artifacts. All of them abort the run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid chart theme: {0}")]
    Theme(#[from] config::ConfigError),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
