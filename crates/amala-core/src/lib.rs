//! amala-core: shared types and the transform half of the amala pipeline.
//!
//! This crate holds the record types every layer speaks, the configuration
//! document, and the two pure-ish stages that sit between ingest and report:
//!
//! ```text
//! Ingest ──► Normalizer ──► Export (CSV)
//!                 │
//!                 └──────► Report (chart, dashboard, archive)
//! ```
//!
//! Ingest lives in `amala-ingest`, report rendering in `amala-report`.

pub mod config;
pub mod error;
pub mod export;
pub mod normalizer;
pub mod types;

pub use error::{Error, Result};
pub use normalizer::{Dataset, MetricNormalizer};
pub use config::{Config, ScaleConfig};
pub use types::{DatasetRow, LogEntry, NormalizedEntry, Scores};
