//! amala: personal-metrics ETL
//!
//! Reads daily log files (a `---`-delimited YAML header plus a markdown body),
//! normalizes their metrics onto a common 0–10 scale, and publishes a CSV
//! dataset, an SVG trend chart, a dashboard page and an archive page. This
//! crate wires the layers together and re-exports them so that integration
//! tests and benches can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! EntryParser ──► MetricNormalizer ──┬──► export::write_dataset
//!  (ingest)          (core)          └──► ReportAssembler
//!                                            (report)
//! ```
//!
//! Files are parsed in parallel; everything after parsing runs on the calling
//! thread.

pub mod pipeline;

pub use amala_core::{config, export, Config, Dataset, LogEntry, MetricNormalizer, NormalizedEntry, ScaleConfig};
pub use amala_ingest::{EntryError, EntryParser, ParseReport};
pub use amala_report::{Artifacts, ChartTheme, ReportAssembler, ReportError};
pub use pipeline::{Outcome, Pipeline, RunSummary};
