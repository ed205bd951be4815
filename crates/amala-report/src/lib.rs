//! amala-report: renders the chart, the dashboard and the archive page from a
//! normalized dataset.
//!
//! ```text
//!  &[NormalizedEntry] ──► ReportAssembler::assemble
//!                              │
//!            ┌─────────────────┼──────────────────┐
//!            ▼                 ▼                  ▼
//!     chart::render_chart  dashboard::render  archive::render_archive
//!     assets/*.svg         index.md           Logs/index.md
//! ```
//!
//! The renderers are pure functions returning text; only the assembler
//! touches the filesystem.

pub mod archive;
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod theme;

pub use chart::{render_chart, write_chart, ChartSettings};
pub use dashboard::{render_dashboard, DashboardContext};
pub use archive::render_archive;
pub use error::ReportError;
pub use theme::ChartTheme;

use amala_core::config::{Config, ReportConfig, ResolvedPaths};
use amala_core::NormalizedEntry;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Paths of the report files written by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    pub chart: PathBuf,
    pub dashboard: PathBuf,
    pub archive: PathBuf,
}

/// Writes the three report artifacts for a dataset.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    paths: ResolvedPaths,
    report: ReportConfig,
    archive_link: String,
    theme: ChartTheme,
}

impl ReportAssembler {
    /// Assembler using the default chart theme. `archive_link` is the
    /// dashboard's link to the archive page.
    pub fn new(paths: ResolvedPaths, report: ReportConfig, archive_link: impl Into<String>) -> Self {
        Self {
            paths,
            report,
            archive_link: archive_link.into(),
            theme: ChartTheme::load_default(),
        }
    }

    /// Assembler for `workdir` with the configured paths and chart theme.
    pub fn from_config(workdir: &Path, config: &Config) -> Result<Self, ReportError> {
        let theme = ChartTheme::resolve(&config.report.chart_theme, workdir)?;
        let archive_link = format!("{}/{}", config.paths.logs_dir, config.paths.archive_file);
        Ok(Self::new(config.paths.resolve(workdir), config.report.clone(), archive_link).with_theme(theme))
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Render and write chart, dashboard and archive.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `entries` is
    /// empty. A missing dashboard template is an error.
    pub fn assemble(
        &self,
        entries: &[NormalizedEntry],
        generated_at: NaiveDateTime,
    ) -> Result<Option<Artifacts>, ReportError> {
        if entries.is_empty() {
            tracing::info!("no entries, skipping reports");
            return Ok(None);
        }

        let template_path = &self.paths.template_file;
        let template = std::fs::read_to_string(template_path).map_err(|e| ReportError::io(template_path, e))?;

        write_chart(
            &self.paths.chart_file,
            entries,
            &self.theme,
            &ChartSettings::from_config(&self.report),
        )?;

        let ctx = DashboardContext {
            generated_at,
            version: &self.report.version,
            recent_limit: self.report.recent_limit,
            archive_link: &self.archive_link,
        };
        write_page(&self.paths.dashboard_file, &render_dashboard(&template, entries, &ctx))?;
        tracing::info!(path = %self.paths.dashboard_file.display(), "dashboard written");

        write_page(&self.paths.archive_file, &render_archive(entries))?;
        tracing::info!(path = %self.paths.archive_file.display(), count = entries.len(), "archive written");

        Ok(Some(Artifacts {
            chart: self.paths.chart_file.clone(),
            dashboard: self.paths.dashboard_file.clone(),
            archive: self.paths.archive_file.clone(),
        }))
    }
}

fn write_page(path: &Path, content: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| ReportError::io(path, e))
}

/// `value` with one decimal, ties rounded away from zero (`2.25` → `2.3`,
/// where `{:.1}` alone gives `2.2`).
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Entries in descending date order; equal dates keep their relative order.
pub(crate) fn newest_first(entries: &[NormalizedEntry]) -> Vec<&NormalizedEntry> {
    let mut sorted: Vec<&NormalizedEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
