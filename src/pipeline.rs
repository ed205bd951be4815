//! One ETL run: parse → normalize → export → report.

use amala_core::{export, Config, MetricNormalizer};
use amala_ingest::EntryParser;
use amala_report::{Artifacts, ReportAssembler};
use anyhow::Context;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No valid entries were found; nothing was written.
    NothingToProcess,
    /// Dataset and reports were written.
    Completed,
}

/// What a run did, printed by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub outcome: Outcome,
    /// Candidate log files found.
    pub discovered: usize,
    pub parsed: usize,
    /// Files rejected as malformed.
    pub skipped: usize,
    pub total_java_hours: f64,
    pub dataset: Option<PathBuf>,
    pub artifacts: Option<Artifacts>,
}

impl RunSummary {
    fn nothing(discovered: usize, skipped: usize) -> Self {
        Self {
            outcome: Outcome::NothingToProcess,
            discovered,
            parsed: 0,
            skipped,
            total_java_hours: 0.0,
            dataset: None,
            artifacts: None,
        }
    }
}

pub struct Pipeline {
    config: Config,
    workdir: PathBuf,
}

impl Pipeline {
    /// Pipeline over `workdir`; every relative path in `config` is taken
    /// from there.
    pub fn new(config: Config, workdir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            workdir: workdir.into(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run every stage once. `generated_at` is stamped into the dashboard.
    ///
    /// Malformed log files are skipped and counted. Failing to write any
    /// output aborts the run.
    pub fn run(&self, generated_at: NaiveDateTime) -> anyhow::Result<RunSummary> {
        let parser = EntryParser::from_config(&self.workdir, &self.config.paths);
        let report = parser.parse_dir();

        let (discovered, skipped) = (report.discovered, report.skipped());
        if skipped > 0 {
            tracing::warn!(count = skipped, discovered, "some log files were skipped");
        }
        if report.is_empty() {
            tracing::info!(path = %parser.root().display(), "no data to process");
            return Ok(RunSummary::nothing(discovered, skipped));
        }

        let assembler = ReportAssembler::from_config(&self.workdir, &self.config)
            .with_context(|| format!("loading chart theme `{}`", self.config.report.chart_theme))?;

        let dataset = MetricNormalizer::new(self.config.scale).normalize(report.entries);
        let paths = self.config.paths.resolve(&self.workdir);

        export::write_dataset(&paths.dataset_file, &dataset.rows)
            .with_context(|| format!("writing dataset {}", paths.dataset_file.display()))?;

        let artifacts = assembler
            .assemble(&dataset.entries, generated_at)
            .context("assembling reports")?;

        let summary = RunSummary {
            outcome: Outcome::Completed,
            discovered,
            parsed: dataset.len(),
            skipped,
            total_java_hours: dataset.total_java_hours(),
            dataset: Some(paths.dataset_file),
            artifacts,
        };
        tracing::info!(
            parsed = summary.parsed,
            skipped = summary.skipped,
            total_java_hours = summary.total_java_hours,
            "run complete"
        );
        Ok(summary)
    }
}
