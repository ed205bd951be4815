//! Configuration types for amala.
//!
//! [`Config::load`] layers an optional `amala.toml` on top of the built-in
//! defaults. [`Config::defaults`] returns the same defaults without touching
//! the filesystem (useful in tests).
//!
//! Relative paths in `[paths]` are resolved against the run's working
//! directory by [`PathsConfig::resolve`].

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no explicit config path
/// is given.
pub const CONFIG_FILE_NAME: &str = "amala.toml";

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
logs_dir      = "Logs"
assets_dir    = "assets"
dataset_file  = "amala_dataset.csv"
template_file = "index.template.md"
output_file   = "index.md"
archive_file  = "index.md"
chart_file    = "progress_chart.svg"
log_extension = "md"

[scale]
max_java_hours     = 10.0
max_sleep_hours    = 10.0
max_sleep_quality  = 100.0
max_forest_minutes = 120.0

[report]
plan_hours   = 6.0
recent_limit = 5
chart_width  = 1200
chart_height = 700
chart_theme  = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[paths]` section. Every path is relative to the working directory unless
/// given as absolute.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned for daily logs. Also the prefix of every entry's
    /// source link.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_dataset_file")]
    pub dataset_file: String,
    #[serde(default = "default_template_file")]
    pub template_file: String,
    /// Rendered dashboard page.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// File name of the archive page written inside `logs_dir`. Files with
    /// this name are never read back as input.
    #[serde(default = "default_archive_file")]
    pub archive_file: String,
    /// File name of the chart written inside `assets_dir`.
    #[serde(default = "default_chart_file")]
    pub chart_file: String,
    /// Extension (without the dot) of daily log files.
    #[serde(default = "default_log_extension")]
    pub log_extension: String,
}

fn default_logs_dir() -> String { "Logs".to_string() }
fn default_assets_dir() -> String { "assets".to_string() }
fn default_dataset_file() -> String { "amala_dataset.csv".to_string() }
fn default_template_file() -> String { "index.template.md".to_string() }
fn default_output_file() -> String { "index.md".to_string() }
fn default_archive_file() -> String { "index.md".to_string() }
fn default_chart_file() -> String { "progress_chart.svg".to_string() }
fn default_log_extension() -> String { "md".to_string() }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            assets_dir: default_assets_dir(),
            dataset_file: default_dataset_file(),
            template_file: default_template_file(),
            output_file: default_output_file(),
            archive_file: default_archive_file(),
            chart_file: default_chart_file(),
            log_extension: default_log_extension(),
        }
    }
}

/// Absolute locations for one run, produced by [`PathsConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub logs_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub dataset_file: PathBuf,
    pub template_file: PathBuf,
    pub dashboard_file: PathBuf,
    pub archive_file: PathBuf,
    pub chart_file: PathBuf,
}

impl PathsConfig {
    pub fn resolve(&self, workdir: &Path) -> ResolvedPaths {
        let logs_dir = workdir.join(&self.logs_dir);
        let assets_dir = workdir.join(&self.assets_dir);
        ResolvedPaths {
            archive_file: logs_dir.join(&self.archive_file),
            chart_file: assets_dir.join(&self.chart_file),
            dataset_file: workdir.join(&self.dataset_file),
            template_file: workdir.join(&self.template_file),
            dashboard_file: workdir.join(&self.output_file),
            logs_dir,
            assets_dir,
        }
    }
}

/// `[scale]` section: the raw value that maps to 10 on the shared chart axis.
///
/// Passed by value into the normalizer; nothing reads these from global state.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScaleConfig {
    #[serde(default = "default_max_java_hours")]
    pub max_java_hours: f64,
    #[serde(default = "default_max_sleep_hours")]
    pub max_sleep_hours: f64,
    #[serde(default = "default_max_sleep_quality")]
    pub max_sleep_quality: f64,
    #[serde(default = "default_max_forest_minutes")]
    pub max_forest_minutes: f64,
}

fn default_max_java_hours() -> f64 { 10.0 }
fn default_max_sleep_hours() -> f64 { 10.0 }
fn default_max_sleep_quality() -> f64 { 100.0 }
fn default_max_forest_minutes() -> f64 { 120.0 }

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            max_java_hours: default_max_java_hours(),
            max_sleep_hours: default_max_sleep_hours(),
            max_sleep_quality: default_max_sleep_quality(),
            max_forest_minutes: default_max_forest_minutes(),
        }
    }
}

impl ScaleConfig {
    /// `raw / max * 10`, unclamped.
    pub fn scale(raw: f64, max: f64) -> f64 {
        raw / max * 10.0
    }

    /// Every maximum must be a finite, strictly positive number.
    pub fn validate(&self) -> anyhow::Result<()> {
        let maxima = [
            ("max_java_hours", self.max_java_hours),
            ("max_sleep_hours", self.max_sleep_hours),
            ("max_sleep_quality", self.max_sleep_quality),
            ("max_forest_minutes", self.max_forest_minutes),
        ];
        for (key, value) in maxima {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("scale.{key} must be a positive number, got {value}");
            }
        }
        Ok(())
    }
}

/// `[report]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Daily Java plan, drawn as a dashed reference line on the chart.
    #[serde(default = "default_plan_hours")]
    pub plan_hours: f64,
    /// How many of the newest entries the dashboard lists.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Version string substituted into the dashboard.
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
    /// Built-in theme name (`default`, `dark`) or a path to a theme TOML file.
    #[serde(default = "default_chart_theme")]
    pub chart_theme: String,
}

fn default_plan_hours() -> f64 { 6.0 }
fn default_recent_limit() -> usize { 5 }
fn default_version() -> String { env!("CARGO_PKG_VERSION").to_string() }
fn default_chart_width() -> u32 { 1200 }
fn default_chart_height() -> u32 { 700 }
fn default_chart_theme() -> String { "default".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            plan_hours: default_plan_hours(),
            recent_limit: default_recent_limit(),
            version: default_version(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            chart_theme: default_chart_theme(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, overlaid with `explicit` if given, else
    /// with `<workdir>/amala.toml` when that file exists.
    ///
    /// An explicit path that does not exist is an error; the implicit one is
    /// optional.
    pub fn load(workdir: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => (workdir.join(CONFIG_FILE_NAME), false),
        };

        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(required))
            .build()
            .with_context(|| format!("loading config from {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("invalid config in {}", path.display()))?;

        cfg.scale.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
