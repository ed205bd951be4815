//! Colour theme for the trend chart.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so a run works without any theme file on disk.
//! A user theme can be supplied by path through `report.chart_theme`.
//!
//! # Series
//!
//! Every chart series (`java`, `sleep_hours`, `sleep_quality`, `mood`,
//! `diet`, `forest`) has a label, a colour, a stroke width and an optional
//! marker flag. The dashed plan line has its own colour, width and dash
//! pattern.

use crate::error::ReportError;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawCanvas {
    background: String,
    text: String,
    grid: String,
    axis: String,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    label: String,
    color: String,
    #[serde(default = "default_series_width")]
    width: f64,
    #[serde(default)]
    marker: bool,
}

fn default_series_width() -> f64 {
    2.0
}

impl RawSeries {
    fn into_style(self, fallback: Rgb) -> SeriesStyle {
        SeriesStyle {
            color: parse_color(&self.color).unwrap_or(fallback),
            label: self.label,
            width: self.width,
            marker: self.marker,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAllSeries {
    java: RawSeries,
    sleep_hours: RawSeries,
    sleep_quality: RawSeries,
    mood: RawSeries,
    diet: RawSeries,
    forest: RawSeries,
}

#[derive(Debug, Deserialize)]
struct RawPlan {
    color: String,
    #[serde(default = "default_series_width")]
    width: f64,
    #[serde(default)]
    dash: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    canvas: RawCanvas,
    series: RawAllSeries,
    plan: RawPlan,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// An sRGB colour, rendered as `#rrggbb` in SVG attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Resolved style of one chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub label: String,
    pub color: Rgb,
    pub width: f64,
    /// Draw a circle at every data point.
    pub marker: bool,
}

/// Resolved style of the dashed plan reference line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStyle {
    pub color: Rgb,
    pub width: f64,
    pub dash: Option<String>,
}

/// Chart colour theme.
///
/// Load once with [`ChartTheme::load_default`] (or [`ChartTheme::resolve`]
/// for a configured name) and pass by reference into the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub background: Rgb,
    pub text: Rgb,
    pub grid: Rgb,
    pub axis: Rgb,

    pub java: SeriesStyle,
    pub sleep_hours: SeriesStyle,
    pub sleep_quality: SeriesStyle,
    pub mood: SeriesStyle,
    pub diet: SeriesStyle,
    pub forest: SeriesStyle,

    pub plan: PlanStyle,
}

impl ChartTheme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_dark() -> Self {
        Self::from_toml_str(DARK_THEME_SRC).expect("embedded dark theme must be valid TOML")
    }

    /// A built-in theme by name, or a theme file at `name` (relative paths
    /// are taken from `workdir`).
    pub fn resolve(name: &str, workdir: &Path) -> Result<Self, ReportError> {
        match name {
            "" | "default" => Ok(Self::load_default()),
            "dark" => Ok(Self::load_dark()),
            path => {
                let path = workdir.join(path);
                let src = std::fs::read_to_string(&path).map_err(|e| ReportError::io(&path, e))?;
                Self::from_toml_str(&src)
            }
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored. A colour that cannot be parsed falls back to
    /// the theme's text colour (or black for canvas colours).
    pub fn from_toml_str(src: &str) -> Result<Self, ReportError> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        let black = Rgb(0, 0, 0);
        let text = parse_color(&raw.canvas.text).unwrap_or(black);

        Ok(Self {
            background: parse_color(&raw.canvas.background).unwrap_or(Rgb(255, 255, 255)),
            text,
            grid: parse_color(&raw.canvas.grid).unwrap_or(text),
            axis: parse_color(&raw.canvas.axis).unwrap_or(text),
            java: raw.series.java.into_style(text),
            sleep_hours: raw.series.sleep_hours.into_style(text),
            sleep_quality: raw.series.sleep_quality.into_style(text),
            mood: raw.series.mood.into_style(text),
            diet: raw.series.diet.into_style(text),
            forest: raw.series.forest.into_style(text),
            plan: PlanStyle {
                color: parse_color(&raw.plan.color).unwrap_or(text),
                width: raw.plan.width,
                dash: raw.plan.dash,
            },
        })
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::load_default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into an [`Rgb`].
///
/// Accepts basic colour names (case-insensitive) and hex `#rrggbb`.
fn parse_color(s: &str) -> Option<Rgb> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Rgb(0, 0, 0)),
        "white" => Some(Rgb(255, 255, 255)),
        "red" => Some(Rgb(255, 0, 0)),
        "green" => Some(Rgb(0, 128, 0)),
        "blue" => Some(Rgb(0, 0, 255)),
        "yellow" => Some(Rgb(255, 255, 0)),
        "orange" => Some(Rgb(255, 165, 0)),
        "gray" | "grey" => Some(Rgb(128, 128, 128)),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(s.get(1..3)?, 16).ok()?;
            let g = u8::from_str_radix(s.get(3..5)?, 16).ok()?;
            let b = u8::from_str_radix(s.get(5..7)?, 16).ok()?;
            Some(Rgb(r, g, b))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
