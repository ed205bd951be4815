//! SVG trend chart: every normalized series against date on one 0–11 axis.
//!
//! Six series are drawn: the four scaled scores plus raw mood and diet
//! (already on a 0–10 scale). When the chart spans more than one entry a
//! dashed horizontal line marks the daily Java plan.

use crate::error::ReportError;
use crate::theme::{ChartTheme, Rgb, SeriesStyle};
use amala_core::config::ReportConfig;
use amala_core::NormalizedEntry;
use chrono::NaiveDate;
use std::path::Path;

pub const TITLE: &str = "Unified Correlation Dashboard (0-10 Scale)";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Unified Score (0-10)";

/// Upper bound of the y axis. Scores above it are clipped by the plot area.
const Y_MAX: f64 = 11.0;
/// At most this many date labels along the x axis.
const MAX_X_LABELS: usize = 8;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 80.0;

/// Canvas size and plan line value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
    /// Java hours per day the plan line is drawn at.
    pub plan_hours: f64,
}

impl ChartSettings {
    pub fn from_config(report: &ReportConfig) -> Self {
        Self {
            width: report.chart_width,
            height: report.chart_height,
            plan_hours: report.plan_hours,
        }
    }

    /// Legend label of the plan line, e.g. `Daily Plan (6h Java)`.
    pub fn plan_label(&self) -> String {
        format!("Daily Plan ({}h Java)", self.plan_hours)
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

/// Pixel geometry of the plot area.
struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    first: NaiveDate,
    span_days: i64,
}

impl Frame {
    fn new(settings: &ChartSettings, first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            left: MARGIN_LEFT,
            right: f64::from(settings.width) - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: f64::from(settings.height) - MARGIN_BOTTOM,
            first,
            span_days: (last - first).num_days(),
        }
    }

    fn x(&self, date: NaiveDate) -> f64 {
        if self.span_days == 0 {
            return (self.left + self.right) / 2.0;
        }
        let offset = (date - self.first).num_days() as f64;
        self.left + offset / self.span_days as f64 * (self.right - self.left)
    }

    fn y(&self, value: f64) -> f64 {
        self.bottom - value / Y_MAX * (self.bottom - self.top)
    }
}

/// Render the chart as a standalone SVG document.
///
/// `entries` must be in ascending date order, as produced by the normalizer.
/// An empty slice renders axes and legend only.
pub fn render_chart(entries: &[NormalizedEntry], theme: &ChartTheme, settings: &ChartSettings) -> String {
    let (w, h) = (settings.width, settings.height);
    let first = entries.first().map_or(NaiveDate::MIN, |e| e.date);
    let last = entries.last().map(|e| e.date).unwrap_or(first);
    let frame = Frame::new(settings, first, last);

    let mut svg = String::with_capacity(16 * 1024);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
        theme.background
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="32" text-anchor="middle" font-size="20" fill="{}">{}</text>"#,
        f64::from(w) / 2.0,
        theme.text,
        escape_xml(TITLE)
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<defs><clipPath id="plot-area"><rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}"/></clipPath></defs>"#,
        frame.left,
        frame.top,
        frame.right - frame.left,
        frame.bottom - frame.top
    ));
    svg.push('\n');

    push_grid(&mut svg, &frame, entries, theme, h);

    svg.push_str("<g clip-path=\"url(#plot-area)\">\n");
    for (style, values) in series(entries, theme) {
        push_series(&mut svg, &frame, entries, style, &values);
    }
    let plan_drawn = entries.len() > 1;
    if plan_drawn {
        let y = frame.y(settings.plan_hours);
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-width="{}"{}/>"#,
            frame.x(first),
            frame.x(last),
            theme.plan.color,
            theme.plan.width,
            dash_attr(theme.plan.dash.as_deref())
        ));
        svg.push('\n');
    }
    svg.push_str("</g>\n");

    push_legend(&mut svg, &frame, theme, settings, plan_drawn);

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the chart, creating the parent directory if needed.
pub fn write_chart(
    path: &Path,
    entries: &[NormalizedEntry],
    theme: &ChartTheme,
    settings: &ChartSettings,
) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    std::fs::write(path, render_chart(entries, theme, settings)).map_err(|e| ReportError::io(path, e))?;
    tracing::info!(path = %path.display(), points = entries.len(), "chart written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Pieces
// ---------------------------------------------------------------------------

fn series<'a>(entries: &[NormalizedEntry], theme: &'a ChartTheme) -> [(&'a SeriesStyle, Vec<f64>); 6] {
    let collect = |f: fn(&NormalizedEntry) -> f64| entries.iter().map(f).collect::<Vec<_>>();
    [
        (&theme.java, collect(|e| e.scores().java)),
        (&theme.sleep_hours, collect(|e| e.scores().sleep_hours)),
        (&theme.sleep_quality, collect(|e| e.scores().sleep_quality)),
        (&theme.mood, collect(|e| f64::from(e.mood))),
        (&theme.diet, collect(|e| f64::from(e.diet))),
        (&theme.forest, collect(|e| e.scores().forest)),
    ]
}

fn push_grid(svg: &mut String, frame: &Frame, entries: &[NormalizedEntry], theme: &ChartTheme, height: u32) {
    for tick in 0..=(Y_MAX as u32) {
        let y = frame.y(f64::from(tick));
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-width="1"/>"#,
            frame.left, frame.right, theme.grid
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12" fill="{}">{tick}</text>"#,
            frame.left - 8.0,
            y + 4.0,
            theme.text
        ));
        svg.push('\n');
    }

    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    dates.dedup();
    let step = dates.len().div_ceil(MAX_X_LABELS).max(1);
    for date in dates.iter().step_by(step) {
        let x = frame.x(*date);
        svg.push_str(&format!(
            r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            frame.top, frame.bottom, theme.grid
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{}">{}</text>"#,
            frame.bottom + 20.0,
            theme.text,
            date.format("%Y-%m-%d")
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"<path d="M{:.1},{:.1} V{:.1} H{:.1}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
        frame.left, frame.top, frame.bottom, frame.right, theme.axis
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14" fill="{}">{}</text>"#,
        (frame.left + frame.right) / 2.0,
        f64::from(height) - 25.0,
        theme.text,
        escape_xml(X_AXIS_TITLE)
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="22" y="{cy:.1}" text-anchor="middle" font-size="14" fill="{}" transform="rotate(-90 22 {cy:.1})">{}</text>"#,
        theme.text,
        escape_xml(Y_AXIS_TITLE),
        cy = (frame.top + frame.bottom) / 2.0
    ));
    svg.push('\n');
}

fn push_series(svg: &mut String, frame: &Frame, entries: &[NormalizedEntry], style: &SeriesStyle, values: &[f64]) {
    let points: Vec<String> = entries
        .iter()
        .zip(values)
        .map(|(e, v)| format!("{:.1},{:.1}", frame.x(e.date), frame.y(*v)))
        .collect();
    svg.push_str(&format!(
        r#"<polyline fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" points="{}"/>"#,
        style.color,
        style.width,
        points.join(" ")
    ));
    svg.push('\n');

    let radius = if style.marker { 4.0 } else { 2.5 };
    for (e, v) in entries.iter().zip(values) {
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{radius}" fill="{}"/>"#,
            frame.x(e.date),
            frame.y(*v),
            style.color
        ));
    }
    svg.push('\n');
}

fn push_legend(svg: &mut String, frame: &Frame, theme: &ChartTheme, settings: &ChartSettings, with_plan: bool) {
    let mut rows: Vec<(String, Rgb, Option<&str>)> = [
        &theme.java,
        &theme.sleep_hours,
        &theme.sleep_quality,
        &theme.mood,
        &theme.diet,
        &theme.forest,
    ]
    .into_iter()
    .map(|s| (s.label.clone(), s.color, None))
    .collect();
    if with_plan {
        rows.push((settings.plan_label(), theme.plan.color, theme.plan.dash.as_deref()));
    }

    let longest = rows.iter().map(|(l, _, _)| l.chars().count()).max().unwrap_or(0);
    let (x, y) = (frame.left + 10.0, frame.top + 10.0);
    let box_w = 44.0 + longest as f64 * 7.5;
    let box_h = 12.0 + rows.len() as f64 * 20.0;
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{box_w:.1}" height="{box_h:.1}" fill="{}" fill-opacity="0.85" stroke="{}"/>"#,
        theme.background, theme.axis
    ));
    svg.push('\n');

    for (i, (label, color, dash)) in rows.iter().enumerate() {
        let row_y = y + 18.0 + i as f64 * 20.0;
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{color}" stroke-width="3"{}/>"#,
            x + 8.0,
            row_y - 4.0,
            x + 32.0,
            row_y - 4.0,
            dash_attr(*dash)
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{row_y:.1}" font-size="12" fill="{}">{}</text>"#,
            x + 38.0,
            theme.text,
            escape_xml(label)
        ));
        svg.push('\n');
    }
}

fn dash_attr(dash: Option<&str>) -> String {
    dash.map(|d| format!(r#" stroke-dasharray="{}""#, escape_xml(d)))
        .unwrap_or_default()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
