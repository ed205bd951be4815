//! Core record types shared by every amala layer.
//!
//! A [`LogEntry`] is what the ingest layer parses out of one daily log file.
//! It is never mutated afterwards. The normalizer wraps each entry in a
//! [`NormalizedEntry`] carrying its derived [`Scores`] and the running
//! Java-hours total, so a record with half-populated scores cannot exist.

use crate::config::ScaleConfig;
use chrono::NaiveDate;
use serde::Serialize;

/// One parsed daily log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Calendar day the entry describes. Primary ordering key.
    pub date: NaiveDate,
    /// Free-text category (`type` in the header).
    pub entry_type: String,
    /// Hours spent on Java study.
    pub java_hours: f64,
    /// Mood rating, expected 0–10 but not enforced.
    pub mood: i32,
    /// Diet rating, expected 0–10 but not enforced.
    pub diet: i32,
    /// Hours slept.
    pub sleep_hours: f64,
    /// Sleep quality on a 0–100 scale.
    pub sleep_quality: i32,
    /// Minutes walked in the forest.
    pub forest_minutes: u32,
    /// `<logs dir>/<file name>` of the file this entry came from.
    pub source_link: String,
    /// Free-form body after the header, whitespace-trimmed.
    pub body: String,
}

/// Metrics mapped onto the shared 0–10 chart axis.
///
/// Values are not clamped: a raw value above its configured maximum scores
/// above 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub java: f64,
    pub sleep_hours: f64,
    pub sleep_quality: f64,
    pub forest: f64,
}

impl Scores {
    /// Derive the four scaled scores for `entry` against `scale`.
    pub fn compute(entry: &LogEntry, scale: &ScaleConfig) -> Self {
        Self {
            java: ScaleConfig::scale(entry.java_hours, scale.max_java_hours),
            sleep_hours: ScaleConfig::scale(entry.sleep_hours, scale.max_sleep_hours),
            sleep_quality: ScaleConfig::scale(
                f64::from(entry.sleep_quality),
                scale.max_sleep_quality,
            ),
            forest: ScaleConfig::scale(f64::from(entry.forest_minutes), scale.max_forest_minutes),
        }
    }
}

/// A [`LogEntry`] after normalization: scores and running total attached.
///
/// Only [`MetricNormalizer`](crate::MetricNormalizer) builds these, once per
/// entry, in ascending date order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEntry {
    entry: LogEntry,
    scores: Scores,
    cumulative_java_hours: f64,
}

impl NormalizedEntry {
    pub(crate) fn new(entry: LogEntry, scores: Scores, cumulative_java_hours: f64) -> Self {
        Self {
            entry,
            scores,
            cumulative_java_hours,
        }
    }

    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Sum of `java_hours` over this entry and every entry sorted before it.
    pub fn cumulative_java_hours(&self) -> f64 {
        self.cumulative_java_hours
    }

    /// Flatten into the tabular export shape.
    pub fn to_row(&self) -> DatasetRow {
        DatasetRow {
            date: self.entry.date,
            java_hours: self.entry.java_hours,
            mood: self.entry.mood,
            diet: self.entry.diet,
            sleep_hours: self.entry.sleep_hours,
            sleep_quality: self.entry.sleep_quality,
            forest_minutes: self.entry.forest_minutes,
            cumulative_java: self.cumulative_java_hours,
            link: self.entry.source_link.clone(),
        }
    }
}

impl std::ops::Deref for NormalizedEntry {
    type Target = LogEntry;

    fn deref(&self) -> &LogEntry {
        &self.entry
    }
}

/// One row of the exported dataset. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    pub date: NaiveDate,
    pub java_hours: f64,
    pub mood: i32,
    pub diet: i32,
    pub sleep_hours: f64,
    pub sleep_quality: i32,
    pub forest_minutes: u32,
    pub cumulative_java: f64,
    pub link: String,
}

impl DatasetRow {
    /// Column names of the dataset header row.
    pub const HEADER: [&'static str; 9] = [
        "date",
        "java_hours",
        "mood",
        "diet",
        "sleep_hours",
        "sleep_quality",
        "forest_minutes",
        "cumulative_java",
        "link",
    ];
}
