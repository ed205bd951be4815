//! YAML header decoding.
//!
//! Keys: `date` (required), `type`, `java_hours`, `mood`, `diet`,
//! `sleep_hours`, `sleep_quality`, `forest_minutes`. Missing metric keys read
//! as zero, a missing or empty `type` reads as an empty string, unknown keys
//! are ignored.

use amala_core::LogEntry;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryHeader {
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub java_hours: f64,
    #[serde(default)]
    pub mood: i32,
    #[serde(default)]
    pub diet: i32,
    #[serde(default)]
    pub sleep_hours: f64,
    #[serde(default)]
    pub sleep_quality: i32,
    #[serde(default)]
    pub forest_minutes: u32,
}

impl EntryHeader {
    /// Decode a header block. Fails on non-mapping YAML, a missing or
    /// malformed `date`, or a value of the wrong type.
    pub fn decode(header: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(header)
    }

    /// Durations must be finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in [("java_hours", self.java_hours), ("sleep_hours", self.sleep_hours)] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{key} must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }

    /// Combine with provenance and body into a [`LogEntry`].
    pub fn into_entry(self, source_link: String, body: String) -> LogEntry {
        LogEntry {
            date: self.date,
            entry_type: self.entry_type.unwrap_or_default(),
            java_hours: self.java_hours,
            mood: self.mood,
            diet: self.diet,
            sleep_hours: self.sleep_hours,
            sleep_quality: self.sleep_quality,
            forest_minutes: self.forest_minutes,
            source_link,
            body,
        }
    }
}
