//! Normalizer: orders parsed entries, derives scores, and accumulates totals.
//!
//! Input is the unordered set of [`LogEntry`] values that survived parsing.
//! Output is a [`Dataset`]: the same entries sorted ascending by date, each
//! wrapped in a [`NormalizedEntry`], plus the flat rows for CSV export.

use crate::config::ScaleConfig;
use crate::types::{DatasetRow, LogEntry, NormalizedEntry, Scores};

/// Result of one normalization pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Entries in ascending date order. Same-date entries keep input order.
    pub entries: Vec<NormalizedEntry>,
    /// One export row per entry, same order as `entries`.
    pub rows: Vec<DatasetRow>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Running total at the latest entry, or 0 for an empty dataset.
    pub fn total_java_hours(&self) -> f64 {
        self.entries
            .last()
            .map(NormalizedEntry::cumulative_java_hours)
            .unwrap_or(0.0)
    }
}

/// Maps raw metrics onto the shared 0–10 axis using a [`ScaleConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricNormalizer {
    scale: ScaleConfig,
}

impl MetricNormalizer {
    pub fn new(scale: ScaleConfig) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }

    /// Sort `entries` by date, score each one, and carry the Java-hours total.
    ///
    /// An empty input yields an empty [`Dataset`]; nothing is computed.
    pub fn normalize(&self, mut entries: Vec<LogEntry>) -> Dataset {
        if entries.is_empty() {
            return Dataset::default();
        }

        // `sort_by` is stable, so same-date entries keep their input order.
        entries.sort_by(|a, b| a.date.cmp(&b.date));

        let mut cumulative = 0.0;
        let normalized: Vec<NormalizedEntry> = entries
            .into_iter()
            .map(|entry| {
                cumulative += entry.java_hours;
                let scores = Scores::compute(&entry, &self.scale);
                NormalizedEntry::new(entry, scores, cumulative)
            })
            .collect();

        let rows = normalized.iter().map(NormalizedEntry::to_row).collect();

        tracing::debug!(
            count = normalized.len(),
            total_java_hours = cumulative,
            "normalized entries"
        );

        Dataset {
            entries: normalized,
            rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
