//! Archive page listing every entry, newest first, with its full body.

use crate::{newest_first, one_decimal};
use amala_core::NormalizedEntry;
use std::fmt::Write as _;

const FRONT_MATTER: &str = "---\nlayout: default\ntitle: Daily Logs Archive\n---\n\n";
const HEADING: &str = "# Daily Logs Archive\n\n";
const INTRO: &str = "All entries are listed here in reverse chronological order (newest to oldest).\n\n";

pub fn render_archive(entries: &[NormalizedEntry]) -> String {
    let mut page = String::with_capacity(FRONT_MATTER.len() + entries.iter().map(|e| e.body.len() + 160).sum::<usize>());
    page.push_str(FRONT_MATTER);
    page.push_str(HEADING);
    page.push_str(INTRO);

    for e in newest_first(entries) {
        let _ = write!(page, "---\n\n## {}\n\n", e.date.format("%Y-%m-%d"));
        let _ = write!(page, "{}\n\n", stats_line(e));
        let _ = write!(page, "{}\n\n", e.body);
    }
    page
}

/// One-line summary of every raw metric.
pub fn stats_line(e: &NormalizedEntry) -> String {
    format!(
        "**Type:** `{}` | **Java:** `{}h` | **Mood:** `{}` | **Diet:** `{}` | **Sleep:** `{}h` ({}%) | **Forest:** `{}m`",
        e.entry_type,
        one_decimal(e.java_hours),
        e.mood,
        e.diet,
        one_decimal(e.sleep_hours),
        e.sleep_quality,
        e.forest_minutes
    )
}
