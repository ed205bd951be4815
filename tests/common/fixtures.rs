//! Scratch workspaces and log-file rendering shared across harnesses.

use amala::LogEntry;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A dashboard template using every known placeholder.
pub const DASHBOARD_TEMPLATE: &str = "# Progress\n\n\
Total: **{{TOTAL_HOURS}}h** over {{DAYS_IN}} days\n\n\
_Updated {{LAST_UPDATE}} (v{{VERSION}})_\n\n\
## Recent\n\n\
{{LOG_LIST}}\n";

/// Header with every key present but no closing sentinel.
pub const UNCLOSED_HEADER: &str = "---\ndate: 2024-01-05\njava_hours: 1.0\nmood: 5\n";

/// The fixed timestamp every harness stamps into the dashboard.
pub fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 1)
        .and_then(|d| d.and_hms_opt(21, 15, 0))
        .expect("valid timestamp")
}

/// Render `entry` as a daily log file: YAML header between `---` lines, then
/// the body.
pub fn render_log_file(entry: &LogEntry) -> String {
    format!(
        "---\n\
         date: {}\n\
         type: {}\n\
         java_hours: {:?}\n\
         mood: {}\n\
         diet: {}\n\
         sleep_hours: {:?}\n\
         sleep_quality: {}\n\
         forest_minutes: {}\n\
         ---\n\n\
         {}\n",
        entry.date.format("%Y-%m-%d"),
        entry.entry_type,
        entry.java_hours,
        entry.mood,
        entry.diet,
        entry.sleep_hours,
        entry.sleep_quality,
        entry.forest_minutes,
        entry.body
    )
}

/// A temporary working directory laid out like a real run: `Logs/` for the
/// daily files and an optional dashboard template at the root.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Workspace with the dashboard template already in place.
    pub fn with_template() -> Self {
        let ws = Self::new();
        ws.write_template(DASHBOARD_TEMPLATE);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.path().join("Logs")
    }

    pub fn write_template(&self, template: &str) {
        std::fs::write(self.path().join("index.template.md"), template).expect("write template");
    }

    /// Write `entry` to `Logs/<date>.md` and return the path.
    pub fn write_entry(&self, entry: &LogEntry) -> PathBuf {
        self.write_raw(&format!("{}.md", entry.date.format("%Y-%m-%d")), &render_log_file(entry))
    }

    /// Write arbitrary content to `Logs/<relative>`, creating parents.
    pub fn write_raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.logs_dir().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create log dir");
        }
        std::fs::write(&path, content).expect("write log file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path().join(relative))
            .unwrap_or_else(|e| panic!("read {relative}: {e}"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path().join(relative).exists()
    }
}
