//! Test builders: ergonomic constructors for `LogEntry` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use amala::LogEntry;
use chrono::NaiveDate;
use fake::faker::lorem::en::Paragraph;
use fake::Fake;

// ---------------------------------------------------------------------------
// LogEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = LogEntryBuilder::new("2024-01-03")
///     .java(2.5)
///     .mood(8)
///     .body("Finished the streams chapter.")
///     .build();
/// ```
pub struct LogEntryBuilder {
    entry: LogEntry,
}

impl LogEntryBuilder {
    pub fn new(date: &str) -> Self {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date must be YYYY-MM-DD");
        Self {
            entry: LogEntry {
                date,
                entry_type: "study".to_string(),
                java_hours: 1.0,
                mood: 5,
                diet: 5,
                sleep_hours: 7.0,
                sleep_quality: 70,
                forest_minutes: 30,
                source_link: format!("Logs/{date}.md"),
                body: String::new(),
            },
        }
    }

    pub fn entry_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry.entry_type = entry_type.into();
        self
    }

    pub fn java(mut self, hours: f64) -> Self {
        self.entry.java_hours = hours;
        self
    }

    pub fn mood(mut self, mood: i32) -> Self {
        self.entry.mood = mood;
        self
    }

    pub fn diet(mut self, diet: i32) -> Self {
        self.entry.diet = diet;
        self
    }

    pub fn sleep(mut self, hours: f64, quality: i32) -> Self {
        self.entry.sleep_hours = hours;
        self.entry.sleep_quality = quality;
        self
    }

    pub fn forest(mut self, minutes: u32) -> Self {
        self.entry.forest_minutes = minutes;
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.entry.source_link = link.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.entry.body = body.into();
        self
    }

    /// Random lorem-ipsum body text.
    pub fn fake_body(self) -> Self {
        let text: String = Paragraph(1..3).fake();
        self.body(text)
    }

    pub fn build(self) -> LogEntry {
        self.entry
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// 2024-01-`day`.
pub fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid January day")
}

/// Entry on `date` with the given Java hours and defaults elsewhere.
pub fn entry_on(date: &str, java: f64) -> LogEntry {
    LogEntryBuilder::new(date).java(java).build()
}

/// `n` consecutive daily entries from 2024-01-01 with varied metrics and
/// generated body text.
pub fn build_series(n: usize) -> Vec<LogEntry> {
    let start = day(1);
    (0..n)
        .map(|i| {
            let date = start + chrono::Days::new(i as u64);
            LogEntryBuilder::new(&date.format("%Y-%m-%d").to_string())
                .entry_type(if i % 3 == 0 { "rest" } else { "study" })
                .java((i % 7) as f64 * 0.5)
                .mood((i % 10) as i32 + 1)
                .diet((i * 3 % 10) as i32 + 1)
                .sleep(6.0 + (i % 4) as f64 * 0.5, 60 + (i % 5) as i32 * 8)
                .forest((i % 6) as u32 * 20)
                .fake_body()
                .build()
        })
        .collect()
}
