//! Header/body splitting for daily log files.
//!
//! A log file looks like
//!
//! ```text
//! ---
//! date: 2024-01-01
//! java_hours: 2.5
//! ---
//! Free-form notes.
//! ```
//!
//! The content is cut on the first two occurrences of [`SENTINEL`]. Anything
//! before the first sentinel is ignored; anything after the second (including
//! further sentinels, e.g. markdown rules) belongs to the body.

/// Delimiter that opens and closes the header block.
pub const SENTINEL: &str = "---";

/// Outcome of splitting one file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segments<'a> {
    /// Header text (between the sentinels) and untrimmed body text.
    Entry { header: &'a str, body: &'a str },
    /// Fewer than three segments: no header, or no closing sentinel.
    Malformed { found: usize },
}

pub fn split_segments(content: &str) -> Segments<'_> {
    let mut parts = content.splitn(3, SENTINEL);
    let _preamble = parts.next();
    match (parts.next(), parts.next()) {
        (Some(header), Some(body)) => Segments::Entry { header, body },
        (Some(_), None) => Segments::Malformed { found: 2 },
        _ => Segments::Malformed { found: 1 },
    }
}
