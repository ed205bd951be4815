//! Domain-specific assertion macros for amala harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! dataset invariant was violated and at which entry.

/// Assert that a slice of `NormalizedEntry` is in non-decreasing date order.
///
/// ```rust
/// assert_dates_non_decreasing!(dataset.entries);
/// ```
#[macro_export]
macro_rules! assert_dates_non_decreasing {
    ($entries:expr) => {{
        let entries: &[amala::NormalizedEntry] = &$entries;
        for (i, pair) in entries.windows(2).enumerate() {
            if pair[0].date > pair[1].date {
                panic!(
                    "assert_dates_non_decreasing! failed at index {}:\n  {} came before {}",
                    i + 1,
                    pair[0].date,
                    pair[1].date
                );
            }
        }
    }};
}

/// Assert that every cumulative total is the running sum of `java_hours`.
#[macro_export]
macro_rules! assert_cumulative_consistent {
    ($entries:expr) => {{
        let entries: &[amala::NormalizedEntry] = &$entries;
        let mut running = 0.0_f64;
        for (i, e) in entries.iter().enumerate() {
            running += e.java_hours;
            let actual = e.cumulative_java_hours();
            if (actual - running).abs() > 1e-9 * running.abs().max(1.0) {
                panic!(
                    "assert_cumulative_consistent! failed at index {} ({}):\n  expected: {}\n  actual:   {}",
                    i, e.date, running, actual
                );
            }
        }
    }};
}

/// Assert that a CSV data line carries exactly the raw fields of `entry`.
///
/// ```rust
/// assert_row_matches_entry!(line, entry);
/// ```
#[macro_export]
macro_rules! assert_row_matches_entry {
    ($line:expr, $entry:expr) => {{
        let line: &str = $line;
        let entry: &amala::LogEntry = &$entry;
        let cols: Vec<&str> = line.split(',').collect();
        assert_eq!(cols.len(), 9, "expected 9 columns in {line:?}");
        let parse_f = |s: &str| s.parse::<f64>().unwrap_or_else(|e| panic!("{s:?}: {e}"));
        assert_eq!(cols[0], entry.date.format("%Y-%m-%d").to_string(), "date in {line:?}");
        assert_eq!(parse_f(cols[1]), entry.java_hours, "java_hours in {line:?}");
        assert_eq!(cols[2], entry.mood.to_string(), "mood in {line:?}");
        assert_eq!(cols[3], entry.diet.to_string(), "diet in {line:?}");
        assert_eq!(parse_f(cols[4]), entry.sleep_hours, "sleep_hours in {line:?}");
        assert_eq!(cols[5], entry.sleep_quality.to_string(), "sleep_quality in {line:?}");
        assert_eq!(cols[6], entry.forest_minutes.to_string(), "forest_minutes in {line:?}");
        assert_eq!(cols[8], entry.source_link, "link in {line:?}");
    }};
}
