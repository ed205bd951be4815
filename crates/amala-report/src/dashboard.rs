//! Dashboard page: a user template with `{{NAME}}` placeholders filled in.

use crate::{newest_first, one_decimal};
use amala_core::NormalizedEntry;
use chrono::NaiveDateTime;
use regex::Regex;
use std::fmt::Write as _;
use std::sync::OnceLock;

pub const TOTAL_HOURS: &str = "{{TOTAL_HOURS}}";
pub const DAYS_IN: &str = "{{DAYS_IN}}";
pub const LAST_UPDATE: &str = "{{LAST_UPDATE}}";
pub const VERSION: &str = "{{VERSION}}";
pub const LOG_LIST: &str = "{{LOG_LIST}}";

/// Values substituted into the template besides the entries themselves.
#[derive(Debug, Clone)]
pub struct DashboardContext<'a> {
    pub generated_at: NaiveDateTime,
    pub version: &'a str,
    /// How many of the newest entries to list.
    pub recent_limit: usize,
    /// Link target of the archive page, relative to the dashboard.
    pub archive_link: &'a str,
}

/// Fill `template` with totals and the recent-entries list.
///
/// Placeholders the template uses but this function does not know are left
/// as-is and logged at WARN.
pub fn render_dashboard(template: &str, entries: &[NormalizedEntry], ctx: &DashboardContext<'_>) -> String {
    let total: f64 = entries.iter().map(|e| e.java_hours).sum();
    let page = template
        .replace(TOTAL_HOURS, &one_decimal(total))
        .replace(DAYS_IN, &entries.len().to_string())
        .replace(LAST_UPDATE, &ctx.generated_at.format("%Y-%m-%d %H:%M").to_string())
        .replace(VERSION, ctx.version)
        .replace(LOG_LIST, &recent_list(entries, ctx.recent_limit, ctx.archive_link));

    let leftover = unresolved_placeholders(&page);
    if !leftover.is_empty() {
        tracing::warn!(placeholders = ?leftover, "template placeholders left unresolved");
    }
    page
}

/// Markdown list of the newest `limit` entries followed by the archive link.
pub fn recent_list(entries: &[NormalizedEntry], limit: usize, archive_link: &str) -> String {
    let mut out = String::new();
    for e in newest_first(entries).into_iter().take(limit) {
        let _ = writeln!(
            out,
            "- [**{}**]({}) — Java: `{:?}h` | Mood: `{}` | Diet: `{}`",
            e.date.format("%Y-%m-%d"),
            e.source_link,
            e.java_hours,
            e.mood,
            e.diet
        );
    }

    let label = if entries.len() > limit {
        "View Full Archive"
    } else {
        "View Archive"
    };
    let _ = write!(out, "\n[→ **{label}**]({archive_link})\n");
    out.trim().to_string()
}

/// Every `{{NAME}}` token still present in `page`, in order of appearance.
pub fn unresolved_placeholders(page: &str) -> Vec<String> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{\s*[A-Za-z_][A-Za-z0-9_]*\s*\}\}").expect("static regex"));
    re.find_iter(page).map(|m| m.as_str().to_string()).collect()
}
