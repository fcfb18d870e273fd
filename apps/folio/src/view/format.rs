//! Text formatting shared by the section renderers.

use chrono::{DateTime, Datelike, NaiveDate};

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Parses an ISO date (`2025-01-01`) or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Calendar year of a date string. Falls back to a leading four-digit year
/// for partial values such as `2021` or `2021-09`.
pub fn year_of(raw: &str) -> Option<i32> {
    if let Some(date) = parse_date(raw) {
        return Some(date.year());
    }
    let digits: String = raw.trim().chars().take(4).collect();
    (digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()))
        .then(|| digits.parse().ok())
        .flatten()
}

/// `Depuis <start>` for current items, `<start>–<end>` when an end exists,
/// `<start>` otherwise. `None` when the start year cannot be read.
pub fn format_date_range(start: Option<&str>, end: Option<&str>, is_current: bool) -> Option<String> {
    let start_year = year_of(start?)?;
    if is_current {
        return Some(format!("Depuis {start_year}"));
    }
    match end.and_then(year_of) {
        Some(end_year) => Some(format!("{start_year}–{end_year}")),
        None => Some(start_year.to_string()),
    }
}

/// Long month and year in French, e.g. `mars 2024`.
pub fn format_month_year(raw: &str) -> Option<String> {
    let date = parse_date(raw)?;
    let month = FRENCH_MONTHS[date.month0() as usize];
    Some(format!("{} {}", month, date.year()))
}

/// Link label for a social URL: the URL without its `http(s)://` prefix.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
