// Date utility functions
// Display formatting for the source's date fields

use chrono::{DateTime, NaiveDate};

const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Format a source date (`YYYY-MM-DD` or RFC 3339) as e.g. `March 5, 2024`.
///
/// Missing values become an empty string; unparseable values are passed through trimmed.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return String::new();
    };

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return datetime.date_naive().format(DISPLAY_FORMAT).to_string();
    }

    log::debug!("Leaving unrecognised date '{}' unformatted", value);
    value.to_string()
}
