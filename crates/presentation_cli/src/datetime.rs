//! Timestamp formatting for rendered reports

use chrono::DateTime;

/// Shown when a timestamp is absent
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Shown when a timestamp fails to parse
pub const INVALID_DATE: &str = "Invalid date";

/// Format an ISO-8601 timestamp as "MM/DD/YYYY at HH:MM"
///
/// RFC 3339 parsing treats the `Z` suffix as an explicit zero offset, and
/// the value is rendered in whatever offset the source declares. Absent or
/// blank input yields [`UNKNOWN_DATE`], unparseable input [`INVALID_DATE`].
pub fn format_timestamp(value: Option<&str>) -> String {
    match value {
        None => UNKNOWN_DATE.to_string(),
        Some(raw) if raw.is_empty() => UNKNOWN_DATE.to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw).map_or_else(
            |_| INVALID_DATE.to_string(),
            |timestamp| timestamp.format("%m/%d/%Y at %H:%M").to_string(),
        ),
    }
}
