//! Shared utility functions

use chrono::{DateTime, Utc};

/// Parse a datetime string (RFC3339 format) or return current time
///
/// Timestamps are stored as text, so a row written by another tool may
/// carry something unparseable; the current time stands in for it.
pub fn parse_datetime_or_now(s: &str) -> DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_or_now() {
        let parsed = parse_datetime_or_now("2024-01-01T12:00:00Z");
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T12:00:00+00:00");

        let now_before = Utc::now();
        let parsed = parse_datetime_or_now("invalid");
        let now_after = Utc::now();
        assert!(parsed >= now_before && parsed <= now_after);
    }
}
