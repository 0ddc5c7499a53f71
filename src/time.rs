//! Time related utils.
//!
//! Both SigV4 date renderings come from the same captured instant, always in
//! UTC. Deriving them from different instants (or from local time) produces a
//! signature the server rejects without any client-side symptom.

use chrono::Utc;

/// DateTime used by this crate, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Capture the current instant.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a datetime into the date stamp used in the credential scope: "20220313".
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a datetime into compact ISO 8601: "20220313T072004Z".
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_date() {
        let t = Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 4).unwrap();
        assert_eq!(format_date(t), "20220313");
    }

    #[test]
    fn test_format_iso8601() {
        let t = Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 4).unwrap();
        assert_eq!(format_iso8601(t), "20220313T072004Z");
    }
}
