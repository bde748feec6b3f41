//! Unix timestamp ↔ calendar date conversion.

use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EpochError {
    #[error("not a numeric timestamp: {0:?}")]
    NotANumber(String),
    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),
    #[error("not an RFC 3339 date-time: {0}")]
    NotADateTime(#[from] chrono::ParseError),
}

/// Parses a decimal Unix timestamp, auto-detecting the unit the way the
/// usual converters do: more than 11 digits means milliseconds, anything
/// shorter is seconds.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, EpochError> {
    let trimmed = input.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| EpochError::NotANumber(trimmed.to_string()))?;
    let digits = trimmed.trim_start_matches('-').len();
    let parsed = if digits > 11 {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    };
    parsed.ok_or(EpochError::OutOfRange(n))
}

/// Parses an RFC 3339 date-time back to a UTC instant.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>, EpochError> {
    Ok(DateTime::parse_from_rfc3339(input.trim())?.with_timezone(&Utc))
}

/// The conversions shown for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub rfc3339: String,
    pub rfc2822: String,
    pub local: String,
}

pub fn convert(instant: DateTime<Utc>) -> Conversion {
    Conversion {
        unix_seconds: instant.timestamp(),
        unix_millis: instant.timestamp_millis(),
        rfc3339: instant.to_rfc3339(),
        rfc2822: instant.to_rfc2822(),
        local: instant.with_timezone(&Local).to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_detected() {
        let instant = parse_timestamp("1465584025").unwrap();
        assert_eq!(instant.timestamp(), 1_465_584_025);
    }

    #[test]
    fn test_millis_detected_past_11_digits() {
        let instant = parse_timestamp("1465584025523").unwrap();
        assert_eq!(instant.timestamp_millis(), 1_465_584_025_523);
        assert_eq!(instant.timestamp(), 1_465_584_025);
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(parse_timestamp("0").unwrap().timestamp(), 0);
        assert_eq!(parse_timestamp("-86400").unwrap().timestamp(), -86_400);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse_timestamp(" 1465584025\n").unwrap().timestamp(), 1_465_584_025);
    }

    #[test]
    fn test_not_a_number() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(EpochError::NotANumber(_))
        ));
        assert!(matches!(parse_timestamp(""), Err(EpochError::NotANumber(_))));
    }

    #[test]
    fn test_datetime_round_trip() {
        let instant = parse_datetime("2016-06-10T18:40:25Z").unwrap();
        assert_eq!(instant.timestamp(), 1_465_584_025);

        let back = parse_datetime(&convert(instant).rfc3339).unwrap();
        assert_eq!(back, instant);
    }

    #[test]
    fn test_datetime_with_offset() {
        let instant = parse_datetime("2016-06-10T20:40:25+02:00").unwrap();
        assert_eq!(instant.timestamp(), 1_465_584_025);
    }

    #[test]
    fn test_conversion_fields_agree() {
        let conversion = convert(parse_timestamp("1465584025523").unwrap());
        assert_eq!(conversion.unix_seconds, 1_465_584_025);
        assert_eq!(conversion.unix_millis, 1_465_584_025_523);
        assert!(conversion.rfc3339.starts_with("2016-06-10T18:40:25"));
    }
}
