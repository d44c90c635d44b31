//! Timestamp codec
//!
//! The backend speaks ISO-local-date-time rendered as `yyyy-MM-dd HH:mm:ss`,
//! and the table editor displays and edits timestamps in the same textual
//! form. Round-trip requirement: `parse(format(t)) == t` to second precision.

use chrono::NaiveDateTime;

use crate::error::{CoreError, CoreResult};

/// The canonical chrono format string for timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable label for the canonical format (used in error messages)
pub const TIMESTAMP_FORMAT_LABEL: &str = "yyyy-MM-dd HH:mm:ss";

/// Format a timestamp in the canonical textual form
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp from the canonical textual form
pub fn parse_timestamp(text: &str) -> CoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| CoreError::invalid_timestamp(text))
}

/// Current local time, formatted canonically (sub-second precision dropped)
pub fn now_formatted() -> String {
    format_timestamp(chrono::Local::now().naive_local())
}

// ============================================================================
// Serde module for Option<NaiveDateTime>
// ============================================================================

/// Serde (de)serialization for optional timestamps in the canonical format.
///
/// Use with `#[serde(with = "kadmin_core::time::opt_timestamp")]`. `None`
/// encodes as JSON `null` (defaulted fields are still emitted explicitly);
/// decoding accepts `null`, a missing value, or canonical text.
pub mod opt_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: Option<String> = Option::deserialize(deserializer)?;
        match text {
            Some(text) => NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use pretty_assertions::assert_eq;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(15, 42, 9)
            .unwrap()
    }

    #[test]
    fn test_format() {
        assert_eq!(format_timestamp(sample()), "2024-03-07 15:42:09");
    }

    #[test]
    fn test_round_trip_second_precision() {
        let ts = sample();
        let back = parse_timestamp(&format_timestamp(ts)).unwrap();
        assert_eq!(back, ts);

        // Sub-second precision is dropped by formatting, not by parsing.
        let with_nanos = ts.with_nanosecond(999_000_000).unwrap();
        let back = parse_timestamp(&format_timestamp(with_nanos)).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_timestamp("2024-03-07").is_err());
        assert!(parse_timestamp("not a date").is_err());
        assert!(parse_timestamp("2024-03-07T15:42:09").is_err());
    }

    #[test]
    fn test_now_formatted_parses_back() {
        assert!(parse_timestamp(&now_formatted()).is_ok());
    }

    #[test]
    fn test_opt_timestamp_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "super::opt_timestamp")]
            ts: Option<NaiveDateTime>,
        }

        let json = serde_json::to_string(&Wrapper { ts: Some(sample()) }).unwrap();
        assert_eq!(json, r#"{"ts":"2024-03-07 15:42:09"}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ts, Some(sample()));

        let none = serde_json::to_string(&Wrapper { ts: None }).unwrap();
        assert_eq!(none, r#"{"ts":null}"#);
        let back: Wrapper = serde_json::from_str(&none).unwrap();
        assert_eq!(back.ts, None);
    }
}
