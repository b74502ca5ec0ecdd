//! Datetime serialization/deserialization helpers.
//!
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string or Unix timestamp -> `DateTime<Utc>`
//!
//! The backend emits RFC3339, but timestamps coming through intermediate
//! tooling occasionally arrive as raw Unix values, so deserialization accepts
//! both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp.
///
/// Unix timestamps are auto-detected as seconds or milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampOrString {
        String(String),
        I64(i64),
    }

    match TimestampOrString::deserialize(deserializer)? {
        TimestampOrString::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        TimestampOrString::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        ts: DateTime<Utc>,
    }

    #[test]
    fn deserialize_rfc3339() {
        let w: Wrapper = serde_json::from_str(r#"{"ts":"2024-06-01T12:00:00Z"}"#).unwrap();
        assert_eq!(w.ts.timestamp(), 1_717_243_200);
    }

    #[test]
    fn deserialize_unix_seconds() {
        let w: Wrapper = serde_json::from_str(r#"{"ts":1717243200}"#).unwrap();
        assert_eq!(w.ts.to_rfc3339(), "2024-06-01T12:00:00+00:00");
    }

    #[test]
    fn deserialize_unix_milliseconds() {
        let w: Wrapper = serde_json::from_str(r#"{"ts":1717243200000}"#).unwrap();
        assert_eq!(w.ts.timestamp(), 1_717_243_200);
    }

    #[test]
    fn reject_invalid_string() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"ts":"yesterday"}"#);
        assert!(result.is_err());
    }
}
