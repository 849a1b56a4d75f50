//! Serde helper functions for product timestamps.
//!
//! Products are stored with millisecond precision, so timestamps are rendered
//! with exactly three fractional digits and a `Z` suffix
//! (`2022-12-13T18:58:59.044Z`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serialize a UTC timestamp as RFC 3339 with millisecond precision.
pub fn serialize_datetime_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
