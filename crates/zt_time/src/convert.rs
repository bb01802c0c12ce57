//! Date-time converter.
//!
//! Converts between human-readable date-times and Unix timestamps. Inputs
//! without an offset are read as local time in the selected zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TimeError, TimeResult};

/// Output layout for every formatted date-time.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamps at or above this magnitude are taken as milliseconds by
/// [`EpochUnit::detect`].
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Resolve an IANA zone name such as `Europe/Paris`.
pub fn parse_timezone(name: &str) -> TimeResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// Unit of a Unix timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EpochUnit {
    #[default]
    Seconds,
    Millis,
}

impl EpochUnit {
    /// Guess the unit from the magnitude of `value`.
    pub fn detect(value: i64) -> Self {
        if value.unsigned_abs() >= MILLIS_THRESHOLD.unsigned_abs() {
            EpochUnit::Millis
        } else {
            EpochUnit::Seconds
        }
    }
}

/// A point in time as Unix seconds and milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timestamp {
    pub seconds: i64,
    pub millis: i64,
}

impl<Z: TimeZone> From<&DateTime<Z>> for Timestamp {
    fn from(dt: &DateTime<Z>) -> Self {
        Self {
            seconds: dt.timestamp(),
            millis: dt.timestamp_millis(),
        }
    }
}

/// The current time in both directions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NowPair {
    pub datetime: String,
    pub timestamp: Timestamp,
}

/// Attach `tz` to a wall-clock time. Ambiguous times take the earlier
/// instant.
pub fn localize(naive: &NaiveDateTime, tz: Tz) -> TimeResult<DateTime<Tz>> {
    tz.from_local_datetime(naive)
        .earliest()
        .ok_or_else(|| TimeError::NonexistentLocalTime(naive.format(DATETIME_FORMAT).to_string()))
}

/// Parse a date-time in any of the accepted layouts.
pub fn parse_datetime(input: &str, tz: Tz) -> TimeResult<DateTime<Tz>> {
    let text = input.trim();
    if text.is_empty() {
        return Err(TimeError::InvalidDateTime(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&tz));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return localize(&naive, tz);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| TimeError::InvalidDateTime(input.to_string()))?;
        return localize(&midnight, tz);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&tz));
    }

    Err(TimeError::InvalidDateTime(input.to_string()))
}

/// Format in [`DATETIME_FORMAT`].
pub fn format_datetime<Z: TimeZone>(dt: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    dt.format(DATETIME_FORMAT).to_string()
}

/// Date-time to Unix timestamp.
pub fn to_timestamp(input: &str, tz: Tz) -> TimeResult<Timestamp> {
    let dt = parse_datetime(input, tz)?;
    debug!("Converted '{}' in {} to {}", input.trim(), tz, dt.timestamp());
    Ok(Timestamp::from(&dt))
}

/// Parse timestamp text. Fractional values are truncated.
pub fn parse_epoch(input: &str) -> TimeResult<i64> {
    let text = input.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() < i64::MAX as f64 => Ok(value.trunc() as i64),
        _ => Err(TimeError::InvalidTimestamp(input.to_string())),
    }
}

/// Unix timestamp to a date-time in `tz`.
pub fn from_timestamp(value: i64, unit: EpochUnit, tz: Tz) -> TimeResult<String> {
    let utc = match unit {
        EpochUnit::Seconds => DateTime::<Utc>::from_timestamp(value, 0),
        EpochUnit::Millis => DateTime::<Utc>::from_timestamp_millis(value),
    }
    .ok_or(TimeError::OutOfRange)?;

    Ok(format_datetime(&utc.with_timezone(&tz)))
}

/// `now` formatted in `tz`, together with its timestamp.
pub fn now_pair(now: DateTime<Utc>, tz: Tz) -> NowPair {
    NowPair {
        datetime: format_datetime(&now.with_timezone(&tz)),
        timestamp: Timestamp::from(&now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YEAR: i64 = 1_704_067_200;

    #[test]
    fn test_naive_layouts() {
        for input in [
            "2024-01-01 00:00:00",
            "2024-01-01T00:00:00",
            "2024-01-01 00:00",
            "2024-01-01",
            " 2024-01-01 00:00:00.000 ",
        ] {
            assert_eq!(to_timestamp(input, Tz::UTC).unwrap().seconds, NEW_YEAR, "{}", input);
        }
    }

    #[test]
    fn test_fractional_seconds_in_millis() {
        let ts = to_timestamp("2024-01-01 00:00:00.250", Tz::UTC).unwrap();
        assert_eq!(ts.seconds, NEW_YEAR);
        assert_eq!(ts.millis, NEW_YEAR * 1000 + 250);
    }

    #[test]
    fn test_offsets_win_over_zone() {
        let tz = parse_timezone("Asia/Jakarta").unwrap();
        assert_eq!(
            to_timestamp("2024-01-01T00:00:00+01:00", tz).unwrap().seconds,
            NEW_YEAR - 3600
        );
        assert_eq!(
            to_timestamp("Mon, 01 Jan 2024 00:00:00 +0000", tz).unwrap().seconds,
            NEW_YEAR
        );
    }

    #[test]
    fn test_naive_input_uses_zone() {
        let tz = parse_timezone("Asia/Jakarta").unwrap();
        assert_eq!(to_timestamp("2024-01-01 07:00:00", tz).unwrap().seconds, NEW_YEAR);
    }

    #[test]
    fn test_nonexistent_local_time() {
        let tz = parse_timezone("America/New_York").unwrap();
        assert!(matches!(
            to_timestamp("2024-03-10 02:30:00", tz),
            Err(TimeError::NonexistentLocalTime(_))
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(to_timestamp("", Tz::UTC).is_err());
        assert!(to_timestamp("yesterday", Tz::UTC).is_err());
        assert!(to_timestamp("2024-13-01", Tz::UTC).is_err());
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_from_timestamp() {
        assert_eq!(
            from_timestamp(NEW_YEAR, EpochUnit::Seconds, Tz::UTC).unwrap(),
            "2024-01-01 00:00:00"
        );
        assert_eq!(
            from_timestamp(NEW_YEAR * 1000 + 999, EpochUnit::Millis, Tz::UTC).unwrap(),
            "2024-01-01 00:00:00"
        );
        let tz = parse_timezone("Asia/Jakarta").unwrap();
        assert_eq!(
            from_timestamp(NEW_YEAR, EpochUnit::Seconds, tz).unwrap(),
            "2024-01-01 07:00:00"
        );
        assert_eq!(from_timestamp(i64::MAX, EpochUnit::Seconds, Tz::UTC), Err(TimeError::OutOfRange));
    }

    #[test]
    fn test_epoch_unit_detect() {
        assert_eq!(EpochUnit::detect(NEW_YEAR), EpochUnit::Seconds);
        assert_eq!(EpochUnit::detect(NEW_YEAR * 1000), EpochUnit::Millis);
        assert_eq!(EpochUnit::detect(-NEW_YEAR * 1000), EpochUnit::Millis);
    }

    #[test]
    fn test_parse_epoch() {
        assert_eq!(parse_epoch(" 1704067200 ").unwrap(), NEW_YEAR);
        assert_eq!(parse_epoch("1704067200.9").unwrap(), NEW_YEAR);
        assert!(parse_epoch("abc").is_err());
        assert!(parse_epoch("NaN").is_err());
    }

    #[test]
    fn test_now_pair() {
        let now = DateTime::<Utc>::from_timestamp(NEW_YEAR, 0).unwrap();
        let pair = now_pair(now, Tz::UTC);
        assert_eq!(pair.datetime, "2024-01-01 00:00:00");
        assert_eq!(pair.timestamp.millis, NEW_YEAR * 1000);
    }
}
