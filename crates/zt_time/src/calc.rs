//! Date-time calculator: add or subtract an amount, or measure the span
//! between two date-times.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::{format_datetime, localize, parse_datetime};
use crate::error::{TimeError, TimeResult};

/// Unit of a calculator amount. Symbols are case sensitive: `m` is minutes
/// and `M` is months.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Quarters,
    Years,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Quarters,
        TimeUnit::Years,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Weeks => "w",
            TimeUnit::Months => "M",
            TimeUnit::Quarters => "Q",
            TimeUnit::Years => "y",
        }
    }

    /// Fixed length in milliseconds for units below a day.
    fn fixed_millis(&self) -> Option<f64> {
        match self {
            TimeUnit::Milliseconds => Some(1.0),
            TimeUnit::Seconds => Some(1_000.0),
            TimeUnit::Minutes => Some(60_000.0),
            TimeUnit::Hours => Some(3_600_000.0),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim() {
            "ms" => TimeUnit::Milliseconds,
            "s" => TimeUnit::Seconds,
            "m" => TimeUnit::Minutes,
            "h" => TimeUnit::Hours,
            "d" => TimeUnit::Days,
            "w" => TimeUnit::Weeks,
            "M" => TimeUnit::Months,
            "Q" => TimeUnit::Quarters,
            "y" => TimeUnit::Years,
            other => match other.to_lowercase().trim_end_matches('s') {
                "millisecond" => TimeUnit::Milliseconds,
                "second" => TimeUnit::Seconds,
                "minute" => TimeUnit::Minutes,
                "hour" => TimeUnit::Hours,
                "day" => TimeUnit::Days,
                "week" => TimeUnit::Weeks,
                "month" => TimeUnit::Months,
                "quarter" => TimeUnit::Quarters,
                "year" => TimeUnit::Years,
                _ => return Err(TimeError::UnknownUnit(s.to_string())),
            },
        };
        Ok(unit)
    }
}

/// Result of [`shift`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shifted {
    pub addition: String,
    pub subtraction: String,
}

impl Shifted {
    pub fn render(&self) -> String {
        format!("Addition: {}\nSubtraction: {}", self.addition, self.subtraction)
    }
}

/// Absolute span between two date-times.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Difference {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    /// Remainder of the total seconds after whole days.
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Difference {
    pub fn render(&self) -> String {
        format!(
            "{} years or {} months or {} days,\n{} hours and {} minutes and {} seconds",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

fn parse_amount(input: &str) -> TimeResult<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TimeError::InvalidAmount(input.to_string())),
    }
}

fn add_months(naive: NaiveDateTime, months: i64) -> TimeResult<NaiveDateTime> {
    let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| TimeError::OutOfRange)?;
    let shifted = if months >= 0 {
        naive.checked_add_months(Months::new(magnitude))
    } else {
        naive.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or(TimeError::OutOfRange)
}

/// Move `dt` by a signed `amount` of `unit`. Units of a day or longer keep
/// the wall-clock time; fractional amounts for them are rounded.
fn apply(dt: &DateTime<Tz>, amount: f64, unit: TimeUnit) -> TimeResult<DateTime<Tz>> {
    if let Some(step) = unit.fixed_millis() {
        let millis = (amount * step).round();
        if millis.abs() >= i64::MAX as f64 {
            return Err(TimeError::OutOfRange);
        }
        return dt
            .checked_add_signed(Duration::milliseconds(millis as i64))
            .ok_or(TimeError::OutOfRange);
    }

    let whole = amount.round();
    if whole.abs() > i32::MAX as f64 {
        return Err(TimeError::OutOfRange);
    }
    let whole = whole as i64;
    let naive = dt.naive_local();
    let moved = match unit {
        TimeUnit::Days => naive.checked_add_signed(Duration::days(whole)),
        TimeUnit::Weeks => naive.checked_add_signed(Duration::weeks(whole)),
        TimeUnit::Months => Some(add_months(naive, whole)?),
        TimeUnit::Quarters => Some(add_months(naive, whole * 3)?),
        TimeUnit::Years => Some(add_months(naive, whole * 12)?),
        _ => None,
    }
    .ok_or(TimeError::OutOfRange)?;

    localize(&moved, dt.timezone())
}

/// Add and subtract `amount` of `unit` from `input`.
pub fn shift(input: &str, amount: &str, unit: TimeUnit, tz: Tz) -> TimeResult<Shifted> {
    let dt = parse_datetime(input, tz)?;
    let amount = parse_amount(amount)?;
    debug!("Shifting {} by {}{}", format_datetime(&dt), amount, unit);

    Ok(Shifted {
        addition: format_datetime(&apply(&dt, amount, unit)?),
        subtraction: format_datetime(&apply(&dt, -amount, unit)?),
    })
}

/// Whole calendar months from `start` to `end`, with `start <= end`.
fn whole_months(start: NaiveDateTime, end: NaiveDateTime) -> TimeResult<i64> {
    let mut months = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());
    if months > 0 && add_months(start, months)? > end {
        months -= 1;
    }
    Ok(months.max(0))
}

/// Span between two date-times, independent of their order.
pub fn difference(a: &str, b: &str, tz: Tz) -> TimeResult<Difference> {
    let x = parse_datetime(a, tz)?;
    let y = parse_datetime(b, tz)?;
    let (start, end) = if x <= y { (x, y) } else { (y, x) };

    let months = whole_months(start.naive_local(), end.naive_local())?;
    let days = (end.naive_local() - start.naive_local()).num_days().abs();
    let total = (end - start).num_seconds().abs();

    Ok(Difference {
        years: months / 12,
        months,
        days,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::parse_timezone;

    #[test]
    fn test_unit_symbols_are_case_sensitive() {
        assert_eq!("m".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!("M".parse::<TimeUnit>().unwrap(), TimeUnit::Months);
        assert_eq!("Quarters".parse::<TimeUnit>().unwrap(), TimeUnit::Quarters);
        assert!("fortnight".parse::<TimeUnit>().is_err());
        for unit in TimeUnit::ALL {
            assert_eq!(unit.symbol().parse::<TimeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_shift_days() {
        let result = shift("2024-01-01 12:00:00", "10", TimeUnit::Days, Tz::UTC).unwrap();
        assert_eq!(result.addition, "2024-01-11 12:00:00");
        assert_eq!(result.subtraction, "2023-12-22 12:00:00");
        assert_eq!(
            result.render(),
            "Addition: 2024-01-11 12:00:00\nSubtraction: 2023-12-22 12:00:00"
        );
    }

    #[test]
    fn test_shift_month_end_clamps() {
        let result = shift("2024-01-31", "1", TimeUnit::Months, Tz::UTC).unwrap();
        assert_eq!(result.addition, "2024-02-29 00:00:00");
        assert_eq!(result.subtraction, "2023-12-31 00:00:00");

        let result = shift("2023-11-30", "1", TimeUnit::Quarters, Tz::UTC).unwrap();
        assert_eq!(result.addition, "2024-02-29 00:00:00");
    }

    #[test]
    fn test_shift_sub_day_units() {
        let result = shift("2024-01-01 00:00:00", "90", TimeUnit::Minutes, Tz::UTC).unwrap();
        assert_eq!(result.addition, "2024-01-01 01:30:00");
        assert_eq!(result.subtraction, "2023-12-31 22:30:00");

        let result = shift("2024-01-01 00:00:00", "1.5", TimeUnit::Hours, Tz::UTC).unwrap();
        assert_eq!(result.addition, "2024-01-01 01:30:00");
    }

    #[test]
    fn test_days_keep_wall_clock_across_dst() {
        let tz = parse_timezone("Europe/Amsterdam").unwrap();
        let result = shift("2024-03-30 12:00:00", "1", TimeUnit::Days, tz).unwrap();
        assert_eq!(result.addition, "2024-03-31 12:00:00");
        let result = shift("2024-03-30 12:00:00", "24", TimeUnit::Hours, tz).unwrap();
        assert_eq!(result.addition, "2024-03-31 13:00:00");
    }

    #[test]
    fn test_shift_errors() {
        assert!(matches!(
            shift("2024-01-01", "ten", TimeUnit::Days, Tz::UTC),
            Err(TimeError::InvalidAmount(_))
        ));
        assert!(matches!(
            shift("soon", "1", TimeUnit::Days, Tz::UTC),
            Err(TimeError::InvalidDateTime(_))
        ));
        assert_eq!(
            shift("2024-01-01", "1e12", TimeUnit::Years, Tz::UTC),
            Err(TimeError::OutOfRange)
        );
    }

    #[test]
    fn test_difference() {
        let diff = difference("2024-01-01 00:00:00", "2025-03-02 03:04:05", Tz::UTC).unwrap();
        assert_eq!(diff.years, 1);
        assert_eq!(diff.months, 14);
        assert_eq!(diff.days, 426);
        assert_eq!((diff.hours, diff.minutes, diff.seconds), (3, 4, 5));
        assert_eq!(
            diff.render(),
            "1 years or 14 months or 426 days,\n3 hours and 4 minutes and 5 seconds"
        );
    }

    #[test]
    fn test_difference_is_symmetric() {
        let a = difference("2024-01-31", "2024-02-29", Tz::UTC).unwrap();
        let b = difference("2024-02-29", "2024-01-31", Tz::UTC).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.months, 1);
        assert_eq!(a.days, 29);
    }

    #[test]
    fn test_difference_same_instant() {
        let diff = difference("2024-05-05 10:00", "2024-05-05 10:00", Tz::UTC).unwrap();
        assert_eq!(diff.render(), "0 years or 0 months or 0 days,\n0 hours and 0 minutes and 0 seconds");
    }
}
