//! Cron expression viewer.
//!
//! Accepts the Unix five-field form (`min hour dom month dow`), a six-field
//! form with a leading seconds field and a seven-field form with a trailing
//! year. Day-of-week numbers follow Unix: `0` and `7` are Sunday. The
//! expression is rewritten into the `cron` crate's layout (seconds first,
//! Sunday is `1`) for scheduling, and described in English from the parsed
//! fields.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zt_core::Validity;

use crate::convert::format_datetime;
use crate::error::{TimeError, TimeResult};

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One parsed field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Any,
    /// `*/n`
    Every(u32),
    Value(u32),
    Range(u32, u32),
    /// `a/n` or `a-b/n`
    Stepped {
        start: u32,
        end: Option<u32>,
        step: u32,
    },
    List(Vec<Part>),
}

/// Bounds and spelling of one field.
struct FieldRule {
    name: &'static str,
    min: u32,
    max: u32,
    /// Names and the value of the first one.
    names: Option<(&'static [&'static str], u32)>,
    max_step: u32,
    /// Only day-of-week ranges may run past the end of the week.
    wraps: bool,
}

const SECONDS: FieldRule = FieldRule::plain("second", 0, 59, 59);
const MINUTES: FieldRule = FieldRule::plain("minute", 0, 59, 59);
const HOURS: FieldRule = FieldRule::plain("hour", 0, 23, 23);
const DAY_OF_MONTH: FieldRule = FieldRule::plain("day of month", 1, 31, 31);
const YEAR: FieldRule = FieldRule::plain("year", 1970, 2099, 129);
const MONTH: FieldRule = FieldRule {
    name: "month",
    min: 1,
    max: 12,
    names: Some((&MONTH_NAMES as &[&str], 1)),
    max_step: 12,
    wraps: false,
};
const DAY_OF_WEEK: FieldRule = FieldRule {
    name: "day of week",
    min: 0,
    max: 7,
    names: Some((&DAY_NAMES as &[&str], 0)),
    max_step: 7,
    wraps: true,
};

fn by_name(token: &str, names: &[&str], first: u32) -> Option<u32> {
    let lower = token.to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    names
        .iter()
        .position(|name| name.to_ascii_lowercase().starts_with(&lower))
        .map(|index| index as u32 + first)
}

impl FieldRule {
    const fn plain(name: &'static str, min: u32, max: u32, max_step: u32) -> Self {
        Self {
            name,
            min,
            max,
            names: None,
            max_step,
            wraps: false,
        }
    }

    fn value(&self, token: &str) -> Result<u32, String> {
        let named = self
            .names
            .and_then(|(names, first)| by_name(token, names, first));
        let value = match named {
            Some(value) => value,
            None => token
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a number", token))?,
        };
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(format!("{} {} is out of range", self.name, token))
        }
    }

    fn range(&self, a: &str, b: &str) -> Result<(u32, u32), String> {
        let (a, b) = (self.value(a)?, self.value(b)?);
        if a > b && !self.wraps {
            return Err(format!("{} range {}-{} is reversed", self.name, a, b));
        }
        Ok((a, b))
    }

    fn step(&self, item: &str, step: &str) -> Result<u32, String> {
        let step = step
            .parse::<u32>()
            .map_err(|_| format!("'{}' is not a number", step))?;
        if step == 0 || step > self.max_step {
            return Err(format!(
                "step in '{}' must be between 1 and {}",
                item, self.max_step
            ));
        }
        Ok(step)
    }
}

fn parse_item(item: &str, rule: &FieldRule) -> Result<Part, String> {
    if let Some((base, step)) = item.split_once('/') {
        let step = rule.step(item, step)?;
        return match base {
            "*" => Ok(Part::Every(step)),
            _ => match base.split_once('-') {
                Some((a, b)) => {
                    let (start, end) = rule.range(a, b)?;
                    Ok(Part::Stepped {
                        start,
                        end: Some(end),
                        step,
                    })
                }
                None => Ok(Part::Stepped {
                    start: rule.value(base)?,
                    end: None,
                    step,
                }),
            },
        };
    }

    match item {
        "*" | "?" => Ok(Part::Any),
        _ => match item.split_once('-') {
            Some((a, b)) => {
                let (a, b) = rule.range(a, b)?;
                Ok(Part::Range(a, b))
            }
            None => Ok(Part::Value(rule.value(item)?)),
        },
    }
}

fn parse_part(field: &str, rule: &FieldRule) -> Result<Part, String> {
    if field.contains(',') {
        field
            .split(',')
            .map(|item| parse_item(item, rule))
            .collect::<Result<Vec<_>, _>>()
            .map(Part::List)
    } else {
        parse_item(field, rule)
    }
}

fn walk_weekdays(start: u32, end: u32, step: u32, out: &mut Vec<u32>) {
    let end = if end < start { end + 7 } else { end };
    let mut day = start;
    while day <= end {
        out.push(day % 7);
        day = match day.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
}

/// Unix weekdays selected by `part`, `0` being Sunday.
fn unix_weekdays(part: &Part, out: &mut Vec<u32>) {
    match part {
        Part::Any => walk_weekdays(0, 6, 1, out),
        Part::Every(step) => walk_weekdays(0, 6, *step, out),
        Part::Value(day) => out.push(day % 7),
        Part::Range(a, b) => walk_weekdays(*a, *b, 1, out),
        Part::Stepped { start, end, step } => walk_weekdays(*start, end.unwrap_or(6), *step, out),
        Part::List(items) => items.iter().for_each(|item| unix_weekdays(item, out)),
    }
}

/// Day-of-week field in the `cron` crate numbering (Sunday is `1`).
fn scheduler_weekdays(part: &Part) -> String {
    if *part == Part::Any {
        return "*".to_string();
    }
    let mut days = Vec::new();
    unix_weekdays(part, &mut days);
    let mut days: Vec<u32> = days.into_iter().map(|d| d + 1).collect();
    days.sort_unstable();
    days.dedup();
    days.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn scheduler_part(part: &Part) -> String {
    match part {
        Part::Any => "*".to_string(),
        Part::Every(step) => format!("*/{}", step),
        Part::Value(v) => v.to_string(),
        Part::Range(a, b) => format!("{}-{}", a, b),
        Part::Stepped {
            start,
            end: Some(end),
            step,
        } => format!("{}-{}/{}", start, end, step),
        Part::Stepped {
            start,
            end: None,
            step,
        } => format!("{}/{}", start, step),
        Part::List(items) => items
            .iter()
            .map(scheduler_part)
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn join_words(items: Vec<String>) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

fn list_labels(items: &[Part], name: &dyn Fn(u32) -> String) -> String {
    join_words(
        items
            .iter()
            .map(|item| match item {
                Part::Range(a, b) => format!("{} through {}", name(*a), name(*b)),
                Part::Value(v) => name(*v),
                other => scheduler_part(other),
            })
            .collect(),
    )
}

fn day_name(value: u32) -> String {
    DAY_NAMES[(value % 7) as usize].to_string()
}

fn month_name(value: u32) -> String {
    MONTH_NAMES[(value.clamp(1, 12) - 1) as usize].to_string()
}

fn clock(hour: u32, minute: u32, second: u32) -> String {
    if second == 0 {
        format!("{:02}:{:02}", hour, minute)
    } else {
        format!("{:02}:{:02}:{:02}", hour, minute, second)
    }
}

#[derive(Debug, Clone)]
struct Fields {
    seconds: Part,
    minutes: Part,
    hours: Part,
    day_of_month: Part,
    month: Part,
    day_of_week: Part,
    year: Option<Part>,
}

impl Fields {
    fn parse(expression: &str) -> Result<Self, String> {
        let raw: Vec<&str> = expression.split_whitespace().collect();
        let (seconds, rest, year) = match raw.len() {
            5 => ("0", &raw[..], None),
            6 => (raw[0], &raw[1..], None),
            7 => (raw[0], &raw[1..6], Some(raw[6])),
            n => return Err(format!("expected 5, 6 or 7 fields, found {}", n)),
        };

        Ok(Self {
            seconds: parse_part(seconds, &SECONDS)?,
            minutes: parse_part(rest[0], &MINUTES)?,
            hours: parse_part(rest[1], &HOURS)?,
            day_of_month: parse_part(rest[2], &DAY_OF_MONTH)?,
            month: parse_part(rest[3], &MONTH)?,
            day_of_week: parse_part(rest[4], &DAY_OF_WEEK)?,
            year: year.map(|y| parse_part(y, &YEAR)).transpose()?,
        })
    }

    fn scheduler_source(&self) -> String {
        let mut fields = vec![
            scheduler_part(&self.seconds),
            scheduler_part(&self.minutes),
            scheduler_part(&self.hours),
            scheduler_part(&self.day_of_month),
            scheduler_part(&self.month),
            scheduler_weekdays(&self.day_of_week),
        ];
        if let Some(year) = &self.year {
            fields.push(scheduler_part(year));
        }
        fields.join(" ")
    }

    fn describe_time(&self) -> Option<String> {
        let plain = |v: u32| v.to_string();
        let hour_label = |v: u32| format!("{:02}", v);

        match (&self.seconds, &self.minutes, &self.hours) {
            (Part::Value(s), Part::Value(m), Part::Value(h)) => {
                return Some(format!("At {}", clock(*h, *m, *s)));
            }
            (Part::Value(0), Part::Value(m), Part::List(hours))
                if hours.iter().all(|h| matches!(h, Part::Value(_))) =>
            {
                let times = hours
                    .iter()
                    .filter_map(|h| match h {
                        Part::Value(h) => Some(clock(*h, *m, 0)),
                        _ => None,
                    })
                    .collect();
                return Some(format!("At {}", join_words(times)));
            }
            _ => {}
        }

        let on_the_minute = self.seconds == Part::Value(0);
        let mut pieces = Vec::new();

        match &self.seconds {
            Part::Value(0) => {}
            Part::Any => pieces.push("every second".to_string()),
            Part::Every(n) => pieces.push(format!("every {} seconds", n)),
            Part::Value(s) => pieces.push(format!("at {} seconds past the minute", s)),
            Part::Range(a, b) => pieces.push(format!("seconds {} through {} past the minute", a, b)),
            Part::Stepped { start, step, .. } => pieces.push(format!(
                "every {} seconds, starting at {} seconds past the minute",
                step, start
            )),
            Part::List(items) => pieces.push(format!(
                "at {} seconds past the minute",
                list_labels(items, &plain)
            )),
        }

        match &self.minutes {
            Part::Any if on_the_minute => pieces.push("every minute".to_string()),
            Part::Any => {}
            Part::Every(n) => pieces.push(format!("every {} minutes", n)),
            Part::Value(m) => pieces.push(format!("at {} minutes past the hour", m)),
            Part::Range(a, b) => pieces.push(format!("minutes {} through {} past the hour", a, b)),
            Part::Stepped { start, step, .. } => pieces.push(format!(
                "every {} minutes, starting at {} minutes past the hour",
                step, start
            )),
            Part::List(items) => pieces.push(format!(
                "at {} minutes past the hour",
                list_labels(items, &plain)
            )),
        }

        match &self.hours {
            Part::Any => {}
            Part::Every(n) => pieces.push(format!("every {} hours", n)),
            Part::Value(h) => pieces.push(format!("between {:02}:00 and {:02}:59", h, h)),
            Part::Range(a, b) => pieces.push(format!("between {:02}:00 and {:02}:59", a, b)),
            Part::Stepped { start, step, .. } => pieces.push(format!(
                "every {} hours, starting at {:02}:00",
                step, start
            )),
            Part::List(items) => pieces.push(format!("during hours {}", list_labels(items, &hour_label))),
        }

        if pieces.is_empty() {
            None
        } else {
            Some(pieces.join(", "))
        }
    }

    fn describe_calendar(&self) -> Vec<String> {
        let plain = |v: u32| v.to_string();
        let mut pieces = Vec::new();

        match &self.day_of_month {
            Part::Any => {}
            Part::Every(n) => pieces.push(format!("every {} days", n)),
            Part::Value(d) => pieces.push(format!("on day {} of the month", d)),
            Part::Range(a, b) => pieces.push(format!("between day {} and {} of the month", a, b)),
            Part::Stepped { start, step, .. } => pieces.push(format!(
                "every {} days, starting on day {} of the month",
                step, start
            )),
            Part::List(items) => pieces.push(format!(
                "on days {} of the month",
                list_labels(items, &plain)
            )),
        }

        match &self.day_of_week {
            Part::Any => {}
            Part::Every(n) => pieces.push(format!("every {} days of the week", n)),
            Part::Value(d) => pieces.push(format!("only on {}", day_name(*d))),
            Part::Range(a, b) => pieces.push(format!("{} through {}", day_name(*a), day_name(*b))),
            Part::Stepped { start, step, .. } => pieces.push(format!(
                "every {} days of the week, starting on {}",
                step,
                day_name(*start)
            )),
            Part::List(items) => pieces.push(format!("only on {}", list_labels(items, &day_name))),
        }

        match &self.month {
            Part::Any => {}
            Part::Every(n) => pieces.push(format!("every {} months", n)),
            Part::Value(m) => pieces.push(format!("only in {}", month_name(*m))),
            Part::Range(a, b) => pieces.push(format!("{} through {}", month_name(*a), month_name(*b))),
            Part::Stepped { start, step, .. } => pieces.push(format!(
                "every {} months, starting in {}",
                step,
                month_name(*start)
            )),
            Part::List(items) => pieces.push(format!("only in {}", list_labels(items, &month_name))),
        }

        match &self.year {
            None | Some(Part::Any) => {}
            Some(Part::Every(n)) => pieces.push(format!("every {} years", n)),
            Some(Part::Value(y)) => pieces.push(format!("only in {}", y)),
            Some(Part::Range(a, b)) => pieces.push(format!("{} through {}", a, b)),
            Some(Part::Stepped { start, step, .. }) => {
                pieces.push(format!("every {} years, starting in {}", step, start))
            }
            Some(Part::List(items)) => pieces.push(format!("only in {}", list_labels(items, &plain))),
        }

        pieces
    }
}

/// A parsed, schedulable cron expression.
#[derive(Debug, Clone)]
pub struct CronExpression {
    source: String,
    fields: Fields,
    schedule: cron::Schedule,
}

impl CronExpression {
    pub fn parse(expression: &str) -> TimeResult<Self> {
        let source = expression.trim();
        if source.is_empty() {
            return Err(TimeError::EmptyCron);
        }

        let invalid = |message: String| TimeError::InvalidCron {
            expression: source.to_string(),
            message,
        };

        let fields = Fields::parse(source).map_err(invalid)?;
        let scheduler_source = fields.scheduler_source();
        debug!("Cron '{}' scheduled as '{}'", source, scheduler_source);

        let schedule =
            cron::Schedule::from_str(&scheduler_source).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            fields,
            schedule,
        })
    }

    /// Valid report with the next run after `now`.
    pub fn report(&self, now: DateTime<Utc>, tz: Tz) -> CronReport {
        CronReport {
            status: Validity::Valid,
            next: self.next_occurrence(now, tz).unwrap_or_default(),
            description: self.describe(),
        }
    }

    /// The expression as given, trimmed.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// First occurrence strictly after `after`, as local time in `tz`.
    pub fn next_occurrence(&self, after: DateTime<Utc>, tz: Tz) -> Option<String> {
        self.upcoming(after, tz, 1).into_iter().next()
    }

    /// The next `count` occurrences after `after`.
    pub fn upcoming(&self, after: DateTime<Utc>, tz: Tz, count: usize) -> Vec<String> {
        self.schedule
            .after(&after.with_timezone(&tz))
            .take(count)
            .map(|dt| format_datetime(&dt))
            .collect()
    }

    /// English description such as `Every 15 minutes, Monday through Friday`.
    pub fn describe(&self) -> String {
        let mut pieces: Vec<String> = self.fields.describe_time().into_iter().collect();
        pieces.extend(self.fields.describe_calendar());

        let text = pieces.join(", ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => text,
        }
    }
}

/// Outcome of [`inspect`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CronReport {
    pub status: Validity,
    /// Next run, empty when invalid or when nothing is scheduled.
    pub next: String,
    pub description: String,
}

impl CronReport {
    /// Report for an expression that did not parse.
    pub fn invalid() -> Self {
        Self {
            status: Validity::Invalid,
            next: String::new(),
            description: String::new(),
        }
    }
}

/// Validate, schedule and describe `expression`. Never fails.
pub fn inspect(expression: &str, now: DateTime<Utc>, tz: Tz) -> CronReport {
    match CronExpression::parse(expression) {
        Ok(cron) => cron.report(now, tz),
        Err(e) => {
            debug!("Cron rejected: {}", e);
            CronReport::invalid()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_five_fields_get_seconds() {
        let cron = CronExpression::parse("*/15 * * * *").unwrap();
        assert_eq!(
            cron.next_occurrence(at(2024, 1, 1, 0, 7, 30), Tz::UTC).unwrap(),
            "2024-01-01 00:15:00"
        );
    }

    #[test]
    fn test_six_and_seven_fields() {
        let cron = CronExpression::parse("30 * * * * *").unwrap();
        assert_eq!(
            cron.next_occurrence(at(2024, 1, 1, 0, 0, 0), Tz::UTC).unwrap(),
            "2024-01-01 00:00:30"
        );

        let cron = CronExpression::parse("0 0 0 1 1 * 2030").unwrap();
        assert_eq!(
            cron.next_occurrence(at(2024, 1, 1, 0, 0, 0), Tz::UTC).unwrap(),
            "2030-01-01 00:00:00"
        );
    }

    #[test]
    fn test_sunday_is_zero_or_seven() {
        // 2024-01-01 is a Monday.
        let monday = at(2024, 1, 1, 0, 0, 0);
        for expr in ["0 0 * * 0", "0 0 * * 7", "0 0 * * SUN"] {
            let cron = CronExpression::parse(expr).unwrap();
            assert_eq!(
                cron.next_occurrence(monday, Tz::UTC).unwrap(),
                "2024-01-07 00:00:00",
                "{}",
                expr
            );
        }
    }

    #[test]
    fn test_weekday_range_wraps() {
        let cron = CronExpression::parse("0 12 * * 5-0").unwrap();
        assert_eq!(
            cron.upcoming(at(2024, 1, 1, 0, 0, 0), Tz::UTC, 4),
            vec![
                "2024-01-05 12:00:00",
                "2024-01-06 12:00:00",
                "2024-01-07 12:00:00",
                "2024-01-12 12:00:00",
            ]
        );
    }

    #[test]
    fn test_workdays() {
        let cron = CronExpression::parse("0 9 * * MON-FRI").unwrap();
        // Saturday
        assert_eq!(
            cron.next_occurrence(at(2024, 1, 6, 10, 0, 0), Tz::UTC).unwrap(),
            "2024-01-08 09:00:00"
        );
    }

    #[test]
    fn test_next_in_time_zone() {
        let tz: Tz = "Asia/Jakarta".parse().unwrap();
        let cron = CronExpression::parse("0 9 * * *").unwrap();
        assert_eq!(
            cron.next_occurrence(at(2024, 1, 1, 0, 0, 0), tz).unwrap(),
            "2024-01-01 09:00:00"
        );
    }

    #[test]
    fn test_describe() {
        let cases = [
            ("* * * * *", "Every minute"),
            ("5 4 * * *", "At 04:05"),
            ("*/15 * * * 1-5", "Every 15 minutes, Monday through Friday"),
            ("0 0 1 1 *", "At 00:00, on day 1 of the month, only in January"),
            ("0 9,17 * * *", "At 09:00 and 17:00"),
            ("* * * * * *", "Every second"),
            ("0 22 * * 1,3,5", "At 22:00, only on Monday, Wednesday and Friday"),
            ("30 0 12 * * *", "At 12:00:30"),
            ("0 * * JAN-MAR *", "At 0 minutes past the hour, January through March"),
        ];
        for (expr, expected) in cases {
            assert_eq!(CronExpression::parse(expr).unwrap().describe(), expected, "{}", expr);
        }
    }

    #[test]
    fn test_rejects_bad_expressions() {
        assert_eq!(CronExpression::parse("   ").unwrap_err(), TimeError::EmptyCron);
        for expr in [
            "* * * *",
            "61 * * * *",
            "* * * * 8",
            "*/0 * * * *",
            "* * * 13 *",
            "a b c d e",
            "*/61 * * * *",
            "0 */25 * * *",
            "0 0 1/32 * *",
            "0 0 * */13 *",
            "0 0 * * 1/8",
            "0 0 * * 1/4294967295",
            "*/4294967295 * * * * *",
            "0 0 0 1 1 * 2024/131",
            "0 0 0 1 1 * 1969",
            "30-10 * * * *",
            "0 0 * NOV-FEB *",
        ] {
            assert!(
                matches!(CronExpression::parse(expr), Err(TimeError::InvalidCron { .. })),
                "{}",
                expr
            );
        }
    }

    #[test]
    fn test_inspect_never_fails() {
        let now = at(2024, 1, 1, 0, 0, 0);
        let report = inspect("0 0 * * *", now, Tz::UTC);
        assert_eq!(report.status, Validity::Valid);
        assert_eq!(report.next, "2024-01-02 00:00:00");
        assert_eq!(report.description, "At 00:00");

        let report = inspect("", now, Tz::UTC);
        assert_eq!(report, CronReport::invalid());
        assert_eq!(inspect("nope", now, Tz::UTC).status, Validity::Invalid);

        for expr in [
            "0 0 * * 1/4294967295",
            "0 0 * * 6-1/4294967295",
            "4294967295/4294967295 * * * *",
        ] {
            let report = inspect(expr, now, Tz::UTC);
            assert_eq!(report.status, Validity::Invalid, "{}", expr);
        }
    }

    #[test]
    fn test_weekday_steps() {
        // Friday, Sunday and Tuesday.
        let cron = CronExpression::parse("0 12 * * 5-2/2").unwrap();
        assert_eq!(
            cron.upcoming(at(2024, 1, 1, 0, 0, 0), Tz::UTC, 3),
            vec![
                "2024-01-02 12:00:00",
                "2024-01-05 12:00:00",
                "2024-01-07 12:00:00",
            ]
        );

        let cron = CronExpression::parse("0 0 * * 1/7").unwrap();
        assert_eq!(
            cron.next_occurrence(at(2024, 1, 1, 0, 0, 0), Tz::UTC).unwrap(),
            "2024-01-08 00:00:00"
        );
    }

    #[test]
    fn test_report_from_parsed_expression() {
        let now = at(2024, 1, 1, 0, 0, 0);
        let cron = CronExpression::parse("0 0 * * *").unwrap();
        assert_eq!(cron.report(now, Tz::UTC), inspect("0 0 * * *", now, Tz::UTC));
        assert_eq!(CronReport::invalid().status, Validity::Invalid);
    }

    #[test]
    fn test_past_year_has_no_next() {
        let cron = CronExpression::parse("0 0 0 1 1 * 2000").unwrap();
        assert!(cron.next_occurrence(at(2024, 1, 1, 0, 0, 0), Tz::UTC).is_none());
    }
}
