//! # zt_time
//!
//! Date-time tools for zt:
//!
//! - **Date-Time Converter**: date-time text to Unix timestamps and back
//! - **Date-Time Calculator**: add or subtract amounts, measure spans
//! - **Cron Viewer**: validate a cron expression, show its next run and describe it
//!
//! Every operation takes the time zone to use for naive input, and "now"
//! is always passed in by the caller.
//!
//! ## Example
//!
//! ```rust
//! use chrono_tz::Tz;
//! use zt_time::{from_timestamp, to_timestamp, CronExpression, EpochUnit};
//!
//! let ts = to_timestamp("2024-01-01 00:00:00", Tz::UTC).unwrap();
//! assert_eq!(ts.seconds, 1_704_067_200);
//! assert_eq!(
//!     from_timestamp(ts.seconds, EpochUnit::Seconds, Tz::UTC).unwrap(),
//!     "2024-01-01 00:00:00"
//! );
//!
//! let cron = CronExpression::parse("*/15 * * * 1-5").unwrap();
//! assert_eq!(cron.describe(), "Every 15 minutes, Monday through Friday");
//! ```

pub mod calc;
pub mod convert;
pub mod cron;
pub mod error;

pub use calc::{difference, shift, Difference, Shifted, TimeUnit};
pub use convert::{
    format_datetime, from_timestamp, localize, now_pair, parse_datetime, parse_epoch,
    parse_timezone, to_timestamp, EpochUnit, NowPair, Timestamp, DATETIME_FORMAT,
};
pub use cron::{inspect, CronExpression, CronReport};
pub use error::{TimeError, TimeResult};

use zt_core::{ToolCategory, ToolDescriptor};

/// Catalog entries for the tools in this crate.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "datetime-converter",
            "Date-Time Converter",
            ToolCategory::DateTime,
            "Convert between date-times and Unix timestamps",
        ),
        ToolDescriptor::new(
            "datetime-calculator",
            "Date-Time Calculator",
            ToolCategory::DateTime,
            "Add or subtract time, or measure the span between two date-times",
        ),
        ToolDescriptor::new(
            "cron-viewer",
            "Cron Viewer",
            ToolCategory::DateTime,
            "Validate a cron expression, show its next run and describe it",
        ),
    ]
}
