//! Weekday and time reporting
//!
//! The wall clock sits behind [`TimeSource`] so tests can pin the reported
//! day without waiting for one to pass.

use chrono::{DateTime, Datelike, Utc, Weekday};

/// Supplies the current moment.
pub trait TimeSource: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// [`TimeSource`] backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

fn day_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Three-letter name of the current weekday.
pub fn weekday_name(source: &dyn TimeSource) -> &'static str {
    day_abbrev(source.now().weekday())
}

/// Current server time as `"<Day> <timestamp>"`, weekday first.
pub fn server_time(source: &dyn TimeSource) -> String {
    let now = source.now();
    format!("{} {}", day_abbrev(now.weekday()), now.format("%Y-%m-%d %H:%M:%S"))
}
