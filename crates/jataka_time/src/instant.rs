//! Naive civil date-time with minute precision.
//!
//! `Instant` is the canonical input type of the chart engine. Field ranges
//! are validated at construction; everything downstream treats a built
//! `Instant` as trusted input.

use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;

/// Civil date-time with minute precision and no timezone semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Instant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Instant {
    /// Build an instant, validating field ranges.
    ///
    /// Month 1-12, day 1-31, hour 0-23, minute 0-59. The year is
    /// unrestricted; ancient and negative years are valid. Calendar-level
    /// plausibility (e.g. February 31) is the caller's concern, matching
    /// the day-of-month range the chart consumers supply.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDay(day));
        }
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`.
    ///
    /// A leading `-` on the year is accepted for BCE-style dates
    /// (e.g. `-0500-03-15`). A date without a time component means
    /// midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_failed = || TimeError::ParseFailed(s.to_string());

        let (date_part, time_part) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let (negative, date_digits) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };

        let mut fields = date_digits.splitn(3, '-');
        let year_str = fields.next().ok_or_else(parse_failed)?;
        let month_str = fields.next().ok_or_else(parse_failed)?;
        let day_str = fields.next().ok_or_else(parse_failed)?;

        let mut year: i32 = year_str.parse().map_err(|_| parse_failed())?;
        if negative {
            year = -year;
        }
        let month: u32 = month_str.parse().map_err(|_| parse_failed())?;
        let day: u32 = day_str.parse().map_err(|_| parse_failed())?;

        let (hour, minute) = match time_part {
            Some(t) => {
                let (h, m) = t.split_once(':').ok_or_else(parse_failed)?;
                (
                    h.parse().map_err(|_| parse_failed())?,
                    m.parse().map_err(|_| parse_failed())?,
                )
            }
            None => (0, 0),
        };

        Self::new(year, month, day, hour, minute)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
