//! Error types for instant construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from `Instant` validation and text parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1-12.
    InvalidMonth(u32),
    /// Day outside 1-31.
    InvalidDay(u32),
    /// Hour outside 0-23.
    InvalidHour(u32),
    /// Minute outside 0-59.
    InvalidMinute(u32),
    /// Text did not match `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`.
    ParseFailed(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (expected 1-12)"),
            Self::InvalidDay(d) => write!(f, "invalid day: {d} (expected 1-31)"),
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (expected 0-23)"),
            Self::InvalidMinute(m) => write!(f, "invalid minute: {m} (expected 0-59)"),
            Self::ParseFailed(s) => write!(f, "unparseable date-time: {s:?}"),
        }
    }
}

impl Error for TimeError {}
