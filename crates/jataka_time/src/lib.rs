//! Civil date-time and Julian Day conversion.
//!
//! This crate provides:
//! - `Instant`, the naive civil date-time used throughout the engine
//! - Calendar → Julian Day conversion (the common time axis for all
//!   longitude formulas)
//!
//! There are no timezone semantics: an `Instant` is treated as a naive
//! local moment, exactly as the chart consumers supply it.

pub mod error;
pub mod instant;
pub mod julian;

pub use error::TimeError;
pub use instant::Instant;
pub use julian::{J2000_JD, calendar_to_jd, days_since_j2000, julian_day};
