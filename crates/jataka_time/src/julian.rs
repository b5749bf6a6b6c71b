//! Calendar → Julian Day conversion.
//!
//! Standard proleptic Gregorian formula: January and February are shifted
//! into the previous year (month + 12), then century and leap corrections
//! are combined with the fractional day. The math layer places no lower
//! bound on the year; ancient and negative years are valid inputs.

use crate::instant::Instant;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a calendar date to a Julian Day.
///
/// `day_frac` is the day of month plus the fractional day, e.g. `1.5` for
/// noon on the 1st. Valid for any year, including negative years.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day of an instant, with hour/minute folded into the day fraction.
pub fn julian_day(instant: &Instant) -> f64 {
    let day_frac = instant.day as f64
        + (instant.hour as f64 + instant.minute as f64 / 60.0) / 24.0;
    calendar_to_jd(instant.year, instant.month, day_frac)
}

/// Days elapsed since J2000.0 (negative before the epoch).
pub fn days_since_j2000(instant: &Instant) -> f64 {
    julian_day(instant) - J2000_JD
}
