//! Linear Lahiri-style ayanamsha model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (anchored to the equinox) and the sidereal zodiac (anchored to the
//! fixed stars). This model is linear in time: a J2000 reference value
//! plus a constant precession rate. It is an illustrative approximation,
//! kept exactly as configured so results stay reproducible; it is not a
//! nutation-corrected IAU series.

use jataka_time::J2000_JD;

/// Ayanamsha at the J2000.0 epoch, in degrees.
pub const AYANAMSHA_J2000_DEG: f64 = 23.85;

/// Precession rate: 50.29 arcseconds per year, in degrees per year.
pub const AYANAMSHA_RATE_DEG_PER_YEAR: f64 = 50.29 / 3600.0;

/// Days per Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// Ayanamsha in degrees at a Julian Day.
///
/// `base + rate * years_since_j2000`, negative years (dates before J2000)
/// reduce the offset.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    let years = (jd - J2000_JD) / DAYS_PER_YEAR;
    AYANAMSHA_J2000_DEG + AYANAMSHA_RATE_DEG_PER_YEAR * years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value_at_j2000() {
        assert!((ayanamsha_deg(J2000_JD) - AYANAMSHA_J2000_DEG).abs() < 1e-12);
    }

    #[test]
    fn one_julian_year_adds_one_rate() {
        let aya = ayanamsha_deg(J2000_JD + 365.25);
        assert!((aya - (AYANAMSHA_J2000_DEG + AYANAMSHA_RATE_DEG_PER_YEAR)).abs() < 1e-12);
    }

    #[test]
    fn decreases_into_the_past() {
        // One century before J2000: ~23.85 - 100 * 0.01397 ≈ 22.45
        let aya = ayanamsha_deg(J2000_JD - 100.0 * 365.25);
        assert!((aya - 22.453_055_555).abs() < 1e-6);
        assert!(aya < AYANAMSHA_J2000_DEG);
    }

    #[test]
    fn monotonic_in_time() {
        let mut prev = ayanamsha_deg(J2000_JD - 1000.0 * 365.25);
        for century in -9..=10 {
            let aya = ayanamsha_deg(J2000_JD + century as f64 * 100.0 * 365.25);
            assert!(aya >= prev);
            prev = aya;
        }
    }
}
