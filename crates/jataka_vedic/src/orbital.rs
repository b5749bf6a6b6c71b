//! Mean-element longitude model for the 9 grahas.
//!
//! Tropical longitude is linear in time: epoch longitude plus daily motion
//! times days since J2000. Mercury and Venus additionally carry a fixed
//! 5-degree sinusoidal correction over their orbital period — a stand-in
//! for the equation of center, kept exactly as configured so outputs stay
//! reproducible. Rahu moves retrograde; Ketu is derived from Rahu.

use std::f64::consts::TAU;

use jataka_time::J2000_JD;

use crate::ayanamsha::ayanamsha_deg;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Amplitude of the Mercury/Venus periodic correction, in degrees.
const PERTURBATION_AMPLITUDE_DEG: f64 = 5.0;

/// Mean orbital elements at the J2000 epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Mean longitude at J2000, degrees.
    pub epoch_longitude_deg: f64,
    /// Mean daily motion, degrees per day (negative for retrograde).
    pub daily_motion_deg: f64,
    /// Orbital period in days.
    pub period_days: f64,
}

/// Tropical ecliptic longitude of a graha, degrees in [0, 360).
///
/// `days` is the (signed) day count since J2000. Ketu is always the point
/// opposite Rahu; it has no elements of its own.
pub fn tropical_longitude_deg(graha: Graha, days: f64) -> f64 {
    let elements = match graha.mean_elements() {
        Some(e) => e,
        // Ketu: structurally opposite Rahu.
        None => return normalize_360(tropical_longitude_deg(Graha::Rahu, days) + 180.0),
    };

    let mut longitude = elements.epoch_longitude_deg + elements.daily_motion_deg * days;

    if matches!(graha, Graha::Buddh | Graha::Shukra) {
        let phase = days.rem_euclid(elements.period_days) / elements.period_days;
        longitude += PERTURBATION_AMPLITUDE_DEG * (TAU * phase).sin();
    }

    normalize_360(longitude)
}

/// Sidereal ecliptic longitude of a graha at a Julian Day, degrees in [0, 360).
///
/// `sidereal = normalize(tropical - ayanamsha)`.
pub fn sidereal_longitude_deg(graha: Graha, jd: f64) -> f64 {
    let tropical = tropical_longitude_deg(graha, jd - J2000_JD);
    normalize_360(tropical - ayanamsha_deg(jd))
}
