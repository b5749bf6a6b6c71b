//! Chart assembly: positions first, relationships second.

use jataka_time::{Instant, julian_day};
use jataka_vedic::{
    ALL_GRAHAS, ayanamsha_deg, dignity, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude, tropical_longitude_deg,
};

use crate::chart_types::{Chart, Position};
use crate::relations::{find_aspects, find_conjunctions};

/// Round to 2 decimal places for chart output.
fn round2(deg: f64) -> f64 {
    (deg * 100.0).round() / 100.0
}

/// Compute the full sidereal chart for an instant.
///
/// The Julian Day and ayanamsha are evaluated once and shared by all 9
/// grahas. All positions are resolved before relationship detection runs,
/// and sign/mansion resolution uses the full-precision longitude; only the
/// stored longitude is rounded.
pub fn compute_chart(instant: &Instant) -> Chart {
    let jd = julian_day(instant);
    let days = jd - jataka_time::J2000_JD;
    let ayanamsha = ayanamsha_deg(jd);

    let positions: [Position; 9] = ALL_GRAHAS.map(|graha| {
        let sidereal = normalize_360(tropical_longitude_deg(graha, days) - ayanamsha);
        let rashi = rashi_from_longitude(sidereal);
        let nakshatra = nakshatra_from_longitude(sidereal);
        Position {
            graha,
            longitude: round2(sidereal),
            rashi: rashi.rashi,
            rashi_index: rashi.rashi_index,
            nakshatra: nakshatra.nakshatra,
            nakshatra_index: nakshatra.nakshatra_index,
            pada: nakshatra.pada,
            dignity: dignity(graha, rashi.rashi_index),
        }
    });

    let conjunctions = find_conjunctions(&positions);
    let aspects = find_aspects(&positions);

    Chart {
        instant: *instant,
        ayanamsha: round2(ayanamsha),
        positions,
        conjunctions,
        aspects,
    }
}
