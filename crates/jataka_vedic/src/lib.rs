//! Static Vedic tables and per-graha longitude math.
//!
//! This crate provides:
//! - The 9 grahas with their mean orbital elements
//! - A linear Lahiri-style ayanamsha model
//! - Mean-element tropical and sidereal longitude computation
//! - Rashi (12 signs) and nakshatra (27 mansions, 4 padas) mapping
//! - Exaltation/debilitation dignity classification
//!
//! Precision is deliberately illustrative: the orbital model is a low-order
//! mean-element approximation, not an ephemeris. Identical inputs always
//! produce identical outputs; that reproducibility is the contract.

pub mod ayanamsha;
pub mod dignity;
pub mod graha;
pub mod nakshatra;
pub mod orbital;
pub mod rashi;
pub mod util;

pub use ayanamsha::{AYANAMSHA_J2000_DEG, AYANAMSHA_RATE_DEG_PER_YEAR, ayanamsha_deg};
pub use dignity::{Dignity, debilitation_rashi, dignity, exaltation_rashi};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use orbital::{MeanElements, sidereal_longitude_deg, tropical_longitude_deg};
pub use rashi::{ALL_RASHIS, Element, Rashi, RashiInfo, rashi_from_longitude};
pub use util::normalize_360;
