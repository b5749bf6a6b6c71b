//! Exaltation/debilitation dignity classification.
//!
//! Sign-level dignity for the 7 sapta grahas: each has one exaltation
//! rashi and one debilitation rashi, always opposite each other. Rahu and
//! Ketu are absent from the rule table and never classify.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::{ALL_RASHIS, Rashi};

/// Dignity status of a graha in a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Exalted,
    Debilitated,
}

/// Exaltation rashi for the sapta grahas. Returns `None` for Rahu/Ketu.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi: always the 7th sign from exaltation.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Some(ALL_RASHIS[(r.index() as usize + 6) % 12]),
        None => None,
    }
}

/// Classify a graha's dignity in a rashi (by 0-based rashi index).
///
/// Exalted and debilitated are mutually exclusive by construction; any
/// other placement returns `None`.
pub fn dignity(graha: Graha, rashi_index: u8) -> Option<Dignity> {
    let exalted = exaltation_rashi(graha)?;
    if rashi_index == exalted.index() {
        return Some(Dignity::Exalted);
    }
    // Safe: debilitation exists whenever exaltation does.
    if debilitation_rashi(graha).map(Rashi::index) == Some(rashi_index) {
        return Some(Dignity::Debilitated);
    }
    None
}
