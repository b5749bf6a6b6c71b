//! Types for the assembled chart (positions, conjunctions, aspects).

use serde::Serialize;

use jataka_time::Instant;
use jataka_vedic::{Dignity, Graha, Nakshatra, Rashi};

/// Computed position of a single graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// The graha this position belongs to.
    pub graha: Graha,
    /// Sidereal longitude in degrees, rounded to 2 decimals for output.
    pub longitude: f64,
    /// Rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0-11).
    pub rashi_index: u8,
    /// Nakshatra (lunar mansion).
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0-26).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Dignity status, `None` for neutral placements and the nodes.
    pub dignity: Option<Dignity>,
}

/// Two or more grahas sharing a rashi.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conjunction {
    /// The shared rashi.
    pub rashi: Rashi,
    /// Members in chart iteration order, always >= 2, no duplicates.
    pub grahas: Vec<Graha>,
    /// Display text, e.g. `"Sun, Mercury in Makara"`.
    pub description: String,
}

/// Classification of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    /// 7th-house aspect (sign distance 6), cast by any graha.
    Opposition,
    /// Planet-specific aspect of Mars, Jupiter, or Saturn.
    Special,
}

/// A directional aspect from one graha to another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect {
    /// The aspecting graha (first of the pair in iteration order).
    pub source: Graha,
    /// The aspected graha.
    pub target: Graha,
    /// Aspect classification.
    pub kind: AspectKind,
    /// Sign distance from source to target, 0-11.
    pub sign_distance: u8,
    /// Display text, e.g. `"Mars aspects Saturn (4th house)"`.
    pub description: String,
}

/// Complete sidereal chart for one instant.
///
/// Immutable once constructed; every field is derived from the instant
/// and the static tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// The instant the chart was computed for.
    pub instant: Instant,
    /// Ayanamsha used for all positions, degrees, rounded to 2 decimals.
    pub ayanamsha: f64,
    /// One position per graha, in chart iteration order.
    pub positions: [Position; 9],
    /// Same-sign groupings, in detection order.
    pub conjunctions: Vec<Conjunction>,
    /// Aspect reports, in pair iteration order.
    pub aspects: Vec<Aspect>,
}

impl Chart {
    /// Position of a specific graha.
    pub fn position(&self, graha: Graha) -> &Position {
        &self.positions[graha.index() as usize]
    }
}
