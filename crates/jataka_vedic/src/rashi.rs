//! Rashi (zodiac sign) table and longitude mapping.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Each rashi has a fixed element
//! and a planetary ruler, both universal Vedic convention.
//!
//! `rashi_from_longitude` expects an already-normalized longitude in
//! [0, 360); callers own the normalization.

use serde::Serialize;

use crate::graha::Graha;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Element classification of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Element of the rashi (fire/earth/air/water repeating cycle).
    pub const fn element(self) -> Element {
        match self {
            Self::Mesha | Self::Simha | Self::Dhanu => Element::Fire,
            Self::Vrishabha | Self::Kanya | Self::Makara => Element::Earth,
            Self::Mithuna | Self::Tula | Self::Kumbha => Element::Air,
            Self::Karka | Self::Vrischika | Self::Meena => Element::Water,
        }
    }

    /// Planetary ruler of the rashi (standard Vedic lordship).
    pub const fn ruler(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// The input must already be normalized to [0, 360); an out-of-range
/// value is a caller bug, not a runtime condition. Each rashi spans
/// exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    debug_assert!(
        (0.0..360.0).contains(&sidereal_lon_deg),
        "longitude {sidereal_lon_deg} not normalized"
    );
    let rashi_idx = (sidereal_lon_deg / 30.0).floor() as u8;
    // Clamp for the floating-point edge at exactly 360.0
    let rashi_idx = rashi_idx.min(11);
    let degrees_in_rashi = sidereal_lon_deg - (rashi_idx as f64) * 30.0;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        degrees_in_rashi,
    }
}
