//! The 9 grahas and their mean orbital elements.
//!
//! All chart iteration uses the fixed order Sun, Moon, Mercury, Venus,
//! Mars, Jupiter, Saturn, Rahu, Ketu. Conjunction grouping and aspect
//! pairing depend on this order, so it is part of the output contract.
//!
//! Each graha carries static mean-element constants at the J2000 epoch.
//! Ketu has no elements of its own: its longitude is derived structurally
//! from Rahu (+180 deg), which makes the opposition invariant a property
//! of the code rather than of the constant tables.

use serde::Serialize;

use crate::orbital::MeanElements;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Mars")]
    Mangal,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart iteration order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding the nodes.
/// Only these participate in dignity classification.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Buddh => "Buddh",
            Self::Shukra => "Shukra",
            Self::Mangal => "Mangal",
            Self::Guru => "Guru",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha, used in chart descriptions.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Buddh => "Mercury",
            Self::Shukra => "Venus",
            Self::Mangal => "Mars",
            Self::Guru => "Jupiter",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into `ALL_GRAHAS`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Buddh => 2,
            Self::Shukra => 3,
            Self::Mangal => 4,
            Self::Guru => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Mean orbital elements at the J2000 epoch.
    ///
    /// Rahu is the retrograde mean node (negative daily motion). Ketu
    /// returns `None`: its longitude is always derived as Rahu + 180 deg
    /// and never integrated from elements of its own.
    pub const fn mean_elements(self) -> Option<MeanElements> {
        match self {
            Self::Surya => Some(MeanElements {
                epoch_longitude_deg: 280.46646,
                daily_motion_deg: 0.985_647_4,
                period_days: 365.25636,
            }),
            Self::Chandra => Some(MeanElements {
                epoch_longitude_deg: 218.3165,
                daily_motion_deg: 13.176_358,
                period_days: 27.321_582,
            }),
            Self::Buddh => Some(MeanElements {
                epoch_longitude_deg: 252.2511,
                daily_motion_deg: 4.092_334_4,
                period_days: 87.969,
            }),
            Self::Shukra => Some(MeanElements {
                epoch_longitude_deg: 181.9798,
                daily_motion_deg: 1.602_130_2,
                period_days: 224.701,
            }),
            Self::Mangal => Some(MeanElements {
                epoch_longitude_deg: 355.433,
                daily_motion_deg: 0.524_020_8,
                period_days: 686.98,
            }),
            Self::Guru => Some(MeanElements {
                epoch_longitude_deg: 34.3515,
                daily_motion_deg: 0.083_085_3,
                period_days: 4_332.59,
            }),
            Self::Shani => Some(MeanElements {
                epoch_longitude_deg: 49.9429,
                daily_motion_deg: 0.033_444_2,
                period_days: 10_759.22,
            }),
            Self::Rahu => Some(MeanElements {
                epoch_longitude_deg: 125.0,
                daily_motion_deg: -0.052_953_9,
                period_days: 6_793.5,
            }),
            Self::Ketu => None,
        }
    }

    /// All 9 grahas in order.
    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}
