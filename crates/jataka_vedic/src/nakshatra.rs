//! Nakshatra (lunar mansion) table and longitude mapping.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (360/27 deg) each, from Ashwini to Revati. Each nakshatra subdivides
//! into 4 padas (quarters) of 3 deg 20'.
//!
//! Each nakshatra carries its presiding deity and ruling graha, which chart
//! consumers display alongside the position.

use serde::Serialize;

use crate::graha::Graha;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 360/108 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Presiding deity of the nakshatra.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitris",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Vishwakarma",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indragni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirriti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishvadevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishta => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Aja Ekapada",
            Self::UttaraBhadrapada => "Ahir Budhnya",
            Self::Revati => "Pushan",
        }
    }

    /// Ruling graha of the nakshatra (Vimshottari sequence, repeating
    /// Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter, Saturn, Mercury).
    pub const fn ruler(self) -> Graha {
        match self {
            Self::Ashwini | Self::Magha | Self::Mula => Graha::Ketu,
            Self::Bharani | Self::PurvaPhalguni | Self::PurvaAshadha => Graha::Shukra,
            Self::Krittika | Self::UttaraPhalguni | Self::UttaraAshadha => Graha::Surya,
            Self::Rohini | Self::Hasta | Self::Shravana => Graha::Chandra,
            Self::Mrigashira | Self::Chitra | Self::Dhanishta => Graha::Mangal,
            Self::Ardra | Self::Swati | Self::Shatabhisha => Graha::Rahu,
            Self::Punarvasu | Self::Vishakha | Self::PurvaBhadrapada => Graha::Guru,
            Self::Pushya | Self::Anuradha | Self::UttaraBhadrapada => Graha::Shani,
            Self::Ashlesha | Self::Jyeshtha | Self::Revati => Graha::Buddh,
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishta => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// Sidereal longitude at which the nakshatra starts.
    pub fn start_degree(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// The input must already be normalized to [0, 360); an out-of-range value
/// is a caller bug. Each nakshatra spans 13 deg 20', each pada 3 deg 20'.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    debug_assert!(
        (0.0..360.0).contains(&sidereal_lon_deg),
        "longitude {sidereal_lon_deg} not normalized"
    );
    let nak_idx = (sidereal_lon_deg / NAKSHATRA_SPAN).floor() as u8;
    let nak_idx = nak_idx.min(26);
    let degrees_in_nakshatra = sidereal_lon_deg - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
    }
}
