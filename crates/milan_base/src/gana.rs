//! Gana (temperament) assignment and point matrix.
//!
//! The 27 nakshatras split evenly into deva (divine), manushya (human), and
//! rakshasa (demonic) temperaments. Gana koota scores the pairing on a 0..6
//! scale. The matrix is directional: a deva groom with a rakshasa bride is
//! not scored like a rakshasa groom with a deva bride.

use crate::nakshatra::Nakshatra;

/// The three ganas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// All 3 ganas in matrix order.
pub const ALL_GANAS: [Gana; 3] = [Gana::Deva, Gana::Manushya, Gana::Rakshasa];

impl Gana {
    /// Name of the gana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }

    /// 0-based index into the gana point matrix.
    pub const fn index(self) -> u8 {
        match self {
            Self::Deva => 0,
            Self::Manushya => 1,
            Self::Rakshasa => 2,
        }
    }
}

/// Gana of a nakshatra (standard assignment, 9 stars per gana).
pub const fn nakshatra_gana(nakshatra: Nakshatra) -> Gana {
    match nakshatra {
        Nakshatra::Ashwini
        | Nakshatra::Mrigashira
        | Nakshatra::Punarvasu
        | Nakshatra::Pushya
        | Nakshatra::Hasta
        | Nakshatra::Swati
        | Nakshatra::Anuradha
        | Nakshatra::Shravana
        | Nakshatra::Revati => Gana::Deva,
        Nakshatra::Bharani
        | Nakshatra::Rohini
        | Nakshatra::Ardra
        | Nakshatra::PurvaPhalguni
        | Nakshatra::UttaraPhalguni
        | Nakshatra::PurvaAshadha
        | Nakshatra::UttaraAshadha
        | Nakshatra::PurvaBhadrapada
        | Nakshatra::UttaraBhadrapada => Gana::Manushya,
        Nakshatra::Krittika
        | Nakshatra::Ashlesha
        | Nakshatra::Magha
        | Nakshatra::Chitra
        | Nakshatra::Vishakha
        | Nakshatra::Jyeshtha
        | Nakshatra::Mula
        | Nakshatra::Dhanishtha
        | Nakshatra::Shatabhisha => Gana::Rakshasa,
    }
}

/// Gana koota points, indexed `[groom_gana][bride_gana]`.
///
/// Rows and columns follow [`ALL_GANAS`] order. Not symmetric: a rakshasa
/// groom with a deva bride keeps 1 point, the reverse pairing drops to 0.
pub const GANA_POINTS: [[f64; 3]; 3] = [
    // Deva  Manushya  Rakshasa
    [6.0, 6.0, 0.0], // Deva
    [5.0, 6.0, 0.0], // Manushya
    [1.0, 0.0, 6.0], // Rakshasa
];

/// Look up gana points for a groom/bride temperament pairing.
pub fn gana_points(groom: Gana, bride: Gana) -> f64 {
    GANA_POINTS[groom.index() as usize][bride.index() as usize]
}
