//! Tara (birth-star) classification between two nakshatras.
//!
//! The 27 nakshatras fold into 9 taras of 3 stars each. Counting from the
//! groom's birth star to the bride's (inclusive), the position within the
//! fold names the tara. Five taras are favorable, four are not.

use crate::nakshatra::Nakshatra;

/// The nine taras, in counting order from the birth star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tara {
    Janma,
    Sampat,
    Vipat,
    Kshema,
    Pratyari,
    Sadhaka,
    Vadha,
    Mitra,
    AtiMitra,
}

/// All 9 taras in counting order (Janma = position 1).
pub const ALL_TARAS: [Tara; 9] = [
    Tara::Janma,
    Tara::Sampat,
    Tara::Vipat,
    Tara::Kshema,
    Tara::Pratyari,
    Tara::Sadhaka,
    Tara::Vadha,
    Tara::Mitra,
    Tara::AtiMitra,
];

impl Tara {
    /// Name of the tara.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Janma => "Janma",
            Self::Sampat => "Sampat",
            Self::Vipat => "Vipat",
            Self::Kshema => "Kshema",
            Self::Pratyari => "Pratyari",
            Self::Sadhaka => "Sadhaka",
            Self::Vadha => "Vadha",
            Self::Mitra => "Mitra",
            Self::AtiMitra => "Ati Mitra",
        }
    }

    /// 1-based counting position (Janma=1 .. Ati Mitra=9).
    pub const fn position(self) -> u8 {
        match self {
            Self::Janma => 1,
            Self::Sampat => 2,
            Self::Vipat => 3,
            Self::Kshema => 4,
            Self::Pratyari => 5,
            Self::Sadhaka => 6,
            Self::Vadha => 7,
            Self::Mitra => 8,
            Self::AtiMitra => 9,
        }
    }

    /// Whether this tara is favorable (Janma, Sampat, Kshema, Sadhaka,
    /// Mitra). Janma is treated as fully favorable, matching common
    /// calculator practice.
    pub const fn favorable(self) -> bool {
        matches!(
            self,
            Self::Janma | Self::Sampat | Self::Kshema | Self::Sadhaka | Self::Mitra
        )
    }
}

/// Tara of the bride's nakshatra counted from the groom's.
///
/// The cyclic distance is taken over all 27 stars first, then folded into
/// the 9-tara cycle, so the count stays anchored to actual star positions.
pub fn tara_from_nakshatras(groom: Nakshatra, bride: Nakshatra) -> Tara {
    let count = (bride.index() as u16 + 27 - groom.index() as u16) % 27;
    ALL_TARAS[(count % 9) as usize]
}
