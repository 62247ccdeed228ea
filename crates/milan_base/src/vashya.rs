//! Vashya (mutual influence) categories and point matrix.
//!
//! Each rashi belongs to one of five vashya categories describing the kind
//! of creature the sign embodies. Vashya koota scores how far one category
//! holds sway over the other, on a 0..2 scale with half points.

use crate::rashi::Rashi;

/// The five vashya categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vashya {
    /// Quadruped signs.
    Chatushpada,
    /// Human signs.
    Manava,
    /// Water-dwelling signs.
    Jalachara,
    /// Wild (forest) signs.
    Vanachara,
    /// Insect/scorpion signs.
    Keeta,
}

/// All 5 vashya categories in matrix order.
pub const ALL_VASHYAS: [Vashya; 5] = [
    Vashya::Chatushpada,
    Vashya::Manava,
    Vashya::Jalachara,
    Vashya::Vanachara,
    Vashya::Keeta,
];

impl Vashya {
    /// Name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chatushpada => "Chatushpada",
            Self::Manava => "Manava",
            Self::Jalachara => "Jalachara",
            Self::Vanachara => "Vanachara",
            Self::Keeta => "Keeta",
        }
    }

    /// 0-based index into the vashya point matrix.
    pub const fn index(self) -> u8 {
        match self {
            Self::Chatushpada => 0,
            Self::Manava => 1,
            Self::Jalachara => 2,
            Self::Vanachara => 3,
            Self::Keeta => 4,
        }
    }
}

/// Vashya category of a rashi.
///
/// Standard assignment: Mesha/Vrishabha quadruped, Mithuna/Kanya/Tula/
/// Dhanu/Kumbha human, Karka/Makara/Meena aquatic, Simha wild,
/// Vrischika insect.
pub const fn rashi_vashya(rashi: Rashi) -> Vashya {
    match rashi {
        Rashi::Mesha | Rashi::Vrishabha => Vashya::Chatushpada,
        Rashi::Mithuna | Rashi::Kanya | Rashi::Tula | Rashi::Dhanu | Rashi::Kumbha => {
            Vashya::Manava
        }
        Rashi::Karka | Rashi::Makara | Rashi::Meena => Vashya::Jalachara,
        Rashi::Simha => Vashya::Vanachara,
        Rashi::Vrischika => Vashya::Keeta,
    }
}

/// Vashya koota points, indexed `[groom_category][bride_category]`.
///
/// Rows and columns follow [`ALL_VASHYAS`] order. Same category scores the
/// full 2; wild signs dominate or fall prey, yielding the zeros.
pub const VASHYA_POINTS: [[f64; 5]; 5] = [
    // Chatushpada  Manava  Jalachara  Vanachara  Keeta
    [2.0, 1.0, 1.0, 0.0, 1.0], // Chatushpada
    [1.0, 2.0, 0.5, 0.0, 1.0], // Manava
    [1.0, 0.5, 2.0, 1.0, 1.0], // Jalachara
    [0.0, 0.0, 1.0, 2.0, 0.0], // Vanachara
    [1.0, 1.0, 1.0, 0.0, 2.0], // Keeta
];

/// Look up vashya points for a groom/bride category pairing.
pub fn vashya_points(groom: Vashya, bride: Vashya) -> f64 {
    VASHYA_POINTS[groom.index() as usize][bride.index() as usize]
}
