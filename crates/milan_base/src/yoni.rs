//! Yoni (animal nature) assignment and enemy pairs.
//!
//! Each nakshatra maps to one of 14 animal yonis; the 27 nakshatras cycle
//! through the animals with repetition, so most animals claim two stars.
//! Yoni koota scores 4 for the same animal, 0 for sworn enemies, 2 for
//! everything else. The enemy relation is symmetric and pairs each animal
//! with exactly one foe.

use crate::nakshatra::Nakshatra;

/// The 14 animal yonis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoni {
    /// Horse.
    Ashwa,
    /// Elephant.
    Gaja,
    /// Sheep/goat.
    Mesha,
    /// Serpent.
    Sarpa,
    /// Dog.
    Shwan,
    /// Cat.
    Marjara,
    /// Rat.
    Mushaka,
    /// Cow.
    Gau,
    /// Buffalo.
    Mahisha,
    /// Tiger.
    Vyaghra,
    /// Deer.
    Mriga,
    /// Monkey.
    Vanara,
    /// Mongoose.
    Nakula,
    /// Lion.
    Simha,
}

/// All 14 yonis in order.
pub const ALL_YONIS: [Yoni; 14] = [
    Yoni::Ashwa,
    Yoni::Gaja,
    Yoni::Mesha,
    Yoni::Sarpa,
    Yoni::Shwan,
    Yoni::Marjara,
    Yoni::Mushaka,
    Yoni::Gau,
    Yoni::Mahisha,
    Yoni::Vyaghra,
    Yoni::Mriga,
    Yoni::Vanara,
    Yoni::Nakula,
    Yoni::Simha,
];

impl Yoni {
    /// Name of the yoni animal.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwa => "Ashwa",
            Self::Gaja => "Gaja",
            Self::Mesha => "Mesha",
            Self::Sarpa => "Sarpa",
            Self::Shwan => "Shwan",
            Self::Marjara => "Marjara",
            Self::Mushaka => "Mushaka",
            Self::Gau => "Gau",
            Self::Mahisha => "Mahisha",
            Self::Vyaghra => "Vyaghra",
            Self::Mriga => "Mriga",
            Self::Vanara => "Vanara",
            Self::Nakula => "Nakula",
            Self::Simha => "Simha",
        }
    }
}

/// Yoni of a nakshatra (standard 27-entry assignment).
pub const fn nakshatra_yoni(nakshatra: Nakshatra) -> Yoni {
    match nakshatra {
        Nakshatra::Ashwini | Nakshatra::Shatabhisha => Yoni::Ashwa,
        Nakshatra::Bharani | Nakshatra::Revati => Yoni::Gaja,
        Nakshatra::Krittika | Nakshatra::Pushya => Yoni::Mesha,
        Nakshatra::Rohini | Nakshatra::Mrigashira => Yoni::Sarpa,
        Nakshatra::Ardra | Nakshatra::Mula => Yoni::Shwan,
        Nakshatra::Punarvasu | Nakshatra::Ashlesha => Yoni::Marjara,
        Nakshatra::Magha | Nakshatra::PurvaPhalguni => Yoni::Mushaka,
        Nakshatra::UttaraPhalguni | Nakshatra::UttaraBhadrapada => Yoni::Gau,
        Nakshatra::Hasta | Nakshatra::Swati => Yoni::Mahisha,
        Nakshatra::Chitra | Nakshatra::Vishakha => Yoni::Vyaghra,
        Nakshatra::Anuradha | Nakshatra::Jyeshtha => Yoni::Mriga,
        Nakshatra::PurvaAshadha | Nakshatra::Shravana => Yoni::Vanara,
        Nakshatra::UttaraAshadha => Yoni::Nakula,
        Nakshatra::Dhanishtha | Nakshatra::PurvaBhadrapada => Yoni::Simha,
    }
}

/// The 7 mutually-enemy yoni pairs. Each of the 14 animals appears exactly
/// once; the relation is checked symmetrically.
pub const ENEMY_YONI_PAIRS: [(Yoni, Yoni); 7] = [
    (Yoni::Ashwa, Yoni::Mahisha),
    (Yoni::Gaja, Yoni::Simha),
    (Yoni::Mesha, Yoni::Vanara),
    (Yoni::Sarpa, Yoni::Nakula),
    (Yoni::Shwan, Yoni::Mriga),
    (Yoni::Marjara, Yoni::Mushaka),
    (Yoni::Gau, Yoni::Vyaghra),
];

/// Whether two yonis are sworn enemies (order-independent).
pub fn yoni_enemies(a: Yoni, b: Yoni) -> bool {
    ENEMY_YONI_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}
