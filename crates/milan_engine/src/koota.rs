//! The eight Ashtakoot evaluators.
//!
//! Each koota is a pure function of the two charts, returning its points on
//! its own scale together with the attribute each side contributed and a
//! dosha flag. The evaluators are independent and order-insensitive; the
//! aggregator runs them in fixed id order.

use serde::{Serialize, Serializer};

use milan_base::{
    gana_points, graha_maitri_points, nakshatra_gana, nakshatra_nadi, nakshatra_yoni, rashi_lord,
    rashi_varna, rashi_vashya, tara_from_nakshatras, vashya_points, yoni_enemies,
};

use crate::dosha::bhakoot_dosha;
use crate::milan_types::BirthChart;

/// The eight kootas in evaluation order. Each koota's maximum equals its
/// 1-based position, so the eight maxima sum to 36.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KootaId {
    Varna,
    Vashya,
    Tara,
    Yoni,
    Maitri,
    Gana,
    Bhakoot,
    Nadi,
}

/// All 8 kootas in evaluation order.
pub const ALL_KOOTAS: [KootaId; 8] = [
    KootaId::Varna,
    KootaId::Vashya,
    KootaId::Tara,
    KootaId::Yoni,
    KootaId::Maitri,
    KootaId::Gana,
    KootaId::Bhakoot,
    KootaId::Nadi,
];

impl KootaId {
    /// Structural identifier of the koota.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Varna => "varna",
            Self::Vashya => "vashya",
            Self::Tara => "tara",
            Self::Yoni => "yoni",
            Self::Maitri => "maitri",
            Self::Gana => "gana",
            Self::Bhakoot => "bhakoot",
            Self::Nadi => "nadi",
        }
    }

    /// 0-based index into the result array.
    pub const fn index(self) -> u8 {
        match self {
            Self::Varna => 0,
            Self::Vashya => 1,
            Self::Tara => 2,
            Self::Yoni => 3,
            Self::Maitri => 4,
            Self::Gana => 5,
            Self::Bhakoot => 6,
            Self::Nadi => 7,
        }
    }

    /// Maximum points for this koota.
    pub const fn max_points(self) -> f64 {
        (self.index() + 1) as f64
    }

    /// All 8 kootas in evaluation order.
    pub const fn all() -> &'static [KootaId; 8] {
        &ALL_KOOTAS
    }
}

impl Serialize for KootaId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Outcome of one koota evaluation. Immutable; `points` is always within
/// `[0, max_points]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KootaResult {
    /// Which koota this is.
    pub id: KootaId,
    /// Points scored.
    pub points: f64,
    /// Scale of this koota (1..8 by id).
    pub max_points: f64,
    /// Attribute identifier contributed by the groom's chart.
    pub groom_value: &'static str,
    /// Attribute identifier contributed by the bride's chart.
    pub bride_value: &'static str,
    /// Whether this koota's dosha condition holds.
    pub has_dosha: bool,
}

// ---------------------------------------------------------------------------
// 1. Varna (max 1)
// ---------------------------------------------------------------------------

/// Varna koota: the groom's varna rank must be at least the bride's.
pub fn varna_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let groom_varna = rashi_varna(groom.rashi);
    let bride_varna = rashi_varna(bride.rashi);
    let points = if groom_varna.rank() >= bride_varna.rank() {
        1.0
    } else {
        0.0
    };
    KootaResult {
        id: KootaId::Varna,
        points,
        max_points: KootaId::Varna.max_points(),
        groom_value: groom_varna.name(),
        bride_value: bride_varna.name(),
        has_dosha: points == 0.0,
    }
}

// ---------------------------------------------------------------------------
// 2. Vashya (max 2)
// ---------------------------------------------------------------------------

/// Vashya koota: category-pair lookup on the 5x5 matrix.
pub fn vashya_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let groom_vashya = rashi_vashya(groom.rashi);
    let bride_vashya = rashi_vashya(bride.rashi);
    let points = vashya_points(groom_vashya, bride_vashya);
    KootaResult {
        id: KootaId::Vashya,
        points,
        max_points: KootaId::Vashya.max_points(),
        groom_value: groom_vashya.name(),
        bride_value: bride_vashya.name(),
        has_dosha: points < 1.0,
    }
}

// ---------------------------------------------------------------------------
// 3. Tara (max 3)
// ---------------------------------------------------------------------------

/// Tara koota: favorable taras score full, the rest score half.
pub fn tara_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let tara = tara_from_nakshatras(groom.nakshatra, bride.nakshatra);
    let points = if tara.favorable() { 3.0 } else { 1.5 };
    KootaResult {
        id: KootaId::Tara,
        points,
        max_points: KootaId::Tara.max_points(),
        groom_value: groom.nakshatra.name(),
        bride_value: bride.nakshatra.name(),
        has_dosha: points < 1.5,
    }
}

// ---------------------------------------------------------------------------
// 4. Yoni (max 4)
// ---------------------------------------------------------------------------

/// Yoni koota: same animal 4, sworn enemies 0, anything else 2.
pub fn yoni_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let groom_yoni = nakshatra_yoni(groom.nakshatra);
    let bride_yoni = nakshatra_yoni(bride.nakshatra);
    let points = if groom_yoni == bride_yoni {
        4.0
    } else if yoni_enemies(groom_yoni, bride_yoni) {
        0.0
    } else {
        2.0
    };
    KootaResult {
        id: KootaId::Yoni,
        points,
        max_points: KootaId::Yoni.max_points(),
        groom_value: groom_yoni.name(),
        bride_value: bride_yoni.name(),
        has_dosha: points == 0.0,
    }
}

// ---------------------------------------------------------------------------
// 5. Graha Maitri (max 5)
// ---------------------------------------------------------------------------

/// Graha Maitri koota: friendship between the two Moon-sign lords,
/// looked up groom-side first (the matrix is directional).
pub fn maitri_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let groom_lord = rashi_lord(groom.rashi);
    let bride_lord = rashi_lord(bride.rashi);
    let points = graha_maitri_points(groom_lord, bride_lord);
    KootaResult {
        id: KootaId::Maitri,
        points,
        max_points: KootaId::Maitri.max_points(),
        groom_value: groom_lord.name(),
        bride_value: bride_lord.name(),
        has_dosha: points == 0.0,
    }
}

// ---------------------------------------------------------------------------
// 6. Gana (max 6)
// ---------------------------------------------------------------------------

/// Gana koota: temperament-pair lookup on the directional 3x3 matrix.
pub fn gana_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let groom_gana = nakshatra_gana(groom.nakshatra);
    let bride_gana = nakshatra_gana(bride.nakshatra);
    let points = gana_points(groom_gana, bride_gana);
    KootaResult {
        id: KootaId::Gana,
        points,
        max_points: KootaId::Gana.max_points(),
        groom_value: groom_gana.name(),
        bride_value: bride_gana.name(),
        has_dosha: points <= 1.0,
    }
}

// ---------------------------------------------------------------------------
// 7. Bhakoot (max 7)
// ---------------------------------------------------------------------------

/// Bhakoot koota: all-or-nothing on the rashi spacing. A dosha spacing
/// zeroes the koota and names the dosha.
pub fn bhakoot_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let dosha = bhakoot_dosha(groom.rashi, bride.rashi);
    let points = if dosha.is_some() { 0.0 } else { 7.0 };
    KootaResult {
        id: KootaId::Bhakoot,
        points,
        max_points: KootaId::Bhakoot.max_points(),
        groom_value: groom.rashi.name(),
        bride_value: bride.rashi.name(),
        has_dosha: dosha.is_some(),
    }
}

// ---------------------------------------------------------------------------
// 8. Nadi (max 8)
// ---------------------------------------------------------------------------

/// Nadi koota: a shared nadi zeroes the koota and raises the hard dosha.
pub fn nadi_koota(groom: BirthChart, bride: BirthChart) -> KootaResult {
    let groom_nadi = nakshatra_nadi(groom.nakshatra);
    let bride_nadi = nakshatra_nadi(bride.nakshatra);
    let same = groom_nadi == bride_nadi;
    let points = if same { 0.0 } else { 8.0 };
    KootaResult {
        id: KootaId::Nadi,
        points,
        max_points: KootaId::Nadi.max_points(),
        groom_value: groom_nadi.name(),
        bride_value: bride_nadi.name(),
        has_dosha: same,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milan_base::{Nakshatra, Rashi};

    fn chart(nakshatra: Nakshatra, rashi: Rashi) -> BirthChart {
        BirthChart::new(nakshatra, rashi)
    }

    #[test]
    fn koota_maxima_sum_to_36() {
        let sum: f64 = ALL_KOOTAS.iter().map(|k| k.max_points()).sum();
        assert_eq!(sum, 36.0);
    }

    #[test]
    fn koota_indices_sequential() {
        for (i, k) in ALL_KOOTAS.iter().enumerate() {
            assert_eq!(k.index() as usize, i);
        }
    }

    // --- Varna ---

    #[test]
    fn varna_equal_rank_scores() {
        // Vrishabha and Kanya are both Vaishya.
        let r = varna_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 1.0);
        assert!(!r.has_dosha);
        assert_eq!(r.groom_value, "Vaishya");
    }

    #[test]
    fn varna_lower_groom_rank_fails() {
        // Mithuna (Shudra) groom, Karka (Brahmin) bride.
        let r = varna_koota(
            chart(Nakshatra::Ardra, Rashi::Mithuna),
            chart(Nakshatra::Ashlesha, Rashi::Karka),
        );
        assert_eq!(r.points, 0.0);
        assert!(r.has_dosha);
    }

    // --- Vashya ---

    #[test]
    fn vashya_same_category_max() {
        let r = vashya_koota(
            chart(Nakshatra::Ashwini, Rashi::Mesha),
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
        );
        assert_eq!(r.points, 2.0);
        assert!(!r.has_dosha);
    }

    #[test]
    fn vashya_half_point_is_dosha() {
        // Manava groom, Jalachara bride → 0.5, below the dosha threshold.
        let r = vashya_koota(
            chart(Nakshatra::Ardra, Rashi::Mithuna),
            chart(Nakshatra::Ashlesha, Rashi::Karka),
        );
        assert_eq!(r.points, 0.5);
        assert!(r.has_dosha);
    }

    // --- Tara ---

    #[test]
    fn tara_janma_scores_full() {
        // Rohini (3) to Hasta (12): 9 stars ahead folds to Janma.
        let r = tara_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 3.0);
        assert!(!r.has_dosha);
    }

    #[test]
    fn tara_vadha_scores_half() {
        // Ashlesha (8) to Ardra (5): count 24 folds to position 7 (Vadha).
        let r = tara_koota(
            chart(Nakshatra::Ashlesha, Rashi::Karka),
            chart(Nakshatra::Ardra, Rashi::Mithuna),
        );
        assert_eq!(r.points, 1.5);
        assert!(!r.has_dosha);
    }

    // --- Yoni ---

    #[test]
    fn yoni_same_animal_max() {
        // Rohini and Mrigashira are both Sarpa.
        let r = yoni_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Mrigashira, Rashi::Mithuna),
        );
        assert_eq!(r.points, 4.0);
    }

    #[test]
    fn yoni_enemy_pair_zero() {
        // Rohini (Sarpa) and Uttara Ashadha (Nakula) are sworn enemies.
        let r = yoni_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::UttaraAshadha, Rashi::Makara),
        );
        assert_eq!(r.points, 0.0);
        assert!(r.has_dosha);
    }

    #[test]
    fn yoni_neutral_pair_half() {
        let r = yoni_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 2.0);
        assert!(!r.has_dosha);
    }

    // --- Graha Maitri ---

    #[test]
    fn maitri_mutual_friends_max() {
        // Shukra (Vrishabha) and Buddh (Kanya) are mutual friends.
        let r = maitri_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 5.0);
        assert_eq!(r.groom_value, "Shukra");
        assert_eq!(r.bride_value, "Buddh");
    }

    #[test]
    fn maitri_directional_lookup() {
        // Karka (Chandra) groom vs Mithuna (Buddh) bride is 1.0; swapped
        // charts read the other matrix cell and drop to 0.5.
        let forward = maitri_koota(
            chart(Nakshatra::Ashlesha, Rashi::Karka),
            chart(Nakshatra::Ardra, Rashi::Mithuna),
        );
        let reverse = maitri_koota(
            chart(Nakshatra::Ardra, Rashi::Mithuna),
            chart(Nakshatra::Ashlesha, Rashi::Karka),
        );
        assert_eq!(forward.points, 1.0);
        assert_eq!(reverse.points, 0.5);
    }

    #[test]
    fn maitri_mutual_enemies_dosha() {
        // Simha (Surya) and Vrishabha (Shukra) lords are mutual enemies.
        let r = maitri_koota(
            chart(Nakshatra::Magha, Rashi::Simha),
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
        );
        assert_eq!(r.points, 0.0);
        assert!(r.has_dosha);
    }

    // --- Gana ---

    #[test]
    fn gana_manushya_deva_scores_five() {
        let r = gana_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 5.0);
        assert!(!r.has_dosha);
    }

    #[test]
    fn gana_deva_rakshasa_dosha() {
        let r = gana_koota(
            chart(Nakshatra::Hasta, Rashi::Kanya),
            chart(Nakshatra::Magha, Rashi::Simha),
        );
        assert_eq!(r.points, 0.0);
        assert!(r.has_dosha);
    }

    #[test]
    fn gana_rakshasa_deva_one_point_still_dosha() {
        let r = gana_koota(
            chart(Nakshatra::Magha, Rashi::Simha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 1.0);
        assert!(r.has_dosha);
    }

    // --- Bhakoot ---

    #[test]
    fn bhakoot_benign_spacing_full() {
        // Vrishabha to Kanya is the 5th spacing → dosha; use Vrishabha to
        // Karka (3rd) for the benign case.
        let r = bhakoot_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Ashlesha, Rashi::Karka),
        );
        assert_eq!(r.points, 7.0);
        assert!(!r.has_dosha);
    }

    #[test]
    fn bhakoot_dosha_zeroes() {
        let r = bhakoot_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 0.0);
        assert!(r.has_dosha);
    }

    // --- Nadi ---

    #[test]
    fn nadi_distinct_scores_full() {
        let r = nadi_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Hasta, Rashi::Kanya),
        );
        assert_eq!(r.points, 8.0);
        assert!(!r.has_dosha);
        assert_eq!(r.groom_value, "Antya");
        assert_eq!(r.bride_value, "Adi");
    }

    #[test]
    fn nadi_shared_raises_dosha() {
        // Rohini and Magha are both Antya.
        let r = nadi_koota(
            chart(Nakshatra::Rohini, Rashi::Vrishabha),
            chart(Nakshatra::Magha, Rashi::Simha),
        );
        assert_eq!(r.points, 0.0);
        assert!(r.has_dosha);
    }

    // --- General ---

    #[test]
    fn points_stay_within_scale_for_sample_pairs() {
        let charts = [
            chart(Nakshatra::Ashwini, Rashi::Mesha),
            chart(Nakshatra::Ashlesha, Rashi::Karka),
            chart(Nakshatra::Hasta, Rashi::Kanya),
            chart(Nakshatra::Mula, Rashi::Dhanu),
            chart(Nakshatra::Revati, Rashi::Meena),
        ];
        for g in charts {
            for b in charts {
                for r in [
                    varna_koota(g, b),
                    vashya_koota(g, b),
                    tara_koota(g, b),
                    yoni_koota(g, b),
                    maitri_koota(g, b),
                    gana_koota(g, b),
                    bhakoot_koota(g, b),
                    nadi_koota(g, b),
                ] {
                    assert!(
                        r.points >= 0.0 && r.points <= r.max_points,
                        "{:?} out of scale for {:?}/{:?}",
                        r,
                        g,
                        b
                    );
                }
            }
        }
    }
}
