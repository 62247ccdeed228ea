//! Match aggregation: run the eight kootas, sum, classify.

use crate::dosha::bhakoot_dosha;
use crate::koota::{
    KootaId, bhakoot_koota, gana_koota, maitri_koota, nadi_koota, tara_koota, varna_koota,
    vashya_koota, yoni_koota,
};
use crate::milan_types::{BirthChart, MatchResult, TOTAL_MAX_POINTS, Tier};

/// Score a groom/bride pairing across all eight kootas.
///
/// Pure and stateless: the result is a function of the two fingerprints
/// alone, and repeated calls with the same inputs yield identical results.
pub fn compute_match(groom: BirthChart, bride: BirthChart) -> MatchResult {
    let kootas = [
        varna_koota(groom, bride),
        vashya_koota(groom, bride),
        tara_koota(groom, bride),
        yoni_koota(groom, bride),
        maitri_koota(groom, bride),
        gana_koota(groom, bride),
        bhakoot_koota(groom, bride),
        nadi_koota(groom, bride),
    ];

    let total_points: f64 = kootas.iter().map(|k| k.points).sum();
    debug_assert!((0.0..=TOTAL_MAX_POINTS).contains(&total_points));

    MatchResult {
        kootas,
        total_points,
        max_points: TOTAL_MAX_POINTS,
        percentage: (total_points / TOTAL_MAX_POINTS * 100.0).round() as u8,
        interpretation: Tier::for_points(total_points),
        nadi_dosha: kootas[KootaId::Nadi.index() as usize].has_dosha,
        bhakoot_dosha: bhakoot_dosha(groom.rashi, bride.rashi),
    }
}
