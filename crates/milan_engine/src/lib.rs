//! Ashtakoot Gun Milan: kundali match scoring over two birth-chart
//! fingerprints.
//!
//! This crate provides:
//! - The eight koota evaluators (varna, vashya, tara, yoni, graha maitri,
//!   gana, bhakoot, nadi)
//! - Aggregation into a 36-point total with percentage and tier
//! - Hard-dosha identification (nadi, bhakoot) with remedy resolution
//!
//! The engine is a pure function of its two inputs: no I/O, no state
//! between calls, safely parallelizable by the caller. Reference data
//! lives in `milan_base`.

pub mod dosha;
pub mod koota;
pub mod milan;
pub mod milan_types;

pub use dosha::{
    BHAKOOT_DOSHA_REMEDIES, BhakootDosha, NADI_DOSHA_REMEDIES, bhakoot_dosha,
};
pub use koota::{
    ALL_KOOTAS, KootaId, KootaResult, bhakoot_koota, gana_koota, maitri_koota, nadi_koota,
    tara_koota, varna_koota, vashya_koota, yoni_koota,
};
pub use milan::compute_match;
pub use milan_types::{ALL_TIERS, BirthChart, MatchResult, TOTAL_MAX_POINTS, Tier};
