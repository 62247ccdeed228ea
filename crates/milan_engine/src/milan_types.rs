//! Types for kundali match scoring (charts, tiers, final result).

use serde::{Serialize, Serializer};

use milan_base::{Nakshatra, Rashi};

use crate::dosha::BhakootDosha;
use crate::koota::KootaResult;

/// Maximum attainable total across the eight kootas.
pub const TOTAL_MAX_POINTS: f64 = 36.0;

/// Minimal birth-chart fingerprint for one partner: the Moon nakshatra and
/// Moon rashi, as determined by an upstream birth-chart engine.
///
/// A value type, copied freely; two instances exist per match call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthChart {
    /// Moon nakshatra.
    pub nakshatra: Nakshatra,
    /// Moon rashi.
    pub rashi: Rashi,
}

impl BirthChart {
    /// Chart from typed components.
    pub const fn new(nakshatra: Nakshatra, rashi: Rashi) -> Self {
        Self { nakshatra, rashi }
    }

    /// Chart from the raw indices delivered by the birth-chart engine
    /// (nakshatra 0..26, rashi 0..11).
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index. The indices come from a closed
    /// domain; anything outside it is an integration error and is never
    /// clamped into a wrong-but-plausible chart.
    pub fn from_indices(nakshatra_index: u8, rashi_index: u8) -> Self {
        Self {
            nakshatra: Nakshatra::from_index(nakshatra_index),
            rashi: Rashi::from_index(rashi_index),
        }
    }
}

/// Interpretation band for a total score.
///
/// The four bands partition [0, 36]: 0-17, 18-24, 25-32, 33-36. Boundary
/// totals belong to the lower band; fractional totals between two bands
/// (e.g. 17.5) belong to the band above the boundary they exceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Poor,
    Average,
    Good,
    Excellent,
}

/// All 4 tiers in ascending score order.
pub const ALL_TIERS: [Tier; 4] = [Tier::Poor, Tier::Average, Tier::Good, Tier::Excellent];

impl Tier {
    /// Structural identifier of the tier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// 1-based band level (poor=1 .. excellent=4).
    pub const fn level(self) -> u8 {
        match self {
            Self::Poor => 1,
            Self::Average => 2,
            Self::Good => 3,
            Self::Excellent => 4,
        }
    }

    /// Lower bound of the band (inclusive).
    pub const fn min_points(self) -> f64 {
        match self {
            Self::Poor => 0.0,
            Self::Average => 18.0,
            Self::Good => 25.0,
            Self::Excellent => 33.0,
        }
    }

    /// Upper bound of the band (inclusive).
    pub const fn max_points(self) -> f64 {
        match self {
            Self::Poor => 17.0,
            Self::Average => 24.0,
            Self::Good => 32.0,
            Self::Excellent => 36.0,
        }
    }

    /// Short reading of the band.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Poor => "Inauspicious match, not recommended",
            Self::Average => "Acceptable match, average compatibility",
            Self::Good => "Auspicious match, good compatibility",
            Self::Excellent => "Highly auspicious match",
        }
    }

    /// Select the tier whose band contains the total, scanning bands in
    /// ascending order so a boundary total stays in the lower band.
    pub fn for_points(total_points: f64) -> Tier {
        for tier in ALL_TIERS {
            if total_points <= tier.max_points() {
                return tier;
            }
        }
        Tier::Excellent
    }

    /// All 4 tiers in ascending order.
    pub const fn all() -> &'static [Tier; 4] {
        &ALL_TIERS
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Complete result of one match computation. Immutable, constructed once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    /// The eight koota results in fixed id order (varna first, nadi last).
    pub kootas: [KootaResult; 8],
    /// Sum of the eight koota points.
    pub total_points: f64,
    /// Always [`TOTAL_MAX_POINTS`].
    pub max_points: f64,
    /// Rounded percentage of the maximum, 0..100.
    pub percentage: u8,
    /// Interpretation band for the total.
    pub interpretation: Tier,
    /// Whether the partners share a nadi (hard dosha).
    pub nadi_dosha: bool,
    /// Bhakoot dosha category, if the rashi spacing triggers one.
    pub bhakoot_dosha: Option<BhakootDosha>,
}
