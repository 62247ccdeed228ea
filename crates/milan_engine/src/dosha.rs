//! Hard dosha identification and remedy resolution.
//!
//! Two of the eight kootas carry doshas weighty enough to surface on the
//! final result: Nadi (shared nadi) and Bhakoot (hostile rashi spacing).
//! The two are independent; a match may carry neither, either, or both.
//! Remedies are exposed as static lists of opaque identifiers so the
//! presentation layer can localize them.

use serde::{Serialize, Serializer};

use milan_base::Rashi;

use crate::milan_types::MatchResult;

/// Bhakoot dosha categories, named for the rashi spacings that trigger them.
/// At most one can apply to a pairing; the three position-sets are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BhakootDosha {
    /// 2nd/12th spacing.
    DhanVyay,
    /// 5th/9th spacing.
    PanchNavami,
    /// 6th/8th spacing.
    ShadAshtami,
}

impl BhakootDosha {
    /// Structural identifier of the dosha.
    pub const fn id(self) -> &'static str {
        match self {
            Self::DhanVyay => "dhan-vyay",
            Self::PanchNavami => "panch-navami",
            Self::ShadAshtami => "shad-ashtami",
        }
    }
}

impl Serialize for BhakootDosha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Bhakoot dosha for a groom/bride rashi pairing, if any.
///
/// The spacing is the 1-based count from the groom's rashi to the bride's
/// (1..12). The three dosha spacings pair each count with its complement
/// (2/12, 5/9, 6/8), so the check is direction-independent.
pub fn bhakoot_dosha(groom: Rashi, bride: Rashi) -> Option<BhakootDosha> {
    let diff = (bride.index() as u16 + 12 - groom.index() as u16) % 12 + 1;
    match diff {
        2 | 12 => Some(BhakootDosha::DhanVyay),
        5 | 9 => Some(BhakootDosha::PanchNavami),
        6 | 8 => Some(BhakootDosha::ShadAshtami),
        _ => None,
    }
}

/// Remedy identifiers recommended when nadi dosha is present.
pub const NADI_DOSHA_REMEDIES: &[&str] = &[
    "nadi-nivarana-puja",
    "maha-mrityunjaya-japa",
    "gau-daan",
    "anna-daan",
];

/// Remedy identifiers recommended when any bhakoot dosha is present.
pub const BHAKOOT_DOSHA_REMEDIES: &[&str] = &[
    "bhakoot-shanti-puja",
    "vishnu-sahasranama-path",
    "graha-shanti-daan",
];

impl MatchResult {
    /// Nadi remedy ids; empty when the dosha is absent.
    pub fn nadi_remedies(&self) -> &'static [&'static str] {
        if self.nadi_dosha {
            NADI_DOSHA_REMEDIES
        } else {
            &[]
        }
    }

    /// Bhakoot remedy ids; empty when the dosha is absent.
    pub fn bhakoot_remedies(&self) -> &'static [&'static str] {
        if self.bhakoot_dosha.is_some() {
            BHAKOOT_DOSHA_REMEDIES
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milan_base::ALL_RASHIS;

    #[test]
    fn dhan_vyay_spacings() {
        // Mesha-Vrishabha: bride 2nd from groom.
        assert_eq!(
            bhakoot_dosha(Rashi::Mesha, Rashi::Vrishabha),
            Some(BhakootDosha::DhanVyay)
        );
        // Reverse direction lands on 12 and names the same dosha.
        assert_eq!(
            bhakoot_dosha(Rashi::Vrishabha, Rashi::Mesha),
            Some(BhakootDosha::DhanVyay)
        );
    }

    #[test]
    fn panch_navami_spacings() {
        assert_eq!(
            bhakoot_dosha(Rashi::Vrishabha, Rashi::Kanya),
            Some(BhakootDosha::PanchNavami)
        );
        assert_eq!(
            bhakoot_dosha(Rashi::Kanya, Rashi::Vrishabha),
            Some(BhakootDosha::PanchNavami)
        );
    }

    #[test]
    fn shad_ashtami_spacings() {
        assert_eq!(
            bhakoot_dosha(Rashi::Mesha, Rashi::Kanya),
            Some(BhakootDosha::ShadAshtami)
        );
        assert_eq!(
            bhakoot_dosha(Rashi::Kanya, Rashi::Mesha),
            Some(BhakootDosha::ShadAshtami)
        );
    }

    #[test]
    fn same_rashi_no_dosha() {
        for r in ALL_RASHIS {
            assert_eq!(bhakoot_dosha(r, r), None, "{:?}", r);
        }
    }

    #[test]
    fn dosha_symmetric_across_all_pairs() {
        for g in ALL_RASHIS {
            for b in ALL_RASHIS {
                assert_eq!(
                    bhakoot_dosha(g, b),
                    bhakoot_dosha(b, g),
                    "{:?}/{:?}",
                    g,
                    b
                );
            }
        }
    }

    #[test]
    fn benign_spacings_clear() {
        // 1st, 3rd/11th, 4th/10th, 7th spacings carry no dosha.
        assert_eq!(bhakoot_dosha(Rashi::Mesha, Rashi::Mithuna), None);
        assert_eq!(bhakoot_dosha(Rashi::Mesha, Rashi::Karka), None);
        assert_eq!(bhakoot_dosha(Rashi::Mesha, Rashi::Tula), None);
    }

    #[test]
    fn remedy_lists_nonempty() {
        assert!(!NADI_DOSHA_REMEDIES.is_empty());
        assert!(!BHAKOOT_DOSHA_REMEDIES.is_empty());
    }
}
