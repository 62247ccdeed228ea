//! Static Vedic reference tables for kundali matching.
//!
//! This crate provides:
//! - The 27-nakshatra and 12-rashi enums with index plumbing
//! - Categorical attribute tables (varna, vashya, yoni, gana, nadi)
//! - Planetary lordship and the graha friendship matrix
//! - The 9-fold tara classification between birth stars
//!
//! All tables are `const` data, total over their closed domains, and
//! read-only for the process lifetime. Lookups never fail for valid
//! indices; out-of-range indices panic (caller contract violation).

pub mod gana;
pub mod graha;
pub mod maitri;
pub mod nadi;
pub mod nakshatra;
pub mod rashi;
pub mod tara;
pub mod varna;
pub mod vashya;
pub mod yoni;

pub use gana::{ALL_GANAS, GANA_POINTS, Gana, gana_points, nakshatra_gana};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, nakshatra_lord, rashi_lord};
pub use maitri::{GRAHA_MAITRI_POINTS, Maitri, graha_maitri_points, naisargika_maitri};
pub use nadi::{ALL_NADIS, Nadi, nakshatra_nadi};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra};
pub use rashi::{ALL_RASHIS, Rashi};
pub use tara::{ALL_TARAS, Tara, tara_from_nakshatras};
pub use varna::{ALL_VARNAS, Varna, rashi_varna};
pub use vashya::{ALL_VASHYAS, VASHYA_POINTS, Vashya, rashi_vashya, vashya_points};
pub use yoni::{ALL_YONIS, ENEMY_YONI_PAIRS, Yoni, nakshatra_yoni, yoni_enemies};
