//! Zi Wei Dou Shu twelve-palace chart construction.
//!
//! From a lunar birth date and two-hour birth slot: locate the Life and
//! Body palaces, seat the anchor star and its two families, scatter the
//! eighteen minor stars by their fixed-offset rules, and tag the four
//! transformations of the birth-year stem. Output palaces always start
//! at the Life Palace and cycle the twelve roles in fixed order.

pub mod analysis;
pub mod chart;
pub mod stars;
pub mod transformations;

pub use chart::{
    ALL_ROLES, PalaceRole, ZiweiChart, ZiweiPalace, anchor_star_palace, body_palace, build_chart,
    life_palace,
};
pub use stars::{
    ALL_MAIN_STARS, ALL_MINOR_STARS, ALL_TRANSFORMATIONS, MainStar, MinorStar, StarRef,
    TIANFU_FAMILY, Transformation, ZIWEI_FAMILY,
};
pub use transformations::transformations_for;
