//! Sexagenary stem-branch pillars and five-element analysis.
//!
//! This crate derives the four pillars (year, month, day, hour) of a
//! Gregorian date-time and aggregates their five-element
//! correspondences. Year and month pillars turn on the solar terms of
//! [`tianji_calendar`]; day and hour pillars are pure modular day/slot
//! counts from fixed anchors.

pub mod compute;
pub mod error;
pub mod pillar;
pub mod stem_branch;
pub mod wuxing;

pub use compute::{day_pillar, four_pillars, hour_branch, hour_pillar, month_pillar, year_pillar};
pub use error::PillarError;
pub use pillar::{FourPillars, Pillar};
pub use stem_branch::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Direction, Element, Polarity, Stem, Zodiac,
};
pub use wuxing::{WuxingCount, wuxing_count};
