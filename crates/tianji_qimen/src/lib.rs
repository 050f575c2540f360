//! Qi Men Dun Jia nine-palace board construction.
//!
//! Builds a 3x3 palace board for a date and hour: the solar terms fix
//! the active configuration (Ju) and its Yang/Yin polarity, the hour
//! pillar anchors the governing star and door, and the remaining stars,
//! doors and deities rotate around the outer ring. Each palace gets a
//! fixed-weight score and an enum-keyed reading.

pub mod analysis;
pub mod board;
pub mod ju;
pub mod symbols;

pub use analysis::{BoardAnalysis, analyze};
pub use board::{CENTER_PALACE, QimenBoard, QimenPalace, build_board};
pub use ju::{DunPolarity, Ju, determine_ju};
pub use symbols::{
    ALL_DEITIES, ALL_DOORS, Auspice, QimenDeity, QimenDoor, QimenStar, ROTATING_STARS,
};
