//! Convenience wrapper for the tianji fortune-computation engine.
//!
//! Re-exports the whole public surface of the layered crates and adds
//! one-call helpers that accept plain Gregorian components, so callers
//! only need `use tianji_rs::*`.
//!
//! # Quick start
//!
//! ```
//! use tianji_rs::*;
//!
//! let pillars = four_pillars(2024, 6, 15, 12).unwrap();
//! assert_eq!(pillars.year.name(), "JiaChen");
//!
//! let counts = wuxing(2024, 6, 15, 12).unwrap();
//! assert_eq!(counts.total(), 8);
//! ```

pub mod convenience;

pub use convenience::{four_pillars, lunar, qimen, wuxing, ziwei};

// Re-export calendar types so callers don't need tianji_calendar
// directly.
pub use tianji_calendar::{
    CalendarError, EPOCH, FIRST_YEAR, LAST_YEAR, LunarDate, SolarDate, all_solar_terms,
    lunar_to_solar, lunar_to_solar_indexed, major_term_date, solar_month, solar_to_lunar,
};

// Pillar and element types.
pub use tianji_bazi::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Direction, Element, FourPillars, Pillar,
    PillarError, Polarity, Stem, WuxingCount, Zodiac, day_pillar, hour_branch, hour_pillar,
    month_pillar, wuxing_count, year_pillar,
};

// Qi Men Dun Jia surface.
pub use tianji_qimen::{
    Auspice, BoardAnalysis, CENTER_PALACE, DunPolarity, Ju, QimenBoard, QimenDeity, QimenDoor,
    QimenPalace, QimenStar, analyze, build_board, determine_ju,
};

// Zi Wei Dou Shu surface.
pub use tianji_ziwei::{
    ALL_MAIN_STARS, ALL_MINOR_STARS, ALL_ROLES, MainStar, MinorStar, PalaceRole, StarRef,
    Transformation, ZiweiChart, ZiweiPalace, build_chart, transformations_for,
};
