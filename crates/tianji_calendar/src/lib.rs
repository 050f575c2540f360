//! Chinese lunisolar calendar conversion and solar-term approximation.
//!
//! This crate provides:
//! - A [`SolarDate`] Gregorian value type with integer Julian-Day
//!   arithmetic
//! - A packed per-year month-length/leap-month table for 1900..=2100
//! - Gregorian ↔ lunisolar conversion anchored at the 1900-01-31 epoch
//! - A mean-motion approximation of the 24 solar terms and the solar
//!   month they delimit
//!
//! Everything is pure table lookup and integer arithmetic; the only
//! failure modes are typed [`CalendarError`] rejections of out-of-range
//! or malformed input.

pub mod error;
pub mod lunar;
pub mod solar;
pub mod terms;
pub mod year_table;

pub use error::CalendarError;
pub use lunar::{EPOCH, LunarDate, lunar_to_solar, lunar_to_solar_indexed, solar_to_lunar};
pub use solar::{SolarDate, days_in_month, is_gregorian_leap_year};
pub use terms::{DAYS_PER_SOLAR_DEGREE, all_solar_terms, major_term_date, solar_month};
pub use year_table::{FIRST_YEAR, LAST_YEAR, leap_month, lunar_year_days, month_days};
