//! Mean-motion approximation of the 24 solar terms.
//!
//! Terms are interpolated from the year's spring-equinox anchor at the
//! mean solar rate, not computed from an ephemeris. The result is exact
//! to a day or two across 1900..=2100, which is all the month-boundary
//! consumers need.
//!
//! Major-term indices 0..=11 run start-of-spring, awakening-of-insects,
//! clear-and-bright, start-of-summer, grain-in-ear, minor-heat,
//! start-of-autumn, white-dew, cold-dew, start-of-winter, major-snow,
//! minor-cold; each begins the same-numbered solar month. Indices 0..=10
//! fall inside the given year, index 11 in the following January.

use crate::solar::SolarDate;

/// Mean days per degree of solar longitude.
pub const DAYS_PER_SOLAR_DEGREE: f64 = 365.2422 / 360.0;

/// Mean spacing between consecutive terms.
const TERM_SPACING_DAYS: f64 = 365.2422 / 24.0;

/// Mean time-of-day fraction of the equinox on its anchor date.
const EQUINOX_FRACTION: f64 = 0.325;

/// Drift of the March-20 anchor per century, in days.
const EQUINOX_DRIFT_PER_CENTURY: f64 = -0.53;

/// Julian date of the mean spring equinox of a year.
fn equinox_jd(year: i32) -> f64 {
    let anchor = SolarDate {
        year,
        month: 3,
        day: 20,
    };
    let centuries = f64::from(year - 2000) / 100.0;
    anchor.jdn() as f64 + EQUINOX_FRACTION + EQUINOX_DRIFT_PER_CENTURY * centuries
}

/// Julian date of a major term, `index` in 0..=11.
///
/// Start-of-spring sits 45 solar degrees before the equinox; each later
/// term adds 30 degrees.
fn major_term_jd(year: i32, index: u8) -> f64 {
    debug_assert!(index < 12, "major term index {index} outside 0..=11");
    equinox_jd(year) + (f64::from(index) * 30.0 - 45.0) * DAYS_PER_SOLAR_DEGREE
}

/// Gregorian date of a major (month-boundary) term, `index` in 0..=11.
pub fn major_term_date(year: i32, index: u8) -> SolarDate {
    SolarDate::from_jdn(major_term_jd(year, index).floor() as i64)
}

/// All 24 term dates of one cycle, starting at start-of-spring.
///
/// Even indices are the major terms of [`major_term_date`]; each odd
/// index is the minor term half a spacing later.
pub fn all_solar_terms(year: i32) -> [SolarDate; 24] {
    let mut terms = [SolarDate {
        year,
        month: 1,
        day: 1,
    }; 24];
    for k in 0..12u8 {
        let major = major_term_jd(year, k);
        terms[usize::from(k) * 2] = SolarDate::from_jdn(major.floor() as i64);
        terms[usize::from(k) * 2 + 1] =
            SolarDate::from_jdn((major + TERM_SPACING_DAYS).floor() as i64);
    }
    terms
}

/// Solar month (1..=12) containing a date.
///
/// Month m runs from major term m-1 (inclusive) to major term m
/// (exclusive); dates before the year's start-of-spring belong to the
/// previous year's cycle (month 11 or 12).
pub fn solar_month(date: SolarDate) -> u8 {
    let jd = date.jdn();
    let cycle = if jd >= major_term_date(date.year, 0).jdn() {
        date.year
    } else {
        date.year - 1
    };
    let mut month = 1;
    for k in (0..12u8).rev() {
        if jd >= major_term_date(cycle, k).jdn() {
            month = k + 1;
            break;
        }
    }
    month
}
