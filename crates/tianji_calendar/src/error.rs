//! Error types for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Gregorian/lunisolar conversion and table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year outside the supported table range (1900..=2100), or a solar
    /// date before the 1900-01-31 lunisolar epoch.
    UnsupportedYear(i32),
    /// Gregorian date fails calendar validity.
    InvalidSolarDate { year: i32, month: u8, day: u8 },
    /// Lunisolar date fails validity (month range, leap-month mismatch,
    /// or day beyond the month's length).
    InvalidLunarDate(&'static str),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedYear(y) => write!(f, "year {y} outside supported range 1900..=2100"),
            Self::InvalidSolarDate { year, month, day } => {
                write!(f, "invalid Gregorian date {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidLunarDate(msg) => write!(f, "invalid lunar date: {msg}"),
        }
    }
}

impl Error for CalendarError {}
