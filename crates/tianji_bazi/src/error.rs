//! Error types for pillar derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tianji_calendar::CalendarError;

/// Errors from pillar computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PillarError {
    /// Error from calendar conversion or range checking.
    Calendar(CalendarError),
    /// Hour outside 0..=23.
    InvalidHour(i32),
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::InvalidHour(h) => write!(f, "hour {h} outside 0..=23"),
        }
    }
}

impl Error for PillarError {}

impl From<CalendarError> for PillarError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
