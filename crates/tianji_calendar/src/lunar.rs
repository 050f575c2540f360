//! Conversion between Gregorian and Chinese lunisolar dates.
//!
//! The epoch is fixed: Gregorian 1900-01-31 is lunar 1900-01-01 (New
//! Year's Day of lunar 1900). Conversion walks whole lunar years and then
//! months from that epoch; within a year the leap month follows
//! immediately after its plain namesake.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::solar::SolarDate;
use crate::year_table::{FIRST_YEAR, LAST_YEAR, leap_month, lunar_year_days, month_days};

/// Gregorian date of lunar 1900-01-01.
pub const EPOCH: SolarDate = SolarDate {
    year: 1900,
    month: 1,
    day: 31,
};

/// A Chinese lunisolar date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LunarDate {
    pub year: i32,
    /// 1..=12; a leap month carries its plain namesake's number.
    pub month: u8,
    pub is_leap_month: bool,
    /// 1..=30.
    pub day: u8,
}

impl LunarDate {
    /// Create a lunar date, validating it against the year table.
    pub fn new(year: i32, month: u8, is_leap_month: bool, day: u8) -> Result<Self, CalendarError> {
        let len = month_days(year, month, is_leap_month)?;
        if day == 0 || day > len {
            return Err(CalendarError::InvalidLunarDate("day beyond month length"));
        }
        Ok(Self {
            year,
            month,
            is_leap_month,
            day,
        })
    }
}

/// The months of one lunar year in on-calendar order:
/// `(month, is_leap, length)`, with the leap month directly after its
/// plain namesake.
fn months_of(year: i32) -> Result<Vec<(u8, bool, u8)>, CalendarError> {
    let leap = leap_month(year)?;
    let mut months = Vec::with_capacity(13);
    for m in 1..=12u8 {
        months.push((m, false, month_days(year, m, false)?));
        if leap == Some(m) {
            months.push((m, true, month_days(year, m, true)?));
        }
    }
    Ok(months)
}

/// Convert a Gregorian date to its lunisolar equivalent.
///
/// Rejects dates before the 1900-01-31 epoch or after the table's last
/// covered year with [`CalendarError::UnsupportedYear`].
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, CalendarError> {
    SolarDate::new(date.year, date.month, date.day)?;
    if date.year > LAST_YEAR {
        return Err(CalendarError::UnsupportedYear(date.year));
    }
    let mut offset = EPOCH.days_until(date);
    if offset < 0 {
        return Err(CalendarError::UnsupportedYear(date.year));
    }

    let mut year = FIRST_YEAR;
    loop {
        let days = i64::from(lunar_year_days(year)?);
        if offset < days {
            break;
        }
        offset -= days;
        year += 1;
    }

    for (month, is_leap, len) in months_of(year)? {
        if offset < i64::from(len) {
            return Ok(LunarDate {
                year,
                month,
                is_leap_month: is_leap,
                day: offset as u8 + 1,
            });
        }
        offset -= i64::from(len);
    }
    unreachable!("month walk exhausted a lunar year of {year}");
}

/// Convert a lunisolar date to its Gregorian equivalent.
pub fn lunar_to_solar(date: LunarDate) -> Result<SolarDate, CalendarError> {
    // Re-validate so a hand-built struct gets the same checks.
    let date = LunarDate::new(date.year, date.month, date.is_leap_month, date.day)?;

    let mut offset: i64 = 0;
    for y in FIRST_YEAR..date.year {
        offset += i64::from(lunar_year_days(y)?);
    }
    for (month, is_leap, len) in months_of(date.year)? {
        if month == date.month && is_leap == date.is_leap_month {
            break;
        }
        offset += i64::from(len);
    }
    offset += i64::from(date.day) - 1;
    Ok(SolarDate::from_jdn(EPOCH.jdn() + offset))
}

/// [`lunar_to_solar`] with the flat month encoding 1..=24, where 13..=24
/// denotes "leap (month - 12)".
pub fn lunar_to_solar_indexed(year: i32, month: u8, day: u8) -> Result<SolarDate, CalendarError> {
    if month == 0 || month > 24 {
        return Err(CalendarError::InvalidLunarDate("month outside 1..=24"));
    }
    let (base, is_leap) = if month > 12 {
        (month - 12, true)
    } else {
        (month, false)
    };
    lunar_to_solar(LunarDate {
        year,
        month: base,
        is_leap_month: is_leap,
        day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: u8, d: u8) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_new_year() {
        assert_eq!(
            solar_to_lunar(EPOCH),
            Ok(LunarDate {
                year: 1900,
                month: 1,
                is_leap_month: false,
                day: 1
            })
        );
        assert_eq!(
            lunar_to_solar_indexed(1900, 1, 1),
            Ok(EPOCH),
        );
    }

    #[test]
    fn rejects_before_epoch() {
        assert_eq!(
            solar_to_lunar(solar(1900, 1, 30)),
            Err(CalendarError::UnsupportedYear(1900))
        );
        assert_eq!(
            solar_to_lunar(solar(1899, 12, 31)),
            Err(CalendarError::UnsupportedYear(1899))
        );
    }

    #[test]
    fn rejects_after_table() {
        assert_eq!(
            solar_to_lunar(solar(2101, 1, 1)),
            Err(CalendarError::UnsupportedYear(2101))
        );
        assert!(solar_to_lunar(solar(2100, 12, 31)).is_ok());
    }

    #[test]
    fn new_year_days() {
        // Published lunar New Year dates.
        let expected = [
            (1900, solar(1900, 1, 31)),
            (1984, solar(1984, 2, 2)),
            (2000, solar(2000, 2, 5)),
            (2008, solar(2008, 2, 7)),
            (2017, solar(2017, 1, 28)),
            (2020, solar(2020, 1, 25)),
            (2021, solar(2021, 2, 12)),
            (2022, solar(2022, 2, 1)),
            (2023, solar(2023, 1, 22)),
            (2024, solar(2024, 2, 10)),
            (2025, solar(2025, 1, 29)),
            (2033, solar(2033, 1, 31)),
        ];
        for (year, date) in expected {
            assert_eq!(lunar_to_solar_indexed(year, 1, 1), Ok(date), "new year {year}");
            assert_eq!(
                solar_to_lunar(date),
                Ok(LunarDate {
                    year,
                    month: 1,
                    is_leap_month: false,
                    day: 1
                })
            );
        }
    }

    #[test]
    fn mid_autumn_2024() {
        // Lunar 2024-08-15 was Gregorian 2024-09-17.
        assert_eq!(lunar_to_solar_indexed(2024, 8, 15), Ok(solar(2024, 9, 17)));
    }

    #[test]
    fn leap_month_walk_2017() {
        // 2017: leap month 6 begins 2017-07-23, the day after plain month
        // 6 ends, and month 7 begins 2017-08-22 after its 30 days.
        assert_eq!(
            solar_to_lunar(solar(2017, 7, 22)),
            Ok(LunarDate { year: 2017, month: 6, is_leap_month: false, day: 29 })
        );
        assert_eq!(
            solar_to_lunar(solar(2017, 7, 23)),
            Ok(LunarDate { year: 2017, month: 6, is_leap_month: true, day: 1 })
        );
        assert_eq!(
            solar_to_lunar(solar(2017, 8, 22)),
            Ok(LunarDate { year: 2017, month: 7, is_leap_month: false, day: 1 })
        );
    }

    #[test]
    fn invalid_leap_requests() {
        // 2020's leap month is 4; no other month may be requested as leap.
        assert!(lunar_to_solar_indexed(2020, 16, 1).is_ok());
        assert!(lunar_to_solar_indexed(2020, 13, 1).is_err());
        // 2021 has no leap month at all.
        assert!(lunar_to_solar_indexed(2021, 13, 1).is_err());
        assert!(lunar_to_solar_indexed(2021, 17, 1).is_err());
    }

    #[test]
    fn invalid_days() {
        // 2020's leap fourth month has 29 days.
        assert!(lunar_to_solar_indexed(2020, 16, 29).is_ok());
        assert!(lunar_to_solar_indexed(2020, 16, 30).is_err());
        assert!(lunar_to_solar_indexed(2020, 1, 0).is_err());
        assert!(lunar_to_solar_indexed(2020, 25, 1).is_err());
    }

    #[test]
    fn round_trip_full_range() {
        // Every valid lunar date maps to a distinct, strictly increasing
        // solar date and back to itself.
        let mut prev_jdn = EPOCH.jdn() - 1;
        for year in 1900..=2100 {
            let leap = crate::year_table::leap_month(year).unwrap();
            for month in 1..=12u8 {
                for is_leap in [false, true] {
                    if is_leap && leap != Some(month) {
                        continue;
                    }
                    let len = crate::year_table::month_days(year, month, is_leap).unwrap();
                    for day in 1..=len {
                        let lunar = LunarDate { year, month, is_leap_month: is_leap, day };
                        let solar = lunar_to_solar(lunar).unwrap();
                        assert_eq!(solar.jdn(), prev_jdn + 1, "gap at {lunar:?}");
                        prev_jdn = solar.jdn();
                        assert_eq!(solar_to_lunar(solar), Ok(lunar));
                    }
                }
            }
        }
    }
}
