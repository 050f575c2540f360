//! Packed per-year lunisolar month data for 1900..=2100.
//!
//! Each year is one `u32`:
//! - bits 0-3: leap-month number (0 = no leap month);
//! - bit `0x10000 >> m` for month m in 1..=12: that month has 30 days
//!   when set, 29 when clear;
//! - bit 16: the leap month (when present) has 30 days when set.
//!
//! The table derives from the Hong Kong Observatory conversion tables and
//! is the same packed form used across the many published ports of them.

use crate::error::CalendarError;

/// First year covered by [`YEAR_TABLE`].
pub const FIRST_YEAR: i32 = 1900;
/// Last year covered by [`YEAR_TABLE`].
pub const LAST_YEAR: i32 = 2100;

const YEAR_TABLE: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

fn entry(year: i32) -> Result<u32, CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalendarError::UnsupportedYear(year));
    }
    Ok(YEAR_TABLE[(year - FIRST_YEAR) as usize])
}

/// Leap-month number of a lunar year, or `None` when the year has none.
pub fn leap_month(year: i32) -> Result<Option<u8>, CalendarError> {
    let m = (entry(year)? & 0xf) as u8;
    Ok(if m == 0 { None } else { Some(m) })
}

/// Length in days (29 or 30) of one month of a lunar year.
///
/// With `is_leap` set, `month` must be the year's actual leap month.
pub fn month_days(year: i32, month: u8, is_leap: bool) -> Result<u8, CalendarError> {
    let e = entry(year)?;
    if month == 0 || month > 12 {
        return Err(CalendarError::InvalidLunarDate("month outside 1..=12"));
    }
    if is_leap {
        if (e & 0xf) as u8 != month {
            return Err(CalendarError::InvalidLunarDate(
                "requested leap month is not the year's leap month",
            ));
        }
        Ok(if e & 0x10000 != 0 { 30 } else { 29 })
    } else {
        Ok(if e & (0x10000 >> month) != 0 { 30 } else { 29 })
    }
}

/// Total days in a lunar year, leap month included (353..=385).
pub fn lunar_year_days(year: i32) -> Result<u16, CalendarError> {
    let e = entry(year)?;
    let mut days = 0u16;
    for month in 1..=12u8 {
        days += if e & (0x10000 >> month) != 0 { 30 } else { 29 };
    }
    if e & 0xf != 0 {
        days += if e & 0x10000 != 0 { 30 } else { 29 };
    }
    Ok(days)
}
