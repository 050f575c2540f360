//! Derivation of the four pillars from a Gregorian date and hour.
//!
//! The year pillar turns over at start-of-spring, the month pillar at
//! each major solar term, the day pillar at civil midnight and the hour
//! pillar every two hours starting 23:00. Each escape rule (which stem
//! opens a cycle) is a ten-entry table plus a shared advance step.

use tianji_calendar::{FIRST_YEAR, LAST_YEAR, SolarDate, major_term_date, solar_month};

use crate::error::PillarError;
use crate::pillar::{FourPillars, Pillar};
use crate::stem_branch::{Branch, Stem};

/// JDN of 1900-01-01, the day-pillar anchor.
const DAY_EPOCH_JDN: i64 = 2_415_021;

/// Stem cycle index of the anchor day (1900-01-01 = JiaXu).
const DAY_EPOCH_STEM: i64 = 0;

/// Branch cycle index of the anchor day.
const DAY_EPOCH_BRANCH: i64 = 10;

/// Five Tigers escape: the stem opening solar month 1, by year stem.
/// Jia/Ji years open on Bing, Yi/Geng on Wu, Bing/Xin on Geng, Ding/Ren
/// on Ren, Wu/Gui on Jia.
const FIVE_TIGERS: [Stem; 10] = [
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
];

/// Five Rats escape: the stem opening the Rat hour, by day stem.
/// Jia/Ji days open on Jia, Yi/Geng on Bing, Bing/Xin on Wu, Ding/Ren on
/// Geng, Wu/Gui on Ren.
const FIVE_RATS: [Stem; 10] = [
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
];

fn check_range(date: SolarDate) -> Result<SolarDate, PillarError> {
    let date = SolarDate::new(date.year, date.month, date.day)
        .map_err(PillarError::Calendar)?;
    if !(FIRST_YEAR..=LAST_YEAR).contains(&date.year) {
        return Err(PillarError::Calendar(
            tianji_calendar::CalendarError::UnsupportedYear(date.year),
        ));
    }
    Ok(date)
}

/// Year pillar of a date.
///
/// Dates before the year's start-of-spring belong to the previous
/// sexagenary year. Anchor: year 4 CE opens the cycle (JiaZi).
pub fn year_pillar(date: SolarDate) -> Result<Pillar, PillarError> {
    let date = check_range(date)?;
    let effective = if date < major_term_date(date.year, 0) {
        date.year - 1
    } else {
        date.year
    };
    Ok(Pillar::new(
        Stem::from_index((effective - 4).rem_euclid(10) as u8),
        Branch::from_index((effective - 4).rem_euclid(12) as u8),
    ))
}

/// Month pillar of a date.
///
/// The branch is fixed by the solar month (month 1 = Yin, the Tiger);
/// the stem opens per the Five Tigers table and advances one per month.
pub fn month_pillar(date: SolarDate) -> Result<Pillar, PillarError> {
    let date = check_range(date)?;
    let month = solar_month(date);
    let year = year_pillar(date)?;
    let opening = FIVE_TIGERS[year.stem.index() as usize];
    Ok(Pillar::new(
        opening.advanced(month - 1),
        Branch::from_index(month + 1),
    ))
}

/// Day pillar of a date.
///
/// Pure integer day count from the 1900-01-01 JiaXu anchor; the anchor
/// is corroborated by 1949-10-01 = JiaZi and 2000-01-01 = WuWu in
/// published sexagenary-day tables.
pub fn day_pillar(date: SolarDate) -> Result<Pillar, PillarError> {
    let date = check_range(date)?;
    let days = date.jdn() - DAY_EPOCH_JDN;
    Ok(Pillar::new(
        Stem::from_index((DAY_EPOCH_STEM + days).rem_euclid(10) as u8),
        Branch::from_index((DAY_EPOCH_BRANCH + days).rem_euclid(12) as u8),
    ))
}

/// Two-hour slot index of a civil hour; slot 0 is the Rat hour
/// 23:00–00:59.
fn hour_slot(hour: i32) -> Result<u8, PillarError> {
    if !(0..=23).contains(&hour) {
        return Err(PillarError::InvalidHour(hour));
    }
    Ok((((hour + 1) / 2) % 12) as u8)
}

/// Branch of the two-hour slot containing a civil hour 0..=23.
pub fn hour_branch(hour: i32) -> Result<Branch, PillarError> {
    Ok(Branch::from_index(hour_slot(hour)?))
}

/// Hour pillar for a day pillar and civil hour 0..=23.
///
/// The 23:00 slot counts against the civil day's stem; no next-day
/// promotion is applied.
pub fn hour_pillar(day: Pillar, hour: i32) -> Result<Pillar, PillarError> {
    let slot = hour_slot(hour)?;
    let opening = FIVE_RATS[day.stem.index() as usize];
    Ok(Pillar::new(opening.advanced(slot), Branch::from_index(slot)))
}

/// All four pillars for a date and civil hour.
pub fn four_pillars(date: SolarDate, hour: i32) -> Result<FourPillars, PillarError> {
    let day = day_pillar(date)?;
    Ok(FourPillars {
        year: year_pillar(date)?,
        month: month_pillar(date)?,
        day,
        hour: hour_pillar(day, hour)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: u8, d: u8) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn year_pillar_known_years() {
        // Mid-year dates, clear of the start-of-spring boundary.
        let expected = [
            (1984, "JiaZi"),
            (2000, "GengChen"),
            (2023, "GuiMao"),
            (2024, "JiaChen"),
        ];
        for (year, name) in expected {
            let p = year_pillar(solar(year, 6, 1)).unwrap();
            assert_eq!(p.name(), name, "year {year}");
        }
    }

    #[test]
    fn year_pillar_before_spring() {
        // Mid-January 2024 still belongs to the GuiMao year.
        let p = year_pillar(solar(2024, 1, 15)).unwrap();
        assert_eq!(p.name(), "GuiMao");
    }

    #[test]
    fn day_pillar_anchor() {
        assert_eq!(day_pillar(solar(1900, 1, 1)).unwrap().name(), "JiaXu");
    }

    #[test]
    fn day_pillar_published_references() {
        // Two independently published sexagenary days.
        assert_eq!(day_pillar(solar(1949, 10, 1)).unwrap().name(), "JiaZi");
        assert_eq!(day_pillar(solar(2000, 1, 1)).unwrap().name(), "WuWu");
        assert_eq!(day_pillar(solar(2024, 1, 1)).unwrap().name(), "JiaZi");
    }

    #[test]
    fn day_pillar_periodicity() {
        let base = solar(1987, 3, 14);
        let p = day_pillar(base).unwrap();
        let plus10 = day_pillar(SolarDate::from_jdn(base.jdn() + 10)).unwrap();
        let plus12 = day_pillar(SolarDate::from_jdn(base.jdn() + 12)).unwrap();
        assert_eq!(p.stem, plus10.stem);
        assert_eq!(p.branch, plus12.branch);
    }

    #[test]
    fn month_pillar_june_2024() {
        // Solar month 5 of the JiaChen year: GengWu.
        let p = month_pillar(solar(2024, 6, 15)).unwrap();
        assert_eq!(p.name(), "GengWu");
    }

    #[test]
    fn month_branch_cycle() {
        // Solar month 1 is always the Yin (Tiger) month.
        let p = month_pillar(solar(2024, 2, 20)).unwrap();
        assert_eq!(p.branch, Branch::Yin);
        // Solar month 11 is the Zi month.
        let p = month_pillar(solar(2024, 12, 20)).unwrap();
        assert_eq!(p.branch, Branch::Zi);
    }

    #[test]
    fn hour_pillar_rat_hour() {
        let day = Pillar::new(Stem::Jia, Branch::Zi);
        let p = hour_pillar(day, 0).unwrap();
        assert_eq!(p.name(), "JiaZi");
        // 23:00 shares the Rat slot.
        assert_eq!(hour_pillar(day, 23).unwrap(), p);
    }

    #[test]
    fn hour_pillar_five_rats() {
        // A Geng day opens the Rat hour on Bing.
        let day = Pillar::new(Stem::Geng, Branch::Wu);
        assert_eq!(hour_pillar(day, 0).unwrap().stem, Stem::Bing);
        // Noon (slot 6) is six stems on: Ren.
        let noon = hour_pillar(day, 12).unwrap();
        assert_eq!(noon.stem, Stem::Ren);
        assert_eq!(noon.branch, Branch::Wu);
    }

    #[test]
    fn hour_pillar_rejects_bad_hours() {
        let day = Pillar::new(Stem::Jia, Branch::Zi);
        assert_eq!(hour_pillar(day, 24), Err(PillarError::InvalidHour(24)));
        assert_eq!(hour_pillar(day, -1), Err(PillarError::InvalidHour(-1)));
    }

    #[test]
    fn four_pillars_composes() {
        let fp = four_pillars(solar(2024, 6, 15), 12).unwrap();
        assert_eq!(fp.year.name(), "JiaChen");
        assert_eq!(fp.month.name(), "GengWu");
        assert_eq!(fp.day, day_pillar(solar(2024, 6, 15)).unwrap());
        assert_eq!(fp.hour, hour_pillar(fp.day, 12).unwrap());
    }

    #[test]
    fn rejects_out_of_range_dates() {
        assert!(year_pillar(solar(1899, 12, 31)).is_err());
        assert!(day_pillar(solar(2101, 1, 1)).is_err());
    }
}
