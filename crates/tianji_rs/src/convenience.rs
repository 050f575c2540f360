//! One-call helpers over the layered crates, accepting plain Gregorian
//! components.

use tianji_bazi::{Direction, FourPillars, PillarError, WuxingCount, wuxing_count};
use tianji_calendar::{LunarDate, SolarDate, solar_to_lunar};
use tianji_qimen::QimenBoard;
use tianji_ziwei::ZiweiChart;

fn date(year: i32, month: u8, day: u8) -> Result<SolarDate, PillarError> {
    SolarDate::new(year, month, day).map_err(PillarError::Calendar)
}

/// Four pillars for a Gregorian date and civil hour.
pub fn four_pillars(year: i32, month: u8, day: u8, hour: i32) -> Result<FourPillars, PillarError> {
    tianji_bazi::four_pillars(date(year, month, day)?, hour)
}

/// Five-element counts over the four pillars of a date-time.
pub fn wuxing(year: i32, month: u8, day: u8, hour: i32) -> Result<WuxingCount, PillarError> {
    let pillars = four_pillars(year, month, day, hour)?;
    Ok(wuxing_count(&pillars.pillars()))
}

/// Lunisolar date for a Gregorian date.
pub fn lunar(year: i32, month: u8, day: u8) -> Result<LunarDate, PillarError> {
    solar_to_lunar(date(year, month, day)?).map_err(PillarError::Calendar)
}

/// Qi Men Dun Jia board for a Gregorian date-time and facing direction.
pub fn qimen(
    year: i32,
    month: u8,
    day: u8,
    hour: i32,
    facing: Direction,
) -> Result<QimenBoard, PillarError> {
    tianji_qimen::build_board(date(year, month, day)?, hour, facing)
}

/// Zi Wei Dou Shu chart for a Gregorian birth date-time.
///
/// The Gregorian date converts to its lunar equivalent first; the chart
/// is built from that.
pub fn ziwei(year: i32, month: u8, day: u8, hour: i32) -> Result<ZiweiChart, PillarError> {
    let lunar = lunar(year, month, day)?;
    tianji_ziwei::build_chart(lunar, hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_pillars_known_date() {
        let fp = four_pillars(2024, 6, 15, 12).unwrap();
        assert_eq!(fp.year.name(), "JiaChen");
        assert_eq!(fp.day.name(), "GengXu");
    }

    #[test]
    fn wuxing_totals_eight() {
        let c = wuxing(1987, 3, 14, 10).unwrap();
        assert_eq!(c.total(), 8);
    }

    #[test]
    fn lunar_epoch() {
        let l = lunar(1900, 1, 31).unwrap();
        assert_eq!((l.year, l.month, l.day), (1900, 1, 1));
    }

    #[test]
    fn invalid_gregorian_is_rejected_up_front() {
        assert!(four_pillars(2023, 2, 29, 0).is_err());
        assert!(ziwei(1899, 6, 1, 0).is_err());
    }
}
