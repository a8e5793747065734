use serde::Serialize;

use super::RelativeUnit;
use crate::rounding::round_half_up;

/// Days in 400 Gregorian years.
const DAYS_PER_400_YEARS: f64 = 146_097.0;

/// Signed unit counts derived from one millisecond offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnitCounts {
    pub millisecond: i64,
    pub second: i64,
    pub minute: i64,
    pub hour: i64,
    pub day: i64,
    pub week: i64,
    pub month: i64,
    pub quarter: i64,
    pub year: i64,
}

impl UnitCounts {
    pub fn get(&self, unit: RelativeUnit) -> i64 {
        match unit {
            RelativeUnit::Second => self.second,
            RelativeUnit::Minute => self.minute,
            RelativeUnit::Hour => self.hour,
            RelativeUnit::Day => self.day,
            RelativeUnit::Week => self.week,
            RelativeUnit::Month => self.month,
            RelativeUnit::Quarter => self.quarter,
            RelativeUnit::Year => self.year,
        }
    }
}

/// Derives every unit count from `diff_ms`.
///
/// Each unit is rounded from the previous *rounded* unit rather than from the
/// raw offset, so rounding error accumulates down the chain. Month, quarter
/// and year all come from the rounded day count over the mean Gregorian year.
pub fn compute_units(diff_ms: f64) -> UnitCounts {
    let millisecond = round_half_up(diff_ms);
    let second = round_half_up(millisecond / 1000.0);
    let minute = round_half_up(second / 60.0);
    let hour = round_half_up(minute / 60.0);
    let day = round_half_up(hour / 24.0);
    let week = round_half_up(day / 7.0);
    let raw_year = day * 400.0 / DAYS_PER_400_YEARS;

    UnitCounts {
        millisecond: millisecond as i64,
        second: second as i64,
        minute: minute as i64,
        hour: hour as i64,
        day: day as i64,
        week: week as i64,
        month: round_half_up(raw_year * 12.0) as i64,
        quarter: round_half_up(raw_year * 4.0) as i64,
        year: round_half_up(raw_year) as i64,
    }
}

/// Picks the display unit for a set of counts.
///
/// Thresholds are checked in order on absolute values and the first match
/// wins. `second` and `quarter` are never returned.
pub fn best_fit(units: &UnitCounts) -> RelativeUnit {
    if units.minute.abs() < 45 {
        RelativeUnit::Minute
    } else if units.hour.abs() < 22 {
        RelativeUnit::Hour
    } else if units.day.abs() < 7 {
        RelativeUnit::Day
    } else if units.week.abs() < 4 {
        RelativeUnit::Week
    } else if units.month.abs() < 11 {
        RelativeUnit::Month
    } else {
        RelativeUnit::Year
    }
}
