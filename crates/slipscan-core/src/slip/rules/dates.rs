//! Date and time coercion for labeled slip values.

use chrono::{NaiveDate, NaiveTime};

use super::patterns::{DATE_DMY, DATE_YMD, TIME_HM};

/// Coerce a raw date value to a calendar date.
///
/// Accepts ISO (`YYYY-MM-DD`) and European (`DD.MM.YYYY`, `DD/MM/YYYY`)
/// forms; dot, slash, and dash separators are all tolerated. Invalid
/// calendar dates coerce to `None`, never to an error.
pub fn coerce_date(raw: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_YMD.captures(raw) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = DATE_DMY.captures(raw) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Coerce a raw time value to a 24-hour clock time.
///
/// Accepts `HH:MM` and `HH.MM`.
pub fn coerce_time(raw: &str) -> Option<NaiveTime> {
    let caps = TIME_HM.captures(raw)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
