//! Byzantine Anno Mundi year numbering.

use crate::date::CivilDate;
use crate::error::CalendarError;

/// Month on which the Byzantine year begins (September).
pub const BYZANTINE_NEW_YEAR_MONTH: u8 = 9;

/// Anno Mundi year in progress on January 1, 1 AD.
pub const ANNO_MUNDI_OFFSET: i64 = 5508;

/// Computes the Byzantine Anno Mundi year of a civil date.
///
/// The era counts from creation as reckoned in Constantinople, with the year
/// turning over on September 1. Months before September map to
/// `year + 5508`, September onward to `year + 5509`. Only the month matters,
/// so the result is taken against whatever calendar the date is written in.
///
/// # Errors
///
/// Returns [`CalendarError::EraOverflow`] if the result does not fit in `i64`.
///
/// # Examples
///
/// ```
/// use pascha_calendar::{Calendar, CivilDate, anno_mundi};
///
/// let pascha = CivilDate::new(Calendar::Gregorian, 2024, 3, 31).unwrap();
/// assert_eq!(anno_mundi(pascha).unwrap(), 7532);
///
/// let new_year = CivilDate::new(Calendar::Gregorian, 2024, 9, 1).unwrap();
/// assert_eq!(anno_mundi(new_year).unwrap(), 7533);
/// ```
pub fn anno_mundi(date: CivilDate) -> Result<i64, CalendarError> {
    let offset = if date.month() >= BYZANTINE_NEW_YEAR_MONTH {
        ANNO_MUNDI_OFFSET + 1
    } else {
        ANNO_MUNDI_OFFSET
    };
    date.year()
        .checked_add(offset)
        .ok_or(CalendarError::EraOverflow { year: date.year() })
}

/// Returns `date` with its year re-numbered into the Anno Mundi era.
///
/// # Errors
///
/// Propagates [`CalendarError::EraOverflow`] from [`anno_mundi`].
pub fn to_anno_mundi(date: CivilDate) -> Result<CivilDate, CalendarError> {
    Ok(date.with_year(anno_mundi(date)?))
}
