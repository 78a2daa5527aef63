//! Julian Day Number arithmetic.
//!
//! Every calendar maps onto the same continuous day count, which makes the
//! day number the pivot for conversions, day offsets and weekday lookups.
//! Intermediate values are computed in `i128` so that only the final
//! `i64` can fail to fit.

use tracing::trace;

use crate::calendar::{Calendar, DAYS_BEFORE_MONTH};
use crate::date::CivilDate;
use crate::error::CalendarError;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Returns the day of the week for a Julian Day Number.
///
/// JDN 0 (1 January 4713 BC, Julian) was a Monday.
pub fn weekday(jdn: i64) -> Weekday {
    match jdn.rem_euclid(7) {
        0 => Weekday::Monday,
        1 => Weekday::Tuesday,
        2 => Weekday::Wednesday,
        3 => Weekday::Thursday,
        4 => Weekday::Friday,
        5 => Weekday::Saturday,
        _ => Weekday::Sunday,
    }
}

impl Calendar {
    /// Maps a date in this calendar to its Julian Day Number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// if the date does not exist in this calendar, and
    /// [`CalendarError::DateRange`] if the day number does not fit in `i64`.
    pub fn to_jdn(self, date: CivilDate) -> Result<i64, CalendarError> {
        let (year, month, day) = (date.year(), date.month(), date.day());
        let max_day = self
            .days_in_month(year, month)
            .ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }

        let mut day_of_year = i128::from(DAYS_BEFORE_MONTH[month as usize]) + i128::from(day) - 1;
        if month > 2 && self.is_leap_year(year) {
            day_of_year += 1;
        }
        let jdn = i128::from(self.epoch_jdn()) + self.year_start(i128::from(year)) + day_of_year;
        i64::try_from(jdn).map_err(|_| CalendarError::DateRange {
            calendar: self,
            year,
            month,
            day,
        })
    }

    /// Maps a Julian Day Number to a date in this calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Conversion`] if the resulting year does not
    /// fit in `i64`.
    pub fn from_jdn(self, jdn: i64) -> Result<CivilDate, CalendarError> {
        let days = i128::from(jdn) - i128::from(self.epoch_jdn());
        let (cycle_years, cycle_days) = self.cycle();

        // The mean-year estimate is at most one year off in either direction.
        let mut year = 1 + (days * cycle_years).div_euclid(cycle_days);
        while self.year_start(year) > days {
            year -= 1;
        }
        while self.year_start(year + 1) <= days {
            year += 1;
        }

        let day_of_year = days - self.year_start(year);
        let year = i64::try_from(year).map_err(|_| CalendarError::Conversion {
            jdn,
            target: self,
        })?;

        let leap_shift = |month: u8| i128::from(month > 2 && self.is_leap_year(year));
        let month = (1..=12u8)
            .rev()
            .find(|&m| i128::from(DAYS_BEFORE_MONTH[m as usize]) + leap_shift(m) <= day_of_year)
            .unwrap_or(1);
        let day = day_of_year - i128::from(DAYS_BEFORE_MONTH[month as usize]) - leap_shift(month) + 1;

        // day is in 1..=31 by construction of the month search.
        Ok(CivilDate::from_parts(year, month, day as u8))
    }

    /// Adds a signed number of days to a date in this calendar.
    ///
    /// Month and year boundaries, including this calendar's leap days, are
    /// crossed as needed.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateRange`] if the shifted day number
    /// overflows, plus any error from [`Calendar::to_jdn`] or
    /// [`Calendar::from_jdn`].
    pub fn add_days(self, date: CivilDate, delta: i64) -> Result<CivilDate, CalendarError> {
        let jdn = self.to_jdn(date)?;
        let shifted = jdn.checked_add(delta).ok_or(CalendarError::DateRange {
            calendar: self,
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })?;
        self.from_jdn(shifted)
    }

    /// Re-expresses a date from this calendar as the same day in `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateRange`] if the source date has no day
    /// number and [`CalendarError::Conversion`] if the target calendar cannot
    /// represent it.
    pub fn convert(self, date: CivilDate, target: Calendar) -> Result<CivilDate, CalendarError> {
        let jdn = self.to_jdn(date)?;
        let converted = target.from_jdn(jdn)?;
        trace!(%date, from = %self, to = %target, %converted, "converted date");
        Ok(converted)
    }

    /// Returns the day of the week of a date in this calendar.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Calendar::to_jdn`].
    pub fn weekday(self, date: CivilDate) -> Result<Weekday, CalendarError> {
        Ok(weekday(self.to_jdn(date)?))
    }
}
