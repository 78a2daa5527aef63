//! Civil dates.

use std::fmt;

use crate::calendar::Calendar;
use crate::error::CalendarError;

/// A year-month-day triple in some civil calendar.
///
/// A `CivilDate` does not record which calendar it belongs to; the same
/// triple names different days in the Julian and Gregorian calendars. Callers
/// track the calendar alongside the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i64,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate`, validating it against `calendar`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` does not exist in that
    /// month of `year` in `calendar`.
    pub fn new(calendar: Calendar, year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = calendar
            .days_in_month(year, month)
            .ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from parts already known to be valid.
    pub(crate) fn from_parts(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the same month and day with the year field replaced.
    ///
    /// The result is not revalidated; it is meant for re-numbering the year
    /// into another era, not for moving the date to another year.
    pub fn with_year(self, year: i64) -> Self {
        Self { year, ..self }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
