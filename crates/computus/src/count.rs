//! Composite operations that compare day numbers instead of returning a date.

use std::fmt;

use pascha_calendar::{Calendar, CalendarError, CivilDate};
use tracing::debug;

use crate::error::ComputusError;
use crate::method::Method;

/// A signed number of whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Days(i64);

impl Days {
    /// Wraps a day count.
    pub fn new(days: i64) -> Self {
        Self(days)
    }

    /// Returns the inner day count.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns `true` if the count points into the past.
    pub fn is_past(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed number of whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weeks(i64);

impl Weeks {
    /// Wraps a week count.
    pub fn new(weeks: i64) -> Self {
        Self(weeks)
    }

    /// Returns the inner week count.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Weeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day number of `method`'s Pascha in `year`.
fn pascha_jdn(method: Method, year: i64, stage: &'static str) -> Result<i64, ComputusError> {
    method
        .native_calendar()
        .to_jdn(method.compute(year))
        .map_err(ComputusError::date_range(stage))
}

/// Counts the days from `today` to `method`'s Pascha in `year`.
///
/// `today` is read in `today_calendar`. The count is positive when Pascha is
/// still ahead and negative once it has passed; deciding whether to retry
/// with the following year is left to the caller.
///
/// # Errors
///
/// Returns [`ComputusError::DateRange`] if either date has no day number or
/// the difference overflows.
#[tracing::instrument(level = "debug")]
pub fn days_until(
    year: i64,
    method: Method,
    today: CivilDate,
    today_calendar: Calendar,
) -> Result<Days, ComputusError> {
    const STAGE: &str = "counting days until Pascha";
    let target = pascha_jdn(method, year, STAGE)?;
    let now = today_calendar
        .to_jdn(today)
        .map_err(ComputusError::date_range(STAGE))?;
    let days = target
        .checked_sub(now)
        .ok_or(ComputusError::DateRange {
            stage: STAGE,
            source: CalendarError::DateRange {
                calendar: today_calendar,
                year: today.year(),
                month: today.month(),
                day: today.day(),
            },
        })?;
    debug!(days, "days until Pascha");
    Ok(Days(days))
}

/// Counts whole weeks from `second`'s Pascha to `first`'s Pascha in `year`.
///
/// Both dates are taken in their native calendars and compared by day
/// number; the day difference is divided by seven, truncating toward zero.
///
/// # Errors
///
/// Returns [`ComputusError::DateRange`] if either Pascha has no day number.
#[tracing::instrument(level = "debug")]
pub fn weeks_between(year: i64, first: Method, second: Method) -> Result<Weeks, ComputusError> {
    const STAGE: &str = "counting weeks between Paschas";
    let a = pascha_jdn(first, year, STAGE)?;
    let b = pascha_jdn(second, year, STAGE)?;
    // Both Paschas fall within the same spring, so the difference is small.
    let weeks = (a - b) / 7;
    debug!(weeks, "weeks between Paschas");
    Ok(Weeks(weeks))
}
