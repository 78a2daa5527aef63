//! Calendar systems and their leap-year rules.

use std::fmt;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed in a common year before each month starts (index 0 unused).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A civil calendar system.
///
/// All three calendars share month names and lengths and differ only in
/// which years carry February 29. Years use astronomical numbering: year 0
/// exists and precedes year 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    /// Proleptic Julian calendar: every fourth year is a leap year.
    Julian,
    /// Proleptic Gregorian calendar: century years leap only when divisible by 400.
    Gregorian,
    /// Revised Julian (Milanković) calendar: century years leap only when
    /// `year mod 900` is 200 or 600.
    RevisedJulian,
}

impl Calendar {
    /// All supported calendars.
    pub const ALL: [Calendar; 3] = [
        Calendar::Julian,
        Calendar::Gregorian,
        Calendar::RevisedJulian,
    ];

    /// Returns `true` if `year` has 366 days in this calendar.
    pub fn is_leap_year(self, year: i64) -> bool {
        if year.rem_euclid(4) != 0 {
            return false;
        }
        match self {
            Calendar::Julian => true,
            Calendar::Gregorian => year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0,
            Calendar::RevisedJulian => {
                year.rem_euclid(100) != 0 || matches!(year.rem_euclid(900), 200 | 600)
            }
        }
    }

    /// Returns the number of days in `month` of `year`, or `None` if the
    /// month is outside 1..=12.
    pub fn days_in_month(self, year: i64, month: u8) -> Option<u8> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if month == 2 && self.is_leap_year(year) {
            return Some(29);
        }
        Some(DAYS_PER_MONTH[month as usize])
    }

    /// Returns the number of days in `year`.
    pub fn days_in_year(self, year: i64) -> u16 {
        if self.is_leap_year(year) { 366 } else { 365 }
    }

    /// Signed count of leap years in `(0, n]`; negative counts years in `(n, 0]`.
    ///
    /// Successive differences reproduce [`Calendar::is_leap_year`], so the
    /// count is valid for negative years as well.
    pub(crate) fn leap_years_through(self, n: i128) -> i128 {
        let julian = n.div_euclid(4);
        match self {
            Calendar::Julian => julian,
            Calendar::Gregorian => julian - n.div_euclid(100) + n.div_euclid(400),
            Calendar::RevisedJulian => {
                // Each residue class is anchored at zero: floor(-200/900) = floor(-600/900) = -1.
                julian - n.div_euclid(100)
                    + (n - 200).div_euclid(900)
                    + 1
                    + (n - 600).div_euclid(900)
                    + 1
            }
        }
    }

    /// Length in years and days of the calendar's full leap cycle.
    pub(crate) fn cycle(self) -> (i128, i128) {
        match self {
            Calendar::Julian => (4, 1_461),
            Calendar::Gregorian => (400, 146_097),
            Calendar::RevisedJulian => (900, 328_718),
        }
    }

    /// Days from January 1 of year 1 to January 1 of `year`.
    pub(crate) fn year_start(self, year: i128) -> i128 {
        365 * (year - 1) + self.leap_years_through(year - 1)
    }

    /// Julian Day Number of January 1 of year 1 in this calendar.
    pub(crate) fn epoch_jdn(self) -> i64 {
        match self {
            Calendar::Julian => 1_721_424,
            Calendar::Gregorian | Calendar::RevisedJulian => 1_721_426,
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Calendar::Julian => "Julian",
            Calendar::Gregorian => "Gregorian",
            Calendar::RevisedJulian => "Revised Julian",
        };
        f.write_str(name)
    }
}
