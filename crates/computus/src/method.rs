//! Base Computus algorithms.
//!
//! Both are closed-form: a handful of modular reductions of the year with no
//! iteration. Floor division and Euclidean remainders keep them total over
//! negative years.

use std::fmt;

use pascha_calendar::{Calendar, CivilDate};

/// A Computus reckoning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Julian (Eastern) Computus, dated in the Julian calendar.
    #[default]
    Julian,
    /// Gregorian (Western) Computus, dated in the Gregorian calendar.
    Gregorian,
}

impl Method {
    /// Returns the calendar this method's dates are expressed in.
    pub fn native_calendar(self) -> Calendar {
        match self {
            Method::Julian => Calendar::Julian,
            Method::Gregorian => Calendar::Gregorian,
        }
    }

    /// Computes Pascha for `year` in the method's native calendar.
    pub fn compute(self, year: i64) -> CivilDate {
        match self {
            Method::Julian => julian_pascha(year),
            Method::Gregorian => gregorian_easter(year),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Julian => "Julian",
            Method::Gregorian => "Gregorian",
        };
        f.write_str(name)
    }
}

/// Computes Pascha by the Julian Computus, as a Julian calendar date.
///
/// # Examples
///
/// ```
/// use pascha_computus::julian_pascha;
///
/// let pascha = julian_pascha(2024);
/// assert_eq!(pascha.month_day(), (4, 22));
/// ```
pub fn julian_pascha(year: i64) -> CivilDate {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15).rem_euclid(30);
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    paschal_date(Calendar::Julian, year, d + e + 114)
}

/// Computes Easter by the Gregorian Computus, as a Gregorian calendar date.
///
/// # Examples
///
/// ```
/// use pascha_computus::gregorian_easter;
///
/// let easter = gregorian_easter(2024);
/// assert_eq!(easter.month_day(), (3, 31));
/// ```
pub fn gregorian_easter(year: i64) -> CivilDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    paschal_date(Calendar::Gregorian, year, h + l - 7 * m + 114)
}

/// Splits the shared `month * 31 + (day - 1)` encoding both algorithms end with.
fn paschal_date(calendar: Calendar, year: i64, encoded: i64) -> CivilDate {
    let month = encoded.div_euclid(31) as u8;
    let day = (encoded.rem_euclid(31) + 1) as u8;
    CivilDate::new(calendar, year, month, day)
        .expect("computus always lands between March 22 and April 25")
}
