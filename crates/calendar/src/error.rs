//! Error types for the pascha-calendar crate.

use crate::calendar::Calendar;

/// Error type for all fallible operations in the pascha-calendar crate.
///
/// Validation variants reject malformed civil dates. The range variants are
/// raised when day-number arithmetic would overflow instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a civil date, or a date shifted by a day delta, cannot
    /// be represented as a Julian Day Number.
    #[error("date out of range: {year}-{month:02}-{day:02} ({calendar})")]
    DateRange {
        /// Calendar the date is expressed in.
        calendar: Calendar,
        /// Year of the offending date.
        year: i64,
        /// Month of the offending date.
        month: u8,
        /// Day of the offending date.
        day: u8,
    },

    /// Returned when a Julian Day Number cannot be expressed as a civil date
    /// in the target calendar.
    #[error("cannot express day {jdn} in the {target} calendar")]
    Conversion {
        /// The Julian Day Number being converted.
        jdn: i64,
        /// The calendar the conversion targeted.
        target: Calendar,
    },

    /// Returned when adding the Anno Mundi epoch offset overflows the year.
    #[error("year {year} cannot be renumbered into the Anno Mundi era")]
    EraOverflow {
        /// The Anno Domini year that overflowed.
        year: i64,
    },
}
