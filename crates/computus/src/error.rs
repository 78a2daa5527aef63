//! Error types for the pascha-computus crate.

use pascha_calendar::{Calendar, CalendarError};

/// Error type for all fallible operations in the pascha-computus crate.
///
/// Each variant keeps the underlying [`CalendarError`] as its source. A
/// failure only affects the computation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputusError {
    /// Returned when day-number or year arithmetic overflows.
    #[error("date out of range while {stage}")]
    DateRange {
        /// What was being computed when the overflow happened.
        stage: &'static str,
        /// The underlying calendar error.
        #[source]
        source: CalendarError,
    },

    /// Returned when a date cannot be re-expressed in the requested calendar.
    #[error("cannot convert {from} date to the {to} calendar")]
    CalendarConversion {
        /// Calendar the date was expressed in.
        from: Calendar,
        /// Calendar the date was being converted to.
        to: Calendar,
        /// The underlying calendar error.
        #[source]
        source: CalendarError,
    },
}

impl ComputusError {
    pub(crate) fn date_range(stage: &'static str) -> impl FnOnce(CalendarError) -> Self {
        move |source| Self::DateRange { stage, source }
    }
}
