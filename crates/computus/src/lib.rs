//! Computus for the Julian and Gregorian reckonings of Pascha.
//!
//! A date is produced by a [`Chain`]: a base [`Method`] followed by
//! optional transform [`Step`]s.
//!
//! | Stage | Step | Effect |
//! |-------|------|--------|
//! | base | [`Method`] | Pascha in the method's native calendar |
//! | 1 | [`Step::Offset`] | shift to a [`Feast`] in that calendar |
//! | 2 | [`Step::Recalendar`] | re-express in another [`Calendar`] |
//! | 3 | [`Step::AnnoMundi`] | re-number the year from creation |
//!
//! # Quick start
//!
//! ```
//! use pascha_computus::{Calendar, Chain, Era, Feast, Method, weeks_between};
//!
//! let chain = Chain::builder(Method::Julian)
//!     .feast(Feast::Pentecost)
//!     .output_calendar(Calendar::Gregorian)
//!     .era(Era::AnnoDomini)
//!     .build();
//! let pentecost = chain.compute(2024).unwrap();
//! assert_eq!(pentecost.month_day(), (6, 23));
//!
//! let weeks = weeks_between(2024, Method::Julian, Method::Gregorian).unwrap();
//! assert_eq!(weeks.get(), 5);
//! ```
//!
//! Everything here is a pure function of its inputs. The caller resolves
//! "this year" and "today" before calling in.

mod chain;
mod count;
mod error;
mod feast;
mod method;
mod step;

pub use chain::{AcceptsCalendar, AcceptsEra, Chain, ChainBuilder, Era, Request, calculate, stage};
pub use count::{Days, Weeks, days_until, weeks_between};
pub use error::ComputusError;
pub use feast::Feast;
pub use method::{Method, gregorian_easter, julian_pascha};
pub use step::Step;

// Re-export the date types every caller needs.
pub use pascha_calendar::{Calendar, CalendarError, CivilDate};
