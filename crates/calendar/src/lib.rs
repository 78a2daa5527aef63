//! # pascha-calendar
//!
//! Civil date arithmetic for the Julian, Gregorian and Revised Julian
//! calendars, plus Byzantine Anno Mundi year numbering.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDate + Calendar"] -->|".to_jdn()"| B["Julian Day Number"]
//!     B -->|".from_jdn()"| A
//!     A -->|".convert(date, target)"| C["CivilDate in target"]
//!     A -->|".add_days(date, n)"| A
//!     B -->|"weekday()"| D["Weekday"]
//!     A -->|"anno_mundi()"| E["Anno Mundi year"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pascha_calendar::{Calendar, CivilDate, Weekday, anno_mundi};
//!
//! let julian = CivilDate::new(Calendar::Julian, 2024, 4, 22).unwrap();
//! let gregorian = Calendar::Julian.convert(julian, Calendar::Gregorian).unwrap();
//! assert_eq!(gregorian.month_day(), (5, 5));
//! assert_eq!(Calendar::Gregorian.weekday(gregorian).unwrap(), Weekday::Sunday);
//!
//! let pentecost = Calendar::Julian.add_days(julian, 49).unwrap();
//! assert_eq!(pentecost.month_day(), (6, 10));
//!
//! assert_eq!(anno_mundi(gregorian).unwrap(), 7532);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Calendar systems and leap-year rules |
//! | `date` | Year-month-day triple |
//! | `day_number` | Julian Day Number conversions, day offsets, weekdays |
//! | `era` | Byzantine Anno Mundi years |
//! | `error` | Error types |

mod calendar;
mod date;
mod day_number;
mod era;
mod error;

pub use calendar::Calendar;
pub use date::CivilDate;
pub use day_number::{Weekday, weekday};
pub use era::{ANNO_MUNDI_OFFSET, BYZANTINE_NEW_YEAR_MONTH, anno_mundi, to_anno_mundi};
pub use error::CalendarError;
