//! Date-transforming steps applied after the base method.

use pascha_calendar::{Calendar, CivilDate, to_anno_mundi};

use crate::error::ComputusError;
use crate::feast::Feast;

/// One transform in a [`Chain`](crate::Chain).
///
/// Steps are pure: each maps a date and the calendar it is written in to a
/// new date and calendar. A chain applies them in the order
/// offset, recalendar, era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Shift by the feast's day offset within the current calendar.
    Offset(Feast),
    /// Re-express the date in another calendar.
    Recalendar(Calendar),
    /// Re-number the year into the Byzantine Anno Mundi era.
    AnnoMundi,
}

impl Step {
    /// Applies this step to `date`, which is expressed in `calendar`.
    ///
    /// Returns the transformed date together with the calendar it is now
    /// expressed in.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError::DateRange`] if an offset or era re-numbering
    /// overflows, and [`ComputusError::CalendarConversion`] if the date
    /// cannot be carried into the target calendar.
    pub fn apply(
        self,
        date: CivilDate,
        calendar: Calendar,
    ) -> Result<(CivilDate, Calendar), ComputusError> {
        match self {
            Step::Offset(feast) => {
                let shifted = calendar
                    .add_days(date, feast.offset_days())
                    .map_err(ComputusError::date_range("applying a feast offset"))?;
                Ok((shifted, calendar))
            }
            Step::Recalendar(target) => {
                let converted = calendar.convert(date, target).map_err(|source| {
                    ComputusError::CalendarConversion {
                        from: calendar,
                        to: target,
                        source,
                    }
                })?;
                Ok((converted, target))
            }
            Step::AnnoMundi => {
                let renumbered = to_anno_mundi(date)
                    .map_err(ComputusError::date_range("numbering Anno Mundi years"))?;
                Ok((renumbered, calendar))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascha_calendar::CalendarError;

    fn date(calendar: Calendar, y: i64, m: u8, d: u8) -> CivilDate {
        CivilDate::new(calendar, y, m, d).unwrap()
    }

    #[test]
    fn offset_stays_in_calendar() {
        let pascha = date(Calendar::Julian, 2024, 4, 22);
        let (pentecost, calendar) = Step::Offset(Feast::Pentecost)
            .apply(pascha, Calendar::Julian)
            .unwrap();
        assert_eq!(calendar, Calendar::Julian);
        assert_eq!(pentecost, date(Calendar::Julian, 2024, 6, 10));
    }

    #[test]
    fn negative_offset_crosses_leap_day() {
        // Gregorian Easter 2024 is March 31; 56 days earlier crosses February 29.
        let easter = date(Calendar::Gregorian, 2024, 3, 31);
        let (meatfare, _) = Step::Offset(Feast::Meatfare)
            .apply(easter, Calendar::Gregorian)
            .unwrap();
        assert_eq!(meatfare, date(Calendar::Gregorian, 2024, 2, 4));
    }

    #[test]
    fn recalendar_reports_target() {
        let pascha = date(Calendar::Julian, 2024, 4, 22);
        let (converted, calendar) = Step::Recalendar(Calendar::Gregorian)
            .apply(pascha, Calendar::Julian)
            .unwrap();
        assert_eq!(calendar, Calendar::Gregorian);
        assert_eq!(converted, date(Calendar::Gregorian, 2024, 5, 5));
    }

    #[test]
    fn recalendar_to_same_calendar_is_identity() {
        let d = date(Calendar::Gregorian, 2024, 3, 31);
        let (same, calendar) = Step::Recalendar(Calendar::Gregorian)
            .apply(d, Calendar::Gregorian)
            .unwrap();
        assert_eq!((same, calendar), (d, Calendar::Gregorian));
    }

    #[test]
    fn anno_mundi_keeps_calendar() {
        let d = date(Calendar::Gregorian, 2024, 3, 31);
        let (am, calendar) = Step::AnnoMundi.apply(d, Calendar::Gregorian).unwrap();
        assert_eq!(calendar, Calendar::Gregorian);
        assert_eq!(am.year(), 7532);
        assert_eq!(am.month_day(), (3, 31));
    }

    #[test]
    fn offset_overflow_is_date_range() {
        let far = date(Calendar::Julian, i64::MAX, 4, 1);
        let err = Step::Offset(Feast::Pentecost)
            .apply(far, Calendar::Julian)
            .unwrap_err();
        assert!(matches!(
            err,
            ComputusError::DateRange {
                source: CalendarError::DateRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn recalendar_overflow_is_conversion_error() {
        let far = date(Calendar::Julian, i64::MAX, 4, 1);
        let err = Step::Recalendar(Calendar::Gregorian)
            .apply(far, Calendar::Julian)
            .unwrap_err();
        assert!(matches!(
            err,
            ComputusError::CalendarConversion {
                from: Calendar::Julian,
                to: Calendar::Gregorian,
                ..
            }
        ));
    }

    #[test]
    fn anno_mundi_overflow_is_date_range() {
        let far = date(Calendar::Julian, i64::MAX, 4, 1);
        let err = Step::AnnoMundi.apply(far, Calendar::Julian).unwrap_err();
        assert!(matches!(
            err,
            ComputusError::DateRange {
                source: CalendarError::EraOverflow { .. },
                ..
            }
        ));
    }
}
