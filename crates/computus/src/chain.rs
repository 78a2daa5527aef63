//! Chain assembly and execution.
//!
//! A [`Chain`] is a base [`Method`] followed by up to three [`Step`]s. The
//! steps only ever run in the order
//!
//! ```text
//! base -> feast offset -> calendar conversion -> era numbering
//! ```
//!
//! Offsets count liturgical days in the method's own calendar, and the
//! Anno Mundi new year is read off the calendar the date is finally shown
//! in, so any other order yields plausible but wrong dates. The
//! [`ChainBuilder`] stage parameter makes out-of-order assembly a compile
//! error:
//!
//! ```compile_fail
//! use pascha_computus::{Calendar, Chain, Era, Method};
//!
//! let chain = Chain::builder(Method::Julian)
//!     .era(Era::AnnoMundi)
//!     .output_calendar(Calendar::Gregorian);
//! ```

use std::marker::PhantomData;

use pascha_calendar::{Calendar, CivilDate};
use tracing::trace;

use crate::error::ComputusError;
use crate::feast::Feast;
use crate::method::Method;
use crate::step::Step;

/// Year numbering of a chain's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Era {
    /// Years as counted by the calendar itself.
    #[default]
    AnnoDomini,
    /// Byzantine years counted from creation, beginning September 1.
    AnnoMundi,
}

/// Builder stages. Each stage only offers the steps that may still follow.
pub mod stage {
    /// Nothing but the base method yet.
    #[derive(Debug)]
    pub struct Based;
    /// The feast-offset slot has been passed.
    #[derive(Debug)]
    pub struct Offset;
    /// The calendar-conversion slot has been passed.
    #[derive(Debug)]
    pub struct Recalendared;
    /// The era slot has been passed; only `build` remains.
    #[derive(Debug)]
    pub struct Numbered;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::stage::Based {}
    impl Sealed for super::stage::Offset {}
    impl Sealed for super::stage::Recalendared {}
}

/// Stages that may still add a calendar conversion.
pub trait AcceptsCalendar: sealed::Sealed {}
impl AcceptsCalendar for stage::Based {}
impl AcceptsCalendar for stage::Offset {}

/// Stages that may still add era numbering.
pub trait AcceptsEra: sealed::Sealed {}
impl AcceptsEra for stage::Based {}
impl AcceptsEra for stage::Offset {}
impl AcceptsEra for stage::Recalendared {}

/// Assembles a [`Chain`] one slot at a time, in the only legal order.
///
/// Each slot accepts an `Option`, so a slot can be passed without adding a
/// step.
#[derive(Debug)]
pub struct ChainBuilder<S> {
    method: Method,
    steps: Vec<Step>,
    _stage: PhantomData<S>,
}

impl<S> ChainBuilder<S> {
    fn advance<T>(self, step: Option<Step>) -> ChainBuilder<T> {
        let mut steps = self.steps;
        steps.extend(step);
        ChainBuilder {
            method: self.method,
            steps,
            _stage: PhantomData,
        }
    }

    /// Finishes the chain.
    pub fn build(self) -> Chain {
        Chain {
            method: self.method,
            steps: self.steps,
        }
    }
}

impl ChainBuilder<stage::Based> {
    /// Offsets the base date to a feast.
    pub fn feast(self, feast: impl Into<Option<Feast>>) -> ChainBuilder<stage::Offset> {
        self.advance(feast.into().map(Step::Offset))
    }
}

impl<S: AcceptsCalendar> ChainBuilder<S> {
    /// Re-expresses the date in `calendar` instead of the method's native one.
    pub fn output_calendar(
        self,
        calendar: impl Into<Option<Calendar>>,
    ) -> ChainBuilder<stage::Recalendared> {
        self.advance(calendar.into().map(Step::Recalendar))
    }
}

impl<S: AcceptsEra> ChainBuilder<S> {
    /// Selects the year numbering of the result.
    pub fn era(self, era: Era) -> ChainBuilder<stage::Numbered> {
        let step = match era {
            Era::AnnoDomini => None,
            Era::AnnoMundi => Some(Step::AnnoMundi),
        };
        self.advance(step)
    }
}

/// A base method followed by its transform steps.
///
/// Chains are cheap to build and are meant to be built per computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    method: Method,
    steps: Vec<Step>,
}

impl Chain {
    /// Starts a chain on `method`.
    pub fn builder(method: Method) -> ChainBuilder<stage::Based> {
        ChainBuilder {
            method,
            steps: Vec::new(),
            _stage: PhantomData,
        }
    }

    /// Returns the base method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the transform steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the calendar the chain's result is expressed in.
    pub fn calendar(&self) -> Calendar {
        self.steps
            .iter()
            .rev()
            .find_map(|step| match step {
                Step::Recalendar(calendar) => Some(*calendar),
                _ => None,
            })
            .unwrap_or_else(|| self.method.native_calendar())
    }

    /// Returns the year numbering of the chain's result.
    pub fn era(&self) -> Era {
        if self.steps.contains(&Step::AnnoMundi) {
            Era::AnnoMundi
        } else {
            Era::AnnoDomini
        }
    }

    /// Runs the chain for `year`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ComputusError`] raised by a step.
    #[tracing::instrument(level = "debug", skip(self), fields(method = %self.method))]
    pub fn compute(&self, year: i64) -> Result<CivilDate, ComputusError> {
        let mut calendar = self.method.native_calendar();
        let mut date = self.method.compute(year);
        trace!(%date, %calendar, "base date");
        for step in &self.steps {
            (date, calendar) = step.apply(date, calendar)?;
            trace!(?step, %date, %calendar, "applied step");
        }
        Ok(date)
    }
}

/// The choices that select one chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Request {
    /// Base Computus.
    pub method: Method,
    /// Feast to offset to; `None` for Pascha itself.
    pub feast: Option<Feast>,
    /// Output calendar; `None` keeps the method's native calendar.
    pub calendar: Option<Calendar>,
    /// Year numbering of the result.
    pub era: Era,
}

impl Request {
    /// Assembles the chain for this request.
    pub fn chain(&self) -> Chain {
        Chain::builder(self.method)
            .feast(self.feast)
            .output_calendar(self.calendar)
            .era(self.era)
            .build()
    }
}

/// Builds and runs the chain for `request` in one go.
///
/// # Errors
///
/// Propagates [`ComputusError`] from [`Chain::compute`].
pub fn calculate(request: &Request, year: i64) -> Result<CivilDate, ComputusError> {
    request.chain().compute(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_chain_is_native_pascha() {
        let chain = Chain::builder(Method::Julian).build();
        assert!(chain.steps().is_empty());
        assert_eq!(chain.calendar(), Calendar::Julian);
        assert_eq!(chain.era(), Era::AnnoDomini);
        assert_eq!(chain.compute(2024).unwrap().month_day(), (4, 22));
    }

    #[test]
    fn builder_records_steps_in_order() {
        let chain = Chain::builder(Method::Julian)
            .feast(Feast::Pentecost)
            .output_calendar(Calendar::Gregorian)
            .era(Era::AnnoMundi)
            .build();
        assert_eq!(
            chain.steps(),
            &[
                Step::Offset(Feast::Pentecost),
                Step::Recalendar(Calendar::Gregorian),
                Step::AnnoMundi,
            ]
        );
        assert_eq!(chain.calendar(), Calendar::Gregorian);
        assert_eq!(chain.era(), Era::AnnoMundi);
    }

    #[test]
    fn skipped_slots_add_no_steps() {
        let feast: Option<Feast> = None;
        let calendar: Option<Calendar> = None;
        let chain = Chain::builder(Method::Gregorian)
            .feast(feast)
            .output_calendar(calendar)
            .era(Era::AnnoDomini)
            .build();
        assert!(chain.steps().is_empty());
    }

    #[test]
    fn slots_may_be_skipped_entirely() {
        let chain = Chain::builder(Method::Gregorian).era(Era::AnnoMundi).build();
        assert_eq!(chain.steps(), &[Step::AnnoMundi]);
        assert_eq!(chain.calendar(), Calendar::Gregorian);
    }

    #[test]
    fn request_matches_builder() {
        let request = Request {
            method: Method::Julian,
            feast: Some(Feast::Ascension),
            calendar: Some(Calendar::RevisedJulian),
            era: Era::AnnoDomini,
        };
        let built = Chain::builder(Method::Julian)
            .feast(Feast::Ascension)
            .output_calendar(Calendar::RevisedJulian)
            .build();
        assert_eq!(request.chain(), built);
    }

    #[test]
    fn default_request_is_julian_pascha() {
        let request = Request::default();
        let date = calculate(&request, 2024).unwrap();
        assert_eq!(date.month_day(), (4, 22));
        assert_eq!(date.year(), 2024);
    }

    #[test]
    fn compute_is_deterministic() {
        let chain = Chain::builder(Method::Julian)
            .feast(Feast::MidfeastPentecost)
            .output_calendar(Calendar::Gregorian)
            .build();
        for year in 1900..1950 {
            assert_eq!(chain.compute(year), chain.compute(year));
        }
    }

    #[test]
    fn julian_pascha_in_gregorian_with_anno_mundi() {
        let date = Request {
            method: Method::Julian,
            feast: None,
            calendar: Some(Calendar::Gregorian),
            era: Era::AnnoMundi,
        }
        .chain()
        .compute(2024)
        .unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (7532, 5, 5));
    }
}
