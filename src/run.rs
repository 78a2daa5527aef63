//! The `pascha` command: resolve settings, compute every target, print.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local};
use pascha_computus::{
    Calendar, CivilDate, ComputusError, Method, Request, calculate, days_until, weeks_between,
};
use tracing::{debug, debug_span, info, info_span, warn};

use crate::cli::Cli;
use crate::config::PaschaConfig;
use crate::convert::{Settings, build_settings};
use crate::output::{format_date, format_line};
use crate::target::Target;

pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("pascha").entered();

    let config = PaschaConfig::load(cli.config.as_deref())?;
    let settings = build_settings(&cli, &config)?;
    let today = local_today()?;
    let year = settings.year.unwrap_or(today.year());
    info!(
        year,
        given = settings.year.is_some(),
        method = %settings.request.method,
        targets = settings.targets.len(),
        "resolved settings"
    );

    let stdout = io::stdout();
    let stderr = io::stderr();
    let failed = report(
        &settings,
        year,
        today,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    if failed > 0 {
        bail!(
            "{failed} of {} results could not be computed",
            settings.targets.len()
        );
    }
    Ok(())
}

/// Today's date on the local clock, read as a Gregorian date.
fn local_today() -> Result<CivilDate> {
    let now = Local::now().date_naive();
    let month = u8::try_from(now.month()).context("clock returned an invalid month")?;
    let day = u8::try_from(now.day()).context("clock returned an invalid day")?;
    CivilDate::new(Calendar::Gregorian, i64::from(now.year()), month, day)
        .context("clock returned an invalid date")
}

/// Writes one line per target to `out`.
///
/// A target that cannot be computed is reported on `err` and the remaining
/// targets still run. Returns the number of failed targets.
pub fn report(
    settings: &Settings,
    year: i64,
    today: CivilDate,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<usize> {
    let mut failed = 0;
    for &target in &settings.targets {
        let label = target.label(settings.easter);
        let _target = debug_span!("target", name = %label).entered();
        match evaluate(settings, target, year, today) {
            Ok(value) => {
                let label = settings.labels.then_some(label.as_str());
                writeln!(out, "{}", format_line(label, &value))?;
            }
            Err(e) => {
                warn!(result = %label, error = %e, "could not compute result");
                writeln!(err, "Error: {label}: {e}")?;
                failed += 1;
            }
        }
    }
    Ok(failed)
}

fn evaluate(
    settings: &Settings,
    target: Target,
    year: i64,
    today: CivilDate,
) -> Result<String, ComputusError> {
    let method = settings.request.method;
    match target {
        Target::Pascha => date_for(settings, settings.request, year),
        Target::Feast(feast) => {
            let request = Request {
                feast: Some(feast),
                ..settings.request
            };
            date_for(settings, request, year)
        }
        Target::DaysUntil => {
            let mut days = days_until(year, method, today, Calendar::Gregorian)?;
            if settings.year.is_none() && days.is_past() {
                debug!(days = days.get(), "Pascha has passed; counting to next year");
                days = days_until(year + 1, method, today, Calendar::Gregorian)?;
            }
            Ok(days.to_string())
        }
        Target::WeeksBetween => {
            Ok(weeks_between(year, Method::Julian, Method::Gregorian)?.to_string())
        }
    }
}

fn date_for(settings: &Settings, request: Request, year: i64) -> Result<String, ComputusError> {
    let date = calculate(&request, year)?;
    Ok(format_date(date, &settings.format))
}
