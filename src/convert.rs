//! Pure conversion functions: CLI flags + TOML config -> run settings.

use anyhow::{Result, bail};
use pascha_computus::{Calendar, Era, Method, Request};

use crate::cli::Cli;
use crate::config::PaschaConfig;
use crate::output::DateFormat;
use crate::target::{Target, ordered_targets};

/// Everything a run needs once flags and config file have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base request; the feast slot is filled per target.
    pub request: Request,
    /// Year given on the command line, if any.
    pub year: Option<i64>,
    pub targets: Vec<Target>,
    pub format: DateFormat,
    pub labels: bool,
    pub easter: bool,
}

/// Parses a Computus method name.
pub fn parse_method(s: &str) -> Result<Method> {
    match s.to_lowercase().as_str() {
        "julian" => Ok(Method::Julian),
        "gregorian" => Ok(Method::Gregorian),
        other => bail!("unknown method: {other:?}"),
    }
}

/// Parses an output calendar name. `"native"` maps to `None`.
pub fn parse_calendar(s: &str) -> Result<Option<Calendar>> {
    match s.to_lowercase().as_str() {
        "native" => Ok(None),
        "julian" => Ok(Some(Calendar::Julian)),
        "gregorian" => Ok(Some(Calendar::Gregorian)),
        "revised-julian" | "revised_julian" => Ok(Some(Calendar::RevisedJulian)),
        other => bail!("unknown calendar: {other:?}"),
    }
}

fn cli_method(cli: &Cli) -> Option<Method> {
    if cli.julian {
        Some(Method::Julian)
    } else if cli.gregorian {
        Some(Method::Gregorian)
    } else {
        None
    }
}

fn cli_calendar(cli: &Cli) -> Option<Calendar> {
    if cli.julian_calendar {
        Some(Calendar::Julian)
    } else if cli.revised_julian_calendar {
        Some(Calendar::RevisedJulian)
    } else if cli.gregorian_calendar {
        Some(Calendar::Gregorian)
    } else {
        None
    }
}

/// Merges command-line flags over the config file.
///
/// Config values are validated even when a flag overrides them, so a broken
/// config file never goes unnoticed.
pub fn build_settings(cli: &Cli, config: &PaschaConfig) -> Result<Settings> {
    let config_method = parse_method(&config.method)?;
    let config_calendar = parse_calendar(&config.calendar)?;

    let method = cli_method(cli).unwrap_or(config_method);
    let calendar = cli_calendar(cli).or(config_calendar);
    let era = if cli.byzantine || config.byzantine {
        Era::AnnoMundi
    } else {
        Era::AnnoDomini
    };

    let separator = cli
        .separator
        .clone()
        .unwrap_or_else(|| config.output.separator.clone());
    let suppress_year = cli.suppress_year || config.output.suppress_year;

    Ok(Settings {
        request: Request {
            method,
            feast: None,
            calendar,
            era,
        },
        year: cli.year,
        targets: ordered_targets(cli),
        format: DateFormat {
            separator,
            show_year: cli.year.is_some() && !suppress_year,
        },
        labels: cli.labels || config.output.labels,
        easter: cli.easter || config.output.easter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["pascha"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parse_method_names() {
        assert_eq!(parse_method("julian").unwrap(), Method::Julian);
        assert_eq!(parse_method("Gregorian").unwrap(), Method::Gregorian);
        assert!(parse_method("coptic").is_err());
    }

    #[test]
    fn parse_calendar_names() {
        assert_eq!(parse_calendar("native").unwrap(), None);
        assert_eq!(parse_calendar("JULIAN").unwrap(), Some(Calendar::Julian));
        assert_eq!(
            parse_calendar("revised-julian").unwrap(),
            Some(Calendar::RevisedJulian)
        );
        assert!(parse_calendar("hebrew").is_err());
    }

    #[test]
    fn defaults() {
        let settings = build_settings(&cli(&[]), &PaschaConfig::default()).unwrap();
        assert_eq!(settings.request, Request::default());
        assert_eq!(settings.year, None);
        assert_eq!(settings.targets, vec![Target::Pascha]);
        assert_eq!(settings.format.separator, "-");
        assert!(!settings.format.show_year);
        assert!(!settings.labels);
        assert!(!settings.easter);
    }

    #[test]
    fn year_shown_only_when_given() {
        let config = PaschaConfig::default();
        assert!(build_settings(&cli(&["-y", "2024"]), &config).unwrap().format.show_year);
        assert!(
            !build_settings(&cli(&["-y", "2024", "-s"]), &config)
                .unwrap()
                .format
                .show_year
        );
    }

    #[test]
    fn flags_override_config() {
        let mut config = PaschaConfig::default();
        config.method = "gregorian".into();
        config.calendar = "julian".into();
        config.output.separator = "/".into();

        let settings = build_settings(&cli(&["-j", "-G", "-S", "."]), &config).unwrap();
        assert_eq!(settings.request.method, Method::Julian);
        assert_eq!(settings.request.calendar, Some(Calendar::Gregorian));
        assert_eq!(settings.format.separator, ".");

        let settings = build_settings(&cli(&[]), &config).unwrap();
        assert_eq!(settings.request.method, Method::Gregorian);
        assert_eq!(settings.request.calendar, Some(Calendar::Julian));
        assert_eq!(settings.format.separator, "/");
    }

    #[test]
    fn boolean_options_combine() {
        let mut config = PaschaConfig::default();
        config.byzantine = true;
        config.output.labels = true;

        let settings = build_settings(&cli(&["-E"]), &config).unwrap();
        assert_eq!(settings.request.era, Era::AnnoMundi);
        assert!(settings.labels);
        assert!(settings.easter);
    }

    #[test]
    fn invalid_config_is_reported() {
        let mut config = PaschaConfig::default();
        config.calendar = "lunar".into();
        let err = build_settings(&cli(&["-G"]), &config).unwrap_err();
        assert!(err.to_string().contains("unknown calendar"));
    }
}
