use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Pascha (Easter) date calculator.
#[derive(Debug, Parser)]
#[command(
    name = "pascha",
    version,
    about = "Pascha (Easter) date calculator",
    group(ArgGroup::new("method").args(["julian", "gregorian"])),
    group(ArgGroup::new("output").args(["julian_calendar", "revised_julian_calendar", "gregorian_calendar"]))
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./pascha.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Year to calculate for (default: the current year).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Use the Julian Computus (Eastern reckoning).
    #[arg(short = 'j', long)]
    pub julian: bool,

    /// Use the Gregorian Computus (Western reckoning).
    #[arg(short = 'g', long)]
    pub gregorian: bool,

    /// Show dates in the Julian calendar.
    #[arg(short = 'J', long)]
    pub julian_calendar: bool,

    /// Show dates in the Revised Julian calendar.
    #[arg(short = 'R', long)]
    pub revised_julian_calendar: bool,

    /// Show dates in the Gregorian calendar.
    #[arg(short = 'G', long)]
    pub gregorian_calendar: bool,

    /// Number years from creation (Byzantine Anno Mundi).
    #[arg(short, long)]
    pub byzantine: bool,

    /// Never print the year.
    #[arg(short, long)]
    pub suppress_year: bool,

    /// Separator between date fields.
    #[arg(short = 'S', long)]
    pub separator: Option<String>,

    /// Prefix each result with its name.
    #[arg(short = 'L', long)]
    pub labels: bool,

    /// Name the feast "Easter" instead of "Pascha" in labels.
    #[arg(short = 'E', long)]
    pub easter: bool,

    /// Print the number of days until Pascha.
    #[arg(short = 'd', long)]
    pub days_until: bool,

    /// Print the number of weeks between the Julian and Gregorian Paschas.
    #[arg(short = 'D', long)]
    pub weeks_between: bool,

    /// Print Meatfare Sunday.
    #[arg(short = 'm', long)]
    pub meatfare: bool,

    /// Print Cheesefare Sunday.
    #[arg(short = 'c', long)]
    pub cheesefare: bool,

    /// Print Ash Wednesday.
    #[arg(short = 'a', long)]
    pub ash_wednesday: bool,

    /// Print Midfeast of Pentecost.
    #[arg(short = 'M', long)]
    pub midfeast: bool,

    /// Print the Leavetaking of Pascha.
    #[arg(short = 'l', long)]
    pub leavetaking: bool,

    /// Print Ascension.
    #[arg(short = 'A', long)]
    pub ascension: bool,

    /// Print Pentecost.
    #[arg(short = 'p', long)]
    pub pentecost: bool,

    /// Do not print Pascha itself.
    #[arg(short = 'x', long)]
    pub no_pascha: bool,

    /// Print Pascha in date order among the requested feasts.
    #[arg(short = 'X', long)]
    pub chronological: bool,
}
