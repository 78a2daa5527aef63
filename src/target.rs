//! Requested results and the order they are printed in.

use pascha_computus::Feast;

use crate::cli::Cli;

/// One line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Pascha,
    DaysUntil,
    WeeksBetween,
    Feast(Feast),
}

impl Target {
    /// Human-readable name, used when labels are enabled.
    pub fn label(self, easter: bool) -> String {
        let pascha = if easter { "Easter" } else { "Pascha" };
        match self {
            Target::Pascha => pascha.to_string(),
            Target::DaysUntil => format!("Days until {pascha}"),
            Target::WeeksBetween => "Weeks between calendars".to_string(),
            Target::Feast(feast) => feast.to_string(),
        }
    }
}

/// Collects the requested targets in output order.
///
/// Pascha comes first unless suppressed; with `--chronological` it is moved
/// between the pre-Paschal and post-Paschal feasts instead.
pub fn ordered_targets(cli: &Cli) -> Vec<Target> {
    let pre_paschal = [
        (cli.meatfare, Feast::Meatfare),
        (cli.cheesefare, Feast::Cheesefare),
        (cli.ash_wednesday, Feast::AshWednesday),
    ];
    let post_paschal = [
        (cli.midfeast, Feast::MidfeastPentecost),
        (cli.leavetaking, Feast::LeavetakingPascha),
        (cli.ascension, Feast::Ascension),
        (cli.pentecost, Feast::Pentecost),
    ];
    let selected = |feasts: &[(bool, Feast)]| -> Vec<Target> {
        feasts
            .iter()
            .filter(|(on, _)| *on)
            .map(|&(_, feast)| Target::Feast(feast))
            .collect()
    };

    let mut targets = Vec::new();
    if !cli.no_pascha && !cli.chronological {
        targets.push(Target::Pascha);
    }
    if cli.days_until {
        targets.push(Target::DaysUntil);
    }
    if cli.weeks_between {
        targets.push(Target::WeeksBetween);
    }
    targets.extend(selected(&pre_paschal));
    if cli.chronological {
        targets.push(Target::Pascha);
    }
    targets.extend(selected(&post_paschal));
    targets
}
