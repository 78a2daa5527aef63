//! Feasts observed at a fixed distance from Pascha.

use std::fmt;

/// A movable feast defined by its day offset from Pascha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feast {
    /// Sunday of the Last Judgment.
    Meatfare,
    /// Forgiveness Sunday.
    Cheesefare,
    AshWednesday,
    MidfeastPentecost,
    LeavetakingPascha,
    Ascension,
    Pentecost,
}

impl Feast {
    /// All feasts in calendar order.
    pub const ALL: [Feast; 7] = [
        Feast::Meatfare,
        Feast::Cheesefare,
        Feast::AshWednesday,
        Feast::MidfeastPentecost,
        Feast::LeavetakingPascha,
        Feast::Ascension,
        Feast::Pentecost,
    ];

    /// Signed number of days from Pascha to this feast.
    pub fn offset_days(self) -> i64 {
        match self {
            Feast::Meatfare => -56,
            Feast::Cheesefare => -49,
            Feast::AshWednesday => -46,
            Feast::MidfeastPentecost => 25,
            Feast::LeavetakingPascha => 39,
            Feast::Ascension => 39,
            Feast::Pentecost => 49,
        }
    }

    /// Returns `true` for feasts that fall before Pascha.
    pub fn precedes_pascha(self) -> bool {
        self.offset_days() < 0
    }
}

impl fmt::Display for Feast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feast::Meatfare => "Meatfare",
            Feast::Cheesefare => "Cheesefare",
            Feast::AshWednesday => "Ash Wednesday",
            Feast::MidfeastPentecost => "Midfeast of Pentecost",
            Feast::LeavetakingPascha => "Leavetaking of Pascha",
            Feast::Ascension => "Ascension",
            Feast::Pentecost => "Pentecost",
        };
        f.write_str(name)
    }
}
