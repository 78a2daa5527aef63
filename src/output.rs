//! Result formatting.

use pascha_computus::CivilDate;

/// How dates are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    /// Separator between month, day and year.
    pub separator: String,
    /// Append the year after the day.
    pub show_year: bool,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            show_year: true,
        }
    }
}

/// Formats `date` as `MM<sep>DD[<sep>YYYY]`.
pub fn format_date(date: CivilDate, format: &DateFormat) -> String {
    let sep = &format.separator;
    let mut out = format!("{:02}{sep}{:02}", date.month(), date.day());
    if format.show_year {
        out.push_str(sep);
        out.push_str(&date.year().to_string());
    }
    out
}

/// Prefixes `value` with `label` when labels are on.
pub fn format_line(label: Option<&str>, value: &str) -> String {
    match label {
        Some(label) => format!("{label}: {value}"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascha_computus::Calendar;

    fn date(y: i64, m: u8, d: u8) -> CivilDate {
        CivilDate::new(Calendar::Gregorian, y, m, d).unwrap()
    }

    #[test]
    fn default_format() {
        assert_eq!(
            format_date(date(2024, 5, 5), &DateFormat::default()),
            "05-05-2024"
        );
    }

    #[test]
    fn without_year() {
        let format = DateFormat {
            show_year: false,
            ..DateFormat::default()
        };
        assert_eq!(format_date(date(2024, 3, 31), &format), "03-31");
    }

    #[test]
    fn custom_separator() {
        let format = DateFormat {
            separator: "/".to_string(),
            show_year: true,
        };
        assert_eq!(format_date(date(7532, 4, 9), &format), "04/09/7532");
    }

    #[test]
    fn negative_year() {
        assert_eq!(
            format_date(date(-44, 3, 15), &DateFormat::default()),
            "03-15--44"
        );
    }

    #[test]
    fn lines() {
        assert_eq!(format_line(Some("Pascha"), "05-05"), "Pascha: 05-05");
        assert_eq!(format_line(None, "5"), "5");
    }
}
