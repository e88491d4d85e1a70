use chrono::{Duration, NaiveDate};

/// Time windows offered by the progress views. Each range resolves to a
/// cutoff date relative to an explicit reference day, never ambient "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    ThreeMonths,
    SixMonths,
    Year,
}

impl TimeRange {
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeRange::Week => "7 Days",
            TimeRange::Month => "30 Days",
            TimeRange::ThreeMonths => "3 Months",
            TimeRange::SixMonths => "6 Months",
            TimeRange::Year => "1 Year",
        }
    }

    fn days_back(&self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::ThreeMonths => 91,
            TimeRange::SixMonths => 182,
            TimeRange::Year => 365,
        }
    }

    /// Inclusive start of the window ending at `today`.
    pub fn start_from(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days_back())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_from_week() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        assert_eq!(
            TimeRange::Week.start_from(today),
            NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()
        );
    }

    #[test]
    fn test_start_from_year_crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(
            TimeRange::Year.start_from(today),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}
