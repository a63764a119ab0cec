use chrono::{Days, Local, NaiveDate};

/// Number of pickup dates offered: today plus the following three days.
pub const PICKUP_OPTION_COUNT: u64 = 4;

const PICKUP_DATE_FORMAT: &str = "%a %b %-d";

/// Source of "today" for computing pickup options.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Formatted pickup dates starting at `today`.
///
/// Always returns [`PICKUP_OPTION_COUNT`] entries; dates past
/// [`NaiveDate::MAX`] saturate to it.
pub fn pickup_options(today: NaiveDate) -> Vec<String> {
    (0..PICKUP_OPTION_COUNT)
        .map(|offset| {
            today
                .checked_add_days(Days::new(offset))
                .unwrap_or(NaiveDate::MAX)
        })
        .map(|date| date.format(PICKUP_DATE_FORMAT).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_consecutive_days_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        assert_eq!(
            pickup_options(today),
            vec!["Tue Feb 27", "Wed Feb 28", "Thu Feb 29", "Fri Mar 1"]
        );
    }

    #[test]
    fn crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        let options = pickup_options(today);
        assert_eq!(options.first().map(String::as_str), Some("Sat Dec 30"));
        assert_eq!(options.last().map(String::as_str), Some("Tue Jan 2"));
    }

    #[test]
    fn saturates_at_last_representable_date() {
        let options = pickup_options(NaiveDate::MAX);
        assert_eq!(options.len() as u64, PICKUP_OPTION_COUNT);
        assert!(options.iter().all(|option| option == &options[0]));
    }
}
