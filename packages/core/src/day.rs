// ABOUTME: Calendar day value used to anchor tasks to a review bucket
// ABOUTME: Always formatted as YYYY-MM-DD so string order matches calendar order

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid day '{0}', expected YYYY-MM-DD")]
pub struct DayParseError(pub String);

/// A calendar date with no time or timezone component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Day(NaiveDate);

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The UTC calendar date of an instant.
    pub fn of(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for Day {
    type Err = DayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields, the stored form must not contain them
        if s.len() != 10 {
            return Err(DayParseError(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DAY_FORMAT)
            .map(Self)
            .map_err(|_| DayParseError(s.to_string()))
    }
}

impl TryFrom<String> for Day {
    type Error = DayParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.to_string()
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn test_display_is_zero_padded() {
        let day = Day::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(day.to_string(), "2024-01-03");
    }

    #[rstest]
    #[case("2024-01-01")]
    #[case("1999-12-31")]
    #[case("2024-02-29")]
    fn test_parse_valid(#[case] input: &str) {
        let day: Day = input.parse().unwrap();
        assert_eq!(day.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("2024-1-3")]
    #[case("2023-02-29")]
    #[case("2024-01-03T00:00:00Z")]
    #[case("yesterday")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(input.parse::<Day>().is_err());
    }

    #[test]
    fn test_of_uses_utc_date() {
        let late = Utc.with_ymd_and_hms(2024, 1, 3, 23, 59, 59).unwrap();
        assert_eq!(Day::of(late).to_string(), "2024-01-03");
    }

    #[test]
    fn test_string_order_matches_calendar_order() {
        let a: Day = "2024-01-09".parse().unwrap();
        let b: Day = "2024-01-10".parse().unwrap();
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let day: Day = "2024-01-05".parse().unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2024-01-05\"");

        let back: Day = serde_json::from_str("\"2024-01-05\"").unwrap();
        assert_eq!(back, day);
        assert!(serde_json::from_str::<Day>("\"05/01/2024\"").is_err());
    }
}
