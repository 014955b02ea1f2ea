//! Calendar month that scopes income and expense records

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar period identifier (year + month), e.g. "2025-01"
///
/// Serialized as its `YYYY-MM` string so it can also name snapshot files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-friendly label, e.g. "January 2025"
    pub fn label(&self) -> String {
        self.start_date().format("%B %Y").to_string()
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }

    /// Parse an optional month argument, falling back to the current month
    pub fn parse_or_current(s: Option<&str>) -> Result<Self, PeriodParseError> {
        match s {
            Some(s) => Self::parse(s),
            None => Ok(Self::current()),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvalidYear(y) => write!(f, "Invalid year: {}", y),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_bounds() {
        let feb = ym(2024, 2);
        assert_eq!(feb.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(ym(2025, 12).start_date(), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
    }

    #[test]
    fn test_navigation() {
        assert_eq!(ym(2025, 1).next(), ym(2025, 2));
        assert_eq!(ym(2024, 12).next(), ym(2025, 1));
    }

    #[test]
    fn test_parse() {
        assert_eq!(YearMonth::parse("2025-01").unwrap(), ym(2025, 1));
        assert_eq!(YearMonth::parse(" 2025-7 ").unwrap(), ym(2025, 7));
        assert_eq!(
            YearMonth::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(matches!(
            YearMonth::parse("January"),
            Err(PeriodParseError::InvalidFormat(_))
        ));
        assert!(YearMonth::parse("25-01").is_err());
    }

    #[test]
    fn test_display_and_label() {
        assert_eq!(ym(2025, 3).to_string(), "2025-03");
        assert_eq!(ym(2025, 3).label(), "March 2025");
    }

    #[test]
    fn test_ordering() {
        assert!(ym(2024, 12) < ym(2025, 1));
        assert!(ym(2025, 2) > ym(2025, 1));
    }

    #[test]
    fn test_serialization() {
        let month = ym(2025, 1);
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2025-01\"");

        let deserialized: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
        assert!(serde_json::from_str::<YearMonth>("\"2025-00\"").is_err());
    }
}
