//! Date and year ranges for data retrieval.

use chrono::NaiveDate;

use crate::DateRangeError;

/// A range of dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Formats the start date as `YYYY-MM-DD`.
    #[must_use]
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// Formats the end date as `YYYY-MM-DD`.
    #[must_use]
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// An inclusive span of calendar years, as used by annual macro series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    start: i32,
    end: i32,
}

impl YearSpan {
    /// Creates a new year span, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: i32, end: i32) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidYears { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a span from two year strings such as `"2015"` and `"2024"`.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a year or start > end.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Self::new(parse_year(start)?, parse_year(end)?)
    }

    /// First year (inclusive).
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Last year (inclusive).
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Returns an iterator over every year in the span.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    /// Joins every year with commas (`2019,2020,2021`).
    #[must_use]
    pub fn to_csv(&self) -> String {
        self.years()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for YearSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn parse_year(s: &str) -> Result<i32, DateRangeError> {
    let trimmed = s.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateRangeError::InvalidYear(s.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| DateRangeError::InvalidYear(s.to_string()))
}
