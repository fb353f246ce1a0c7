//! Relative history windows and their calendar resolution.

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use crate::DateRange;

/// A relative historical window selected by a short label.
///
/// Unrecognized labels fall back to [`Period::Trailing30Days`] rather than
/// failing, so parsing is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Period {
    /// One day back (`1D`).
    #[serde(rename = "1D")]
    OneDay,
    /// One calendar month back (`1M`).
    #[serde(rename = "1M")]
    OneMonth,
    /// Three calendar months back (`3M`).
    #[serde(rename = "3M")]
    ThreeMonths,
    /// Since January 1st of the current year (`YTD`).
    #[serde(rename = "YTD")]
    YearToDate,
    /// One calendar year back (`1Y`).
    #[serde(rename = "1Y")]
    OneYear,
    /// Thirty days back, used for any other label.
    #[default]
    #[serde(rename = "30D")]
    Trailing30Days,
}

impl Period {
    /// Maps a label to a period; unknown labels yield [`Self::Trailing30Days`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "1D" => Self::OneDay,
            "1M" => Self::OneMonth,
            "3M" => Self::ThreeMonths,
            "YTD" => Self::YearToDate,
            "1Y" => Self::OneYear,
            _ => Self::Trailing30Days,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::YearToDate => "YTD",
            Self::OneYear => "1Y",
            Self::Trailing30Days => "30D",
        }
    }

    /// Returns the labels with a dedicated window.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneDay,
            Self::OneMonth,
            Self::ThreeMonths,
            Self::YearToDate,
            Self::OneYear,
        ]
    }

    /// Resolves the first day of the window ending on `today`.
    ///
    /// Month and year steps clamp to the last valid day of the target month
    /// (`2024-03-31` minus one month is `2024-02-29`). The result is always
    /// strictly before `today`: `YTD` evaluated on January 1st reaches back to
    /// December 31st.
    #[must_use]
    pub fn start_for(&self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Self::OneDay => today.checked_sub_days(Days::new(1)),
            Self::OneMonth => today.checked_sub_months(Months::new(1)),
            Self::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Self::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1)
                .filter(|jan1| *jan1 < today)
                .or_else(|| today.checked_sub_days(Days::new(1))),
            Self::OneYear => today.checked_sub_months(Months::new(12)),
            Self::Trailing30Days => today.checked_sub_days(Days::new(30)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    /// Resolves the window ending on `today`.
    #[must_use]
    pub fn range_ending(&self, today: NaiveDate) -> DateRange {
        DateRange {
            start: self.start_for(today),
            end: today,
        }
    }

    /// Resolves the window ending on the current local date.
    #[must_use]
    pub fn range_ending_today(&self) -> DateRange {
        self.range_ending(Local::now().date_naive())
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}
