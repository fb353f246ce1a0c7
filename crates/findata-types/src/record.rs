//! Normalized time-series records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DateLabel;

/// A daily closing rate of a currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyHistoryPoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Closing exchange rate.
    pub close: f64,
}

impl CurrencyHistoryPoint {
    /// Creates a new currency history point.
    #[must_use]
    pub const fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A daily OHLCV bar of an equity or index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityHistoryPoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl EquityHistoryPoint {
    /// Creates a new equity history point.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// An observation of a price index such as consumer prices.
///
/// The period granularity is provider specific (`2024-03` for monthly data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceIndexPoint {
    /// Observation period label.
    pub period: DateLabel,
    /// Index value.
    pub value: f64,
}

impl PriceIndexPoint {
    /// Creates a new price index point.
    #[must_use]
    pub const fn new(period: DateLabel, value: f64) -> Self {
        Self { period, value }
    }

    /// Returns the first day of a monthly (`YYYY-MM`) period.
    #[must_use]
    pub fn month_start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.period), "%Y-%m-%d").ok()
    }
}

/// A yearly value of an economic indicator (GDP, unemployment, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicDataPoint {
    /// Year label, taken from the provider's object key.
    pub year: DateLabel,
    /// Indicator value.
    pub value: f64,
}

impl EconomicDataPoint {
    /// Creates a new economic data point.
    #[must_use]
    pub const fn new(year: DateLabel, value: f64) -> Self {
        Self { year, value }
    }

    /// Returns the year as a number, if the label is numeric.
    #[must_use]
    pub fn year_number(&self) -> Option<i32> {
        self.year.as_str().parse().ok()
    }
}

/// An interest rate observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRatePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Rate in percent.
    pub value: f64,
}

impl InterestRatePoint {
    /// Creates a new interest rate point.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Identifiers scraped from a reference page, in document order.
///
/// Entries are never empty, and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerList(Vec<String>);

impl TickerList {
    /// Creates a ticker list, dropping empty entries.
    #[must_use]
    pub fn new(tickers: Vec<String>) -> Self {
        let mut tickers = tickers;
        tickers.retain(|t| !t.is_empty());
        Self(tickers)
    }

    /// Returns the number of tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no tickers were scraped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the tickers.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns the tickers as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, returning the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl IntoIterator for TickerList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TickerList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for TickerList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A member of a stock index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    /// Company name.
    pub name: String,
    /// Exchange ticker.
    pub ticker: String,
}

impl Constituent {
    /// Creates a new constituent.
    #[must_use]
    pub fn new(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_start() {
        let point = PriceIndexPoint::new(DateLabel::new("2024-03").unwrap(), 131.2);
        assert_eq!(
            point.month_start(),
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );

        let annual = PriceIndexPoint::new(DateLabel::new("2024").unwrap(), 1.0);
        assert_eq!(annual.month_start(), None);
    }

    #[test]
    fn test_year_number() {
        let point = EconomicDataPoint::new(DateLabel::new("2019").unwrap(), 2.3);
        assert_eq!(point.year_number(), Some(2019));
    }

    #[test]
    fn test_ticker_list_drops_empty_keeps_duplicates() {
        let list: TickerList = ["AAPL", "", "MSFT", "AAPL"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice(), ["AAPL", "MSFT", "AAPL"]);
    }

    #[test]
    fn test_equity_range() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bar = EquityHistoryPoint::new(date, 10.0, 12.5, 9.5, 11.0, 1000.0);
        assert!((bar.range() - 3.0).abs() < f64::EPSILON);
    }
}
