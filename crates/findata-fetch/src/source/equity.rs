//! Daily equity and index price history.

use findata_catalog::{CodeTable, StockIndex};
use findata_types::{EquityHistoryPoint, Period, Result};
use serde_json::Value;
use tracing::info;

use super::DataClient;
use crate::json::{
    ElementError, FromElement, collect_elements, field_date, field_number, root_array,
};
use crate::url::equity_history_url;

impl FromElement for EquityHistoryPoint {
    fn from_element(element: &Value) -> std::result::Result<Self, ElementError> {
        Ok(Self::new(
            field_date(element, "date")?,
            field_number(element, "open")?,
            field_number(element, "high")?,
            field_number(element, "low")?,
            field_number(element, "close")?,
            field_number(element, "volume")?,
        ))
    }
}

/// Projects an end-of-day equity history body.
///
/// Elements missing any of the six fields are skipped.
///
/// # Errors
///
/// Returns [`findata_types::FindataError::StructuralMissing`] if the body is
/// not an array.
pub fn parse_equity_history(root: &Value) -> Result<Vec<EquityHistoryPoint>> {
    Ok(collect_elements("equity history", root_array(root)?))
}

/// Resolves an index display name to its ticker; anything else is taken as
/// a ticker already.
fn resolve_symbol(symbol: &str) -> &str {
    StockIndex::code_for(symbol).unwrap_or(symbol)
}

impl DataClient {
    /// Fetches daily OHLCV bars for a ticker or index display name.
    ///
    /// # Errors
    ///
    /// Fails with [`findata_types::FindataError::EmptyBody`] if the provider
    /// returns nothing, and with a parse or structural error on a malformed
    /// body.
    pub async fn equity_history(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<Vec<EquityHistoryPoint>> {
        let ticker = resolve_symbol(symbol.trim());
        let range = period.range_ending_today();
        let url = equity_history_url(&self.endpoints.eodhd, ticker, &range, &self.keys.eodhd);

        let root = self.get_json(&url, &[]).await?;
        let points = parse_equity_history(&root)?;

        info!(ticker, %period, %range, count = points.len(), "Fetched equity history");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_resolve_symbol() {
        assert_eq!(resolve_symbol("S&P 500"), "^GSPC");
        assert_eq!(resolve_symbol("dow"), "^DJI");
        assert_eq!(resolve_symbol("Nasdaq 100"), "NQ=F");
        assert_eq!(resolve_symbol("AAPL.US"), "AAPL.US");
    }

    #[test]
    fn test_parse_equity_history() {
        let root = json!([
            {"date": "2024-03-01", "open": 180.0, "high": 182.5, "low": 179.1,
             "close": 181.9, "adjusted_close": 181.9, "volume": 52_000_000},
            {"date": "2024-03-04", "open": "176.1", "high": 176.9, "low": 173.8,
             "close": 175.1, "volume": 81_000_000}
        ]);
        let points = parse_equity_history(&root).unwrap();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].high, 182.5);
        assert_relative_eq!(points[1].open, 176.1);
        assert_relative_eq!(points[1].volume, 81_000_000.0);
    }

    #[test]
    fn test_parse_equity_history_skips_incomplete_bars() {
        let root = json!([
            {"date": "2024-03-01", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5},
            {"date": "2024-03-04", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 10}
        ]);
        let points = parse_equity_history(&root).unwrap();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].volume, 10.0);
    }
}
