//! Currency spot quotes and exchange-rate history.

use findata_catalog::{CodeTable, Currency, CurrencyPair};
use findata_types::{CurrencyHistoryPoint, FindataError, Period, Result};
use serde_json::Value;
use tracing::info;

use super::DataClient;
use crate::json::{
    ElementError, FromElement, array_at, collect_elements, field_date, field_number, root_array,
};
use crate::url::{currency_history_url, quote_url};

impl FromElement for CurrencyHistoryPoint {
    fn from_element(element: &Value) -> std::result::Result<Self, ElementError> {
        Ok(Self::new(
            field_date(element, "date")?,
            field_number(element, "close")?,
        ))
    }
}

/// Reads the spot price from a quote response and converts `amount`.
///
/// # Errors
///
/// Returns [`FindataError::StructuralMissing`] if the result array is empty
/// or the first result has no `regularMarketPrice` given as a number or a
/// quoted number.
pub fn parse_quote(root: &Value, amount: f64) -> Result<f64> {
    let first = array_at(root, &["quoteResponse", "result"])?
        .first()
        .ok_or_else(|| FindataError::missing("quoteResponse.result[0]"))?;
    let price = field_number(first, "regularMarketPrice")
        .map_err(|_| FindataError::missing("quoteResponse.result[0].regularMarketPrice"))?;
    Ok(price * amount)
}

/// Projects an end-of-day currency history body.
///
/// # Errors
///
/// Returns [`FindataError::StructuralMissing`] if the body is not an array.
pub fn parse_currency_history(root: &Value) -> Result<Vec<CurrencyHistoryPoint>> {
    Ok(collect_elements("currency history", root_array(root)?))
}

impl DataClient {
    /// Converts `amount` of `from` into `to` at the current spot rate.
    ///
    /// # Errors
    ///
    /// Fails with [`FindataError::Mapping`] before any request if either
    /// currency is unsupported, and with [`FindataError::StructuralMissing`]
    /// if the provider returns no price.
    pub async fn quote(&self, from: &str, to: &str, amount: f64) -> Result<f64> {
        let pair = CurrencyPair::new(Currency::from_label(from)?, Currency::from_label(to)?);
        let url = quote_url(&self.endpoints.yfapi, &pair.compact());

        let root = self
            .get_json(&url, &[("X-API-KEY", self.keys.yfapi.as_str())])
            .await?;
        let converted = parse_quote(&root, amount)?;

        info!(%pair, amount, converted, "Converted currency");
        Ok(converted)
    }

    /// Fetches daily closing rates for a currency pair, newest first.
    ///
    /// # Errors
    ///
    /// Fails with [`FindataError::Mapping`] before any request if either
    /// currency is unsupported.
    pub async fn currency_history(
        &self,
        from: &str,
        to: &str,
        period: Period,
    ) -> Result<Vec<CurrencyHistoryPoint>> {
        let pair = CurrencyPair::new(Currency::from_label(from)?, Currency::from_label(to)?);
        let range = period.range_ending_today();
        let url = currency_history_url(
            &self.endpoints.eodhd,
            &pair.forex_ticker(),
            &range,
            &self.keys.eodhd,
        );

        let root = self.get_json(&url, &[]).await?;
        let points = parse_currency_history(&root)?;

        info!(%pair, %period, %range, count = points.len(), "Fetched currency history");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_parse_quote() {
        let root = json!({"quoteResponse": {"result": [{"regularMarketPrice": 1.08}]}});
        assert_relative_eq!(parse_quote(&root, 100.0).unwrap(), 108.0);
    }

    #[test]
    fn test_parse_quote_accepts_quoted_price() {
        let root = json!({"quoteResponse": {"result": [{"regularMarketPrice": "1.08"}]}});
        assert_relative_eq!(parse_quote(&root, 100.0).unwrap(), 108.0);
    }

    #[test]
    fn test_parse_quote_empty_result() {
        let root = json!({"quoteResponse": {"result": []}});
        assert!(matches!(
            parse_quote(&root, 1.0),
            Err(FindataError::StructuralMissing { .. })
        ));
    }

    #[test]
    fn test_parse_quote_missing_price() {
        let root = json!({"quoteResponse": {"result": [{"symbol": "EURUSD=X"}]}});
        assert!(parse_quote(&root, 1.0).is_err());

        let root = json!({"quoteResponse": {"result": [{"regularMarketPrice": [1.08]}]}});
        assert!(matches!(
            parse_quote(&root, 1.0),
            Err(FindataError::StructuralMissing { .. })
        ));

        let root = json!({"quoteResponse": {"error": "bad symbol"}});
        assert!(parse_quote(&root, 1.0).is_err());
    }

    #[test]
    fn test_parse_currency_history_keeps_order() {
        let root = json!([
            {"date": "2024-03-05", "close": 1.0855},
            {"date": "2024-03-04", "close": 1.0852},
            {"date": "2024-03-01", "close": 1.0838}
        ]);
        let points = parse_currency_history(&root).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_relative_eq!(points[2].close, 1.0838);
    }

    #[test]
    fn test_parse_currency_history_skips_missing_close() {
        let root = json!([
            {"date": "2024-03-05", "close": 1.0855},
            {"date": "2024-03-04"},
            {"date": "2024-03-01", "close": 1.0838},
            {"close": 1.0801}
        ]);
        let points = parse_currency_history(&root).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_currency_history_rejects_object() {
        let root = json!({"error": "Unauthenticated"});
        assert!(matches!(
            parse_currency_history(&root),
            Err(FindataError::StructuralMissing { .. })
        ));
    }
}
