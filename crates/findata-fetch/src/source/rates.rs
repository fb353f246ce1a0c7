//! Benchmark interest rates from FRED.

use findata_catalog::{CodeTable, Country};
use findata_types::{InterestRatePoint, Result, YearSpan};
use serde_json::Value;
use tracing::info;

use super::DataClient;
use crate::json::{
    ElementError, FromElement, array_at, collect_elements, field_date, field_quoted_number,
};
use crate::url::interest_rate_url;

impl FromElement for InterestRatePoint {
    fn from_element(element: &Value) -> std::result::Result<Self, ElementError> {
        Ok(Self::new(
            field_date(element, "date")?,
            field_quoted_number(element, "value")?,
        ))
    }
}

/// Projects a FRED observations body.
///
/// Values are quoted strings; FRED's `.` placeholder for a missing
/// observation converts to `0.0`.
///
/// # Errors
///
/// Returns [`findata_types::FindataError::StructuralMissing`] if the
/// `observations` array is absent.
pub fn parse_interest_rates(root: &Value) -> Result<Vec<InterestRatePoint>> {
    Ok(collect_elements("interest rate", array_at(root, &["observations"])?))
}

impl DataClient {
    /// Fetches the benchmark rate series for a country.
    ///
    /// # Errors
    ///
    /// Fails with [`findata_types::FindataError::Mapping`] before any request
    /// if the country has no known series.
    pub async fn interest_rate(
        &self,
        country: &str,
        years: YearSpan,
    ) -> Result<Vec<InterestRatePoint>> {
        let country = Country::from_label(country)?;
        let series = country.fred_series();
        let url = interest_rate_url(&self.endpoints.fred, series, &years, &self.keys.fred);

        let root = self.get_json(&url, &[]).await?;
        let points = parse_interest_rates(&root)?;

        info!(%country, series, %years, count = points.len(), "Fetched interest rates");
        Ok(points)
    }
}
