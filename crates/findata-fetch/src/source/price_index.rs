//! Monthly price indices from the IMF International Financial Statistics.

use findata_catalog::{CONSUMER_PRICE_INDEX, CodeTable, Country};
use findata_types::{PriceIndexPoint, Result, YearSpan};
use serde_json::Value;
use tracing::info;

use super::DataClient;
use crate::json::{
    ElementError, FromElement, collect_elements, field_label, field_quoted_number, node_at,
};
use crate::url::price_index_url;

const OBSERVATIONS: &[&str] = &["CompactData", "DataSet", "Series", "Obs"];

impl FromElement for PriceIndexPoint {
    fn from_element(element: &Value) -> std::result::Result<Self, ElementError> {
        Ok(Self::new(
            field_label(element, "@TIME_PERIOD")?,
            field_quoted_number(element, "@OBS_VALUE")?,
        ))
    }
}

/// Projects a CompactData body into observations.
///
/// A series with a single observation carries `Obs` as an object rather
/// than an array; both shapes are accepted.
///
/// # Errors
///
/// Returns [`findata_types::FindataError::StructuralMissing`] if any level
/// of `CompactData.DataSet.Series.Obs` is absent.
pub fn parse_price_index(root: &Value) -> Result<Vec<PriceIndexPoint>> {
    let obs = node_at(root, OBSERVATIONS)?;
    let elements = match obs {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };
    Ok(collect_elements("price index", elements))
}

impl DataClient {
    /// Fetches the monthly consumer price index for a country.
    ///
    /// # Errors
    ///
    /// Fails with [`findata_types::FindataError::Mapping`] before any request
    /// if the country is unsupported.
    pub async fn price_index(
        &self,
        country: &str,
        years: YearSpan,
    ) -> Result<Vec<PriceIndexPoint>> {
        self.price_index_for(CONSUMER_PRICE_INDEX, country, years).await
    }

    /// Fetches a monthly IFS series for a country.
    ///
    /// # Errors
    ///
    /// Fails with [`findata_types::FindataError::Mapping`] before any request
    /// if the country is unsupported.
    pub async fn price_index_for(
        &self,
        indicator: &str,
        country: &str,
        years: YearSpan,
    ) -> Result<Vec<PriceIndexPoint>> {
        let country = Country::from_label(country)?;
        let url = price_index_url(&self.endpoints.imf_sdmx, country.label(), indicator, &years);

        let root = self
            .get_json(&url, &[("Accept", "application/json")])
            .await?;
        let points = parse_price_index(&root)?;

        info!(%country, indicator, %years, count = points.len(), "Fetched price index");
        Ok(points)
    }
}
