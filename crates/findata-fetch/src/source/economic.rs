//! Annual economic indicators from the IMF DataMapper.

use findata_catalog::{CodeTable, Country, EconomicMetric};
use findata_types::{
    DateLabel, EconomicDataPoint, FindataError, Result, YearSpan, parse_lenient_f64,
};
use serde_json::Value;
use tracing::{info, warn};

use super::DataClient;
use crate::json::node_at;
use crate::url::economic_url;

/// Projects a DataMapper body for one metric and country.
///
/// The series is an object keyed by year; each key becomes the record's
/// year label. Entries whose value is neither a number nor a quoted number,
/// or whose key is not a valid label, are skipped.
///
/// # Errors
///
/// Returns [`FindataError::StructuralMissing`] if
/// `values.{metric}.{country}` is absent or not an object.
pub fn parse_economic(
    root: &Value,
    metric: &str,
    country: &str,
) -> Result<Vec<EconomicDataPoint>> {
    let series = node_at(root, &["values", metric, country])?
        .as_object()
        .ok_or_else(|| FindataError::missing(format!("values.{metric}.{country}")))?;

    let mut points = Vec::with_capacity(series.len());
    for (year, value) in series {
        let value = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => Some(parse_lenient_f64(s)),
            _ => None,
        };
        let Some(value) = value else {
            warn!(metric, country, year, "Skipping non-numeric value");
            continue;
        };
        match DateLabel::new(year.as_str()) {
            Ok(year) => points.push(EconomicDataPoint::new(year, value)),
            Err(e) => warn!(metric, country, error = %e, "Skipping invalid year key"),
        }
    }
    Ok(points)
}

impl DataClient {
    /// Fetches yearly values of an economic indicator for a country.
    ///
    /// Both `metric` (e.g. `Nominal GDP`) and `country` (e.g. `DE`) are
    /// display labels.
    ///
    /// # Errors
    ///
    /// Fails with [`FindataError::Mapping`] before any request if either
    /// label is unknown.
    pub async fn economic_indicator(
        &self,
        metric: &str,
        country: &str,
        years: YearSpan,
    ) -> Result<Vec<EconomicDataPoint>> {
        let metric = EconomicMetric::from_label(metric)?;
        let country = Country::from_label(country)?;
        let url = economic_url(
            &self.endpoints.imf_datamapper,
            metric.code(),
            country.code(),
            &years,
        );

        let root = self.get_json(&url, &[]).await?;
        let points = parse_economic(&root, metric.code(), country.code())?;

        info!(%metric, %country, %years, count = points.len(), "Fetched economic indicator");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_years_come_from_keys() {
        let root = json!({
            "values": {"NGDPD": {"DEU": {"2019": 3889.2, "2020": 3887.7, "2021": "4259.9"}}},
            "api": {"version": "1", "output-method": "json"}
        });
        let points = parse_economic(&root, "NGDPD", "DEU").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].year.as_str(), "2019");
        assert_eq!(points[2].year_number(), Some(2021));
        assert_relative_eq!(points[2].value, 4259.9);
    }

    #[test]
    fn test_skips_non_numeric_entries() {
        let root = json!({"values": {"LUR": {"FRA": {"2019": null, "2020": 8.0, "2021": [1]}}}});
        let points = parse_economic(&root, "LUR", "FRA").unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year.as_str(), "2020");
    }

    #[test]
    fn test_missing_country_is_structural() {
        let root = json!({"values": {"LUR": {"USA": {"2020": 8.1}}}});
        let err = parse_economic(&root, "LUR", "JPN").unwrap_err();
        assert!(matches!(
            err,
            FindataError::StructuralMissing { ref path } if path == "values.LUR.JPN"
        ));

        let root = json!({"values": {"LUR": {"JPN": 2.8}}});
        assert!(parse_economic(&root, "LUR", "JPN").is_err());
    }
}
