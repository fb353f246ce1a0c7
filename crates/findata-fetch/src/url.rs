//! Provider URL construction.

use findata_types::{DateRange, YearSpan};

/// Query parameters whose values are secrets.
const SECRET_PARAMS: &[&str] = &["api_token", "api_key"];

/// Builds the spot quote URL for a compact pair such as `EURUSD`.
///
/// # Example
///
/// ```
/// use findata_fetch::url::quote_url;
///
/// assert_eq!(
///     quote_url("https://yfapi.net", "EURUSD"),
///     "https://yfapi.net/v6/finance/quote?region=US&lang=en&symbols=EURUSD%3DX"
/// );
/// ```
#[must_use]
pub fn quote_url(base: &str, pair: &str) -> String {
    format!("{base}/v6/finance/quote?region=US&lang=en&symbols={pair}%3DX")
}

/// Builds the end-of-day currency history URL, newest first.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use findata_fetch::url::currency_history_url;
/// use findata_types::DateRange;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(
///     currency_history_url("https://eodhd.com", "EURUSD.FOREX", &range, "KEY"),
///     "https://eodhd.com/api/eod/EURUSD.FOREX?from=2024-01-01&to=2024-02-01&order=d&api_token=KEY&fmt=json"
/// );
/// ```
#[must_use]
pub fn currency_history_url(base: &str, ticker: &str, range: &DateRange, key: &str) -> String {
    format!(
        "{base}/api/eod/{ticker}?from={}&to={}&order=d&api_token={key}&fmt=json",
        range.start_iso(),
        range.end_iso()
    )
}

/// Builds the end-of-day equity history URL.
#[must_use]
pub fn equity_history_url(base: &str, symbol: &str, range: &DateRange, key: &str) -> String {
    format!(
        "{base}/api/eod/{symbol}?from={}&to={}&api_token={key}&fmt=json",
        range.start_iso(),
        range.end_iso()
    )
}

/// Builds the monthly IFS CompactData URL for one country and indicator.
///
/// # Example
///
/// ```
/// use findata_fetch::url::price_index_url;
/// use findata_types::YearSpan;
///
/// let years = YearSpan::new(2019, 2021).unwrap();
/// assert_eq!(
///     price_index_url("http://imf", "GB", "PCPI_IX", &years),
///     "http://imf/CompactData/IFS/M.GB.PCPI_IX?startPeriod=2019&endPeriod=2021"
/// );
/// ```
#[must_use]
pub fn price_index_url(base: &str, country: &str, indicator: &str, years: &YearSpan) -> String {
    format!(
        "{base}/CompactData/IFS/M.{country}.{indicator}?startPeriod={}&endPeriod={}",
        years.start(), years.end()
    )
}

/// Builds the DataMapper URL for one metric and country over a year list.
///
/// # Example
///
/// ```
/// use findata_fetch::url::economic_url;
/// use findata_types::YearSpan;
///
/// let years = YearSpan::new(2019, 2021).unwrap();
/// assert_eq!(
///     economic_url("https://imf", "NGDPD", "DEU", &years),
///     "https://imf/NGDPD/DEU?periods=2019,2020,2021"
/// );
/// ```
#[must_use]
pub fn economic_url(base: &str, metric: &str, country: &str, years: &YearSpan) -> String {
    format!("{base}/{metric}/{country}?periods={}", years.to_csv())
}

/// Builds the FRED observations URL.
///
/// The window runs from January 1st of the start year to June 6th of the
/// end year.
///
/// # Example
///
/// ```
/// use findata_fetch::url::interest_rate_url;
/// use findata_types::YearSpan;
///
/// let years = YearSpan::new(2020, 2023).unwrap();
/// assert_eq!(
///     interest_rate_url("https://fred", "FEDFUNDS", &years, "KEY"),
///     "https://fred/series/observations?series_id=FEDFUNDS&api_key=KEY&file_type=json\
///      &observation_start=2020-01-01&observation_end=2023-06-06"
/// );
/// ```
#[must_use]
pub fn interest_rate_url(base: &str, series: &str, years: &YearSpan, key: &str) -> String {
    format!(
        "{base}/series/observations?series_id={series}&api_key={key}&file_type=json\
         &observation_start={}-01-01&observation_end={}-06-06",
        years.start(), years.end()
    )
}

/// Masks secret query parameter values for logging.
///
/// # Example
///
/// ```
/// use findata_fetch::url::redact;
///
/// assert_eq!(
///     redact("https://x/api?from=1&api_token=abc&fmt=json"),
///     "https://x/api?from=1&api_token=***&fmt=json"
/// );
/// ```
#[must_use]
pub fn redact(url: &str) -> String {
    let Some((path, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) if SECRET_PARAMS.contains(&name) => format!("{name}=***"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{path}?{query}")
}
