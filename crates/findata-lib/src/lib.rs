//! Market and macroeconomic data fetcher.
//!
//! This is a facade crate that re-exports functionality from the findata
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use findata_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DataClient::with_keys(ApiKeys::new("yfapi", "eodhd", "fred"))?;
//!
//!     let usd = client.quote("EUR", "USD", 100.0).await?;
//!     println!("100 EUR = {usd:.2} USD");
//!
//!     let years = YearSpan::new(2019, 2023)?;
//!     for point in client.economic_indicator("Nominal GDP", "DE", years).await? {
//!         println!("{}: {}", point.year, point.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/findata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use findata_types::*;

// Re-export mapping tables
pub use findata_catalog::{
    CONSUMER_PRICE_INDEX, CodeTable, ConstituentCatalog, ConstituentSource, Country, Currency,
    CurrencyPair, EconomicMetric, StockIndex,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use findata_fetch::{
    ApiKeys, ClientConfig, DataClient, ElementError, Endpoints, FromElement, HttpExecutor,
    TransportBuffer, TransportError, json, url,
};

// Re-export scraping
#[cfg(feature = "scrape")]
pub use findata_scrape::{HtmlDocument, ScrapeError, XPath, XPathError, extract_text};

/// Prelude module for convenient imports.
///
/// ```
/// use findata_lib::prelude::*;
///
/// assert_eq!(Country::code_for("GB").unwrap(), "GBR");
/// assert_eq!(Period::from_label("ytd"), Period::YearToDate);
/// ```
pub mod prelude {
    pub use findata_types::{
        Constituent, CurrencyHistoryPoint, DateLabel, DateRange, EconomicDataPoint,
        EquityHistoryPoint, FindataError, InterestRatePoint, Period, PriceIndexPoint, Result,
        TickerList, YearSpan,
    };

    pub use findata_catalog::{CodeTable, Country, Currency, CurrencyPair, EconomicMetric, StockIndex};

    #[cfg(feature = "fetch")]
    pub use findata_fetch::{ApiKeys, ClientConfig, DataClient, Endpoints, HttpExecutor};

    #[cfg(feature = "scrape")]
    pub use findata_scrape::{HtmlDocument, XPath, extract_text};
}
