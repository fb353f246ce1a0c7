//! Label to provider-code mapping tables for the findata fetcher.
//!
//! Every concept (currency, stock index, country, economic metric) is a
//! closed enumeration implementing [`CodeTable`], which provides lookups in
//! both directions.
//!
//! # Example
//!
//! ```
//! use findata_catalog::{CodeTable, Country, EconomicMetric};
//!
//! assert_eq!(Country::code_for("DE").unwrap(), "DEU");
//! assert_eq!(Country::from_code("DEU").unwrap().label(), "DE");
//! assert_eq!(EconomicMetric::code_for("Nominal GDP").unwrap(), "NGDPD");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/findata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod constituents;
mod country;
mod currency;
mod index;
mod metric;
mod table;

pub use constituents::{ConstituentCatalog, ConstituentSource};
pub use country::Country;
pub use currency::{Currency, CurrencyPair};
pub use index::StockIndex;
pub use metric::{CONSUMER_PRICE_INDEX, EconomicMetric};
pub use table::CodeTable;
