//! Core types for the findata market and macro data fetcher.
//!
//! This crate provides the fundamental data structures used throughout findata:
//!
//! - [`CurrencyHistoryPoint`], [`EquityHistoryPoint`], [`PriceIndexPoint`],
//!   [`EconomicDataPoint`], [`InterestRatePoint`] - Normalized time-series records
//! - [`TickerList`] and [`Constituent`] - Scraped index membership
//! - [`DateLabel`] - Length-bounded date/period label
//! - [`Period`] - Relative history window (`1D`, `1M`, `3M`, `YTD`, `1Y`)
//! - [`DateRange`] and [`YearSpan`] - Validated date and year ranges
//! - [`FindataError`] - Error taxonomy shared by every adapter

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/findata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod label;
mod numeric;
mod period;
mod record;

pub use date_range::{DateRange, YearSpan};
pub use error::{DateRangeError, FindataError, LabelError, MappingError, Result};
pub use label::DateLabel;
pub use numeric::parse_lenient_f64;
pub use period::Period;
pub use record::{
    Constituent, CurrencyHistoryPoint, EconomicDataPoint, EquityHistoryPoint, InterestRatePoint,
    PriceIndexPoint, TickerList,
};
