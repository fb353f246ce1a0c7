//! HTTP transport, JSON navigation and provider adapters for findata.
//!
//! This crate provides the fetch-normalize pipeline:
//!
//! - [`TransportBuffer`] - Growable response body accumulator
//! - [`HttpExecutor`] - One GET request per call, with a deadline
//! - [`json`] - Defensive navigation and per-element projection
//! - [`url`] - Provider URL construction
//! - [`DataClient`] - The source adapters

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/findata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod buffer;
mod client;
mod config;
pub mod json;
mod source;
pub mod url;

pub use buffer::TransportBuffer;
pub use client::{ClientConfig, HttpExecutor, TransportError};
pub use config::{ApiKeys, Endpoints};
pub use json::{ElementError, FromElement};
pub use source::{
    DataClient, parse_currency_history, parse_economic, parse_equity_history, parse_interest_rates,
    parse_price_index, parse_quote, scrape_constituents,
};
