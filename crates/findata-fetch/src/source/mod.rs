//! Source adapters.
//!
//! Each adapter is an async method on [`DataClient`] that awaits exactly one
//! request. The projection from a parsed body into records is a plain
//! function so it can be exercised without a network.

mod constituents;
mod currency;
mod economic;
mod equity;
mod price_index;
mod rates;

pub use constituents::scrape_constituents;
pub use currency::{parse_currency_history, parse_quote};
pub use economic::parse_economic;
pub use equity::parse_equity_history;
pub use price_index::parse_price_index;
pub use rates::parse_interest_rates;

use findata_types::{FindataError, Result};
use serde_json::Value;

use crate::json::parse_body;
use crate::{ApiKeys, ClientConfig, Endpoints, HttpExecutor};

/// Client for every supported data source.
///
/// Cloning is cheap; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: HttpExecutor,
    endpoints: Endpoints,
    keys: ApiKeys,
}

impl DataClient {
    /// Creates a client from its parts.
    #[must_use]
    pub const fn new(http: HttpExecutor, endpoints: Endpoints, keys: ApiKeys) -> Self {
        Self {
            http,
            endpoints,
            keys,
        }
    }

    /// Creates a client with default configuration and endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_keys(keys: ApiKeys) -> std::result::Result<Self, reqwest::Error> {
        Ok(Self::new(
            HttpExecutor::new(&ClientConfig::default())?,
            Endpoints::default(),
            keys,
        ))
    }

    /// Returns the provider endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the underlying executor.
    #[must_use]
    pub const fn http(&self) -> &HttpExecutor {
        &self.http
    }

    /// Fetches `url` and parses the body as JSON.
    async fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value> {
        let body = self.http.fetch(url, headers).await?;
        if body.is_empty() {
            return Err(FindataError::EmptyBody);
        }
        parse_body(&body)
    }
}
