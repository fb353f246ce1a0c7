//! Reference pages listing index constituents.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::StockIndex;

/// The constituent page metadata embedded at compile time.
const CONSTITUENTS_JSON: &str = include_str!("../data/constituents.json");

/// Global constituent catalog instance.
static CATALOG: OnceLock<ConstituentCatalog> = OnceLock::new();

/// Where and how to scrape the members of one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstituentSource {
    /// Reference page URL.
    pub url: String,
    /// XPath selecting ticker text nodes.
    pub ticker_xpath: String,
    /// XPath selecting company-name text nodes.
    pub name_xpath: String,
    /// Only tickers ending with this suffix are kept.
    #[serde(default)]
    pub ticker_suffix: Option<String>,
}

impl ConstituentSource {
    /// Returns true if the ticker passes this source's suffix filter.
    #[must_use]
    pub fn accepts(&self, ticker: &str) -> bool {
        self.ticker_suffix
            .as_deref()
            .is_none_or(|suffix| ticker.ends_with(suffix))
    }
}

/// Registry of constituent pages for every supported index.
#[derive(Debug)]
pub struct ConstituentCatalog {
    sources: HashMap<String, ConstituentSource>,
}

impl ConstituentCatalog {
    /// Returns the global catalog.
    ///
    /// The catalog is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(Self::load)
    }

    /// Loads sources from the embedded JSON data.
    fn load() -> Self {
        let sources: HashMap<String, ConstituentSource> =
            serde_json::from_str(CONSTITUENTS_JSON).expect("Invalid constituents.json");
        Self { sources }
    }

    /// Returns the source for an index.
    #[must_use]
    pub fn get(&self, index: StockIndex) -> Option<&ConstituentSource> {
        self.sources.get(index.id())
    }

    /// Returns the number of indices with a known source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
