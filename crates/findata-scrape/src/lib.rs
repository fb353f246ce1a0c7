#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/findata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod document;
mod xpath;

pub use document::HtmlDocument;
pub use xpath::{XPath, XPathError};

use thiserror::Error;
use tracing::warn;

/// Errors raised by the scraper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The XPath expression could not be compiled.
    #[error("Invalid XPath expression {expr:?}: {source}")]
    XPath {
        /// The expression as given.
        expr: String,
        /// Underlying parse error.
        source: XPathError,
    },
}

/// Extracts the non-empty text of every node `xpath` selects in `html`.
///
/// # Errors
///
/// Returns [`ScrapeError::XPath`] if the expression cannot be compiled.
pub fn try_extract_text(html: &str, xpath: &str) -> Result<Vec<String>, ScrapeError> {
    let compiled = XPath::compile(xpath).map_err(|source| ScrapeError::XPath {
        expr: xpath.to_string(),
        source,
    })?;
    Ok(HtmlDocument::parse(html).extract_text(&compiled))
}

/// Extracts the non-empty text of every node `xpath` selects in `html`.
///
/// An expression that cannot be evaluated is logged and yields an empty
/// sequence.
///
/// # Example
///
/// ```
/// let html = "<ul><li>AAPL</li><li> </li><li>MSFT</li></ul>";
/// assert_eq!(findata_scrape::extract_text(html, "//li/text()"), vec!["AAPL", "MSFT"]);
/// assert!(findata_scrape::extract_text(html, "//li[").is_empty());
/// ```
#[must_use]
pub fn extract_text(html: &str, xpath: &str) -> Vec<String> {
    try_extract_text(html, xpath).unwrap_or_else(|e| {
        warn!(error = %e, "XPath evaluation failed");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_xpath_yields_empty() {
        assert!(extract_text("<p>x</p>", "//p[@").is_empty());
        assert!(matches!(
            try_extract_text("<p>x</p>", "//p[@"),
            Err(ScrapeError::XPath { .. })
        ));
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_text("", "//td").is_empty());
    }
}
