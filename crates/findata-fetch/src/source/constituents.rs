//! Index membership scraped from reference pages.

use findata_catalog::{CodeTable, ConstituentCatalog, ConstituentSource, StockIndex};
use findata_scrape::{HtmlDocument, XPath};
use findata_types::{Constituent, FindataError, MappingError, Result, TickerList};
use tracing::{info, warn};

use super::DataClient;

fn compile(expr: &str) -> Result<XPath> {
    XPath::compile(expr).map_err(|e| FindataError::Scrape(format!("{expr}: {e}")))
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).collect()
}

/// Scrapes a constituents page into name/ticker pairs.
///
/// Names and tickers are matched by position; surplus entries on either
/// side are dropped. The source's suffix filter is applied last.
///
/// # Errors
///
/// Returns [`FindataError::Scrape`] if either XPath expression is invalid.
pub fn scrape_constituents(html: &[u8], source: &ConstituentSource) -> Result<Vec<Constituent>> {
    let tickers_xpath = compile(&source.ticker_xpath)?;
    let names_xpath = compile(&source.name_xpath)?;

    let doc = HtmlDocument::parse_bytes(html);
    let tickers = trimmed(doc.extract_text(&tickers_xpath));
    let names = trimmed(doc.extract_text(&names_xpath));

    if tickers.len() != names.len() {
        warn!(
            tickers = tickers.len(),
            names = names.len(),
            url = %source.url,
            "Ticker and name columns differ in length"
        );
    }

    Ok(names
        .into_iter()
        .zip(tickers)
        .filter(|(_, ticker)| source.accepts(ticker))
        .map(|(name, ticker)| Constituent::new(name, ticker))
        .collect())
}

/// Scrapes only the ticker column, applying the suffix filter.
fn scrape_tickers(html: &[u8], source: &ConstituentSource) -> Result<TickerList> {
    let xpath = compile(&source.ticker_xpath)?;
    let doc = HtmlDocument::parse_bytes(html);
    Ok(trimmed(doc.extract_text(&xpath))
        .into_iter()
        .filter(|ticker| source.accepts(ticker))
        .collect())
}

fn lookup(index: &str) -> Result<(StockIndex, &'static ConstituentSource)> {
    let index = StockIndex::from_label(index)?;
    let source = ConstituentCatalog::global()
        .get(index)
        .ok_or_else(|| MappingError::unknown("constituents page", index.label()))?;
    Ok((index, source))
}

impl DataClient {
    /// Fetches the current members of an index by display name.
    ///
    /// # Errors
    ///
    /// Fails with [`FindataError::Mapping`] before any request if the index
    /// is unsupported.
    pub async fn constituents(&self, index: &str) -> Result<Vec<Constituent>> {
        let (index, source) = lookup(index)?;
        let members = self.constituents_from(source).await?;
        info!(%index, count = members.len(), "Fetched index constituents");
        Ok(members)
    }

    /// Fetches the tickers of an index by display name.
    ///
    /// # Errors
    ///
    /// Fails with [`FindataError::Mapping`] before any request if the index
    /// is unsupported.
    pub async fn index_tickers(&self, index: &str) -> Result<TickerList> {
        let (index, source) = lookup(index)?;
        let body = self.http.fetch(&source.url, &[]).await?;
        let tickers = scrape_tickers(&body, source)?;
        info!(%index, count = tickers.len(), "Fetched index tickers");
        Ok(tickers)
    }

    /// Fetches and scrapes an explicit constituents page.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an invalid XPath.
    pub async fn constituents_from(&self, source: &ConstituentSource) -> Result<Vec<Constituent>> {
        let body = self.http.fetch(&source.url, &[]).await?;
        scrape_constituents(&body, source)
    }
}
