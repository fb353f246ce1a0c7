//! Supported currencies and currency pairs.

use findata_types::MappingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CodeTable;

/// A supported ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Japanese yen.
    Jpy,
    /// Swiss franc.
    Chf,
    /// Canadian dollar.
    Cad,
}

impl CodeTable for Currency {
    const KIND: &'static str = "currency";

    fn all() -> &'static [Self] {
        &[
            Self::Usd,
            Self::Eur,
            Self::Gbp,
            Self::Jpy,
            Self::Chf,
            Self::Cad,
        ]
    }

    fn label(&self) -> &'static str {
        self.code()
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Chf => "CHF",
            Self::Cad => "CAD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// An ordered pair of currencies (`from` priced in `to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base currency.
    pub from: Currency,
    /// Quote currency.
    pub to: Currency,
}

impl CurrencyPair {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Concatenated codes, e.g. `EURUSD`.
    #[must_use]
    pub fn compact(&self) -> String {
        format!("{}{}", self.from.code(), self.to.code())
    }

    /// Quote-API symbol, e.g. `EURUSD=X`.
    #[must_use]
    pub fn quote_symbol(&self) -> String {
        format!("{}=X", self.compact())
    }

    /// End-of-day history ticker, e.g. `EURUSD.FOREX`.
    #[must_use]
    pub fn forex_ticker(&self) -> String {
        format!("{}.FOREX", self.compact())
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

impl FromStr for CurrencyPair {
    type Err = MappingError;

    /// Parses `EUR/USD` (or `EURUSD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (from, to) = match s.split_once('/') {
            Some(parts) => parts,
            None if s.len() == 6 && s.is_ascii() => s.split_at(3),
            None => return Err(MappingError::unknown("currency pair", s)),
        };
        Ok(Self::new(from.parse()?, to.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_currencies() {
        let codes: Vec<_> = Currency::all().iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["USD", "EUR", "GBP", "JPY", "CHF", "CAD"]);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_pair_symbols() {
        let pair: CurrencyPair = "GBP/JPY".parse().unwrap();
        assert_eq!(pair.quote_symbol(), "GBPJPY=X");
        assert_eq!(pair.forex_ticker(), "GBPJPY.FOREX");
        assert_eq!(pair.to_string(), "GBP/JPY");
    }

    #[test]
    fn test_pair_compact_form() {
        let pair: CurrencyPair = "usdchf".parse().unwrap();
        assert_eq!(pair, CurrencyPair::new(Currency::Usd, Currency::Chf));
        assert!("EUR-USD".parse::<CurrencyPair>().is_err());
    }
}
