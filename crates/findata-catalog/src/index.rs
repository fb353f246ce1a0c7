//! Stock index display names and tickers.

use findata_types::MappingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CodeTable;

/// A supported stock index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockIndex {
    /// S&P 500.
    #[serde(rename = "sp500")]
    Sp500,
    /// Dow Jones Industrial Average.
    #[serde(rename = "dowjones")]
    DowJones,
    /// FTSE 100.
    #[serde(rename = "ftse100")]
    Ftse100,
    /// DAX 40.
    Dax,
    /// Nasdaq 100.
    #[serde(rename = "nasdaq100")]
    Nasdaq100,
}

impl StockIndex {
    /// Short identifier used as the catalog key.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sp500 => "sp500",
            Self::DowJones => "dowjones",
            Self::Ftse100 => "ftse100",
            Self::Dax => "dax",
            Self::Nasdaq100 => "nasdaq100",
        }
    }
}

impl CodeTable for StockIndex {
    const KIND: &'static str = "stock index";

    fn all() -> &'static [Self] {
        &[
            Self::Sp500,
            Self::DowJones,
            Self::Ftse100,
            Self::Dax,
            Self::Nasdaq100,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Sp500 => "S&P 500",
            Self::DowJones => "Dow Jones",
            Self::Ftse100 => "FTSE 100",
            Self::Dax => "DAX",
            Self::Nasdaq100 => "Nasdaq 100",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Sp500 => "^GSPC",
            Self::DowJones => "^DJI",
            Self::Ftse100 => "^FTSE",
            Self::Dax => "^GDAXI",
            Self::Nasdaq100 => "NQ=F",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Sp500 => &["sp500"],
            Self::DowJones => &["Dow", "dowjones"],
            Self::Ftse100 => &["ftse100"],
            Self::Dax => &[],
            Self::Nasdaq100 => &["NASDAQ-100", "nasdaq100"],
        }
    }
}

impl std::fmt::Display for StockIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockIndex {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
