//! Country codes and per-country provider series.

use findata_types::MappingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CodeTable;

/// A supported country, labelled by its ISO 3166 alpha-2 code.
///
/// The provider code is the alpha-3 code used by the IMF DataMapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    /// United Kingdom.
    Gb,
    /// United States.
    Us,
    /// France.
    Fr,
    /// Germany.
    De,
    /// Japan.
    Jp,
}

impl Country {
    /// Returns the country name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gb => "United Kingdom",
            Self::Us => "United States",
            Self::Fr => "France",
            Self::De => "Germany",
            Self::Jp => "Japan",
        }
    }

    /// Returns the FRED series tracking this country's benchmark rate.
    #[must_use]
    pub const fn fred_series(&self) -> &'static str {
        match self {
            Self::Gb => "IRLTLT01GBM156N",
            Self::Us => "FEDFUNDS",
            Self::Fr => "IRLTLT01FRM156N",
            Self::De => "IRLTLT01DEQ156N",
            Self::Jp => "INTDSRJPM193N",
        }
    }
}

impl CodeTable for Country {
    const KIND: &'static str = "country";

    fn all() -> &'static [Self] {
        &[Self::Gb, Self::Us, Self::Fr, Self::De, Self::Jp]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Gb => "GB",
            Self::Us => "US",
            Self::Fr => "FR",
            Self::De => "DE",
            Self::Jp => "JP",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Gb => "GBR",
            Self::Us => "USA",
            Self::Fr => "FRA",
            Self::De => "DEU",
            Self::Jp => "JPN",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Gb => &["UK"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
