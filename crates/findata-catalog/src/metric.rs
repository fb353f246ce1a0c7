//! Economic indicator names and IMF DataMapper codes.

use findata_types::MappingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CodeTable;

/// An annual economic indicator published by the IMF DataMapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EconomicMetric {
    /// Nominal GDP in current US dollars.
    NominalGdp,
    /// Real GDP growth, annual percent change.
    RealGdpGrowth,
    /// GDP per capita in current US dollars.
    GdpPerCapita,
    /// Unemployment rate, percent of labor force.
    UnemploymentRate,
    /// General government gross debt, percent of GDP.
    GovernmentDebt,
    /// Government revenue, percent of GDP.
    GovernmentRevenue,
    /// Government expenditure, percent of GDP.
    GovernmentExpenditure,
}

impl CodeTable for EconomicMetric {
    const KIND: &'static str = "economic metric";

    fn all() -> &'static [Self] {
        &[
            Self::NominalGdp,
            Self::RealGdpGrowth,
            Self::GdpPerCapita,
            Self::UnemploymentRate,
            Self::GovernmentDebt,
            Self::GovernmentRevenue,
            Self::GovernmentExpenditure,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::NominalGdp => "Nominal GDP",
            Self::RealGdpGrowth => "Real GDP Growth",
            Self::GdpPerCapita => "GDP Per Capita",
            Self::UnemploymentRate => "Unemployment Rate",
            Self::GovernmentDebt => "Government debt",
            Self::GovernmentRevenue => "Government revenue",
            Self::GovernmentExpenditure => "Government expenditure",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NominalGdp => "NGDPD",
            Self::RealGdpGrowth => "NGDP_RPCH",
            Self::GdpPerCapita => "NGDPDPC",
            Self::UnemploymentRate => "LUR",
            Self::GovernmentDebt => "GGXWDG_NGDP",
            Self::GovernmentRevenue => "GGR_G01_GDP_PT",
            Self::GovernmentExpenditure => "G_X_G01_GDP_PT",
        }
    }
}

impl std::fmt::Display for EconomicMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EconomicMetric {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// IFS series code for the consumer price index.
pub const CONSUMER_PRICE_INDEX: &str = "PCPI_IX";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_codes() {
        assert_eq!(EconomicMetric::code_for("Nominal GDP").unwrap(), "NGDPD");
        assert_eq!(EconomicMetric::code_for("unemployment rate").unwrap(), "LUR");
        assert_eq!(
            EconomicMetric::code_for("Government expenditure").unwrap(),
            "G_X_G01_GDP_PT"
        );
    }

    #[test]
    fn test_metric_reverse_lookup() {
        for metric in EconomicMetric::all() {
            assert_eq!(EconomicMetric::from_code(metric.code()).unwrap(), *metric);
        }
    }

    #[test]
    fn test_unknown_metric() {
        assert!("Inflation".parse::<EconomicMetric>().is_err());
    }
}
