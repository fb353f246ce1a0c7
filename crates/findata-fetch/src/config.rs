//! Provider endpoints and API keys.

/// Base URLs of the remote providers.
///
/// Adapters treat these as opaque prefixes; overriding them points the
/// client at a mirror or a local test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Spot quote API.
    pub yfapi: String,
    /// End-of-day history API (currencies and equities).
    pub eodhd: String,
    /// IMF SDMX JSON service.
    pub imf_sdmx: String,
    /// IMF DataMapper API.
    pub imf_datamapper: String,
    /// FRED API.
    pub fred: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            yfapi: "https://yfapi.net".to_string(),
            eodhd: "https://eodhd.com".to_string(),
            imf_sdmx: "http://dataservices.imf.org/REST/SDMX_JSON.svc".to_string(),
            imf_datamapper: "https://www.imf.org/external/datamapper/api/v1".to_string(),
            fred: "https://api.stlouisfed.org/fred".to_string(),
        }
    }
}

impl Endpoints {
    /// Points every provider at the same base URL.
    #[must_use]
    pub fn uniform(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            yfapi: base.clone(),
            eodhd: base.clone(),
            imf_sdmx: base.clone(),
            imf_datamapper: base.clone(),
            fred: base,
        }
    }
}

/// Provider API keys.
///
/// Keys are forwarded verbatim; empty keys are sent as empty values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    /// Key for the spot quote API, sent as `X-API-KEY`.
    pub yfapi: String,
    /// Key for the end-of-day history API.
    pub eodhd: String,
    /// Key for FRED.
    pub fred: String,
}

impl ApiKeys {
    /// Creates a key set.
    #[must_use]
    pub fn new(
        yfapi: impl Into<String>,
        eodhd: impl Into<String>,
        fred: impl Into<String>,
    ) -> Self {
        Self {
            yfapi: yfapi.into(),
            eodhd: eodhd.into(),
            fred: fred.into(),
        }
    }
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |key: &str| if key.is_empty() { "<unset>" } else { "***" };
        f.debug_struct("ApiKeys")
            .field("yfapi", &mask(&self.yfapi))
            .field("eodhd", &mask(&self.eodhd))
            .field("fred", &mask(&self.fred))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_endpoints() {
        let endpoints = Endpoints::uniform("http://127.0.0.1:1234/");
        assert_eq!(endpoints.yfapi, "http://127.0.0.1:1234");
        assert_eq!(endpoints.fred, "http://127.0.0.1:1234");
    }

    #[test]
    fn test_api_keys_debug_is_redacted() {
        let keys = ApiKeys::new("secret-a", "", "secret-c");
        let debug = format!("{keys:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<unset>"));
    }
}
