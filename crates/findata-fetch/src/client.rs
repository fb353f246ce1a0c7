//! HTTP request executor.

use bytes::Bytes;
use findata_types::FindataError;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::TransportBuffer;
use crate::url::redact;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for a whole request, body included.
    pub timeout: Duration,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("findata/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching a body.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed (DNS, TLS, connection, deadline).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response buffer could not grow.
    #[error("Allocation failed: could not reserve {requested} bytes")]
    Allocation {
        /// Size of the chunk that did not fit.
        requested: usize,
    },
}

impl From<TransportError> for FindataError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Http(e) => Self::Transport(e.to_string()),
            TransportError::Allocation { requested } => Self::Allocation { requested },
        }
    }
}

/// Executes one GET request per call and returns the raw body.
///
/// Idle connections are not pooled, so every call opens its own request.
/// The status code is not inspected: error pages are returned as bodies
/// and left to the JSON layer.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// Creates an executor with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    /// Creates an executor with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(&ClientConfig::default())
    }

    /// Fetches `url`, attaching `headers` as given.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or if the body cannot be
    /// buffered. No partial body is returned in either case.
    pub async fn fetch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<Bytes, TransportError> {
        debug!(url = %redact(url), "GET");

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let mut response = request.send().await?;
        debug!(status = response.status().as_u16(), "Response received");

        let mut buffer = TransportBuffer::new();
        while let Some(chunk) = response.chunk().await? {
            buffer.append(&chunk)?;
        }

        debug!(bytes = buffer.len(), "Body received");
        Ok(buffer.into_bytes())
    }
}
