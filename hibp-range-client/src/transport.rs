//! Fetching range bodies from the breach service.

use std::future::Future;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};

/// Header asking the service to pad responses with zero-count entries.
pub const ADD_PADDING_HEADER: &str = "add-padding";

/// Reads the body behind a URL.
///
/// `Ok(None)` means the service answered without a body, which callers treat
/// as an empty range rather than an error.
pub trait Transport: Send + Sync {
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Option<Bytes>, TransportError>> + Send;
}

/// [`Transport`] over a pooled `reqwest` client with rustls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client carrying the user agent, timeout and padding settings of `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        if config.add_padding() {
            headers.insert(ADD_PADDING_HEADER, HeaderValue::from_static("true"));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .default_headers(headers)
            .pool_max_idle_per_host(config.concurrency())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one shared with the rest of an application.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Option<Bytes>, TransportError> {
        let request_failed = |source| TransportError::Request { url: url.to_string(), source };

        let response = self.client.get(url).send().await.map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(request_failed)?;
        tracing::trace!(url, bytes = body.len(), "range body received");

        Ok((!body.is_empty()).then_some(body))
    }
}
