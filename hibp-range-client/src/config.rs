use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

/// Public range endpoint of the Pwned Passwords service.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range";

/// Environment variable name for overriding the range endpoint.
pub const HIBP_API_URL_ENV: &str = "HIBP_API_URL";

/// Default number of lookups kept in flight by batch operations.
pub const DEFAULT_CONCURRENCY: usize = 8;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the range endpoint from the HIBP_API_URL environment variable,
/// or falls back to the public service.
pub fn api_url_from_env() -> String {
    std::env::var(HIBP_API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Validated client configuration. Immutable once built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_address: String,
    pwn_threshold: u64,
    concurrency: usize,
    user_agent: String,
    timeout: Duration,
    add_padding: bool,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Range endpoint without a trailing slash.
    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    /// Minimum breach count for a password to be considered pwned.
    pub fn pwn_threshold(&self) -> u64 {
        self.pwn_threshold
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether to ask the service to pad responses with zero-count entries,
    /// which hides the real response size from on-path observers.
    pub fn add_padding(&self) -> bool {
        self.add_padding
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_API_URL.to_string(),
            pwn_threshold: 1,
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
            add_padding: false,
        }
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Builder for [`ClientConfig`]. Nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_address: String,
    pwn_threshold: i64,
    concurrency: usize,
    user_agent: String,
    timeout: Duration,
    add_padding: bool,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_API_URL.to_string(),
            pwn_threshold: 1,
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
            add_padding: false,
        }
    }
}

impl ClientConfigBuilder {
    pub fn base_address(mut self, address: impl Into<String>) -> Self {
        self.base_address = address.into();
        self
    }

    /// Signed so that a negative value from user input is rejected rather
    /// than wrapped.
    pub fn pwn_threshold(mut self, threshold: i64) -> Self {
        self.pwn_threshold = threshold;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn add_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// Validates the base address, then the threshold, then the concurrency.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_address = validate_base_address(&self.base_address)?;

        let pwn_threshold = u64::try_from(self.pwn_threshold)
            .ok()
            .filter(|t| *t >= 1)
            .ok_or(ConfigError::InvalidThreshold(self.pwn_threshold))?;

        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency(self.concurrency));
        }

        Ok(ClientConfig {
            base_address,
            pwn_threshold,
            concurrency: self.concurrency,
            user_agent: self.user_agent,
            timeout: self.timeout,
            add_padding: self.add_padding,
        })
    }
}

/// Accepts well-formed absolute URIs with an authority and strips trailing slashes.
///
/// `Url::parse` repairs a lot of input (spaces, backslashes, a missing `//`)
/// that would then be stored verbatim, so the raw text is checked first.
fn validate_base_address(address: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBaseAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    if let Some(c) = address.chars().find(|c| !is_uri_char(*c)) {
        return Err(invalid(&format!("character {c:?} must be percent-encoded")));
    }
    if !has_valid_percent_escapes(address) {
        return Err(invalid("'%' must start a two-digit hex escape"));
    }

    let url = Url::parse(address).map_err(|e| invalid(&e.to_string()))?;
    if !address[url.scheme().len()..].starts_with("://") || !url.has_host() {
        return Err(invalid("URI has no authority"));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URI cannot carry a path"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }

    Ok(address.trim_end_matches('/').to_string())
}

/// Printable ASCII minus the characters RFC 3986 never allows unescaped.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_graphic() && !matches!(c, '\\' | '"' | '<' | '>' | '^' | '`' | '{' | '|' | '}')
}

fn has_valid_percent_escapes(address: &str) -> bool {
    let bytes = address.as_bytes();
    bytes.iter().enumerate().filter(|(_, b)| **b == b'%').all(|(i, _)| {
        bytes.get(i + 1..i + 3).is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}
