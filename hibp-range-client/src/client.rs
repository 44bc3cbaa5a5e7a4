//! k-anonymity breach lookups.
//!
//! Only the first five hex characters of a password's SHA1 digest are sent to
//! the service. The service answers with every breached suffix sharing that
//! prefix and the suffix is matched locally, so neither the password nor its
//! full hash leaves the process.

use futures_util::{StreamExt, TryStreamExt, stream};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::hash::sha1_hex;
use crate::range::find_count;
use crate::transport::{HttpTransport, Transport};

/// Checks passwords against the breach service's range endpoint.
///
/// Holds no mutable state, so a single client can serve concurrent lookups.
#[derive(Debug, Clone)]
pub struct BreachLookupClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl BreachLookupClient<HttpTransport> {
    /// Client for the public service with a pwn threshold of 1.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Uses a different range endpoint. Fails if `address` is not an absolute URI.
    pub fn with_base_address(address: &str) -> Result<Self> {
        Self::with_config(ClientConfig::builder().base_address(address).build()?)
    }

    /// Requires at least `threshold` breaches before a password counts as pwned.
    pub fn with_threshold(threshold: i64) -> Result<Self> {
        Self::with_config(ClientConfig::builder().pwn_threshold(threshold).build()?)
    }

    /// The address is validated before the threshold.
    pub fn with_base_address_and_threshold(address: &str, threshold: i64) -> Result<Self> {
        let config =
            ClientConfig::builder().base_address(address).pwn_threshold(threshold).build()?;
        Self::with_config(config)
    }
}

impl<T: Transport> BreachLookupClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL of the range holding every hash that starts with `prefix`.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.config.base_address(), prefix)
    }

    /// Returns how many times `password` appears in the breach corpus, 0 if never.
    ///
    /// Exactly one request is made. A response without a body counts as 0.
    pub async fn count_occurrences(&self, password: &str) -> Result<u64> {
        let digest = sha1_hex(password);
        let (prefix, suffix) = digest.split();
        let url = self.range_url(prefix);

        tracing::debug!(prefix, url = %url, "looking up range");

        let Some(body) = self.transport.fetch(&url).await? else {
            return Ok(0);
        };

        Ok(find_count(&body, suffix)?)
    }

    /// Whether `password` has been seen at least `pwn_threshold` times.
    pub async fn is_pwned(&self, password: &str) -> Result<bool> {
        let count = self.count_occurrences(password).await?;
        Ok(self.meets_threshold(count))
    }

    fn meets_threshold(&self, count: u64) -> bool {
        count >= self.config.pwn_threshold()
    }

    /// Breach counts for every password, in input order.
    ///
    /// Up to `concurrency` lookups run at once. The first failure is returned
    /// and the remaining lookups are dropped.
    pub async fn pwned_counts<I, S>(&self, passwords: I) -> Result<Vec<(S, u64)>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        stream::iter(passwords)
            .map(|password| async move {
                let count = self.count_occurrences(password.as_ref()).await?;
                Ok::<_, Error>((password, count))
            })
            .buffered(self.config.concurrency())
            .try_collect()
            .await
    }

    /// The passwords that are pwned, in input order.
    ///
    /// Lookups are independent and run concurrently the same way as
    /// [`pwned_counts`](Self::pwned_counts).
    pub async fn filter_pwned<I, S>(&self, passwords: I) -> Result<Vec<S>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts = self.pwned_counts(passwords).await?;

        Ok(counts
            .into_iter()
            .filter_map(|(password, count)| self.meets_threshold(count).then_some(password))
            .collect())
    }
}
