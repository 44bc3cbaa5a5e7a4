//! Password breach checks against the Have I Been Pwned range API.
//!
//! The range API implements k-anonymity: a password is hashed with SHA1 locally
//! and only the first 5 hex characters of the digest are sent to the service.
//! The service returns every breached hash suffix that shares the prefix,
//! together with how often it was seen, and the remaining 35 characters are
//! matched locally. The plaintext password and its full hash never leave the
//! process.
//!
//! # Usage
//!
//! ```no_run
//! use hibp_range_client::BreachLookupClient;
//!
//! # async fn run() -> hibp_range_client::Result<()> {
//! let client = BreachLookupClient::new()?;
//!
//! if client.is_pwned("password").await? {
//!     println!("seen {} times", client.count_occurrences("password").await?);
//! }
//!
//! let pwned = client.filter_pwned(["password", "correct horse battery staple"]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Lookups go through the [`Transport`] trait. [`HttpTransport`] is the
//! `reqwest` implementation; tests and embedders can supply their own.

pub mod client;
pub mod config;
pub mod error;
pub mod hash;
pub mod range;
pub mod transport;

pub use client::BreachLookupClient;
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_API_URL, HIBP_API_URL_ENV, api_url_from_env,
};
pub use error::{ConfigError, Error, MalformedLine, Result, TransportError};
pub use hash::{PREFIX_LEN, Sha1Hex, sha1_hex};
pub use range::{RangeEntries, RangeEntry, find_count, parse_line};
pub use transport::{HttpTransport, Transport};
