/// Rejected client configuration. Only ever returned while building a client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("\"{address}\" is not a valid absolute URI: {reason}")]
    InvalidBaseAddress { address: String, reason: String },

    #[error("pwn threshold must be at least 1, got {0}")]
    InvalidThreshold(i64),

    #[error("concurrency must be at least 1, got {0}")]
    InvalidConcurrency(usize),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure to fetch a range from the breach service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

/// A range response line that breaks the `SUFFIX:COUNT` contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed range line {line} ({reason}): {content:?}")]
pub struct MalformedLine {
    /// 1-based line number within the response body.
    pub line: usize,
    pub content: String,
    pub reason: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] MalformedLine),
}

pub type Result<T> = std::result::Result<T, Error>;
