#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lookup(#[from] hibp_range_client::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No passwords given. Pass them as arguments or one per line on stdin.")]
    NoPasswords,
}
