use thiserror::Error;

/// Failure modes of a feed fetch. These never reach the UI: the presenter
/// logs them and keeps the previously fetched list on screen.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure: connect, TLS, read, or a non-success status.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not a JSON array of well-formed articles.
    #[error("failed to decode feed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Out-of-bounds row query against the presenter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("article index {index} out of bounds (list has {len} items)")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}
