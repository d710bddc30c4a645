use thiserror::Error;

/// Errors that can occur while acquiring corpus text.
#[derive(Error, Debug)]
pub enum FetchError {
    /// I/O error reading or writing the cache.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Upstream returned a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// Cache miss while running offline.
    #[error("offline and not cached: {key}")]
    NotCached {
        /// Cache key that missed.
        key: String,
    },
    /// Response body is not valid UTF-8.
    #[error("invalid UTF-8 in response body: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Response body is not the expected JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
