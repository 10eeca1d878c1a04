use reqwest::StatusCode;
use thiserror::Error;

/// All different error types this crate uses.
#[derive(Error, Debug)]
pub enum PagewordsError {
    /// Received a response, but not a `200 OK`.
    #[error("Failed to fetch {url}: Status code {status}")]
    NoHttpSuccess {
        /// The requested url.
        url: String,
        /// Status of the response.
        status: StatusCode,
    },
    /// Failed to get a response.
    #[error("Error fetching {url}: {error}")]
    HttpRequestFailure {
        /// The requested url.
        url: String,
        /// The reqwest error.
        error: reqwest::Error,
    },
    /// The keyword table has no column with the expected name.
    #[error("Keyword table has no `{column}` column")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
