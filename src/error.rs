use std::fmt;

use thiserror::Error;

/// Errors that can occur while scraping a recipe
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// URL is malformed or does not use the http(s) scheme
    #[error("Invalid recipe URL: {0}")]
    BadUrl(String),

    /// Host has no extractor and no usable structured data, or is denied
    #[error("Unsupported host: {0}")]
    UnsupportedHost(String),

    /// The fetcher failed (network, non-2xx status)
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[source] FetchError),

    /// The page could not be parsed as HTML at all
    #[error("Failed to parse page: {0}")]
    Parse(String),

    /// Extraction produced no recipe name
    #[error("No recipe found on this webpage")]
    EmptyRecipe,

    /// Cancellation signaled by the fetcher
    #[error("Request was canceled")]
    Canceled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Kind of a [`ScrapeError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadUrl,
    UnsupportedHost,
    Fetch,
    Parse,
    EmptyRecipe,
    Canceled,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::BadUrl => "bad url",
            ErrorKind::UnsupportedHost => "unsupported host",
            ErrorKind::Fetch => "fetch error",
            ErrorKind::Parse => "parse error",
            ErrorKind::EmptyRecipe => "empty recipe",
            ErrorKind::Canceled => "canceled",
            ErrorKind::Config => "configuration error",
        };
        write!(f, "{}", s)
    }
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::BadUrl(_) => ErrorKind::BadUrl,
            ScrapeError::UnsupportedHost(_) => ErrorKind::UnsupportedHost,
            ScrapeError::Fetch(_) => ErrorKind::Fetch,
            ScrapeError::Parse(_) => ErrorKind::Parse,
            ScrapeError::EmptyRecipe => ErrorKind::EmptyRecipe,
            ScrapeError::Canceled => ErrorKind::Canceled,
            ScrapeError::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether a caller may reasonably retry the same request.
    ///
    /// Only fetch failures qualify; the core itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScrapeError::Fetch(_))
    }
}

impl From<FetchError> for ScrapeError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Canceled => ScrapeError::Canceled,
            other => ScrapeError::Fetch(other),
        }
    }
}

/// Errors reported by a [`crate::fetchers::Fetcher`]
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    /// The fetch was canceled before completing
    #[error("Fetch canceled")]
    Canceled,

    /// Any other fetcher-specific failure
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}
