//! Page fetching. The pipeline only depends on the [`Fetcher`] trait; the
//! reqwest-backed [`RequestFetcher`] is the default implementation.

mod request;

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

pub use request::RequestFetcher;

/// A fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: Vec<u8>,
    /// The URL after redirects. Host lookup and relative links use this.
    pub final_url: Url,
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url`. Implementations report cancellation as
    /// [`FetchError::Canceled`].
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}
