use std::collections::HashSet;

use url::Url;

use super::{Stage, StageTracker};
use crate::error::ScrapeError;
use crate::fetchers::Fetcher;
use crate::host::host_key;
use crate::model::RecipeSchema;
use crate::registry;

/// Parse `url` and check it is an absolute http(s) URL with a host.
pub fn validate(url: &str) -> Result<Url, ScrapeError> {
    let parsed = Url::parse(url.trim()).map_err(|e| ScrapeError::BadUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScrapeError::BadUrl(format!(
            "{url}: unsupported scheme {}",
            parsed.scheme()
        )));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ScrapeError::BadUrl(format!("{url}: missing host")));
    }
    Ok(parsed)
}

/// Process a URL to extract a recipe
///
/// This pipeline:
/// 1. Validates the URL and resolves its canonical host
/// 2. Refuses denied hosts that have no extractor of their own, before fetching
/// 3. Fetches the page with `fetcher`
/// 4. Hands the body and the final URL (after redirects) to [`super::html`]
pub async fn process(
    fetcher: &dyn Fetcher,
    deny_hosts: &HashSet<String>,
    url: &str,
) -> Result<RecipeSchema, ScrapeError> {
    let mut tracker = StageTracker::new(url);

    let request_url = validate(url).map_err(|e| tracker.fail(e))?;
    tracker.advance(Stage::UrlValidated);

    let host = host_key(&request_url).unwrap_or_default();
    tracker.advance(Stage::HostResolved);
    if registry::lookup(&host).is_none() && deny_hosts.contains(&host) {
        return Err(tracker.fail(ScrapeError::UnsupportedHost(host)));
    }

    let page = fetcher
        .fetch(&request_url)
        .await
        .map_err(|e| tracker.fail(e.into()))?;
    tracker.advance(Stage::Fetched);

    super::html::extract(&page.body, &page.final_url, &mut tracker)
}
