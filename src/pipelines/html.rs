use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};
use url::Url;

use super::{Stage, StageTracker};
use crate::dom::Document;
use crate::error::ScrapeError;
use crate::host::host_key;
use crate::merge;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::registry::{self, HostExtractor};
use crate::structured;

/// Extract a recipe from an already fetched page.
///
/// `url` is the address the page was served from. It selects the per-host
/// extractor, resolves relative links and becomes the recipe URL when the
/// page declares none.
///
/// # Arguments
/// * `html` - The page markup
/// * `url` - Absolute http(s) URL of the page
///
/// # Returns
/// * `Ok(RecipeSchema)` - The merged, normalized recipe
/// * `Err(ScrapeError)` - `BadUrl`, `Parse`, `UnsupportedHost` or `EmptyRecipe`
pub fn process(html: &str, url: &str) -> Result<RecipeSchema, ScrapeError> {
    let mut tracker = StageTracker::new(url);
    let base = super::url::validate(url).map_err(|e| tracker.fail(e))?;
    tracker.advance(Stage::UrlValidated);
    tracker.advance(Stage::HostResolved);
    tracker.advance(Stage::Fetched);
    extract(html.as_bytes(), &base, &mut tracker)
}

/// Parse, extract, merge and normalize a fetched body.
///
/// The parsed DOM is not `Send`; it must never live across an `.await`.
pub(crate) fn extract(
    body: &[u8],
    base: &Url,
    tracker: &mut StageTracker<'_>,
) -> Result<RecipeSchema, ScrapeError> {
    extract_with(body, base, tracker, registry::lookup_or_generic)
}

/// [`extract`] with the extractor lookup passed in.
fn extract_with(
    body: &[u8],
    base: &Url,
    tracker: &mut StageTracker<'_>,
    lookup: fn(&str) -> (HostExtractor, bool),
) -> Result<RecipeSchema, ScrapeError> {
    let document = Document::parse(body).map_err(|e| tracker.fail(e))?;
    tracker.advance(Stage::Parsed);

    let host = host_key(base).unwrap_or_default();
    let (extractor, specific) = lookup(&host);
    let structured = structured::extract_recipes(&document, base);
    debug!(
        "{}: {} structured candidate(s), host extractor: {}",
        base,
        structured.len(),
        if specific { host.as_str() } else { "generic" }
    );

    let Some(mut from_host) = run_extractor(extractor, &document, base) else {
        warn!("Extractor for {} panicked on {}", host, base);
        return Err(tracker.fail(ScrapeError::EmptyRecipe));
    };
    drop(document);

    if !specific && structured.is_empty() {
        return Err(tracker.fail(ScrapeError::UnsupportedHost(host)));
    }
    normalize::normalize_recipe(&mut from_host, base);
    tracker.advance(Stage::Extracted);

    let mut recipe = merge::merge(from_host, structured, base);
    tracker.advance(Stage::Merged);

    normalize::normalize_recipe(&mut recipe, base);
    tracker.advance(Stage::Normalized);

    if recipe.name.is_empty() {
        return Err(tracker.fail(ScrapeError::EmptyRecipe));
    }
    tracker.advance(Stage::Done);
    Ok(recipe)
}

/// Run a host extractor, turning a panic into `None`.
fn run_extractor(extractor: HostExtractor, doc: &Document, url: &Url) -> Option<RecipeSchema> {
    panic::catch_unwind(AssertUnwindSafe(|| extractor(doc, url))).ok()
}
