use std::collections::HashMap;
use std::sync::LazyLock;

use url::Url;

use crate::dom::Document;
use crate::host::canonical_host;
use crate::hosts::HOSTS;
use crate::model::RecipeSchema;

/// A per-host extractor: pure, deterministic, no I/O.
pub type HostExtractor = fn(&Document, &Url) -> RecipeSchema;

/// Built on first use, read-only afterwards.
static REGISTRY: LazyLock<HashMap<&'static str, HostExtractor>> =
    LazyLock::new(|| HOSTS.iter().copied().collect());

/// The extractor registered for `host`, if any. `host` is canonicalized first.
pub fn lookup(host: &str) -> Option<HostExtractor> {
    REGISTRY.get(canonical_host(host).as_str()).copied()
}

/// Like [`lookup`], but falls back to [`generic`] on a miss. The flag tells
/// whether a host-specific extractor was found.
pub fn lookup_or_generic(host: &str) -> (HostExtractor, bool) {
    match lookup(host) {
        Some(extractor) => (extractor, true),
        None => (generic, false),
    }
}

/// Extractor for unknown hosts. It contributes nothing of its own, so the
/// record comes entirely from the page's structured data.
pub fn generic(_doc: &Document, _url: &Url) -> RecipeSchema {
    RecipeSchema::default()
}

/// Every registered host key, sorted.
pub fn supported_hosts() -> Vec<&'static str> {
    let mut hosts: Vec<&'static str> = REGISTRY.keys().copied().collect();
    hosts.sort_unstable();
    hosts
}
