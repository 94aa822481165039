//! The dispatch pipeline: URL in, normalized [`crate::RecipeSchema`] out.
//!
//! [`url`] covers validation, the deny-list and fetching; [`html`] takes an
//! already fetched page through parsing, extraction, merge and normalization.

pub mod html;
pub mod url;

use std::fmt;

use log::debug;

use crate::error::{ErrorKind, ScrapeError};

/// Where a single scrape request currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    New,
    UrlValidated,
    HostResolved,
    Fetched,
    Parsed,
    Extracted,
    Merged,
    Normalized,
    Done,
    Failed(ErrorKind),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::New => write!(f, "new"),
            Stage::UrlValidated => write!(f, "url validated"),
            Stage::HostResolved => write!(f, "host resolved"),
            Stage::Fetched => write!(f, "fetched"),
            Stage::Parsed => write!(f, "parsed"),
            Stage::Extracted => write!(f, "extracted"),
            Stage::Merged => write!(f, "merged"),
            Stage::Normalized => write!(f, "normalized"),
            Stage::Done => write!(f, "done"),
            Stage::Failed(kind) => write!(f, "failed ({kind})"),
        }
    }
}

/// Tracks the stage of one request and logs every transition.
pub(crate) struct StageTracker<'a> {
    url: &'a str,
    stage: Stage,
}

impl<'a> StageTracker<'a> {
    pub(crate) fn new(url: &'a str) -> Self {
        Self {
            url,
            stage: Stage::New,
        }
    }

    pub(crate) fn advance(&mut self, next: Stage) {
        debug!("{}: {} -> {}", self.url, self.stage, next);
        self.stage = next;
    }

    /// Record a failure at the current stage and hand the error back.
    pub(crate) fn fail(&mut self, err: ScrapeError) -> ScrapeError {
        debug!("{}: failed after {}: {}", self.url, self.stage, err);
        self.stage = Stage::Failed(err.kind());
        err
    }

    #[cfg(test)]
    pub(crate) fn stage(&self) -> Stage {
        self.stage
    }
}
