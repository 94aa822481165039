//! Multi-site recipe extraction.
//!
//! Given the URL of a recipe page, fetch it, read whatever the page publishes
//! (JSON-LD, microdata, site-specific markup), and return one normalized
//! schema.org `Recipe` record.
//!
//! ```no_run
//! # async fn example() -> Result<(), recipe_scraper::ScrapeError> {
//! let recipe = recipe_scraper::scrape("https://www.bbc.co.uk/food/recipes/easy_pancakes_76863").await?;
//! println!("{} ({} servings)", recipe.name, recipe.recipe_yield);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetchers;
pub mod host;
pub mod hosts;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod pipelines;
pub mod registry;
pub mod structured;

// Re-export commonly used types
pub use builder::{Scraper, ScraperBuilder};
pub use config::ScraperConfig;
pub use error::{ErrorKind, FetchError, ScrapeError};
pub use host::canonical_host;
pub use model::{NutritionSchema, RecipeSchema};
pub use pipelines::Stage;
pub use registry::supported_hosts;

/// Fetch a recipe page and extract its recipe
///
/// Uses [`ScraperConfig::load`] for timeout, user agent and deny-list, and the
/// built-in reqwest fetcher.
///
/// # Arguments
/// * `url` - Absolute http(s) URL of the recipe page
///
/// # Returns
/// * `Ok(RecipeSchema)` - The merged, normalized recipe
/// * `Err(ScrapeError)` - See [`ErrorKind`] for the possible failures
pub async fn scrape(url: &str) -> Result<RecipeSchema, ScrapeError> {
    let config = ScraperConfig::load()?;
    Scraper::from_config(&config)?.scrape(url).await
}

/// Extract a recipe from markup already fetched from `url`, without any I/O.
pub fn scrape_html(html: &str, url: &str) -> Result<RecipeSchema, ScrapeError> {
    pipelines::html::process(html, url)
}
