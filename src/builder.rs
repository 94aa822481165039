use std::collections::HashSet;
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::host::canonical_host;
use crate::model::RecipeSchema;
use crate::pipelines;

/// A configured scraper: one fetcher and a deny-list, shared by every request.
///
/// `Scraper` holds no per-request state, so one instance can serve
/// concurrent `scrape` calls.
pub struct Scraper {
    fetcher: Box<dyn Fetcher>,
    deny_hosts: HashSet<String>,
}

impl Scraper {
    /// Create a new builder for configuring a scraper
    ///
    /// # Example
    /// ```no_run
    /// use recipe_scraper::Scraper;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let scraper = Scraper::builder().build()?;
    /// let recipe = scraper
    ///     .scrape("https://www.bbcgoodfood.com/recipes/classic-cottage-pie")
    ///     .await?;
    /// println!("{}", recipe.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::default()
    }

    /// Build a scraper with the reqwest fetcher from loaded configuration.
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let mut builder = Self::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone());
        for host in &config.deny_hosts {
            builder = builder.deny_host(host.clone());
        }
        builder.build()
    }

    /// Fetch `url` and extract its recipe.
    pub async fn scrape(&self, url: &str) -> Result<RecipeSchema, ScrapeError> {
        pipelines::url::process(self.fetcher.as_ref(), &self.deny_hosts, url).await
    }

    /// Extract a recipe from markup that was already fetched from `url`.
    pub fn scrape_html(&self, html: &str, url: &str) -> Result<RecipeSchema, ScrapeError> {
        pipelines::html::process(html, url)
    }

    /// Whether `host` is on the deny-list (after canonicalization).
    pub fn is_denied(&self, host: &str) -> bool {
        self.deny_hosts.contains(&canonical_host(host))
    }
}

/// Builder for [`Scraper`]
#[derive(Default)]
pub struct ScraperBuilder {
    fetcher: Option<Box<dyn Fetcher>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    deny_hosts: Vec<String>,
}

impl ScraperBuilder {
    /// Use a custom fetcher instead of the built-in reqwest one
    ///
    /// Timeout and user agent settings only apply to the built-in fetcher.
    ///
    /// # Example
    /// ```
    /// use async_trait::async_trait;
    /// use recipe_scraper::fetchers::{FetchedPage, Fetcher};
    /// use recipe_scraper::{FetchError, Scraper};
    /// use url::Url;
    ///
    /// struct Offline;
    ///
    /// #[async_trait]
    /// impl Fetcher for Offline {
    ///     async fn fetch(&self, _url: &Url) -> Result<FetchedPage, FetchError> {
    ///         Err(FetchError::Canceled)
    ///     }
    /// }
    ///
    /// let scraper = Scraper::builder().fetcher(Offline).build().unwrap();
    /// ```
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::Scraper;
    /// use std::time::Duration;
    ///
    /// let builder = Scraper::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the User-Agent header sent by the built-in fetcher
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Refuse to fetch `host` unless a host-specific extractor exists for it
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::Scraper;
    ///
    /// let scraper = Scraper::builder()
    ///     .deny_host("www.example.com")
    ///     .build()
    ///     .unwrap();
    /// assert!(scraper.is_denied("example.com"));
    /// ```
    pub fn deny_host(mut self, host: impl Into<String>) -> Self {
        self.deny_hosts.push(host.into());
        self
    }

    /// Build the scraper
    ///
    /// # Returns
    /// * `Ok(Scraper)` - Ready to scrape
    /// * `Err(ScrapeError::Fetch)` - If the built-in HTTP client could not be created
    pub fn build(self) -> Result<Scraper, ScrapeError> {
        let fetcher: Box<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(RequestFetcher::new(
                self.timeout,
                self.user_agent.as_deref(),
            )?),
        };

        Ok(Scraper {
            fetcher,
            deny_hosts: self
                .deny_hosts
                .iter()
                .map(|host| canonical_host(host))
                .filter(|host| !host.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deny_hosts_are_canonicalized() {
        let scraper = Scraper::builder()
            .deny_host("WWW.Example.com:8080")
            .deny_host("m.recipes.example")
            .deny_host("  ")
            .build()
            .unwrap();
        assert!(scraper.is_denied("example.com"));
        assert!(scraper.is_denied("www.recipes.example"));
        assert!(!scraper.is_denied("other.example"));
        assert_eq!(scraper.deny_hosts.len(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = ScraperConfig {
            deny_hosts: vec!["www.blocked.example".to_string()],
            ..Default::default()
        };
        let scraper = Scraper::from_config(&config).unwrap();
        assert!(scraper.is_denied("blocked.example"));
    }
}
