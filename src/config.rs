use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Scraper configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Hosts that are never fetched unless a host-specific extractor exists.
    /// Entries are canonicalized when the scraper is built.
    #[serde(default)]
    pub deny_hosts: Vec<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            deny_hosts: Vec::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
        .to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPER__ prefix
    /// 2. recipe_scraper.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPER__TIMEOUT=10
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScraperConfig::load`] for the lookup order.
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_scraper").required(false))
        // RECIPE_SCRAPER__DENY_HOSTS takes a comma-separated list
        .add_source(
            Environment::with_prefix("RECIPE_SCRAPER")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("deny_hosts")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
