use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::{FetchedPage, Fetcher};
use crate::config::default_user_agent;
use crate::error::FetchError;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, FetchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let default_agent = default_user_agent();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(&default_agent))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for RequestFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        let final_url = response.url().clone();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        if final_url != *url {
            debug!("RequestFetcher: {} redirected to {}", url, final_url);
        }

        let body = response.bytes().await?.to_vec();
        Ok(FetchedPage { body, final_url })
    }
}
