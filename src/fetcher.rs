use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::FetchConfig;

pub struct FetchedPage {
    /// URL after redirects; hrefs are resolved against this.
    pub final_url: String,
    pub html: String,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> crate::Result<FetchedPage> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let final_url = response.url().to_string();
        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), final_url);

        Ok(FetchedPage { final_url, html })
    }
}
