use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::extractor::{ExtractionResult, PageExtractor};
use crate::fetcher::Fetcher;

/// Drives the fetch-then-extract loop over a batch of URLs. One page's
/// failure never aborts the rest: it becomes a failure record and the
/// loop moves on.
pub struct CrawlRunner {
    fetcher: Fetcher,
    extractor: PageExtractor,
    delay_ms: u64,
}

impl CrawlRunner {
    pub fn new(config: &Config) -> crate::Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(&config.fetch)?,
            extractor: PageExtractor::new(&config.extraction),
            delay_ms: config.fetch.delay_ms,
        })
    }

    pub async fn run(&self, urls: &[String]) -> Vec<ExtractionResult> {
        info!("🕷️  Starting batch crawl of {} URL(s)", urls.len());

        let mut results = Vec::with_capacity(urls.len());
        let mut fetched = 0usize;

        for (i, url) in urls.iter().enumerate() {
            info!("Crawling {} ({}/{})", url, i + 1, urls.len());

            match self.fetcher.fetch(url).await {
                Ok(page) => {
                    fetched += 1;
                    results.push(self.extractor.extract(&page.html, &page.final_url));
                }
                Err(e) => {
                    warn!("Failed to fetch {}: {}", url, e);
                    results.push(ExtractionResult::fetch_failure(url, &e.to_string()));
                }
            }

            if i + 1 < urls.len() && self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
        }

        info!(
            "🏁 Batch complete: {}/{} fetched successfully",
            fetched,
            urls.len()
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_delay_config() -> Config {
        let mut config = Config::default();
        config.fetch.delay_ms = 0;
        config
    }

    #[tokio::test]
    async fn unfetchable_urls_become_failure_records_and_the_batch_continues() {
        let runner = CrawlRunner::new(&no_delay_config()).unwrap();
        let urls = vec!["not a url".to_string(), "also-bad".to_string()];

        let results = runner.run(&urls).await;

        assert_eq!(results.len(), 2);
        for (result, url) in results.iter().zip(&urls) {
            assert_eq!(&result.url, url);
            assert!(result.socials.is_empty());
            assert!(result.emails.is_empty());
            assert!(result.phones.is_empty());
            assert!(result.name_candidates.is_empty());
            assert!(result.notes[0].starts_with("fetch failed: "));
        }
    }
}
