use engine_logging::{engine_debug, engine_warn};

use crate::decode::decode_page;
use crate::extract::ContentExtractor;
use crate::fetch::PageFetcher;
use crate::RawPageResult;

/// One-page-at-a-time scraping pipeline: fetch, decode, extract.
///
/// Scraping is best-effort across many independent sources, so every
/// failure is caught at the per-URL boundary and becomes an empty
/// `RawPageResult`. Nothing here propagates as a hard stop.
pub struct Harvester<F: PageFetcher> {
    fetcher: F,
    extractor: ContentExtractor,
}

impl<F: PageFetcher> Harvester<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            extractor: ContentExtractor,
        }
    }

    /// Visit one URL and extract its content. Empty result on any failure.
    pub async fn harvest_page(&self, url: &str) -> RawPageResult {
        let output = match self.fetcher.fetch(url).await {
            Ok(output) => output,
            Err(err) => {
                engine_warn!("Error scraping {}: {}", url, err);
                return RawPageResult::default();
            }
        };

        let decoded = match decode_page(&output.bytes, output.metadata.content_type.as_deref()) {
            Ok(decoded) => decoded,
            Err(err) => {
                engine_warn!("Error scraping {}: {}", url, err);
                return RawPageResult::default();
            }
        };

        let result = self.extractor.extract(&decoded.html);
        engine_debug!(
            "Harvested {}: {} items, {} images",
            url,
            result.items.len(),
            result.images.len()
        );
        result
    }

    /// Visit URLs strictly one after another. Each fetch owns its own
    /// session; there is no reuse between pages.
    pub async fn harvest_all(&self, urls: &[&str]) -> Vec<(String, RawPageResult)> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            let result = self.harvest_page(url).await;
            results.push((url.to_string(), result));
        }
        results
    }
}
