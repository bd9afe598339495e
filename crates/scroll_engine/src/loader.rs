use scroll_core::PageOutcome;
use scroll_logging::{scroll_debug, scroll_warn};
use url::Url;

use crate::{decode_page, DecodeError, FetchError, Fetcher, ListingSnapshot, MarkupReader};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid listing url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// The starting page of a listing, read but not yet handed to the controller.
#[derive(Debug, Clone)]
pub struct LoadedListing {
    pub location: Url,
    pub snapshot: ListingSnapshot,
}

/// Fetches listing pages and turns them into controller inputs.
pub struct PageLoader<F, M> {
    fetcher: F,
    markup: M,
}

impl<F: Fetcher, M: MarkupReader> PageLoader<F, M> {
    pub fn new(fetcher: F, markup: M) -> Self {
        Self { fetcher, markup }
    }

    /// Loads the page the user starts on. Any failure here is fatal to the caller.
    pub async fn load_listing(&self, url: &str) -> Result<LoadedListing, LoadError> {
        let location = Url::parse(url).map_err(|source| LoadError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let response = self.fetcher.fetch(location.as_str()).await?;
        let page = decode_page(&response)?;
        scroll_debug!(
            "Loaded listing {} ({} bytes, {})",
            response.url,
            response.body.len(),
            page.encoding
        );
        // Follow-up pages are addressed from where the redirects ended.
        let location = Url::parse(&response.url).unwrap_or(location);
        Ok(LoadedListing {
            location,
            snapshot: self.markup.read_listing(&page.html),
        })
    }

    /// Loads one follow-up page. Never fails: every error becomes an outcome.
    pub async fn load_page(&self, url: &str) -> PageOutcome {
        let response = match self.fetcher.fetch(url).await {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return PageOutcome::NotFound,
            Err(err) => {
                scroll_warn!("Fetching {} failed: {}", url, err);
                return PageOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };
        match decode_page(&response) {
            Ok(page) => PageOutcome::Items(self.markup.extract_items(&page.html)),
            Err(err) => {
                scroll_warn!("Decoding {} failed: {}", url, err);
                PageOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
