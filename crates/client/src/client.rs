// ABOUTME: The Client struct tying fetch, cache, and section parsing together.
// ABOUTME: page_sections() is the graceful page path: fetch failure means None, never a panic.

use docpage_sections::{parse_sections, DocSection};

use crate::cache::DocCache;
use crate::error::FetchError;
use crate::fetch::{fetch, FetchOptions};
use crate::options::{ClientBuilder, Options};

/// Client for fetching and parsing a document's HTML export.
pub struct Client {
    opts: Options,
    http: reqwest::Client,
}

impl Client {
    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http = match &opts.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .timeout(opts.timeout)
                .user_agent(opts.user_agent.clone())
                .build()
                .unwrap_or_default(),
        };
        Self { opts, http }
    }

    /// Start building a Client with custom configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a cache sized from this client's options, for use with
    /// [`Client::fetch_export_cached`].
    pub fn new_cache(&self) -> DocCache {
        DocCache::new(self.opts.cache_ttl, self.opts.cache_capacity)
    }

    /// Fetch the export body for a document URL.
    pub async fn fetch_export(&self, url: &str) -> Result<String, FetchError> {
        let opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };
        let result = fetch(&self.http, url, &opts).await?;
        Ok(result.text())
    }

    /// Fetch the export body, consulting the caller's cache first.
    pub async fn fetch_export_cached(
        &self,
        url: &str,
        cache: &mut DocCache,
    ) -> Result<String, FetchError> {
        if let Some(body) = cache.get(url) {
            return Ok(body);
        }
        let body = self.fetch_export(url).await?;
        cache.insert(url, body.clone());
        Ok(body)
    }

    /// Fetch and parse a document into page sections.
    ///
    /// This is the per-render path: a failed fetch logs a warning and
    /// yields `None`, which templates treat as "render the fallback".
    /// A successful fetch of an empty or unusable document yields
    /// `Some` with an empty vector.
    pub async fn page_sections(&self, url: &str) -> Option<Vec<DocSection>> {
        match self.fetch_export(url).await {
            Ok(body) => Some(parse_sections(&body)),
            Err(err) => {
                log::warn!("export fetch failed for {}: {}", url, err);
                None
            }
        }
    }

    /// Cached variant of [`Client::page_sections`].
    pub async fn page_sections_cached(
        &self,
        url: &str,
        cache: &mut DocCache,
    ) -> Option<Vec<DocSection>> {
        match self.fetch_export_cached(url, cache).await {
            Ok(body) => Some(parse_sections(&body)),
            Err(err) => {
                log::warn!("export fetch failed for {}: {}", url, err);
                None
            }
        }
    }
}
