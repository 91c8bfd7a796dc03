use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::types::{Article, QiitaItem};
use super::ArticleFeed;
use crate::config::FeedConfig;
use crate::error::FetchError;

/// Article source backed by the public Qiita REST API (`/api/v2/items`).
pub struct QiitaFeed {
    client: Client,
    base_url: String,
}

impl QiitaFeed {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let mut builder = Client::builder().pool_max_idle_per_host(4);
        if let Some(secs) = config.request_timeout_s {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn items_url(&self, page: u32, per_page: u32) -> String {
        format!("{}/items?page={}&per_page={}", self.base_url, page, per_page)
    }

    /// Decode a response body into articles, preserving server order.
    ///
    /// Pure (no I/O) so tests can exercise the decoding without a network.
    pub fn decode_articles(body: &[u8]) -> Result<Vec<Article>, FetchError> {
        let items: Vec<QiitaItem> = serde_json::from_slice(body)?;
        Ok(items.into_iter().map(Article::from).collect())
    }
}

#[async_trait]
impl ArticleFeed for QiitaFeed {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Article>, FetchError> {
        let url = self.items_url(page, per_page);
        let resp = self.client.get(&url).send().await?;
        let body = resp.error_for_status()?.bytes().await?;
        Self::decode_articles(&body)
    }
}
