use std::sync::Arc;
use tokio::sync::mpsc;

use crate::error::IndexError;
use crate::feed::{Article, ArticleFeed, FetchOutcome};

/// How many fetch outcomes may queue before a refresh task has to wait.
const OUTCOME_CHANNEL_CAPACITY: usize = 16;

/// Owns the article list the UI renders, plus the paging parameters used to
/// refill it. Fetches run on spawned tasks; their outcomes come back through
/// the channel returned by `new` and are folded in with `apply`, so the list
/// only ever changes on the UI task.
pub struct Presenter {
    feed: Arc<dyn ArticleFeed>,
    page: u32,
    per_page: u32,
    articles: Vec<Article>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
}

impl Presenter {
    pub fn new(
        feed: Arc<dyn ArticleFeed>,
        page: u32,
        per_page: u32,
    ) -> (Self, mpsc::Receiver<FetchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
        let presenter = Self {
            feed,
            page,
            per_page,
            articles: Vec::new(),
            outcome_tx,
        };
        (presenter, outcome_rx)
    }

    /// Kick off a fetch in the background. The outcome arrives on the receiver
    /// returned from `new`.
    pub fn refresh(&self) {
        let feed = Arc::clone(&self.feed);
        let tx = self.outcome_tx.clone();
        let (page, per_page) = (self.page, self.per_page);
        tokio::spawn(async move {
            let outcome = feed.fetch_page(page, per_page).await;
            // Receiver gone means the UI already exited.
            let _ = tx.send(outcome).await;
        });
    }

    /// Fold one fetch outcome into the list. A success replaces the whole
    /// list and returns true; a failure is logged and leaves the current
    /// list untouched, returning false.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            Ok(articles) => {
                tracing::info!(count = articles.len(), page = self.page, "feed refreshed");
                self.articles = articles;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "feed refresh failed; keeping current list");
                false
            }
        }
    }

    pub fn item_count(&self) -> usize {
        self.articles.len()
    }

    /// The article shown at a display row.
    pub fn item_at(&self, index: usize) -> Result<&Article, IndexError> {
        self.articles.get(index).ok_or(IndexError {
            index,
            len: self.articles.len(),
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn page(&self) -> u32 {
        self.page
    }
}
