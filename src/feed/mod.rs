pub mod qiita;
pub mod types;

use async_trait::async_trait;

use crate::error::FetchError;

pub use qiita::QiitaFeed;
pub use types::{Article, Author};

/// What one fetch produced, as posted back to the UI task.
pub type FetchOutcome = Result<Vec<Article>, FetchError>;

/// A paged source of articles. Fetches run on spawned tasks, never on the
/// UI task, so implementations must be shareable across tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleFeed: Send + Sync {
    /// Fetch one page of articles in server order.
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Article>, FetchError>;
}
