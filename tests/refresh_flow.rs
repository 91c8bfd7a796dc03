//! Integration tests for the fetch-to-presented-list flow.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use qiita_feed::error::{FetchError, IndexError};
use qiita_feed::feed::{Article, ArticleFeed, Author, FetchOutcome};
use qiita_feed::presenter::Presenter;

/// Feed that serves scripted outcomes one per fetch, in order.
struct ScriptedFeed {
    outcomes: Mutex<VecDeque<FetchOutcome>>,
}

impl ScriptedFeed {
    fn new(outcomes: Vec<FetchOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ArticleFeed for ScriptedFeed {
    async fn fetch_page(&self, _page: u32, _per_page: u32) -> Result<Vec<Article>, FetchError> {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        created_at: "2024-01-01T00:00:00+09:00".to_string(),
        author: Author {
            name: "u1".to_string(),
            avatar_url: "http://example.com/u1.png".to_string(),
        },
    }
}

fn decode_error() -> FetchError {
    serde_json::from_str::<Vec<i32>>("not json").unwrap_err().into()
}

/// A reqwest error built without touching the network: the URL is invalid,
/// so `send` fails before any connection is made.
async fn network_error() -> FetchError {
    reqwest::Client::new()
        .get("http://[invalid-url")
        .send()
        .await
        .unwrap_err()
        .into()
}

async fn refresh_and_apply(presenter: &mut Presenter, rx: &mut mpsc::Receiver<FetchOutcome>) -> bool {
    presenter.refresh();
    let outcome = rx.recv().await.expect("fetch task should post an outcome");
    presenter.apply(outcome)
}

#[tokio::test]
async fn test_startup_fetch_populates_list_in_server_order() {
    let feed = ScriptedFeed::new(vec![Ok(vec![
        article("first"),
        article("second"),
        article("third"),
    ])]);
    let (mut presenter, mut rx) = Presenter::new(Arc::new(feed), 1, 20);

    assert!(refresh_and_apply(&mut presenter, &mut rx).await);

    assert_eq!(presenter.item_count(), 3);
    assert_eq!(presenter.item_at(0).unwrap().title, "first");
    assert_eq!(presenter.item_at(1).unwrap().title, "second");
    assert_eq!(presenter.item_at(2).unwrap().title, "third");
}

#[tokio::test]
async fn test_single_fetched_article_is_presented() {
    let feed = ScriptedFeed::new(vec![Ok(vec![article("A")])]);
    let (mut presenter, mut rx) = Presenter::new(Arc::new(feed), 1, 20);

    refresh_and_apply(&mut presenter, &mut rx).await;

    assert_eq!(presenter.item_count(), 1);
    assert_eq!(presenter.item_at(0).unwrap().title, "A");
}

#[tokio::test]
async fn test_decode_failure_preserves_previous_list() {
    let feed = ScriptedFeed::new(vec![
        Ok(vec![article("kept-1"), article("kept-2")]),
        Err(decode_error()),
    ]);
    let (mut presenter, mut rx) = Presenter::new(Arc::new(feed), 1, 20);

    assert!(refresh_and_apply(&mut presenter, &mut rx).await);
    assert!(!refresh_and_apply(&mut presenter, &mut rx).await);

    assert_eq!(presenter.item_count(), 2);
    assert_eq!(presenter.item_at(0).unwrap().title, "kept-1");
    assert_eq!(presenter.item_at(1).unwrap().title, "kept-2");
}

#[tokio::test]
async fn test_network_failure_preserves_previous_list() {
    let net_err = network_error().await;
    assert!(matches!(net_err, FetchError::Network(_)));

    let feed = ScriptedFeed::new(vec![Ok(vec![article("kept")]), Err(net_err)]);
    let (mut presenter, mut rx) = Presenter::new(Arc::new(feed), 1, 20);

    assert!(refresh_and_apply(&mut presenter, &mut rx).await);
    assert!(!refresh_and_apply(&mut presenter, &mut rx).await);

    assert_eq!(presenter.item_count(), 1);
    assert_eq!(presenter.item_at(0).unwrap().title, "kept");
}

#[tokio::test]
async fn test_refresh_replaces_list_wholesale() {
    let feed = ScriptedFeed::new(vec![
        Ok(vec![article("a"), article("b"), article("c")]),
        Ok(vec![article("fresh")]),
    ]);
    let (mut presenter, mut rx) = Presenter::new(Arc::new(feed), 1, 20);

    refresh_and_apply(&mut presenter, &mut rx).await;
    assert_eq!(presenter.item_count(), 3);

    refresh_and_apply(&mut presenter, &mut rx).await;
    assert_eq!(presenter.item_count(), 1);
    assert_eq!(presenter.item_at(0).unwrap().title, "fresh");
}

#[tokio::test]
async fn test_out_of_bounds_row_is_an_index_error() {
    let feed = ScriptedFeed::new(vec![Ok(vec![article("only")])]);
    let (mut presenter, mut rx) = Presenter::new(Arc::new(feed), 1, 20);
    refresh_and_apply(&mut presenter, &mut rx).await;

    let err = presenter.item_at(2).unwrap_err();
    assert_eq!(err, IndexError { index: 2, len: 1 });
    assert_eq!(
        err.to_string(),
        "article index 2 out of bounds (list has 1 items)"
    );
}

#[tokio::test]
async fn test_empty_feed_presents_empty_list() {
    let feed = ScriptedFeed::new(vec![Ok(Vec::new())]);
    let (mut presenter, mut rx) = Presenter::new(Arc::new(feed), 1, 20);

    assert!(refresh_and_apply(&mut presenter, &mut rx).await);

    assert_eq!(presenter.item_count(), 0);
    assert_eq!(presenter.item_at(0).unwrap_err(), IndexError { index: 0, len: 0 });
}
