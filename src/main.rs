use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use qiita_feed::config::Config;
use qiita_feed::feed::QiitaFeed;
use qiita_feed::presenter::Presenter;
use qiita_feed::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let log_file = std::fs::File::create("qiita-feed.log")?;
    tracing_subscriber::fmt()
        .with_env_filter("qiita_feed=info")
        .with_writer(log_file)
        .init();

    let config = Config::load(Path::new("config.toml"))?;

    let feed = Arc::new(QiitaFeed::new(&config.feed)?);
    let (presenter, outcome_rx) = Presenter::new(feed, config.feed.page, config.feed.per_page);

    tui::run_tui(presenter, outcome_rx).await
}
