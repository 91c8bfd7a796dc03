pub mod render;
pub mod state;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures_util::StreamExt;
use ratatui::prelude::*;
use state::FeedView;
use std::io::stdout;
use tokio::sync::mpsc;

use crate::feed::FetchOutcome;
use crate::presenter::Presenter;

/// Run the TUI until the user quits. Fetch outcomes from the presenter's
/// background tasks arrive on `outcome_rx`.
pub async fn run_tui(
    presenter: Presenter,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = tui_loop(&mut terminal, presenter, outcome_rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut presenter: Presenter,
    mut outcome_rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let mut view = FeedView::new();
    let mut events = EventStream::new();

    // Initial load. 'r' re-fetches on demand after that.
    presenter.refresh();
    view.refreshing = true;

    loop {
        terminal.draw(|f| render::draw(f, &presenter, &view))?;

        tokio::select! {
            Some(outcome) = outcome_rx.recv() => {
                view.refreshing = false;
                if presenter.apply(outcome) {
                    view.clamp_selection(presenter.item_count());
                }
            }
            Some(event) = events.next() => {
                if let Event::Key(key) = event? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('r') => {
                            view.refreshing = true;
                            presenter.refresh();
                        }
                        KeyCode::Char('j') | KeyCode::Down => {
                            view.select_next(presenter.item_count())
                        }
                        KeyCode::Char('k') | KeyCode::Up => view.select_previous(),
                        KeyCode::Char('g') | KeyCode::Home => view.select_first(),
                        KeyCode::Char('G') | KeyCode::End => {
                            view.select_last(presenter.item_count())
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
