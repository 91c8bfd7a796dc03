use std::borrow::Cow;

use super::state::FeedView;
use crate::presenter::Presenter;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn draw(f: &mut Frame, presenter: &Presenter, view: &FeedView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_articles(f, presenter, view, chunks[0]);
    draw_detail(f, presenter, view, chunks[1]);
    draw_status(f, presenter, view, chunks[2]);
    draw_footer(f, chunks[3]);
}

fn draw_articles(f: &mut Frame, presenter: &Presenter, view: &FeedView, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;

    if presenter.item_count() == 0 {
        let msg = if view.refreshing {
            "Fetching articles..."
        } else {
            "No articles"
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                msg,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to refresh",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .title(" Qiita Articles ")
            .borders(Borders::ALL);
        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    // Date column is fixed; author is dropped on narrow terminals and the
    // title takes whatever is left.
    let show_author = inner_width >= 48;
    let fixed: usize = 10 + if show_author { 18 } else { 0 };
    let title_w = inner_width.saturating_sub(fixed + 2).max(4);

    let mut headers = vec!["Date", "Title"];
    if show_author {
        headers.push("Author");
    }
    let header = Row::new(headers).style(Style::default().add_modifier(Modifier::BOLD));

    let mut constraints = vec![
        Constraint::Length(10),
        Constraint::Length(title_w as u16),
    ];
    if show_author {
        constraints.push(Constraint::Length(18));
    }

    let rows: Vec<Row> = presenter
        .articles()
        .iter()
        .map(|a| {
            let mut cells = vec![
                Cell::from(created_date(&a.created_at).to_string())
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(truncate_with_ellipsis(&a.title, title_w).into_owned()),
            ];
            if show_author {
                cells.push(
                    Cell::from(format!("@{}", truncate_with_ellipsis(&a.author.name, 17)))
                        .style(Style::default().fg(Color::Cyan)),
                );
            }
            Row::new(cells)
        })
        .collect();

    let total = presenter.item_count();
    let title = format!(" Qiita Articles [{}/{}] ", view.selected + 1, total);

    let table = Table::new(rows, constraints)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut table_state = TableState::default();
    table_state.select(Some(view.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_detail(f: &mut Frame, presenter: &Presenter, view: &FeedView, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines = match presenter.item_at(view.selected) {
        Ok(article) => vec![
            Line::from(Span::styled(
                truncate_with_ellipsis(&article.title, inner_width).into_owned(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("by {}", article.author.name),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("  \u{00b7}  {}", article.created_at),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(Span::styled(
                truncate_with_ellipsis(&article.author.avatar_url, inner_width).into_owned(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Err(_) => vec![Line::from(Span::styled(
            "No article selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let block = Block::default().title(" Article ").borders(Borders::ALL);
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, presenter: &Presenter, view: &FeedView, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(
            " {} articles \u{00b7} page {}",
            presenter.item_count(),
            presenter.page()
        ),
        Style::default().fg(Color::DarkGray),
    )];
    if view.refreshing {
        spans.push(Span::styled(
            " \u{00b7} fetching...",
            Style::default().fg(Color::Yellow),
        ));
    }
    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("  [q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit  "),
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw("efresh  "),
        Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
        Span::raw(" move  "),
        Span::styled("[g/G]", Style::default().fg(Color::Yellow)),
        Span::raw(" top/bottom  "),
    ]);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}

/// Date part of a Qiita timestamp ("2024-01-15T09:30:00+09:00" -> "2024-01-15").
/// Timestamps are displayed as-is, never parsed.
fn created_date(created_at: &str) -> &str {
    created_at.get(..10).unwrap_or(created_at)
}

fn truncate_with_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    let char_count = s.chars().count();
    if char_count <= max_width {
        Cow::Borrowed(s)
    } else if max_width <= 3 {
        Cow::Owned(".".repeat(max_width))
    } else {
        let end = s
            .char_indices()
            .nth(max_width - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        Cow::Owned(format!("{}...", &s[..end]))
    }
}
