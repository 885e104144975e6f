//! Drawing for the browser

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Focus, Status};
use crate::commands::search::format::human::{created_label, heading, tag_line, NO_MATCHES};
use kex_core::record::Sentiment;
use kex_core::selector::Dropdown;

/// Most dropdown rows shown at once
const DROPDOWN_ROWS: u16 = 8;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [form, topics, results, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [keyword_area, sentiment_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(24)]).areas(form);

    draw_keyword(frame, app, keyword_area);
    draw_sentiment(frame, app, sentiment_area);
    draw_topics(frame, app, topics);
    draw_results(frame, app, results);

    let status_style = match app.status {
        Status::Failed(_) => Style::default().fg(Color::Red),
        Status::FiltersChanged => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    };
    frame.render_widget(Paragraph::new(app.status_line()).style(status_style), status);
    frame.render_widget(
        Paragraph::new(help_text(app.focus)).style(Style::default().fg(Color::DarkGray)),
        help,
    );

    // Drawn last so it overlays the results.
    draw_dropdown(frame, app, topics, results);
}

fn block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_keyword(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Keyword;
    frame.render_widget(
        Paragraph::new(app.keyword.as_str()).block(block("Keyword".to_string(), focused)),
        area,
    );
    if focused {
        let x = area.x + 1 + app.keyword.chars().count() as u16;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_sentiment(frame: &mut Frame, app: &App, area: Rect) {
    let label = app.sentiment.map(|s| s.label()).unwrap_or("Any");
    let style = app
        .sentiment
        .map(sentiment_style)
        .unwrap_or_default();
    let line = Line::from(vec![
        Span::raw("< "),
        Span::styled(label, style),
        Span::raw(" >"),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(block(
            "Sentiment".to_string(),
            app.focus == Focus::Sentiment,
        )),
        area,
    );
}

fn draw_topics(frame: &mut Frame, app: &mut App, area: Rect) {
    app.hit.selector = area;
    let focused = app.focus == Focus::Topics;

    let mut spans = Vec::new();
    for (i, topic) in app.selector.selection().iter().enumerate() {
        let style = if focused && app.chip == Some(i) {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!("[{}]", topic), style));
        spans.push(Span::raw(" "));
    }
    let chips_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();

    let term = app.selector.search_term();
    if term.is_empty() && !focused {
        spans.push(Span::styled(
            "type to search topics",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(term.to_string()));
    }

    let count = app.selector.selection().len();
    let mut title = "Topics".to_string();
    if count > 0 {
        title.push_str(&format!(" ({} selected)", count));
    }
    title.push_str(if app.selector.is_open() { " [-]" } else { " [+]" });

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(block(title, focused)),
        area,
    );

    if focused {
        let x = area.x + 1 + (chips_width + term.chars().count()) as u16;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_dropdown(frame: &mut Frame, app: &mut App, topics: Rect, results: Rect) {
    app.hit.dropdown = None;
    let (lines, is_list): (Vec<(String, bool)>, bool) = match app.selector.dropdown() {
        Dropdown::Hidden => return,
        Dropdown::Empty(message) => (vec![(message, false)], false),
        Dropdown::Candidates(candidates) => {
            let visible = usize::from(DROPDOWN_ROWS.min(results.height.saturating_sub(2)).max(1));
            let offset = app.highlighted.saturating_sub(visible - 1);
            app.hit.dropdown_offset = offset;
            let rows = candidates
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .map(|(i, t)| (t.to_string(), i == app.highlighted))
                .collect();
            (rows, true)
        }
    };

    let height = (lines.len() as u16 + 2).min(results.height);
    let area = Rect::new(topics.x, topics.bottom(), topics.width, height);
    let items: Vec<ListItem> = lines
        .into_iter()
        .map(|(text, highlighted)| {
            let style = if highlighted {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL)),
        area,
    );

    if is_list {
        app.hit.dropdown = Some(Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        ));
    }
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let records = app.session.results();
    let focused = app.focus == Focus::Results;

    let lines: Vec<Line> = if records.is_empty() {
        let message = if app.session.has_searched() {
            NO_MATCHES
        } else {
            "No search yet"
        };
        vec![Line::styled(message, Style::default().fg(Color::DarkGray))]
    } else {
        let first = app.cursor.saturating_sub(1);
        records
            .iter()
            .enumerate()
            .skip(first)
            .flat_map(|(i, record)| {
                let view = app.session.view().render(record);
                let mut heading_style = Style::default().add_modifier(Modifier::BOLD);
                if focused && i == app.cursor {
                    heading_style = heading_style.add_modifier(Modifier::REVERSED);
                }
                let marker = if view.expanded { "v " } else { "> " };

                let mut lines = vec![
                    Line::styled(format!("{}{}", marker, heading(record)), heading_style),
                    Line::from(vec![
                        Span::raw(format!("  {}  Sentiment: ", created_label(record))),
                        Span::styled(record.sentiment.label(), sentiment_style(record.sentiment)),
                    ]),
                    Line::raw(format!("  {}", view.summary)),
                    Line::raw(format!("  Topics: {}", tag_line(&view.topics))),
                    Line::raw(format!("  Keywords: {}", tag_line(&view.keywords))),
                ];
                if let Some(text) = view.original_text {
                    lines.push(Line::raw("  Original text:"));
                    lines.extend(text.lines().map(|l| Line::raw(format!("    {}", l))));
                }
                lines.push(Line::raw(""));
                lines
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block("Results".to_string(), focused)),
        area,
    );
}

fn sentiment_style(sentiment: Sentiment) -> Style {
    match sentiment {
        Sentiment::Positive => Style::default().fg(Color::Green),
        Sentiment::Neutral => Style::default().fg(Color::Gray),
        Sentiment::Negative => Style::default().fg(Color::Red),
    }
}

fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Keyword => "Tab next  Enter/F5 search  Ctrl-L clear  Esc quit",
        Focus::Sentiment => "Left/Right change  Tab next  F5 search  Esc quit",
        Focus::Topics => {
            "type filter  Enter add  Up/Down move  Ctrl-P pick  Left/Right chips  Del remove  Ctrl-X clear  F2 open/close"
        }
        Focus::Results => "Up/Down move  Enter expand  d delete  F5 search  Esc quit",
    }
}
