// Render functions

use super::state::AppMode;
use super::view::BoardView;
use crate::theme::Theme;
use cb_core::board::BoardMode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;

pub(super) fn render(frame: &mut Frame, view: &BoardView, theme: &Theme) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_bar(frame, chunks[0], view);
    render_alert(frame, chunks[1], view, theme);
    render_comments(frame, chunks[2], view, theme);
    render_editor(frame, chunks[3], view, theme);
    render_status_bar(frame, chunks[4], view);

    if view.state.mode == AppMode::Help {
        render_help(frame, area);
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, view: &BoardView) {
    let count = view.board().state().comments.len();
    let title = format!(" comment-board | {} comments ", count);
    frame.render_widget(
        Paragraph::new(title).style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

fn render_alert(frame: &mut Frame, area: Rect, view: &BoardView, theme: &Theme) {
    let line = match &view.board().state().alert {
        Some(alert) => Line::from(vec![
            Span::styled(
                format!(" {} ", alert.kind),
                Style::default()
                    .fg(Color::Black)
                    .bg(theme.alert(alert.kind))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(alert.message.as_str(), Style::default().fg(theme.alert(alert.kind))),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_comments(frame: &mut Frame, area: Rect, view: &BoardView, theme: &Theme) {
    let comments = &view.board().state().comments;
    let editing = view.board().state().editing;
    let border = if view.state.mode == AppMode::Normal {
        theme.focus_border
    } else {
        theme.unfocus_border
    };
    let block = Block::default()
        .title("Comments")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if comments.is_empty() {
        frame.render_widget(
            Paragraph::new("No comments yet. Press 'a' to write one.")
                .style(Style::default().fg(theme.muted))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = comments
        .iter()
        .map(|c| {
            let mut spans = vec![
                Span::styled(format!("#{:<4}", c.id.get()), Style::default().fg(Color::Cyan)),
                Span::raw(c.text.as_str()),
            ];
            if c.is_edited() {
                spans.push(Span::styled(" (edited)", Style::default().fg(theme.muted)));
            }
            if editing == Some(c.id) {
                spans.push(Span::styled(" [editing]", Style::default().fg(Color::Yellow)));
            }
            if let Some(created) = c.created_at {
                spans.push(Span::styled(
                    format!("  {}", created.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(theme.muted),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.selection).add_modifier(Modifier::BOLD));
    let mut list_state = ListState::default().with_selected(Some(view.state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_editor(frame: &mut Frame, area: Rect, view: &BoardView, theme: &Theme) {
    let title = match view.board().state().mode() {
        BoardMode::Composing => "New comment".to_string(),
        BoardMode::Editing(id) => format!("Editing #{}", id),
    };
    let border = if view.state.mode == AppMode::Insert {
        Color::Yellow
    } else {
        theme.unfocus_border
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draft = view.board().state().draft.as_str();
    frame.render_widget(
        Paragraph::new(draft)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false }),
        inner,
    );

    if view.state.mode == AppMode::Insert {
        let display_width = cursor_column(draft, view.state.editor_cursor);
        let cursor_x = inner
            .x
            .saturating_add(display_width as u16)
            .min(inner.x + inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

/// Terminal column of the char cursor `cursor` within `text`
fn cursor_column(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

fn render_status_bar(frame: &mut Frame, area: Rect, view: &BoardView) {
    let mode = match view.state.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Insert => "INSERT",
        AppMode::Help => "HELP",
    };

    let text = view.state.message.clone().unwrap_or_else(|| {
        let hint = match view.state.mode {
            AppMode::Insert => "Enter submit | Esc leave",
            _ => "a add | e edit | x delete | r reload | ? help | q quit",
        };
        format!(" {} | {} ", mode, hint)
    });

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "comment-board",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation", Style::default().fg(Color::Yellow))),
        Line::from("  j/k         Move selection down/up"),
        Line::from("  g/G         Go to first/last comment"),
        Line::from(""),
        Line::from(Span::styled("Comments", Style::default().fg(Color::Yellow))),
        Line::from("  a/i         Write a new comment"),
        Line::from("  e           Edit selected comment"),
        Line::from("  x/d         Delete selected comment"),
        Line::from("  Enter       Submit (insert mode)"),
        Line::from("  Esc         Leave insert mode, cancel edit"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().fg(Color::Yellow))),
        Line::from("  r           Reload comments"),
        Line::from("  Esc         Dismiss alert"),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}
