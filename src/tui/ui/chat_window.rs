//! Conversation pane rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::storage::{Chat, DeliveryStatus};
use crate::tui::app::App;
use crate::tui::screens::ChatWindowScreen;
use crate::tui::types::Focus;
use crate::tui::ui::helpers::{avatar_initial, format_clock, presence_label};

/// Renders the open chat, or the placeholder when none is selected
pub fn render_main_pane(f: &mut Frame, app: &App, area: Rect) {
    match (app.selected_chat(), &app.chat_window_screen) {
        (Some(chat), Some(screen)) => render_chat_window(f, app, chat, screen, area),
        _ => render_placeholder(f, area),
    }
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to TalkHub",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Select a chat to start messaging",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let inner_height = area.height.saturating_sub(2);
    let top_padding = inner_height.saturating_sub(lines.len() as u16) / 2;
    let placeholder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(ratatui::widgets::Padding::new(0, 0, top_padding, 0)),
        );
    f.render_widget(placeholder, area);
}

fn render_chat_window(f: &mut Frame, app: &App, chat: &Chat, screen: &ChatWindowScreen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Min(3),     // Messages
            Constraint::Length(3),  // Draft input
        ])
        .split(area);

    // Header
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("[{}]", avatar_initial(&chat.name)),
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
            Span::raw(" "),
            Span::styled(
                chat.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            presence_label(chat.is_online, chat.last_seen),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Messages
    let visible_height = chunks[1].height.saturating_sub(2) as usize;
    let current_user = app.settings.current_user_id.as_str();
    let message_lines: Vec<Line> = screen
        .visible_messages(visible_height)
        .iter()
        .map(|msg| {
            let is_own = msg.is_from(current_user);
            let mut spans = vec![
                Span::styled(
                    msg.content.clone(),
                    if is_own {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
                Span::styled(
                    format!(" {}", format_clock(msg.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if is_own {
                let tick_style = match msg.status {
                    DeliveryStatus::Read => Style::default().fg(Color::LightBlue),
                    _ => Style::default().fg(Color::DarkGray),
                };
                spans.push(Span::styled(format!(" {}", msg.status.indicator()), tick_style));
            }
            let line = Line::from(spans);
            if is_own {
                line.alignment(Alignment::Right)
            } else {
                line.alignment(Alignment::Left)
            }
        })
        .collect();

    let title = if screen.scroll_offset > 0 {
        format!("Messages (↓ {} newer)", screen.scroll_offset)
    } else {
        "Messages".to_string()
    };
    let messages_widget = Paragraph::new(message_lines)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(messages_widget, chunks[1]);

    // Draft input
    let draft = if screen.draft.is_empty() {
        Span::styled("Type a message...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(screen.draft.as_str(), Style::default().fg(Color::Yellow))
    };
    let input_border = if app.focus == Focus::Conversation {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input_widget = Paragraph::new(Line::from(draft)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(input_border)
            .title(if screen.can_send() { "Enter: Send" } else { "Message" }),
    );
    f.render_widget(input_widget, chunks[2]);
}
