//! Chat list rendering

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::Focus;
use crate::tui::ui::helpers::{avatar_initial, format_relative_time};

/// Renders the chat list into `area`
pub fn render_chat_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Chats");

    if app.chats.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from("No chats yet"),
            Line::from(""),
            Line::from("Start a conversation with your contacts"),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty_msg, area);
        return;
    }

    let now = Utc::now();
    let show_cursor = app.focus == Focus::Sidebar;

    let chat_items: Vec<ListItem> = app
        .chats
        .iter()
        .enumerate()
        .map(|(i, chat)| {
            let is_open = app.selected_chat_id.as_deref() == Some(chat.id.as_str());
            let is_highlighted = show_cursor && i == app.chat_list_screen.selected_index;

            let name_style = if is_open {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            let online = if chat.is_online {
                Span::styled("●", Style::default().fg(Color::Green))
            } else {
                Span::raw(" ")
            };

            let first = Line::from(vec![
                Span::styled(
                    if is_highlighted { "→ " } else { "  " },
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("[{}]", avatar_initial(&chat.name)),
                    Style::default().fg(Color::Black).bg(Color::Green),
                ),
                online,
                Span::raw(" "),
                Span::styled(chat.name.clone(), name_style),
                Span::styled(
                    format!("  {}", format_relative_time(chat.last_message_time, now)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            let mut second = vec![
                Span::raw("       "),
                Span::styled(chat.last_message.clone(), Style::default().fg(Color::Gray)),
            ];
            if chat.has_unread() {
                second.push(Span::raw(" "));
                second.push(Span::styled(
                    format!(" {} ", chat.unread_count),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            let item = ListItem::new(vec![first, Line::from(second)]);
            if is_open {
                item.style(Style::default().bg(Color::Rgb(30, 40, 30)))
            } else {
                item
            }
        })
        .collect();

    f.render_widget(List::new(chat_items).block(block), area);
}
