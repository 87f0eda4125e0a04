//! UI rendering module - screen-specific rendering functions
//!
//! The sign-in screen fills the terminal. The shell splits it into a
//! sidebar (tabs over the chat or contact list), the conversation pane and a
//! bottom bar that shows the pending notification or the key help.

mod auth;
mod chat_list;
mod chat_window;
mod contact_list;
mod helpers;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use crate::notification::NotificationKind;
use crate::tui::app::App;
use crate::tui::types::{Focus, Screen, Tab};

// Re-export render functions
pub use auth::render_auth;
pub use chat_list::render_chat_list;
pub use chat_window::render_main_pane;
pub use contact_list::render_contact_list;

// Re-export helper functions
pub use helpers::{avatar_initial, centered_rect, format_clock, format_relative_time, presence_label};

/// Width of the sidebar column
const SIDEBAR_WIDTH: u16 = 42;

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Auth => {
            render_auth(f, app);
            if app.notification.is_some() {
                let size = f.size();
                let bar = Rect {
                    y: size.height.saturating_sub(3),
                    height: 3.min(size.height),
                    ..size
                };
                render_status_bar(f, app, bar);
            }
        }
        Screen::Shell => render_shell(f, app),
    }
}

fn render_shell(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),     // Sidebar + conversation
            Constraint::Length(3),  // Notification / help
        ])
        .split(f.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(20),
        ])
        .split(rows[0]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Tabs
            Constraint::Min(3),     // List
        ])
        .split(columns[0]);

    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::from(t.label())).collect();
    let tabs = Tabs::new(titles)
        .select(app.selected_tab.index())
        .block(Block::default().borders(Borders::ALL).title("TalkHub"))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, sidebar[0]);

    match app.selected_tab {
        Tab::Chats => render_chat_list(f, app, sidebar[1]),
        Tab::Contacts => render_contact_list(f, app, sidebar[1]),
    }

    render_main_pane(f, app, columns[1]);
    render_status_bar(f, app, rows[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let widget = if let Some(notification) = &app.notification {
        let color = match notification.kind {
            NotificationKind::Info => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}  ", notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(notification.description.clone(), Style::default().fg(Color::White)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    } else {
        Paragraph::new(help_text(app))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    };
    f.render_widget(widget, area);
}

fn help_text(app: &App) -> &'static str {
    match (app.current_screen, app.focus, app.selected_tab) {
        (Screen::Auth, _, _) => "",
        (Screen::Shell, Focus::Conversation, _) => {
            "Enter: Send | ↑↓: Scroll | Esc: Back to List | Ctrl+C: Quit"
        }
        (Screen::Shell, Focus::Sidebar, Tab::Chats) => {
            "↑↓/j/k: Navigate | Enter: Open | Tab: Contacts | →: Conversation | Ctrl+L: Log Out | q: Quit"
        }
        (Screen::Shell, Focus::Sidebar, Tab::Contacts) => {
            "Type: Search | ↑↓: Navigate | Enter: Chat | Ctrl+A: Add Contact | Tab: Chats | Esc: Clear"
        }
    }
}
