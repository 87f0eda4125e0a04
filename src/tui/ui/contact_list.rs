//! Contact list and add-contact dialog rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::screens::{AddContactField, AddContactForm};
use crate::tui::types::Focus;
use crate::tui::ui::helpers::{avatar_initial, centered_rect};

/// Renders the contact list into `area`
pub fn render_contact_list(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.contact_list_screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Search box
            Constraint::Min(3),     // Contacts
        ])
        .split(area);

    // Search box
    let search = if screen.search_query.is_empty() {
        Span::styled("Search contacts...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(screen.search_query.as_str(), Style::default().fg(Color::Yellow))
    };
    let search_widget = Paragraph::new(Line::from(search))
        .block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search_widget, chunks[0]);

    let contacts = app.visible_contacts();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Contacts ({})", contacts.len()));

    if contacts.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from("No contacts found"),
            Line::from(""),
            Line::from("Add some contacts to start chatting"),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty_msg, chunks[1]);
    } else {
        let show_cursor = app.focus == Focus::Sidebar && !screen.is_adding();
        let items: Vec<ListItem> = contacts
            .iter()
            .enumerate()
            .map(|(i, contact)| {
                let is_highlighted = show_cursor && i == screen.selected_index;
                let online = if contact.is_online {
                    Span::styled("●", Style::default().fg(Color::Green))
                } else {
                    Span::raw(" ")
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            if is_highlighted { "→ " } else { "  " },
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::styled(
                            format!("[{}]", avatar_initial(&contact.name)),
                            Style::default().fg(Color::Black).bg(Color::Green),
                        ),
                        online,
                        Span::raw(" "),
                        Span::styled(
                            contact.name.clone(),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw("       "),
                        Span::styled(contact.subtitle().to_string(), Style::default().fg(Color::Gray)),
                    ]),
                ])
            })
            .collect();
        f.render_widget(List::new(items).block(block), chunks[1]);
    }

    if let Some(form) = &screen.add_form {
        render_add_contact_dialog(f, form);
    }
}

fn render_add_contact_dialog(f: &mut Frame, form: &AddContactForm) {
    let popup_area = centered_rect(50, 13, f.size());
    f.render_widget(Clear, popup_area);

    let background = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title("Add New Contact");
    f.render_widget(background, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Phone
            Constraint::Length(3),  // Name
            Constraint::Length(3),  // Submit
            Constraint::Min(0),
        ])
        .split(popup_area);

    let field = |title: &'static str, value: &str, placeholder: &'static str, active: bool| {
        let text = if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(value.to_string(), Style::default().fg(Color::Yellow))
        };
        let border = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
    };

    f.render_widget(
        field("Phone Number", &form.phone, "+1234567890", form.field == AddContactField::Phone),
        chunks[0],
    );
    f.render_widget(
        field("Contact Name", &form.name, "John Doe", form.field == AddContactField::Name),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Add Contact | Tab: Next Field | Esc: Cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}
