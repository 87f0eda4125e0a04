//! Sign-in screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::auth::AuthStep;
use crate::tui::app::App;
use crate::tui::ui::helpers::centered_rect;

/// Renders the screen
pub fn render_auth(f: &mut Frame, app: &App) {
    let flow = &app.auth;
    let card = centered_rect(56, 18, f.size());

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(outer, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Length(2),  // Description
            Constraint::Length(3),  // Input
            Constraint::Length(3),  // Submit button
            Constraint::Length(3),  // Secondary action / help
            Constraint::Min(0),
        ])
        .split(card);

    // Title
    let title = Paragraph::new("Welcome to TalkHub")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let (description, label, value, placeholder, button, can_submit) = match flow.step {
        AuthStep::Phone => (
            "Enter your phone number to get started",
            "Phone Number",
            flow.phone.as_str(),
            "+1234567890",
            if flow.loading { "Sending..." } else { "Send OTP" },
            flow.can_send_code(),
        ),
        AuthStep::Code => (
            "Enter the verification code sent to your phone",
            "Verification Code",
            flow.code.as_str(),
            "123456",
            if flow.loading { "Verifying..." } else { "Verify Code" },
            flow.can_verify(),
        ),
    };

    let description = Paragraph::new(description)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(description, chunks[1]);

    // Input field
    let input = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, Style::default().fg(Color::Yellow))
    };
    let input_widget = Paragraph::new(Line::from(input))
        .alignment(if flow.step == AuthStep::Code { Alignment::Center } else { Alignment::Left })
        .block(Block::default().borders(Borders::ALL).title(label));
    f.render_widget(input_widget, chunks[2]);

    // Submit button
    let button_style = if can_submit {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button_widget = Paragraph::new(format!("[ {} ]", button))
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button_widget, chunks[3]);

    // Help text
    let help_text = match flow.step {
        AuthStep::Phone => "Enter: Send OTP | Esc/Ctrl+C: Quit",
        AuthStep::Code => "Enter: Verify | Esc: Change Phone Number | Ctrl+C: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(help, chunks[4]);
}
