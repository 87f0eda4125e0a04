//! TalkHub TUI (Terminal User Interface)
//!
//! A terminal-based messaging client over mocked data.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::io;
use std::path::PathBuf;
use talkhub::auth::AuthStep;
use talkhub::storage::{FileSessionStore, SessionStore, Settings};
use talkhub::tui::{App, Focus, Screen, Tab, ui::ui};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "talkhub-tui", version, about = "Terminal messaging client over mocked data")]
struct Args {
    /// Directory holding the session file, settings and log
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Settings file (defaults to <data-dir>/settings.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Remove the stored session before starting
    #[arg(long)]
    logout: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| Settings::default().data_dir);
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| Settings::default_path(&data_dir));
    let mut settings = Settings::load(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    if let Some(dir) = args.data_dir {
        settings.data_dir = dir;
    }

    talkhub::init(&settings.data_dir).context("Failed to initialize logging")?;
    tracing::info!("Starting TalkHub with data dir {}", settings.data_dir.display());

    if args.logout {
        FileSessionStore::new(&settings.data_dir, &settings.session_key)
            .clear()
            .context("Failed to remove stored session")?;
        tracing::info!("Stored session removed");
    }

    // Create app state
    let mut app = App::from_settings(settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("Event loop failed: {}", err);
    }
    tracing::info!("TalkHub exiting");

    res.context("Terminal event loop failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Apply finished sign-in requests
        app.poll_auth_task();

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    app.on_key_press();

    match app.current_screen {
        Screen::Auth => handle_auth_key(app, key),
        Screen::Shell => {
            if ctrl && key.code == KeyCode::Char('l') {
                app.logout();
                return;
            }
            if app.contact_list_screen.is_adding() {
                handle_add_contact_key(app, key);
                return;
            }
            match (app.focus, app.selected_tab) {
                (Focus::Conversation, _) => handle_conversation_key(app, key),
                (Focus::Sidebar, Tab::Chats) => handle_chat_list_key(app, key),
                (Focus::Sidebar, Tab::Contacts) => handle_contact_list_key(app, key),
            }
        }
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    // Inputs are frozen while a request is in flight
    if app.is_auth_pending() {
        return;
    }

    match key.code {
        KeyCode::Esc => match app.auth.step {
            AuthStep::Phone => app.should_quit = true,
            AuthStep::Code => app.change_number(),
        },
        KeyCode::Enter => match app.auth.step {
            AuthStep::Phone => app.submit_phone(),
            AuthStep::Code => app.submit_code(),
        },
        KeyCode::Backspace => app.auth.backspace(),
        KeyCode::Char(c) => app.auth.add_char(c),
        _ => {}
    }
}

fn handle_chat_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.next_chat(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_chat(),
        KeyCode::Enter => app.open_highlighted_chat(),
        KeyCode::Tab => app.toggle_tab(),
        KeyCode::Right => app.toggle_focus(),
        KeyCode::Esc => app.clear_selection(),
        _ => {}
    }
}

fn handle_contact_list_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('a') if ctrl => app.contact_list_screen.open_add_form(),
        KeyCode::Down => app.next_contact(),
        KeyCode::Up => app.previous_contact(),
        KeyCode::Enter => app.start_chat_with_highlighted_contact(),
        KeyCode::Tab => app.toggle_tab(),
        KeyCode::Right => app.toggle_focus(),
        KeyCode::Esc => app.contact_list_screen.clear_search(),
        KeyCode::Backspace => app.contact_list_screen.backspace(),
        KeyCode::Char(c) if !ctrl => app.contact_list_screen.add_char(c),
        _ => {}
    }
}

fn handle_add_contact_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Some(form) = app.contact_list_screen.add_form.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.contact_list_screen.close_add_form(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => form.next_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Enter => app.submit_add_contact(),
        KeyCode::Char(c) if !ctrl => form.add_char(c),
        _ => {}
    }
}

fn handle_conversation_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if app.chat_window_screen.is_none() {
        app.focus = Focus::Sidebar;
        return;
    }
    let Some(window) = app.chat_window_screen.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.focus = Focus::Sidebar,
        KeyCode::Enter => app.send_message(),
        KeyCode::Up => window.scroll_up(),
        KeyCode::Down => window.scroll_down(),
        KeyCode::Backspace => window.backspace(),
        KeyCode::Char(c) if !ctrl => window.add_char(c),
        _ => {}
    }
}
