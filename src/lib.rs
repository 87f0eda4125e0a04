//! TalkHub - a terminal messaging client over mocked data
//!
//! This library holds the state and logic of the client: the phone-number
//! sign-in flow, the mock chat/contact/message tables, the locally stored
//! session, and the terminal UI screens that compose them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod mock;
pub mod notification;
pub mod storage;
pub mod tui;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Result type alias for TalkHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for TalkHub operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Session store error
    #[error("Session error: {0}")]
    Session(String),

    /// Sign-in flow or backend error
    #[error("Auth error: {0}")]
    Auth(String),

    /// Settings loading or validation error
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initialize logging into `<data_dir>/talkhub.log`
///
/// The terminal is owned by the UI, so log lines go to a file instead of
/// stderr. The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init<P: AsRef<Path>>(data_dir: P) -> Result<()> {
    let data_dir = data_dir.as_ref();
    std::fs::create_dir_all(data_dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("talkhub.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))?;

    Ok(())
}
