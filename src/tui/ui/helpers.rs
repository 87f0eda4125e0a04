//! UI helper functions

use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;

/// Format how long ago `then` was, relative to `now`
///
/// Buckets follow the usual chat-app wording: "5 minutes ago",
/// "about 2 hours ago", "3 days ago", "about 1 month ago", "over 1 year ago".
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const DAY: i64 = 24 * 60;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let seconds = now.signed_duration_since(then).num_seconds().max(0);
    let minutes = (seconds + 30) / 60;

    if seconds < 30 {
        "less than a minute ago".to_string()
    } else if minutes < 2 {
        "1 minute ago".to_string()
    } else if minutes < 45 {
        format!("{} minutes ago", minutes)
    } else if minutes < 90 {
        "about 1 hour ago".to_string()
    } else if minutes < DAY {
        format!("about {} hours ago", (minutes + 30) / 60)
    } else if minutes < 42 * 60 {
        "1 day ago".to_string()
    } else if minutes < MONTH {
        format!("{} days ago", (minutes + DAY / 2) / DAY)
    } else if minutes < 2 * MONTH {
        let months = (minutes + MONTH / 2) / MONTH;
        if months == 1 {
            "about 1 month ago".to_string()
        } else {
            format!("about {} months ago", months)
        }
    } else if minutes < YEAR {
        format!("{} months ago", (minutes / MONTH).min(11))
    } else {
        let months = minutes / MONTH;
        let years = months / 12;
        let plural = |n: i64| if n == 1 { "year" } else { "years" };
        match months % 12 {
            0..=2 => format!("about {} {} ago", years, plural(years)),
            3..=8 => format!("over {} {} ago", years, plural(years)),
            _ => format!("almost {} years ago", years + 1),
        }
    }
}

/// Format a timestamp as a 24-hour local clock time ("14:05")
pub fn format_clock(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%H:%M").to_string()
}

/// Avatar fallback: the upper-cased first letter of the name
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Presence line under a chat header
pub fn presence_label(is_online: bool, last_seen: Option<DateTime<Utc>>) -> String {
    if is_online {
        "online".to_string()
    } else if let Some(seen) = last_seen {
        format!("last seen {}", format_clock(seen))
    } else {
        "offline".to_string()
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
