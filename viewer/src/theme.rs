//! Colors and glyphs shared by the UI.

use ratatui::style::{Color, Modifier, Style};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const COMPLETED_GLYPH: &str = "✓";
pub const PENDING_GLYPH: &str = "○";

/// Spinner frame for the given animation tick.
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn label() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

pub fn completed() -> Style {
    Style::default().fg(Color::Green)
}

pub fn pending() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn action() -> Style {
    Style::default().fg(Color::Cyan)
}
