//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const HEADER_FG: Color = Color::White;
    pub const HEADER_BG: Color = Color::Blue;

    pub const ERROR_COLOR: Color = Color::Red;

    // Metrics colors
    pub const CPU_COLOR: Color = Color::Cyan;
    pub const MEM_COLOR: Color = Color::Magenta;
    pub const DISK_COLOR: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed hint text (footer).
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Fatal error line.
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::ERROR_COLOR)
            .add_modifier(Modifier::BOLD)
    }
}
