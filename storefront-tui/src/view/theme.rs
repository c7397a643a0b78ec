//! Color themes

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a theme name from the config file
    pub fn from_name(name: &str) -> Option<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Select the active theme
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// Colors of the active theme
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// Theme colors
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    /// Add-to-cart button and emphasised links
    pub accent: Color,
    pub accent_fg: Color,
    /// Navigation link text
    pub link: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
    /// Dimmed lightbox background
    pub overlay: Color,
}

impl ThemeColors {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            highlight: Color::Rgb(0, 122, 204),
            selected_fg: Color::White,
            accent: Color::Rgb(63, 255, 124),
            accent_fg: Color::Black,
            link: Color::Rgb(69, 209, 176),
            success: Color::Rgb(78, 201, 176),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            overlay: Color::Rgb(10, 10, 10),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_fg: Color::White,
            accent: Color::Rgb(34, 170, 80),
            accent_fg: Color::White,
            link: Color::Rgb(20, 130, 110),
            success: Color::Rgb(34, 134, 58),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
            overlay: Color::Rgb(60, 60, 60),
        }
    }
}

/// Common styles
pub struct Styles;

impl Styles {
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// Key in a key hint
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Description in a key hint
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    /// Raised accent button
    pub fn accent_button() -> Style {
        let c = colors();
        Style::default()
            .bg(c.accent)
            .fg(c.accent_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default().fg(colors().link)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }
}
