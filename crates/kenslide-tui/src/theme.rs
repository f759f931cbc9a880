use ratatui::style::Color;
use tracing::warn;

/// Runtime theme with the handful of colors the carousel draws with
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary background
    pub bg0: Color,
    /// Status bar background
    pub bg1: Color,
    /// Primary foreground
    pub fg0: Color,
    /// Dimmed foreground (hints, unselected dots, idle borders)
    pub grey: Color,
    /// Selected dot and the centered page's border
    pub accent: Color,
    /// Failed-decode placeholders
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            error: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
            bg1: Color::Rgb(0xeb, 0xdb, 0xb2),
            fg0: Color::Rgb(0x3c, 0x38, 0x36),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x42, 0x7b, 0x58),
            error: Color::Rgb(0x9d, 0x00, 0x06),
        }
    }
}

/// Resolve a theme by its configured name, falling back to the default.
pub fn load_theme(name: &str) -> Theme {
    match name {
        "gruvbox-dark" => Theme::default(),
        "light" => Theme::light(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            Theme::default()
        }
    }
}
