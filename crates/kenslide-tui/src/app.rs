use std::sync::Arc;

use kenslide_core::AppConfig;
use ratatui::layout::Rect;

use crate::carousel::Carousel;
use crate::theme::Theme;

/// Application state shared between the event loop and the widgets.
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active color theme
    pub theme: Theme,
    /// The carousel itself
    pub carousel: Carousel,
    /// Where the indicator dots were last drawn, for mouse hit-testing
    pub indicator_area: Option<Rect>,
    /// One-shot: center the strip after the first real layout
    pub needs_initial_center: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, carousel: Carousel) -> Self {
        Self {
            config,
            theme,
            carousel,
            indicator_area: None,
            needs_initial_center: true,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
