pub mod app;
pub mod carousel;
pub mod event;
pub mod input;
pub mod keymap;
pub mod loader;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use carousel::{Carousel, ImageSlot, Item};
pub use theme::{load_theme, Theme};
