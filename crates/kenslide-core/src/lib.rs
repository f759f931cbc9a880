pub mod config;
pub mod error;
pub mod gallery;
pub mod model;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use gallery::GalleryItem;
