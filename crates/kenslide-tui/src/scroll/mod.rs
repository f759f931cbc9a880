//! Animated paging for the carousel viewport.
//!
//! The [`ScrollAnimator`] owns the one true scroll offset. Commands either
//! jump it instantly or tween it toward a page target; each frame the
//! interpolated offset is read back and the carousel re-derives its visual
//! state from it. A command issued while a tween is in flight redirects it
//! from the currently visible position (last command wins).

pub mod animation;
pub mod easing;

pub use animation::ScrollAnimator;
pub use easing::EasingTypeExt;

use std::time::Duration;

pub use kenslide_core::{EasingType, ScrollConfig};

/// Extension trait for [`ScrollConfig`] with derived timing values.
pub trait ScrollConfigExt {
    /// Tween duration as a [`Duration`]
    fn animation_duration(&self) -> Duration;

    /// Poll interval that yields the configured animation frame rate
    fn animation_tick_duration(&self) -> Duration;

    /// Whether paging tweens at all; a zero duration degrades to jumps
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_duration() {
        let config = ScrollConfig {
            animation_duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_animation_tick_duration() {
        let config = ScrollConfig {
            animation_fps: 50,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(20));

        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
