//! The scroll animation controller.
//!
//! Offsets are in terminal-cell units but fractional: the tween interpolates
//! smoothly and rendering rounds at the last moment.

use std::time::{Duration, Instant};

use kenslide_core::{EasingType, ScrollConfig};

use super::{EasingTypeExt, ScrollConfigExt};

/// One in-flight tween toward a target offset.
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f32,
    to: f32,
    duration: Duration,
    easing: EasingType,
}

/// Owns the viewport's horizontal scroll offset.
///
/// `scroll_to` starts (or redirects) a tween toward a target, `set_offset`
/// jumps without animating, and `update` advances the tween one frame and
/// returns the current interpolated offset.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current_offset: f32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_offset: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset after the current tween, or the resting offset.
    pub fn target_offset(&self) -> f32 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_offset)
    }

    #[inline]
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    /// Jump to an offset immediately, cancelling any tween in flight.
    pub fn set_offset(&mut self, offset: f32, max_offset: f32) {
        self.animation = None;
        self.current_offset = offset.clamp(0.0, max_offset.max(0.0));
    }

    /// Tween toward a target offset.
    ///
    /// Jumps instead when smoothing is disabled. A command issued while a
    /// tween is running restarts from the currently visible offset, so the
    /// latest command always wins.
    pub fn scroll_to(&mut self, target: f32, max_offset: f32) {
        let target = target.clamp(0.0, max_offset.max(0.0));

        if !self.config.is_smooth() {
            self.current_offset = target;
            self.animation = None;
            return;
        }

        let from = self.current_offset;
        if (from - target).abs() < f32::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the tween one frame and return the current offset.
    pub fn update(&mut self, max_offset: f32) -> f32 {
        let max_offset = max_offset.max(0.0);

        if let Some(ref anim) = self.animation {
            if anim.start.elapsed() >= anim.duration {
                self.current_offset = anim.to.min(max_offset);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased = anim.easing.apply(t);
                self.current_offset = lerp(anim.from, anim.to, eased).min(max_offset);
            }
        } else {
            // The viewport may have shrunk since the offset settled
            self.current_offset = self.current_offset.min(max_offset);
        }

        self.current_offset
    }
}

/// Tween progress in [0, 1]; a zero duration is already complete.
#[inline]
fn progress(start: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = start.elapsed().as_secs_f32() / duration.as_secs_f32();
    ratio.clamp(0.0, 1.0)
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0)).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_instant_when_smoothing_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(100.0, 200.0);
        assert!((animator.current_offset() - 100.0).abs() < 0.001);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = ScrollAnimator::new(smooth(100));

        animator.scroll_to(100.0, 200.0);
        assert!(animator.is_animating());
        assert!((animator.target_offset() - 100.0).abs() < 0.001);
        // The offset itself has not jumped
        assert!(animator.current_offset().abs() < 0.001);
    }

    #[test]
    fn test_new_command_redirects() {
        let mut animator = ScrollAnimator::new(smooth(10_000));

        animator.scroll_to(100.0, 200.0);
        animator.scroll_to(0.0, 200.0);
        assert!(animator.target_offset().abs() < 0.001);
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut animator = ScrollAnimator::new(smooth(100));
        animator.scroll_to(300.0, 120.0);
        assert!(animator.target_offset() <= 120.0);
    }

    #[test]
    fn test_set_offset_cancels_animation() {
        let mut animator = ScrollAnimator::new(smooth(10_000));
        animator.scroll_to(100.0, 200.0);
        animator.set_offset(60.0, 200.0);
        assert!(!animator.is_animating());
        assert!((animator.current_offset() - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_update_completes_at_target() {
        let mut animator = ScrollAnimator::new(smooth(1));
        animator.scroll_to(100.0, 200.0);
        std::thread::sleep(Duration::from_millis(20));
        let offset = animator.update(200.0);
        assert!((offset - 100.0).abs() < 0.001);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_update_clamps_after_shrink() {
        let mut animator = ScrollAnimator::default();
        animator.set_offset(150.0, 200.0);
        let offset = animator.update(100.0);
        assert!((offset - 100.0).abs() < 0.001);
    }
}
