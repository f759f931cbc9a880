//! Carousel geometry: the mapping between scroll offsets, page indices and
//! per-item display scales.
//!
//! Everything in this module is a pure function of its arguments. The TUI
//! layer owns the actual offset and only derives values through these
//! functions, so the math stays testable without a terminal.

/// Smallest scale an item shrinks to as it moves away from the center.
pub const MIN_SCALE: f32 = 0.8;

/// Falloff width in viewports: an item bottoms out at [`MIN_SCALE`] once its
/// center is `viewport_width * SCALE_FALLOFF` away from the viewport center.
pub const SCALE_FALLOFF: f32 = 1.4;

/// Nearest page for a scroll offset, clamped to the valid page range.
///
/// A non-positive viewport width or an empty carousel yields page 0; the
/// division is never performed in that case.
pub fn page_for_offset(offset: f32, viewport_width: f32, item_count: usize) -> usize {
    if item_count == 0 || viewport_width <= 0.0 {
        return 0;
    }
    let page = (offset / viewport_width).round();
    if page <= 0.0 {
        0
    } else {
        (page as usize).min(item_count - 1)
    }
}

/// Display scale for one item: exactly 1.0 when its center sits on the
/// viewport center, decaying linearly with distance down to [`MIN_SCALE`].
pub fn scale_for_item(item_index: usize, offset: f32, viewport_width: f32) -> f32 {
    if viewport_width <= 0.0 {
        return 1.0;
    }
    let item_center = (item_index as f32 + 0.5) * viewport_width;
    let viewport_center = offset + viewport_width / 2.0;
    let distance = (item_center - viewport_center).abs();
    (1.0 - distance / (viewport_width * SCALE_FALLOFF)).max(MIN_SCALE)
}

/// Scroll offset that aligns `page` with the viewport, clamped so the strip
/// never rests past its first or last item. When the content is narrower
/// than the viewport the only valid offset is 0.
pub fn target_offset_for_page(page: usize, viewport_width: f32, content_width: f32) -> f32 {
    let max_offset = (content_width - viewport_width).max(0.0);
    (page as f32 * viewport_width).clamp(0.0, max_offset)
}

/// Page the carousel opens on. Floor division: an odd count gives the true
/// middle item, an even count the item just right of it (4 items -> 2,
/// 5 items -> 2). Kept as-is rather than rounding toward the left pair.
pub fn center_page_index(item_count: usize) -> usize {
    item_count / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{} !~ {}", a, b);
    }

    #[test]
    fn test_page_stays_in_range() {
        for item_count in 0..6usize {
            for offset in [0.0, 149.0, 151.0, 300.0, 449.0, 1e6] {
                let page = page_for_offset(offset, 300.0, item_count);
                assert!(page <= item_count.saturating_sub(1));
            }
        }
    }

    #[test]
    fn test_page_rounds_to_nearest() {
        assert_eq!(page_for_offset(0.0, 300.0, 5), 0);
        assert_eq!(page_for_offset(149.0, 300.0, 5), 0);
        assert_eq!(page_for_offset(151.0, 300.0, 5), 1);
        assert_eq!(page_for_offset(300.0, 300.0, 5), 1);
        assert_eq!(page_for_offset(449.0, 300.0, 5), 1);
        assert_eq!(page_for_offset(451.0, 300.0, 5), 2);
    }

    #[test]
    fn test_page_degenerate_inputs() {
        // Zero-width viewport must not divide
        assert_eq!(page_for_offset(600.0, 0.0, 5), 0);
        assert_eq!(page_for_offset(600.0, -1.0, 5), 0);
        // Empty carousel
        assert_eq!(page_for_offset(600.0, 300.0, 0), 0);
    }

    #[test]
    fn test_scale_is_one_at_center() {
        // Page 1 aligned: item 1's center coincides with the viewport center
        assert_close(scale_for_item(1, 300.0, 300.0), 1.0);
        assert_close(scale_for_item(0, 0.0, 300.0), 1.0);
    }

    #[test]
    fn test_scale_bounds_and_floor() {
        // Neighbors of a settled page are a full viewport away, which is past
        // the falloff knee, so they rest at the floor
        assert_close(scale_for_item(0, 300.0, 300.0), MIN_SCALE);
        assert_close(scale_for_item(2, 300.0, 300.0), MIN_SCALE);
        // Far-away items stay at the floor, never below
        assert_close(scale_for_item(4, 0.0, 300.0), MIN_SCALE);
        for index in 0..5 {
            for offset in [0.0, 150.0, 300.0, 750.0] {
                let scale = scale_for_item(index, offset, 300.0);
                assert!((MIN_SCALE..=1.0).contains(&scale));
            }
        }
    }

    #[test]
    fn test_scale_non_increasing_with_distance() {
        // Walk item 2 away from the center by scrolling; scale must never grow
        let mut prev = scale_for_item(2, 600.0, 300.0);
        assert_close(prev, 1.0);
        for step in 1..=20 {
            let offset = 600.0 + step as f32 * 25.0;
            let scale = scale_for_item(2, offset, 300.0);
            assert!(scale <= prev + 1e-6);
            prev = scale;
        }
    }

    #[test]
    fn test_scale_partway() {
        // Item 1 at offset 360: centers are 450 vs 510, distance 60
        assert_close(scale_for_item(1, 360.0, 300.0), 1.0 - 60.0 / 420.0);
    }

    #[test]
    fn test_target_offset_clamps() {
        assert_close(target_offset_for_page(2, 300.0, 1500.0), 600.0);
        // Last page lands exactly on the clamp boundary
        assert_close(target_offset_for_page(4, 300.0, 1500.0), 1200.0);
        // Out-of-range pages clamp rather than overshoot
        assert_close(target_offset_for_page(9, 300.0, 1500.0), 1200.0);
        // Content narrower than the viewport pins to 0
        assert_close(target_offset_for_page(3, 300.0, 200.0), 0.0);
        assert_close(target_offset_for_page(0, 300.0, 0.0), 0.0);
    }

    #[test]
    fn test_page_offset_round_trip() {
        let width = 300.0;
        for item_count in 1..8usize {
            let content_width = item_count as f32 * width;
            for page in 0..item_count {
                let offset = target_offset_for_page(page, width, content_width);
                assert_eq!(page_for_offset(offset, width, item_count), page);
            }
        }
    }

    #[test]
    fn test_center_page_index() {
        assert_eq!(center_page_index(0), 0);
        assert_eq!(center_page_index(1), 0);
        assert_eq!(center_page_index(4), 2);
        assert_eq!(center_page_index(5), 2);
    }

    #[test]
    fn test_opening_scenario() {
        // 5 items at viewport width 300: open on page 2 at offset 600
        let center = center_page_index(5);
        assert_eq!(center, 2);
        assert_close(target_offset_for_page(center, 300.0, 1500.0), 600.0);
    }
}
