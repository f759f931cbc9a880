//! The carousel view: an ordered strip of image pages, each exactly one
//! viewport wide, with a dot indicator kept in sync with the scroll offset.
//!
//! The offset lives in the scroll animator; everything visual (per-item
//! scales, the selected dot) is re-derived from it through the pure math in
//! [`kenslide_core::model`]. Paging commands only steer the animator and let
//! the derivation catch up frame by frame, so there is exactly one source of
//! truth for where the strip is.

use std::path::PathBuf;
use std::sync::Arc;

use image::{DynamicImage, RgbaImage};
use kenslide_core::{gallery::GalleryItem, model, ScrollConfig};

use crate::scroll::ScrollAnimator;

/// Presentation state of an item's image.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    /// Not yet handed to the decoder
    #[default]
    Pending,
    /// Decode in flight
    Loading,
    /// Decoded and ready to draw
    Ready(Arc<DynamicImage>),
    /// Decode failed; the page renders a placeholder instead
    Failed(String),
}

/// Cover-cropped pixels cached for the last rendered cell size.
#[derive(Debug, Clone)]
pub(crate) struct ScaledImage {
    pub cols: u16,
    pub rows: u16,
    pub rgba: RgbaImage,
}

/// One strip entry. `index` and `source` are fixed for the item's lifetime;
/// only the image slot transitions, once, when its decode completes.
#[derive(Debug, Clone)]
pub struct Item {
    pub index: usize,
    pub source: PathBuf,
    pub slot: ImageSlot,
    pub(crate) scaled: Option<ScaledImage>,
}

pub struct Carousel {
    items: Vec<Item>,
    scales: Vec<f32>,
    animator: ScrollAnimator,
    viewport_width: f32,
    current_page: usize,
    /// Offset the scales and page were last derived from
    synced_offset: Option<f32>,
}

impl Carousel {
    /// Build the strip from the gallery list, in order. The viewport width
    /// may be 0 until the first layout; call [`Carousel::set_viewport_width`]
    /// (and then [`Carousel::scroll_to_center`]) once it is known.
    pub fn new(gallery: Vec<GalleryItem>, viewport_width: f32, config: &ScrollConfig) -> Self {
        let items: Vec<Item> = gallery
            .into_iter()
            .map(|entry| Item {
                index: entry.index,
                source: entry.path,
                slot: ImageSlot::Pending,
                scaled: None,
            })
            .collect();
        let scales = vec![1.0; items.len()];

        let mut carousel = Self {
            items,
            scales,
            animator: ScrollAnimator::new(config.clone()),
            viewport_width,
            current_page: 0,
            synced_offset: None,
        };
        carousel.on_scroll();
        carousel
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub fn offset(&self) -> f32 {
        self.animator.current_offset()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    pub fn scale_of(&self, index: usize) -> f32 {
        self.scales.get(index).copied().unwrap_or(1.0)
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f32 {
        self.items.len() as f32 * self.viewport_width
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    fn max_offset(&self) -> f32 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    /// Re-derive per-item scales and the selected dot from the current
    /// offset.
    ///
    /// Runs on every frame in which the offset moved, and is safe to run
    /// redundantly: identical offsets produce identical scales and the same
    /// dot, and re-selecting the already-selected dot has no effect.
    pub fn on_scroll(&mut self) {
        let offset = self.animator.current_offset();
        for index in 0..self.items.len() {
            self.scales[index] = model::scale_for_item(index, offset, self.viewport_width);
        }
        self.current_page = model::page_for_offset(offset, self.viewport_width, self.items.len());
        self.synced_offset = Some(offset);
    }

    /// Animate to the given page (dot click, paging keys).
    ///
    /// Fire-and-forget: the offset catches up over subsequent ticks and the
    /// indicator follows through [`Carousel::on_scroll`], so no state is
    /// written here. A command issued mid-animation redirects it.
    pub fn select_page(&mut self, page: usize) {
        if self.items.is_empty() {
            return;
        }
        let target =
            model::target_offset_for_page(page, self.viewport_width, self.content_width());
        self.animator.scroll_to(target, self.max_offset());
    }

    pub fn next_page(&mut self) {
        self.select_page(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.select_page(self.current_page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.select_page(0);
    }

    pub fn last_page(&mut self) {
        self.select_page(self.items.len().saturating_sub(1));
    }

    /// Animate back to the middle page.
    pub fn recenter(&mut self) {
        self.select_page(model::center_page_index(self.items.len()));
    }

    /// Jump (no animation) to the opening position: the middle page.
    ///
    /// Meant to run once after the first real layout, when the viewport
    /// width is known. Called earlier it harmlessly leaves the strip at
    /// offset 0.
    pub fn scroll_to_center(&mut self) {
        let page = model::center_page_index(self.items.len());
        let target =
            model::target_offset_for_page(page, self.viewport_width, self.content_width());
        self.animator.set_offset(target, self.max_offset());
        self.on_scroll();
    }

    /// Adopt a new viewport width (terminal resize), keeping the current
    /// page in place without animating.
    pub fn set_viewport_width(&mut self, width: f32) {
        if (width - self.viewport_width).abs() < f32::EPSILON {
            return;
        }
        let page = self.current_page;
        self.viewport_width = width;
        let target = model::target_offset_for_page(page, width, self.content_width());
        self.animator.set_offset(target, self.max_offset());
        self.on_scroll();
    }

    /// Advance the paging animation one frame, re-deriving visual state when
    /// the offset moved. Returns true while an animation is still running so
    /// the event loop can poll at the animation frame rate.
    pub fn tick(&mut self) -> bool {
        let offset = self.animator.update(self.max_offset());
        if self.synced_offset != Some(offset) {
            self.on_scroll();
        }
        self.animator.is_animating()
    }

    /// Apply a finished decode to the owning item.
    pub fn resolve_image(&mut self, index: usize, slot: ImageSlot) {
        if let Some(item) = self.items.get_mut(index) {
            item.slot = slot;
            item.scaled = None;
        }
    }

    /// Claim the next undecoded item, nearest the current page first, and
    /// mark it in flight. Returns what the decoder needs.
    pub fn begin_next_decode(&mut self) -> Option<(usize, PathBuf)> {
        let current = self.current_page;
        let index = (0..self.items.len())
            .filter(|&i| matches!(self.items[i].slot, ImageSlot::Pending))
            .min_by_key(|&i| i.abs_diff(current))?;
        self.items[index].slot = ImageSlot::Loading;
        Some((index, self.items[index].source.clone()))
    }

    /// Decodes currently in flight.
    pub fn loading_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.slot, ImageSlot::Loading))
            .count()
    }
}
