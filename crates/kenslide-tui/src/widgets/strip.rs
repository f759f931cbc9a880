use image::{imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::carousel::{ImageSlot, Item, ScaledImage};
use crate::theme::Theme;

pub struct StripWidget;

/// Borders eat one cell on every side of a page
const FRAME_INSET: u16 = 1;
/// Smallest scaled page height that still fits a bordered block
const MIN_PAGE_HEIGHT: u16 = 3;

impl StripWidget {
    /// Render the pages overlapping the viewport at the current offset.
    ///
    /// Each page is one viewport wide; its height is the strip height times
    /// the item's scale (width untouched, height shrunk and re-centered), so
    /// the centered page reads larger than its neighbors while scrolling.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        let background = Block::default().style(Style::default().bg(theme.bg0));
        frame.render_widget(background, area);

        let carousel = &mut app.carousel;
        if carousel.is_empty() {
            Self::render_message(frame, area, "No images to show", theme.grey, &theme);
            return;
        }
        if area.width == 0 || area.height < MIN_PAGE_HEIGHT {
            return;
        }

        let viewport_width = area.width as f32;
        let offset = carousel.offset();
        let current = carousel.current_page();

        // Pages with any column inside the viewport right now
        let first = (offset / viewport_width).floor().max(0.0) as usize;
        let last = ((offset + viewport_width) / viewport_width).ceil() as usize;
        let last = last.min(carousel.item_count());

        for index in first..last {
            let scale = carousel.scale_of(index);
            let x_rel = (index as f32 * viewport_width - offset).round() as i32;
            if let Some(item) = carousel.item_mut(index) {
                Self::render_item(frame, area, item, x_rel, scale, index == current, &theme);
            }
        }
    }

    fn render_item(
        frame: &mut Frame,
        area: Rect,
        item: &mut Item,
        x_rel: i32,
        scale: f32,
        selected: bool,
        theme: &Theme,
    ) {
        let page_width = area.width;
        let page_height = ((area.height as f32) * scale).round() as u16;
        let page_height = page_height.clamp(MIN_PAGE_HEIGHT, area.height);
        let page_y = area.y + (area.height - page_height) / 2;

        // The page rect in absolute columns; it may hang off either edge
        let page_x = area.x as i32 + x_rel;
        let Some(visible) = clip_to_area(page_x, page_y, page_width, page_height, area) else {
            return;
        };

        let border_color = if selected { theme.accent } else { theme.grey };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(block, visible);

        // Content sits inside the page's own borders, then gets clipped
        let inner_x = page_x + FRAME_INSET as i32;
        let inner_y = page_y + FRAME_INSET;
        let inner_width = page_width.saturating_sub(2 * FRAME_INSET);
        let inner_height = page_height.saturating_sub(2 * FRAME_INSET);
        let Some(inner_visible) = clip_to_area(inner_x, inner_y, inner_width, inner_height, area)
        else {
            return;
        };

        match &item.slot {
            ImageSlot::Ready(_) => {
                if let Some(rgba) = cover_pixels(item, inner_width, inner_height) {
                    render_halfblocks(frame, rgba, inner_x, inner_y, inner_visible);
                }
            }
            ImageSlot::Pending | ImageSlot::Loading => {
                Self::render_message(frame, inner_visible, "Loading...", theme.grey, theme);
            }
            ImageSlot::Failed(error) => {
                let text = format!("✗ {}", error);
                Self::render_message(frame, inner_visible, &text, theme.error, theme);
            }
        }
    }

    fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color, theme: &Theme) {
        if area.height == 0 {
            return;
        }
        let line = Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        ));
        let paragraph = Paragraph::new(line)
            .style(Style::default().bg(theme.bg0))
            .alignment(Alignment::Center);

        // Center vertically
        let centered = Rect {
            x: area.x,
            y: area.y + area.height / 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(paragraph, centered);
    }
}

/// Cover-cropped pixels for the item at the given cell size, recomputed only
/// when the size or the underlying image changed since the last frame.
fn cover_pixels(item: &mut Item, cols: u16, rows: u16) -> Option<&RgbaImage> {
    let image = match &item.slot {
        ImageSlot::Ready(image) => image.clone(),
        _ => return None,
    };

    let stale = item
        .scaled
        .as_ref()
        .map_or(true, |s| s.cols != cols || s.rows != rows);
    if stale {
        item.scaled = Some(ScaledImage {
            cols,
            rows,
            rgba: cover_crop(&image, cols, rows),
        });
    }

    item.scaled.as_ref().map(|s| &s.rgba)
}

/// Scale-to-cover and center-crop an image for a cell area. Half-block
/// rendering gives two pixel rows per cell.
fn cover_crop(image: &DynamicImage, cols: u16, rows: u16) -> RgbaImage {
    let target_width = (cols as u32).max(1);
    let target_height = (rows as u32 * 2).max(1);

    let (image_width, image_height) = image.dimensions();
    let scale_w = target_width as f32 / image_width.max(1) as f32;
    let scale_h = target_height as f32 / image_height.max(1) as f32;
    // Cover: the larger factor fills both axes, the overflow is cropped
    let scale = scale_w.max(scale_h);

    let scaled_width = ((image_width as f32 * scale).round() as u32).max(target_width);
    let scaled_height = ((image_height as f32 * scale).round() as u32).max(target_height);
    let resized = image.resize_exact(scaled_width, scaled_height, FilterType::Triangle);

    let crop_x = (scaled_width - target_width) / 2;
    let crop_y = (scaled_height - target_height) / 2;
    resized
        .crop_imm(crop_x, crop_y, target_width, target_height)
        .to_rgba8()
}

/// Paint the visible slice of a page's pixels as half-block cells, one
/// Paragraph per row. `full_x`/`full_y` anchor the unclipped content so the
/// right source columns show when a page hangs off the viewport edge.
fn render_halfblocks(frame: &mut Frame, rgba: &RgbaImage, full_x: i32, full_y: u16, visible: Rect) {
    let src_col0 = (visible.x as i32 - full_x).max(0) as u32;
    let src_row0 = visible.y.saturating_sub(full_y) as u32;

    for row in 0..visible.height {
        let y_px = (src_row0 + row as u32) * 2;
        let mut spans: Vec<Span> = Vec::with_capacity(visible.width as usize);

        for col in 0..visible.width {
            let x_px = src_col0 + col as u32;
            if x_px >= rgba.width() || y_px >= rgba.height() {
                spans.push(Span::raw(" "));
                continue;
            }
            let top = rgba.get_pixel(x_px, y_px);
            let bottom = if y_px + 1 < rgba.height() {
                rgba.get_pixel(x_px, y_px + 1)
            } else {
                top
            };

            spans.push(Span::styled(
                "▀",
                Style::default()
                    .fg(Color::Rgb(top[0], top[1], top[2]))
                    .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
            ));
        }

        let line_area = Rect {
            x: visible.x,
            y: visible.y + row,
            width: visible.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
    }
}

/// Intersect a page rect (absolute, possibly hanging off the left or right
/// edge) with the strip area.
fn clip_to_area(x: i32, y: u16, width: u16, height: u16, area: Rect) -> Option<Rect> {
    let left = x.max(area.x as i32);
    let right = (x + width as i32).min(area.x as i32 + area.width as i32);
    if right <= left {
        return None;
    }

    let top = y.max(area.y);
    let bottom = (y + height).min(area.y + area.height);
    if bottom <= top {
        return None;
    }

    Some(Rect {
        x: left as u16,
        y: top,
        width: (right - left) as u16,
        height: bottom - top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside_area() {
        let area = Rect::new(0, 0, 80, 20);
        let clipped = clip_to_area(10, 2, 30, 10, area).unwrap();
        assert_eq!(clipped, Rect::new(10, 2, 30, 10));
    }

    #[test]
    fn test_clip_hanging_off_left_edge() {
        let area = Rect::new(0, 0, 80, 20);
        let clipped = clip_to_area(-30, 0, 80, 20, area).unwrap();
        assert_eq!(clipped, Rect::new(0, 0, 50, 20));
    }

    #[test]
    fn test_clip_hanging_off_right_edge() {
        let area = Rect::new(0, 0, 80, 20);
        let clipped = clip_to_area(60, 0, 80, 20, area).unwrap();
        assert_eq!(clipped, Rect::new(60, 0, 20, 20));
    }

    #[test]
    fn test_clip_fully_outside() {
        let area = Rect::new(0, 0, 80, 20);
        assert!(clip_to_area(80, 0, 40, 20, area).is_none());
        assert!(clip_to_area(-40, 0, 40, 20, area).is_none());
    }

    #[test]
    fn test_cover_crop_hits_exact_cell_size() {
        let image = DynamicImage::new_rgba8(100, 10);
        let rgba = cover_crop(&image, 8, 4);
        assert_eq!(rgba.dimensions(), (8, 8));

        // Portrait source into a wide target still covers
        let image = DynamicImage::new_rgba8(10, 100);
        let rgba = cover_crop(&image, 20, 3);
        assert_eq!(rgba.dimensions(), (20, 6));
    }

    #[test]
    fn test_cover_crop_degenerate_target() {
        let image = DynamicImage::new_rgba8(10, 10);
        let rgba = cover_crop(&image, 0, 0);
        assert_eq!(rgba.dimensions(), (1, 1));
    }
}
