use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct PageIndicatorWidget;

/// Horizontal cells per dot: the glyph plus one spacer
const DOT_STRIDE: u16 = 2;

impl PageIndicatorWidget {
    /// Render one dot per item, centered; the current page's dot is filled.
    /// An empty carousel renders no dots at all.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let background = Paragraph::new("").style(Style::default().bg(theme.bg0));
        frame.render_widget(background, area);

        let count = app.carousel.item_count();
        if count == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let selected = app.carousel.current_page();
        let pad = area.width.saturating_sub(Self::dots_width(count)) / 2;

        let mut spans = Vec::with_capacity(count * 2);
        spans.push(Span::raw(" ".repeat(pad as usize)));
        for dot in 0..count {
            let span = if dot == selected {
                Span::styled("●", Style::default().fg(theme.accent))
            } else {
                Span::styled("○", Style::default().fg(theme.grey))
            };
            spans.push(span);
            if dot + 1 < count {
                spans.push(Span::raw(" "));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg0));
        frame.render_widget(paragraph, area);
    }

    fn dots_width(count: usize) -> u16 {
        let count = count.min((u16::MAX / DOT_STRIDE) as usize) as u16;
        count * DOT_STRIDE - 1
    }

    /// Which dot, if any, sits under the given terminal cell. Mirrors the
    /// layout in `render`, so a click translates directly to a page.
    pub fn dot_hit(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
        if count == 0 || row < area.y || row >= area.y + area.height {
            return None;
        }

        let dots_width = Self::dots_width(count);
        let start = area.x + area.width.saturating_sub(dots_width) / 2;
        if column < start || column >= start + dots_width {
            return None;
        }

        let rel = column - start;
        if rel % DOT_STRIDE == 0 {
            Some((rel / DOT_STRIDE) as usize)
        } else {
            None
        }
    }
}
