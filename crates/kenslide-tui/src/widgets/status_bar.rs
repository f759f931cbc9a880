use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let carousel = &app.carousel;

        let status_text = if let Some(message) = &app.status_message {
            format!(" {}", message)
        } else if carousel.is_empty() {
            " No images".to_string()
        } else {
            let page = carousel.current_page();
            let mut text = format!(" {}/{}", page + 1, carousel.item_count());
            if app.config.ui.show_filenames {
                if let Some(item) = carousel.items().get(page) {
                    if let Some(name) = item.source.file_name().and_then(|n| n.to_str()) {
                        text.push_str(&format!("  {}", name));
                    }
                }
            }
            text
        };

        let help_hint = " h/l:page 1-9:jump c:center q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg1),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg1)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg1)),
        ]);

        let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg1));
        frame.render_widget(paragraph, area);
    }
}
