//! Header bar widget
//!
//! Shows the app title, the API base URL and a spinner while a request is
//! outstanding.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::{IconSet, SPINNER_FRAMES};
use crate::theme::{palette, styles};

/// Spinner glyph for the time a request has been outstanding
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let index = (elapsed.as_millis() / 100) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}

/// Main header showing app title and API base URL
pub struct MainHeader<'a> {
    base_url: &'a str,
    icons: IconSet,
    spinner: Option<&'static str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_url: &'a str, icons: IconSet) -> Self {
        Self {
            base_url,
            icons,
            spinner: None,
        }
    }

    /// Show `frame` and a busy label on the right
    pub fn busy(mut self, frame: &'static str) -> Self {
        self.spinner = Some(frame);
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let dot_style = if self.spinner.is_some() {
            Style::default().fg(palette::STATUS_YELLOW)
        } else {
            Style::default().fg(palette::STATUS_GREEN)
        };

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), dot_style),
            Span::raw(" "),
            Span::styled("Allon", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.base_url, styles::text_secondary()),
        ]);
        let row = Rect { height: 1, ..inner };
        left.render(row, buf);

        if let Some(frame) = self.spinner {
            let right = Line::from(vec![
                Span::styled(frame, styles::accent()),
                Span::styled(" Working ", styles::text_muted()),
            ]);
            let width = (right.width() as u16).min(row.width);
            let right_area = Rect {
                x: row.x + row.width - width,
                width,
                ..row
            };
            right.render(right_area, buf);
        }
    }
}
