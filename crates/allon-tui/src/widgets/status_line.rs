//! One-line status banner

use allon_app::StatusBanner;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct StatusLine<'a> {
    status: Option<&'a StatusBanner>,
}

impl<'a> StatusLine<'a> {
    pub fn new(status: Option<&'a StatusBanner>) -> Self {
        Self { status }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(status) = self.status else {
            return;
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(status.message.as_str(), styles::status_kind(status.kind)),
        ])
        .render(area, buf);
    }
}
