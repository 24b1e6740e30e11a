//! Key hints footer

use allon_app::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("Space", "select"),
    ("Enter", "load"),
    ("L", "load selected"),
    ("←→", "page"),
    ("r", "refresh"),
    ("q", "quit"),
];

const DIALOG_HINTS: &[(&str, &str)] = &[("y", "confirm"), ("n/Esc", "cancel")];

pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.mode {
            UiMode::Browse => BROWSE_HINTS,
            UiMode::ConfirmDialog => DIALOG_HINTS,
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);
    }
}
