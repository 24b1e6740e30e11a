//! Confirmation dialog shown before a configuration is applied

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use super::ConfirmDialogState;
use crate::theme::icons::IconSet;
use crate::theme::{palette, styles};

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    icons: IconSet,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal_area = modal_overlay::centered_rect(64, 9, area);
        modal_overlay::clear_area(buf, modal_area);
        modal_overlay::render_shadow(buf, modal_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Warning
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text_bright_bold())
            .render(chunks[1], buf);

        if let Some(warning) = &self.state.warning {
            Line::from(vec![
                Span::styled(self.icons.warning(), Style::default().fg(palette::STATUS_YELLOW)),
                Span::raw(" "),
                Span::styled(warning.as_str(), Style::default().fg(palette::STATUS_YELLOW)),
            ])
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
        }

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_secondary()),
            Span::styled(
                "y",
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] Yes  ", styles::text_secondary()),
            Span::styled("[", styles::text_secondary()),
            Span::styled(
                "n",
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] No", styles::text_secondary()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}
