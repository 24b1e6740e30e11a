//! Project cards and the empty state
//!
//! Each card takes three rows: name and status badge, description and
//! last update, configuration preview.

use allon_app::AppState;
use allon_core::{format_date, Project, CONFIG_PREVIEW_ITEMS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::icons::{status_label, IconSet};
use crate::theme::{palette, styles};

const CARD_HEIGHT: u16 = 3;

/// Configuration preview line: the first items plus a remainder count
pub fn config_preview(project: &Project) -> String {
    if !project.has_config() {
        return "No configuration".to_string();
    }
    let items = project.config_items();
    if items.is_empty() {
        return "Empty configuration".to_string();
    }

    let mut preview = items
        .iter()
        .take(CONFIG_PREVIEW_ITEMS)
        .map(|item| format!("{} ({})", item.id, item.module))
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > CONFIG_PREVIEW_ITEMS {
        preview.push_str(&format!(" ... and {} more", items.len() - CONFIG_PREVIEW_ITEMS));
    }
    preview
}

/// Project cards of the displayed page
pub struct ProjectList<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> ProjectList<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    /// First card index so the cursor stays visible
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        self.state.cursor.saturating_sub(visible - 1)
    }

    fn render_card(&self, index: usize, project: &Project, area: Rect, buf: &mut Buffer) {
        let is_cursor = index == self.state.cursor;
        let is_selected = self.state.is_selected(&project.id);
        let status = project.status();

        let cursor = if is_cursor { self.icons.cursor() } else { " " };
        let marker = if is_selected {
            self.icons.selected()
        } else {
            self.icons.unselected()
        };
        let name_style = if is_cursor {
            styles::accent_bold()
        } else {
            styles::text_bright_bold()
        };

        let title = Line::from(vec![
            Span::styled(cursor, styles::accent()),
            Span::raw(" "),
            Span::styled(marker, styles::accent()),
            Span::raw(" "),
            Span::styled(project.name.as_str(), name_style),
        ]);
        title.render(Rect { height: 1, ..area }, buf);

        let badge = Line::from(vec![
            Span::raw(self.icons.status(status)),
            Span::raw(" "),
            Span::styled(status_label(status), styles::project_status(status)),
            Span::raw(" "),
        ])
        .alignment(Alignment::Right);
        badge.render(Rect { height: 1, ..area }, buf);

        if area.height < 2 {
            return;
        }
        let description = project
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description");
        Line::from(vec![
            Span::raw("      "),
            Span::styled(description, styles::text_secondary()),
            Span::styled(" · Updated ", styles::text_muted()),
            Span::styled(
                format_date(project.updated_at.as_deref()),
                styles::text_secondary(),
            ),
        ])
        .render(Rect { y: area.y + 1, height: 1, ..area }, buf);

        if area.height < 3 {
            return;
        }
        let preview_style = if project.has_config() {
            styles::text_primary()
        } else {
            Style::default().fg(palette::STATUS_YELLOW)
        };
        Line::from(vec![
            Span::raw("      "),
            Span::styled(config_preview(project), preview_style),
        ])
        .render(Rect { y: area.y + 2, height: 1, ..area }, buf);
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let page = &self.state.page;
        let (message, hint) = if page.load_failed {
            ("Could not load projects", "Press r to retry")
        } else if page.is_loading || !page.loaded {
            ("Loading projects...", "")
        } else {
            ("No projects found", "Press r to refresh")
        };

        let lines = vec![
            Line::from(Span::styled(message, styles::text_secondary())),
            Line::from(Span::styled(hint, styles::text_muted())),
        ];
        let top = area.y + area.height.saturating_sub(2) / 2;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(
                Rect {
                    y: top,
                    height: area.height.min(2),
                    ..area
                },
                buf,
            );
    }
}

impl Widget for ProjectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Projects ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.projects.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
        let offset = self.scroll_offset(visible);

        for (slot, (index, project)) in self
            .state
            .projects
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + slot as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(inner.y + inner.height - y);
            self.render_card(index, project, Rect { y, height, ..inner }, buf);
        }
    }
}
