//! Main render/view function (View in TEA pattern)


use allon_app::state::{AppState, UiMode};
use allon_app::StatusKind;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.page.show_pagination());
    let icons = IconSet::new(state.settings.ui.icons);

    let mut header = widgets::MainHeader::new(&state.settings.api.base_url, icons);
    if state.is_busy() {
        let elapsed = state
            .status
            .as_ref()
            .filter(|s| s.kind == StatusKind::Loading)
            .map(|s| s.shown_at.elapsed())
            .unwrap_or_default();
        header = header.busy(widgets::spinner_frame(elapsed));
    }
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::StatusLine::new(state.status.as_ref()), areas.status);
    frame.render_widget(widgets::ProjectList::new(state, icons), areas.list);

    if state.page.show_pagination() {
        frame.render_widget(
            widgets::PaginationBar::new(&state.page, state.projects.len()),
            areas.pagination,
        );
    }

    frame.render_widget(widgets::KeyHints::new(state.ui_mode), areas.hints);

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(dialog) = &state.confirm_dialog {
            frame.render_widget(widgets::ConfirmDialog::new(dialog, icons), area);
        }
    }
}
