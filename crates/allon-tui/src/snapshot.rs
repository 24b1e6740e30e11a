//! Off-screen rendering of the full view
//!
//! Headless mode records the final screen as text instead of a
//! screenshot.

use allon_app::AppState;
use allon_core::prelude::*;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::render;

/// Default snapshot size
pub const SNAPSHOT_WIDTH: u16 = 100;
pub const SNAPSHOT_HEIGHT: u16 = 30;

/// Render `state` into a `width` x `height` buffer and return its text,
/// one line per row with trailing blanks trimmed
pub fn render_to_string(state: &AppState, width: u16, height: u16) -> Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).map_err(|e| Error::terminal(e.to_string()))?;
    terminal
        .draw(|frame| render::view(frame, state))
        .map_err(|e| Error::terminal(e.to_string()))?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

fn buffer_to_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        let mut skip = 0;
        for x in 0..buffer.area.width {
            // Wide glyphs occupy two cells; the second holds a blank
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            skip = ratatui::text::Span::raw(symbol).width().saturating_sub(1);
            line.push_str(symbol);
        }
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}
