//! Pagination bar: previous, page links, next and a page summary

use allon_app::PageState;
use allon_core::PageLink;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct PaginationBar<'a> {
    page: &'a PageState,
    /// Projects on the displayed page
    count: usize,
}

impl<'a> PaginationBar<'a> {
    pub fn new(page: &'a PageState, count: usize) -> Self {
        Self { page, count }
    }

    fn controls(&self) -> Line<'static> {
        let enabled = |on: bool| if on { styles::accent() } else { styles::text_muted() };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled("◀ Prev", enabled(self.page.has_previous())),
            Span::raw("  "),
        ];
        for link in self.page.page_links() {
            match link {
                PageLink::Current(n) => {
                    spans.push(Span::styled(format!(" {n} "), styles::focused_selected()))
                }
                PageLink::Page(n) => spans.push(Span::styled(format!(" {n} "), styles::accent())),
                PageLink::Ellipsis => spans.push(Span::styled(" … ", styles::text_muted())),
            }
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Next ▶", enabled(self.page.has_next())));
        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.controls().render(area, buf);

        Line::from(Span::styled(
            format!("Page {} - {} projects ", self.page.current_page, self.count),
            styles::text_secondary(),
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;

    fn page(current: u32, returned: usize) -> PageState {
        PageState {
            current_page: current,
            returned,
            loaded: true,
            ..Default::default()
        }
    }

    fn render(page: &PageState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(PaginationBar::new(page, page.returned), Rect::new(0, 0, 80, 1));
        term
    }

    #[test]
    fn test_summary_counts_page_projects() {
        let term = render(&page(3, 5));
        assert!(term.line_contains(0, "Page 3 - 5 projects"));
    }

    #[test]
    fn test_links_around_current_page() {
        let term = render(&page(3, 5));
        assert!(term.line_contains(0, " 1  …  3  4 "));
    }

    #[test]
    fn test_next_disabled_on_short_page() {
        let term = render(&page(2, 2));
        let buffer = term.buffer();
        let next_x = (0..76)
            .find(|&x| (x..x + 4).map(|i| buffer[(i, 0)].symbol()).collect::<String>() == "Next")
            .expect("next label");
        assert_eq!(buffer[(next_x, 0)].fg, palette::TEXT_MUTED);
        assert!(!term.line_contains(0, " 3 "));
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        let term = render(&page(1, 5));
        assert_eq!(term.buffer()[(3, 0)].fg, palette::TEXT_MUTED);
    }
}
