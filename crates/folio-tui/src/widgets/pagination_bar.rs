//! Pagination strip under the blog listing.
//!
//! ```text
//! ← Previous    1  2 [3] 4  5  …  17    Next →
//! ```
//!
//! The whole strip is drawn in the disabled style while a page is loading;
//! `Previous` / `Next` are also disabled at the ends of the range.

use crate::theme::Theme;
use folio_core::PaginationWindow;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct PaginationBar<'a> {
    window: &'a PaginationWindow,
    enabled: bool,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    pub fn new(window: &'a PaginationWindow, enabled: bool, theme: &'a Theme) -> Self {
        Self { window, enabled, theme }
    }

    fn control_style(&self, active: bool) -> Style {
        if self.enabled && active {
            self.theme.page
        } else {
            self.theme.page_disabled
        }
    }

    fn page_style(&self, page: u32) -> Style {
        if !self.enabled {
            self.theme.page_disabled
        } else if self.window.is_current(page) {
            self.theme.page_current
        } else {
            self.theme.page
        }
    }

    pub fn line(&self) -> Line<'static> {
        let w = self.window;
        let mut spans = vec![
            Span::styled("← Previous", self.control_style(w.current > 1)),
            Span::raw("   "),
        ];

        for page in &w.pages {
            let label = if w.is_current(*page) {
                format!("[{page}]")
            } else {
                format!(" {page} ")
            };
            spans.push(Span::styled(label, self.page_style(*page)));
        }

        if w.show_last {
            spans.push(Span::styled(" … ", self.theme.muted));
            spans.push(Span::styled(format!(" {} ", w.total), self.page_style(w.total)));
        }

        spans.push(Span::raw("   "));
        spans.push(Span::styled("Next →", self.control_style(w.current < w.total)));
        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.background);
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
