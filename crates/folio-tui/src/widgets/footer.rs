//! Footer: copyright year and the configured link labels.

use crate::theme::Theme;
use chrono::{Datelike, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

pub struct Footer<'a> {
    links: &'a [String],
    year: i32,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    /// Footer stamped with the current local year.
    pub fn new(links: &'a [String], theme: &'a Theme) -> Self {
        Self { links, year: Local::now().year(), theme }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.background);
        buf.set_string(area.x, area.y, format!(" © {}", self.year), self.theme.muted);

        let mut spans: Vec<Span> = Vec::with_capacity(self.links.len() * 2);
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.muted));
            }
            spans.push(Span::styled(link.as_str(), self.theme.nav_inactive));
        }
        let line = Line::from(spans);
        let width = line.width() as u16 + 1;
        let x = area.right().saturating_sub(width).max(area.x);
        buf.set_line(x, area.y, &line, area.right() - x);
    }
}
