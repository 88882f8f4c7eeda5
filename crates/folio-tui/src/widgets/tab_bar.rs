//! Header widget: site owner, page tabs and the light/dark switch.

use crate::app::Page;
use crate::theme::Theme;
use folio_core::ThemeMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

/// Width of the theme switch at the right edge: ` ☀ ●── ☾ `.
const SWITCH_WIDTH: u16 = 9;

/// Renders the 1-line header at the top of every page.
///
/// The owner's name sits on the left, followed by one tab per [`Page`]; the
/// active tab is underlined. The right edge shows the theme switch, with
/// the knob on the sun in light mode and on the moon in dark mode.
pub struct TabBar<'a> {
    owner: &'a str,
    active: Page,
    mode: ThemeMode,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(owner: &'a str, active: Page, mode: ThemeMode, theme: &'a Theme) -> Self {
        Self { owner, active, mode, theme }
    }

    fn switch(&self) -> Line<'static> {
        let (sun, knob, moon) = match self.mode {
            ThemeMode::Light => (self.theme.nav_active, "●──", self.theme.muted),
            ThemeMode::Dark => (self.theme.muted, "──●", self.theme.nav_active),
        };
        Line::from(vec![
            Span::styled(" ☀ ", sun),
            Span::styled(knob, self.theme.accent),
            Span::styled(" ☾ ", moon),
        ])
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.background);

        let owner = format!(" {} ", self.owner);
        let owner_width = (owner.chars().count() as u16).min(area.width);
        buf.set_string(area.x, area.y, &owner, self.theme.title);

        let labels: Vec<Line> = Page::ALL
            .iter()
            .map(|page| Line::from(format!("{}:{}", page.number(), page.label())))
            .collect();

        let tabs_area = Rect {
            x: area.x + owner_width,
            width: area
                .width
                .saturating_sub(owner_width)
                .saturating_sub(SWITCH_WIDTH),
            ..area
        };
        Tabs::new(labels)
            .select(self.active.index())
            .style(self.theme.nav_inactive)
            .highlight_style(self.theme.nav_active.add_modifier(Modifier::UNDERLINED))
            .divider(" ")
            .render(tabs_area, buf);

        if area.width > SWITCH_WIDTH + owner_width {
            let x = area.right().saturating_sub(SWITCH_WIDTH);
            buf.set_line(x, area.y, &self.switch(), SWITCH_WIDTH);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
