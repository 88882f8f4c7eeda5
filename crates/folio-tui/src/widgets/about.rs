//! About page: static text from the `[site]` config section.

use crate::theme::Theme;
use folio_core::config::SiteConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct AboutPage<'a> {
    site: &'a SiteConfig,
    theme: &'a Theme,
}

impl<'a> AboutPage<'a> {
    pub fn new(site: &'a SiteConfig, theme: &'a Theme) -> Self {
        Self { site, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let (site, theme) = (self.site, self.theme);
        let heading = theme.title.add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(format!("Hi, I'm {}", site.owner), heading)));
        lines.push(Line::default());
        for paragraph in &site.about {
            lines.push(Line::from(Span::styled(paragraph.as_str(), theme.body)));
            lines.push(Line::default());
        }

        if !site.skills.is_empty() {
            lines.push(Line::from(Span::styled("Skills", heading)));
            for skill in &site.skills {
                lines.push(Line::from(vec![
                    Span::styled("  • ", theme.accent),
                    Span::styled(skill.as_str(), theme.body),
                ]));
            }
            lines.push(Line::default());
        }

        if !site.contact.is_empty() {
            lines.push(Line::from(Span::styled("Contact", heading)));
            lines.push(Line::from(vec![
                Span::styled("  ", theme.body),
                Span::styled(site.contact.as_str(), theme.accent),
            ]));
        }
        lines
    }
}

impl Widget for AboutPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" About ")
            .style(self.theme.background)
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;
    use folio_core::config::Config;
    use folio_core::ThemeMode;

    #[test]
    fn renders_owner_skills_and_contact() {
        let config = Config::defaults();
        let theme = Theme::for_mode(ThemeMode::Light);
        let area = Rect::new(0, 0, 200, 30);
        let mut buf = Buffer::empty(area);
        AboutPage::new(&config.site, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Hi, I'm Anurag"));
        assert!(text.contains("• Node.js"));
        assert!(text.contains("email@example.com"));
    }

    #[test]
    fn empty_sections_are_skipped() {
        let site = SiteConfig { owner: "Ada".into(), ..SiteConfig::default() };
        let theme = Theme::for_mode(ThemeMode::Dark);
        let lines = AboutPage::new(&site, &theme).lines();
        assert_eq!(lines.len(), 2);
    }
}
