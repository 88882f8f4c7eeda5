//! Article list widget: the card column shared by the Blog, Projects and
//! Newsletter pages.
//!
//! # Card anatomy
//!
//! ```text
//!   Sunday, 1 Jan 2023                         <- publish date (accent)
//! ▸ Building a TUI blog reader                 <- title, ▸ marks the selection
//!   Short description, wrapped and clamped
//!   to two lines
//!   [rust] [tui] [ratatui]   By Ada            <- first `tag_limit` tags, author
//!   cover /placeholder.svg?height=200&width=400
//! ```
//!
//! The [`ListLayout::Projects`] layout marks the third card as featured: its
//! title carries a `★`, the summary is not clamped to two lines and a
//! placeholder cover is sized for the wide slot.
//!
//! Cards have different heights, so the viewport is computed per render:
//! starting at the selected card, earlier cards are added while they still
//! fit, keeping the selection visible at the bottom edge.

use crate::theme::Theme;
use folio_core::{Article, CoverSize, FetchState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// Summary lines on a regular card.
const SUMMARY_LINES: u16 = 2;
/// Summary lines on the featured project card.
const FEATURED_SUMMARY_LINES: u16 = 4;
/// Index of the featured card in the projects layout.
pub const FEATURED_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    /// Uniform cards (Blog, Newsletter).
    Cards,
    /// Two cards, one featured card, then the rest.
    Projects,
}

impl ListLayout {
    fn is_featured(self, index: usize) -> bool {
        self == ListLayout::Projects && index == FEATURED_INDEX
    }

    fn summary_lines(self, index: usize) -> u16 {
        if self.is_featured(index) {
            FEATURED_SUMMARY_LINES
        } else {
            SUMMARY_LINES
        }
    }

    /// Rows taken by one card, including the blank separator.
    fn card_height(self, index: usize) -> u16 {
        // date + title + summary + tags + cover + separator
        4 + self.summary_lines(index) + 1
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ArticleList<'a> {
    state: &'a FetchState,
    selected: usize,
    focused: bool,
    layout: ListLayout,
    tag_limit: usize,
    title: &'a str,
    loading_text: &'a str,
    theme: &'a Theme,
}

impl<'a> ArticleList<'a> {
    pub fn new(state: &'a FetchState, selected: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            selected,
            focused,
            layout: ListLayout::Cards,
            tag_limit: 3,
            title: "All blog posts",
            loading_text: "Loading articles...",
            theme,
        }
    }

    pub fn layout(mut self, layout: ListLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn tag_limit(mut self, limit: usize) -> Self {
        self.tag_limit = limit;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn loading_text(mut self, text: &'a str) -> Self {
        self.loading_text = text;
        self
    }

    /// First card index to draw so that `selected` is visible in `height`
    /// rows.
    fn first_visible(&self, count: usize, height: u16) -> usize {
        let selected = self.selected.min(count.saturating_sub(1));
        let mut used = 0u16;
        let mut first = selected;
        for index in (0..=selected).rev() {
            let h = self.layout.card_height(index);
            if used + h > height && index != selected {
                break;
            }
            used = used.saturating_add(h);
            first = index;
        }
        first
    }

    fn render_card(&self, index: usize, article: &Article, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let selected = index == self.selected;
        let featured = self.layout.is_featured(index);
        let mut y = area.y;
        let bottom = area.bottom();

        let row = |line: Line, buf: &mut Buffer, y: &mut u16| {
            if *y < bottom {
                buf.set_line(area.x, *y, &line, area.width);
                *y += 1;
            }
        };

        row(
            Line::from(Span::styled(format!("  {}", article.published()), theme.accent)),
            buf,
            &mut y,
        );

        let marker = if selected { "▸ " } else { "  " };
        let mut title_style = theme.title;
        if selected && self.focused {
            title_style = title_style.add_modifier(Modifier::UNDERLINED);
        }
        let mut title = vec![
            Span::styled(marker, theme.accent),
            Span::styled(article.title().to_string(), title_style),
        ];
        if featured {
            title.push(Span::styled("  ★ featured", theme.accent));
        }
        row(Line::from(title), buf, &mut y);

        let summary_lines = self.layout.summary_lines(index);
        let summary_area = Rect {
            x: area.x + 2,
            y,
            width: area.width.saturating_sub(2),
            height: summary_lines.min(bottom.saturating_sub(y)),
        };
        Paragraph::new(article.summary())
            .style(theme.muted)
            .wrap(Wrap { trim: true })
            .render(summary_area, buf);
        y += summary_area.height;

        let mut badges: Vec<Span> = vec![Span::raw("  ")];
        for tag in article.display_tags(self.tag_limit) {
            badges.push(Span::styled(format!("[{tag}]"), theme.tag));
            badges.push(Span::raw(" "));
        }
        if let Some(author) = article.author() {
            badges.push(Span::styled(format!("  By {author}"), theme.author));
        }
        row(Line::from(badges), buf, &mut y);

        let cover = if featured {
            article.cover().sized(CoverSize::FEATURED)
        } else {
            article.cover().clone()
        };
        row(
            Line::from(Span::styled(
                format!("  cover {}", cover.url()),
                theme.muted.add_modifier(Modifier::DIM),
            )),
            buf,
            &mut y,
        );
    }
}

impl Widget for ArticleList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .style(self.theme.background)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.state {
            FetchState::Idle => {}
            FetchState::Loading => {
                Paragraph::new(Line::from(Span::styled(self.loading_text, self.theme.muted)))
                    .alignment(Alignment::Center)
                    .render(centre_row(inner), buf);
            }
            FetchState::Error { message } => {
                Paragraph::new(Line::from(Span::styled(message.as_str(), self.theme.error)))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            FetchState::Success { articles, .. } => {
                if articles.is_empty() {
                    return;
                }
                let first = self.first_visible(articles.len(), inner.height);
                let mut y = inner.y;
                for (index, article) in articles.iter().enumerate().skip(first) {
                    if y >= inner.bottom() {
                        break;
                    }
                    let height = self
                        .layout
                        .card_height(index)
                        .min(inner.bottom() - y);
                    let card = Rect { y, height, ..inner };
                    self.render_card(index, article, card, buf);
                    y += height;
                }
            }
        }
    }
}

fn centre_row(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
