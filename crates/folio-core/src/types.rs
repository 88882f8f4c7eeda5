//! Core types for folio-core.
//!
//! This module defines the data structures shared across the workspace: the
//! normalised [`Article`], the [`ListQuery`] sent to an article source, and
//! the raw [`ArticlePage`] an article source hands back.

use std::fmt;

/// Opaque, stable article identifier. Unique within one fetched batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pixel dimensions a consumer expects for a cover image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoverSize {
    pub width: u32,
    pub height: u32,
}

impl CoverSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Cards on the blog and newsletter pages.
    pub const CARD: CoverSize = CoverSize::new(400, 200);
    /// Regular cards on the projects page.
    pub const PROJECT: CoverSize = CoverSize::new(500, 300);
    /// The wide featured card on the projects page.
    pub const FEATURED: CoverSize = CoverSize::new(1000, 400);
}

/// Where an article's cover image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    /// Image URL supplied by the upstream record.
    Remote(String),
    /// No usable image upstream; a sized placeholder is shown instead.
    Placeholder(CoverSize),
}

impl Cover {
    /// Resolve to the reference a renderer should load.
    ///
    /// Placeholders are deterministic: the same size always produces the same
    /// reference.
    pub fn url(&self) -> String {
        match self {
            Cover::Remote(url) => url.clone(),
            Cover::Placeholder(size) => {
                format!("/placeholder.svg?height={}&width={}", size.height, size.width)
            }
        }
    }

    /// Re-size a placeholder for a different slot. Remote images pass through.
    pub fn sized(&self, size: CoverSize) -> Cover {
        match self {
            Cover::Remote(url) => Cover::Remote(url.clone()),
            Cover::Placeholder(_) => Cover::Placeholder(size),
        }
    }
}

/// A normalised article, ready for display.
///
/// Articles are immutable once built. A new fetch produces a new batch; no
/// batch is ever edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    title: String,
    summary: String,
    published: String,
    tags: Vec<String>,
    author: Option<String>,
    cover: Cover,
    url: String,
}

impl Article {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        summary: impl Into<String>,
        published: impl Into<String>,
        tags: Vec<String>,
        author: Option<String>,
        cover: Cover,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            published: published.into(),
            tags,
            author,
            cover,
            url: url.into(),
        }
    }

    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short description, possibly empty.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Display-formatted publish date exactly as the upstream sent it.
    pub fn published(&self) -> &str {
        &self.published
    }

    /// Every tag, in upstream order. Use [`Article::display_tags`] for cards.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The first `limit` tags. Truncation is a rendering decision, so the
    /// full list stays available through [`Article::tags`].
    pub fn display_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// External URL used for outbound navigation. May be empty when the
    /// upstream record carried none.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parameters for one "list articles" call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number. `None` for single-shot fetches.
    pub page: Option<u32>,
    pub per_page: u32,
}

impl ListQuery {
    pub fn paged(page: u32, per_page: u32) -> Self {
        Self { page: Some(page), per_page }
    }

    pub fn fixed(per_page: u32) -> Self {
        Self { page: None, per_page }
    }
}

/// One page of raw records exactly as the source returned them.
///
/// Records are loosely typed; the normalizer decides which ones survive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticlePage {
    pub records: Vec<serde_json::Value>,
    /// Total item count advertised by the source, when it sends one.
    pub total_count: Option<u64>,
}
