//! Normalizer: maps loosely typed upstream records into [`Article`] values.
//!
//! Upstream records are not owned by folio, so every field is optional at the
//! wire level. A record without an identifier or a title cannot be shown and
//! is dropped (logged at debug level, never surfaced). Everything else has a
//! fallback:
//!
//! | Field | Source keys (first present wins) | Fallback |
//! |-------|----------------------------------|----------|
//! | tags | `tag_list`, `tags` | empty list |
//! | cover | `social_image`, `cover_image` | sized placeholder |
//! | author | `user.name` | none (no author badge) |
//! | summary | `description` | empty |
//! | publish date | `readable_publish_date` | empty |
//! | url | `url` | empty |

use crate::types::{Article, ArticleId, Cover, CoverSize};
use serde::Deserialize;
use serde_json::Value;

/// Every field is kept as a raw [`Value`] so one mistyped optional field
/// cannot sink an otherwise usable record.
#[derive(Debug, Default, Deserialize)]
struct RawArticle {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    readable_publish_date: Value,
    #[serde(default)]
    tag_list: Value,
    #[serde(default)]
    tags: Value,
    #[serde(default)]
    user: Value,
    #[serde(default)]
    social_image: Value,
    #[serde(default)]
    cover_image: Value,
    #[serde(default)]
    url: Value,
}

/// Normalise one raw record. Returns `None` when the record is not an
/// object or lacks a usable id or title. Optional fields of the wrong type
/// are treated as absent.
pub fn normalize(record: &Value, cover_size: CoverSize) -> Option<Article> {
    if !record.is_object() {
        tracing::debug!("normalizer: record is not an object, dropped");
        return None;
    }
    let raw = match RawArticle::deserialize(record) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "normalizer: record unreadable, dropped");
            return None;
        }
    };

    let Some(id) = parse_id(&raw.id) else {
        tracing::debug!("normalizer: record without id dropped");
        return None;
    };
    let Some(title) = text(&raw.title).filter(|t| !t.trim().is_empty()) else {
        tracing::debug!(id = %id, "normalizer: record without title dropped");
        return None;
    };

    let tags = parse_tags(&raw.tag_list)
        .or_else(|| parse_tags(&raw.tags))
        .unwrap_or_default();

    let cover = first_non_empty([text(&raw.social_image), text(&raw.cover_image)])
        .map(Cover::Remote)
        .unwrap_or(Cover::Placeholder(cover_size));

    let author = raw
        .user
        .get("name")
        .and_then(text)
        .filter(|name| !name.trim().is_empty());

    Some(Article::new(
        id,
        title,
        text(&raw.description).unwrap_or_default(),
        text(&raw.readable_publish_date).unwrap_or_default(),
        tags,
        author,
        cover,
        text(&raw.url).unwrap_or_default(),
    ))
}

/// Normalise a whole batch, keeping upstream order and silently skipping
/// records that cannot be shown.
pub fn normalize_batch(records: &[Value], cover_size: CoverSize) -> Vec<Article> {
    let articles: Vec<Article> = records
        .iter()
        .filter_map(|r| normalize(r, cover_size))
        .collect();
    let dropped = records.len() - articles.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = articles.len(), "normalizer: batch filtered");
    }
    articles
}

fn parse_id(value: &Value) -> Option<ArticleId> {
    match value {
        Value::Number(n) => Some(ArticleId::new(n.to_string())),
        Value::String(s) if !s.trim().is_empty() => Some(ArticleId::new(s.trim())),
        _ => None,
    }
}

/// A tag field is "present" when it is an array or a string. The upstream
/// list endpoint sends `tag_list` as an array and `tags` as a comma-joined
/// string, so both shapes are accepted under either key.
fn parse_tags(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
        ),
        Value::String(joined) => Some(
            joined
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

/// The string inside `value`, or `None` for any other JSON type.
fn text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
