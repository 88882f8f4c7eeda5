//! Canned dev.to article records.
//!
//! Shapes follow what `GET /api/articles` actually returns: `tag_list` is an
//! array, `tags` a comma-joined string, `user` a nested object.

use serde_json::{json, Value};

/// A complete, well-formed record.
pub fn devto_record(id: u64) -> Value {
    json!({
        "type_of": "article",
        "id": id,
        "title": format!("Article {id}"),
        "description": format!("Summary of article {id}"),
        "readable_publish_date": "Jan 1",
        "url": format!("https://dev.to/anurag/article-{id}"),
        "social_image": format!("https://media.dev.to/social/{id}.png"),
        "cover_image": null,
        "tag_list": ["rust", "tui", "ratatui", "terminal"],
        "tags": "rust, tui, ratatui, terminal",
        "user": { "name": "Anurag", "username": "anurag" }
    })
}

/// `count` well-formed records with ids `first..first + count`.
pub fn devto_records(first: u64, count: u64) -> Vec<Value> {
    (first..first + count).map(devto_record).collect()
}

/// A record with only the fields folio cannot do without.
pub fn minimal_record(id: u64, title: &str) -> Value {
    json!({ "id": id, "title": title })
}

/// One record for every way a record can be unusable.
pub fn unusable_records() -> Vec<Value> {
    vec![
        json!({ "title": "no id" }),
        json!({ "id": null, "title": "null id" }),
        json!({ "id": "", "title": "blank id" }),
        json!({ "id": 7 }),
        json!({ "id": 8, "title": "   " }),
        json!({ "id": 9, "title": 42 }),
        json!("not an object"),
        json!(null),
    ]
}
