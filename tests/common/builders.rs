//! Test builders: fluent constructors for raw upstream records.
//!
//! These builders favour readability in test assertions over flexibility.
//! Unset fields are left out of the record entirely, so a builder with only
//! `id` and `title` produces the sparsest record the normalizer accepts.

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw article records.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new(42, "Hello")
///     .tags_alt("rust, tui")
///     .author("Ada")
///     .build();
/// ```
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new(id: u64, title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::from(id));
        fields.insert("title".into(), Value::from(title));
        Self { fields }
    }

    pub fn string_id(mut self, id: &str) -> Self {
        self.fields.insert("id".into(), Value::from(id));
        self
    }

    pub fn description(self, text: &str) -> Self {
        self.set("description", Value::from(text))
    }

    pub fn date(self, text: &str) -> Self {
        self.set("readable_publish_date", Value::from(text))
    }

    pub fn url(self, url: &str) -> Self {
        self.set("url", Value::from(url))
    }

    /// Primary tag field, as an array.
    pub fn tags(self, tags: &[&str]) -> Self {
        self.set("tag_list", Value::from(tags.to_vec()))
    }

    /// Alternate tag field, as the comma-joined string dev.to sends.
    pub fn tags_alt(self, joined: &str) -> Self {
        self.set("tags", Value::from(joined))
    }

    pub fn author(self, name: &str) -> Self {
        let mut user = Map::new();
        user.insert("name".into(), Value::from(name));
        self.set("user", Value::Object(user))
    }

    pub fn social_image(self, url: &str) -> Self {
        self.set("social_image", Value::from(url))
    }

    pub fn cover_image(self, url: &str) -> Self {
        self.set("cover_image", Value::from(url))
    }

    /// Set any field verbatim, including deliberately mistyped values.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
