//! folio-api: HTTP client for the dev.to article listing.
//!
//! [`DevToClient`] implements [`ArticleSource`] against
//! `GET {base_url}/articles?page=N&per_page=M`. The response body must be a
//! JSON array of article records; the optional `X-Total-Count` header is
//! passed through as the total item count.

use async_trait::async_trait;
use folio_core::config::ApiConfig;
use folio_core::{ArticlePage, ArticleSource, ListQuery, SourceError};
use serde_json::Value;

/// Header some deployments use to advertise the full result size.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Clone)]
pub struct DevToClient {
    http: reqwest::Client,
    base_url: String,
}

impl DevToClient {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, SourceError> {
        Self::new(config.base_url.clone(), &config.user_agent)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }
}

#[async_trait]
impl ArticleSource for DevToClient {
    async fn list_articles(&self, query: ListQuery) -> Result<ArticlePage, SourceError> {
        let mut params: Vec<(&str, String)> = Vec::with_capacity(2);
        if let Some(page) = query.page {
            params.push(("page", page.to_string()));
        }
        params.push(("per_page", query.per_page.to_string()));

        let url = self.articles_url();
        tracing::debug!(%url, ?params, "devto: GET articles");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "devto: non-success status");
            return Err(SourceError::Status { status: status.as_u16() });
        }

        let total_count = parse_total_count(response.headers().get(TOTAL_COUNT_HEADER));

        let body: Value = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        let records = match body {
            Value::Array(records) => records,
            other => {
                return Err(SourceError::Decode(format!(
                    "expected a JSON array of articles, got {}",
                    json_kind(&other)
                )))
            }
        };

        tracing::debug!(records = records.len(), ?total_count, "devto: page received");
        Ok(ArticlePage { records, total_count })
    }
}

fn parse_total_count(header: Option<&reqwest::header::HeaderValue>) -> Option<u64> {
    header?.to_str().ok()?.trim().parse().ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
