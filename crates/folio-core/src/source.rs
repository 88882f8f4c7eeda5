//! The seam between views and whatever serves article records.
//!
//! [`ArticleSource`] is the single upstream operation folio needs: list one
//! page of raw records. The production implementation lives in `folio-api`;
//! tests plug in scripted or in-memory sources.

use crate::error::SourceError;
use crate::types::{ArticlePage, ListQuery};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch one page of raw article records.
    ///
    /// Transport failures and non-success statuses must both come back as
    /// `Err`; callers treat them the same way.
    async fn list_articles(&self, query: ListQuery) -> Result<ArticlePage, SourceError>;
}

/// A fixed set of records served for every query, paged locally.
///
/// Useful for demos and tests that do not care about the network.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<serde_json::Value>,
    advertise_total: bool,
}

impl StaticSource {
    pub fn new(records: Vec<serde_json::Value>) -> Self {
        Self { records, advertise_total: true }
    }

    /// Do not report a total count, forcing views onto their fallback.
    pub fn without_total(mut self) -> Self {
        self.advertise_total = false;
        self
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    async fn list_articles(&self, query: ListQuery) -> Result<ArticlePage, SourceError> {
        let per_page = query.per_page as usize;
        let start = (query.page.unwrap_or(1).max(1) as usize - 1) * per_page;
        let records = self
            .records
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();
        Ok(ArticlePage {
            records,
            total_count: self.advertise_total.then_some(self.records.len() as u64),
        })
    }
}
