//! An `ArticleSource` whose responses are released by the test.
//!
//! Every call parks until the test hands it an outcome with
//! [`ScriptedSource::release`], which makes arbitrary completion orders easy
//! to stage: start A, start B, release B, release A.

use async_trait::async_trait;
use folio_core::{ArticlePage, ArticleSource, ListQuery, SourceError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

type Outcome = Result<ArticlePage, SourceError>;

#[derive(Default)]
struct Script {
    calls: Vec<ListQuery>,
    parked: HashMap<usize, oneshot::Sender<Outcome>>,
}

#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<ListQuery> {
        self.script.lock().unwrap().calls.clone()
    }

    /// Wait (up to two seconds) until at least `n` calls have arrived.
    pub async fn wait_for_calls(&self, n: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while self.script.lock().unwrap().calls.len() < n {
            assert!(
                tokio::time::Instant::now() < deadline,
                "timed out waiting for {n} calls, saw {}",
                self.script.lock().unwrap().calls.len()
            );
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    }

    /// Resolve call number `index` (0-based) with `outcome`.
    pub fn release(&self, index: usize, outcome: Outcome) {
        let tx = self
            .script
            .lock()
            .unwrap()
            .parked
            .remove(&index)
            .unwrap_or_else(|| panic!("call {index} is not parked"));
        let _ = tx.send(outcome);
    }

    /// Resolve call `index` with a page of records and no total.
    pub fn release_records(&self, index: usize, records: Vec<Value>) {
        self.release(index, Ok(ArticlePage { records, total_count: None }));
    }
}

#[async_trait]
impl ArticleSource for ScriptedSource {
    async fn list_articles(&self, query: ListQuery) -> Result<ArticlePage, SourceError> {
        let rx = {
            let mut script = self.script.lock().unwrap();
            let index = script.calls.len();
            script.calls.push(query);
            let (tx, rx) = oneshot::channel();
            script.parked.insert(index, tx);
            rx
        };
        rx.await
            .unwrap_or_else(|_| Err(SourceError::Transport("script dropped".to_string())))
    }
}
