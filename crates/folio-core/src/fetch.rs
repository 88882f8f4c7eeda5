//! Fetch-state machine: the lifecycle of one view's list request.
//!
//! ```text
//!            begin()              resolve(Ok)
//!   Idle ─────────────► Loading ─────────────► Success
//!    ▲                   ▲   │                    │
//!    │                   │   └─── resolve(Err) ──►Error
//!    │                   └──────── begin() ───────┘ (from any state)
//! ```
//!
//! No state is terminal: [`FetchMachine::begin`] is always allowed and always
//! moves to `Loading`, superseding whatever came before, including a request
//! that is still in flight.
//!
//! # Ordering
//!
//! Every `begin` hands out a [`RequestTicket`] carrying a monotonically
//! increasing sequence number. [`FetchMachine::resolve`] only applies a result
//! whose ticket matches the most recent `begin`; anything older is discarded.
//! The displayed state therefore tracks the most recently *started* request,
//! whatever order the responses come back in. After [`FetchMachine::unmount`]
//! every late result is discarded as well.

use crate::error::SourceError;
use crate::normalizer;
use crate::types::{Article, ArticlePage, CoverSize};
use std::sync::Arc;

/// Lifecycle snapshot of one list-fetch operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success {
        /// Shared, immutable batch. A later fetch replaces it wholesale.
        articles: Arc<[Article]>,
        total_count: Option<u64>,
    },
    Error {
        /// Generic, user-facing text.
        message: String,
    },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The current batch, or an empty slice outside `Success`.
    pub fn articles(&self) -> &[Article] {
        match self {
            FetchState::Success { articles, .. } => articles,
            _ => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success { .. } => "success",
            FetchState::Error { .. } => "error",
        }
    }
}

/// Tag identifying one `begin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// What [`FetchMachine::resolve`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request has started since this one; result discarded.
    Stale,
    /// The view is gone; result discarded.
    Unmounted,
}

/// Per-view knobs for how results are turned into state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchProfile {
    /// Placeholder size for records without a cover image.
    pub cover_size: CoverSize,
    /// Total count assumed when the source does not send one.
    pub fallback_total: Option<u64>,
    /// Generic message shown on any failure.
    pub error_message: String,
}

impl FetchProfile {
    pub fn new(cover_size: CoverSize, error_message: impl Into<String>) -> Self {
        Self {
            cover_size,
            fallback_total: None,
            error_message: error_message.into(),
        }
    }

    pub fn with_fallback_total(mut self, total: u64) -> Self {
        self.fallback_total = Some(total);
        self
    }
}

/// Owns the [`FetchState`] of one view.
#[derive(Debug)]
pub struct FetchMachine {
    profile: FetchProfile,
    state: FetchState,
    seq: u64,
    mounted: bool,
}

impl FetchMachine {
    pub fn new(profile: FetchProfile) -> Self {
        Self {
            profile,
            state: FetchState::Idle,
            seq: 0,
            mounted: true,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Start a new request: move to `Loading` and return its ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.seq += 1;
        self.mounted = true;
        tracing::debug!(seq = self.seq, from = self.state.label(), "fetch: loading");
        self.state = FetchState::Loading;
        RequestTicket(self.seq)
    }

    /// True when `ticket` belongs to the most recent `begin`.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.seq
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ArticlePage, SourceError>,
    ) -> Resolution {
        if !self.mounted {
            tracing::debug!(seq = ticket.0, "fetch: late result after unmount discarded");
            return Resolution::Unmounted;
        }
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.0, current = self.seq, "fetch: stale result discarded");
            return Resolution::Stale;
        }

        self.state = match outcome {
            Ok(page) => {
                let articles = normalizer::normalize_batch(&page.records, self.profile.cover_size);
                let total_count = page.total_count.or(self.profile.fallback_total);
                tracing::debug!(
                    seq = ticket.0,
                    records = page.records.len(),
                    articles = articles.len(),
                    ?total_count,
                    "fetch: success"
                );
                FetchState::Success {
                    articles: articles.into(),
                    total_count,
                }
            }
            Err(e) => {
                tracing::warn!(seq = ticket.0, error = %e, "fetch: request failed");
                FetchState::Error {
                    message: self.profile.error_message.clone(),
                }
            }
        };
        Resolution::Applied
    }

    /// Mark the owning view as gone. Every result arriving afterwards is
    /// discarded until the next [`FetchMachine::begin`].
    pub fn unmount(&mut self) {
        tracing::debug!(seq = self.seq, "fetch: unmounted");
        self.mounted = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn machine() -> FetchMachine {
        FetchMachine::new(
            FetchProfile::new(CoverSize::CARD, "Error fetching articles. Please try again later.")
                .with_fallback_total(100),
        )
    }

    fn page(titles: &[&str], total: Option<u64>) -> ArticlePage {
        ArticlePage {
            records: titles
                .iter()
                .enumerate()
                .map(|(i, t)| json!({ "id": i, "title": t }))
                .collect(),
            total_count: total,
        }
    }

    fn titles(state: &FetchState) -> Vec<String> {
        state.articles().iter().map(|a| a.title().to_string()).collect()
    }

    #[test]
    fn starts_idle() {
        assert_eq!(machine().state(), &FetchState::Idle);
    }

    #[test]
    fn begin_moves_to_loading() {
        let mut m = machine();
        m.begin();
        assert!(m.state().is_loading());
    }

    #[test]
    fn success_normalizes_and_keeps_total() {
        let mut m = machine();
        let t = m.begin();
        assert_eq!(m.resolve(t, Ok(page(&["a", "b"], Some(42)))), Resolution::Applied);
        assert_eq!(titles(m.state()), ["a", "b"]);
        assert!(matches!(m.state(), FetchState::Success { total_count: Some(42), .. }));
    }

    #[test]
    fn missing_total_uses_fallback() {
        let mut m = machine();
        let t = m.begin();
        m.resolve(t, Ok(page(&["a"], None)));
        assert!(matches!(m.state(), FetchState::Success { total_count: Some(100), .. }));
    }

    #[test]
    fn no_fallback_leaves_total_empty() {
        let mut m = FetchMachine::new(FetchProfile::new(CoverSize::CARD, "oops"));
        let t = m.begin();
        m.resolve(t, Ok(page(&["a"], None)));
        assert!(matches!(m.state(), FetchState::Success { total_count: None, .. }));
    }

    #[test]
    fn error_uses_generic_message() {
        let mut m = machine();
        let t = m.begin();
        m.resolve(t, Err(SourceError::Status { status: 503 }));
        assert_eq!(
            m.state(),
            &FetchState::Error {
                message: "Error fetching articles. Please try again later.".to_string()
            }
        );
    }

    #[test]
    fn out_of_order_completion_keeps_latest() {
        let mut m = machine();
        let first = m.begin();
        let second = m.begin();
        assert_eq!(m.resolve(second, Ok(page(&["second"], None))), Resolution::Applied);
        assert_eq!(m.resolve(first, Ok(page(&["first"], None))), Resolution::Stale);
        assert_eq!(titles(m.state()), ["second"]);
    }

    #[test]
    fn stale_error_does_not_clobber_loading() {
        let mut m = machine();
        let first = m.begin();
        let _second = m.begin();
        assert_eq!(m.resolve(first, Err(SourceError::Transport("reset".into()))), Resolution::Stale);
        assert!(m.state().is_loading());
    }

    #[test]
    fn begin_is_allowed_from_error() {
        let mut m = machine();
        let t = m.begin();
        m.resolve(t, Err(SourceError::Decode("bad".into())));
        let t = m.begin();
        assert!(m.state().is_loading());
        m.resolve(t, Ok(page(&["again"], None)));
        assert_eq!(titles(m.state()), ["again"]);
    }

    #[test]
    fn unmount_suppresses_late_results() {
        let mut m = machine();
        let t = m.begin();
        m.unmount();
        assert_eq!(m.resolve(t, Ok(page(&["late"], None))), Resolution::Unmounted);
        assert!(m.state().is_loading());
    }

    #[test]
    fn each_success_is_a_new_batch() {
        let mut m = machine();
        let t = m.begin();
        m.resolve(t, Ok(page(&["a"], None)));
        let before = match m.state() {
            FetchState::Success { articles, .. } => articles.clone(),
            other => panic!("expected success, got {other:?}"),
        };
        let t = m.begin();
        m.resolve(t, Ok(page(&["b"], None)));
        assert_eq!(before[0].title(), "a");
        assert_eq!(titles(m.state()), ["b"]);
    }

    #[test]
    fn empty_batch_after_filtering_is_still_success() {
        let mut m = machine();
        let t = m.begin();
        let bad = ArticlePage { records: vec![json!({ "title": "no id" })], total_count: None };
        m.resolve(t, Ok(bad));
        assert!(matches!(m.state(), FetchState::Success { .. }));
        assert!(m.state().articles().is_empty());
    }
}
