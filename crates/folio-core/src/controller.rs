//! View controllers: one thin controller per page that fetches articles.
//!
//! Each controller composes a [`FetchMachine`] with one query shape:
//!
//! | View | Query | Re-fetches |
//! |------|-------|------------|
//! | [`HomeView`] | `page` + `per_page` | on every page change |
//! | [`FixedView`] (projects) | `per_page` = 6 | never (once per mount) |
//! | [`FixedView`] (newsletter) | `per_page` = 3 | never (once per mount) |
//!
//! Controllers never await anything. Starting a request hands a
//! [`ListQuery`] and a [`RequestTicket`] to a [`Dispatch`] implementation;
//! the result comes back later as a [`Completion`] that the UI loop feeds to
//! [`View::apply`]. [`Loader`] is the production dispatcher: it spawns the
//! request on a tokio runtime and posts the completion on a channel that the
//! UI thread drains between frames.

use crate::config::{FixedViewConfig, HomeConfig};
use crate::error::SourceError;
use crate::fetch::{FetchMachine, FetchProfile, FetchState, RequestTicket, Resolution};
use crate::pagination::{PaginationWindow, Pager};
use crate::source::ArticleSource;
use crate::types::{ArticlePage, CoverSize, ListQuery};
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const ARTICLES_ERROR: &str = "Error fetching articles. Please try again later.";
const PROJECTS_ERROR: &str = "Error fetching projects. Please try again later.";

/// Which page a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Projects,
    Newsletter,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewId::Home => write!(f, "home"),
            ViewId::Projects => write!(f, "projects"),
            ViewId::Newsletter => write!(f, "newsletter"),
        }
    }
}

/// A finished request, tagged with the view and ticket that started it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub view: ViewId,
    pub ticket: RequestTicket,
    pub outcome: Result<ArticlePage, SourceError>,
}

/// Starts requests on behalf of views.
pub trait Dispatch {
    fn dispatch(&self, view: ViewId, ticket: RequestTicket, query: ListQuery);
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Runs requests on a tokio runtime and reports back over a channel.
///
/// Requests are never cancelled. A superseded request still runs to the end;
/// its completion is dropped by the view's fetch machine.
#[derive(Clone)]
pub struct Loader {
    source: Arc<dyn ArticleSource>,
    handle: Handle,
    tx: UnboundedSender<Completion>,
}

impl Loader {
    /// Build a loader and the receiving end the UI loop should drain.
    pub fn new(source: Arc<dyn ArticleSource>, handle: Handle) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { source, handle, tx }, rx)
    }
}

impl Dispatch for Loader {
    fn dispatch(&self, view: ViewId, ticket: RequestTicket, query: ListQuery) {
        tracing::debug!(%view, seq = ticket.seq(), ?query, "loader: dispatching");
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = source.list_articles(query).await;
            if tx.send(Completion { view, ticket, outcome }).is_err() {
                tracing::debug!(%view, seq = ticket.seq(), "loader: receiver gone, result dropped");
            }
        });
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// View trait
// ---------------------------------------------------------------------------

/// Lifecycle shared by every fetching page.
pub trait View {
    fn id(&self) -> ViewId;

    /// Called when the page becomes live. Issues the initial load. Mounting an
    /// already mounted view does nothing.
    fn mount(&mut self, dispatch: &dyn Dispatch);

    /// Called when the page goes away. Any result still in flight is ignored.
    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    /// Feed a finished request back into the view.
    fn apply(&mut self, completion: Completion) -> Resolution;

    fn state(&self) -> &FetchState;

    /// Unmount and mount again: the page starts over with a fresh load.
    fn remount(&mut self, dispatch: &dyn Dispatch) {
        self.unmount();
        self.mount(dispatch);
    }
}

// ---------------------------------------------------------------------------
// HomeView
// ---------------------------------------------------------------------------

/// The paged blog listing.
#[derive(Debug)]
pub struct HomeView {
    machine: FetchMachine,
    pager: Pager,
    mounted: bool,
}

impl HomeView {
    pub fn new(per_page: u32, fallback_total: u64) -> Self {
        let profile = FetchProfile::new(CoverSize::CARD, ARTICLES_ERROR)
            .with_fallback_total(fallback_total);
        Self {
            machine: FetchMachine::new(profile),
            pager: Pager::new(per_page),
            mounted: false,
        }
    }

    pub fn from_config(config: &HomeConfig) -> Self {
        Self::new(config.per_page, config.fallback_total)
    }

    /// Open on `page` instead of page 1.
    pub fn starting_at(mut self, page: u32) -> Self {
        self.pager = self.pager.starting_at(page);
        self
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn window(&self) -> PaginationWindow {
        self.pager.window()
    }

    /// Paging controls are disabled while a page is loading.
    pub fn controls_enabled(&self) -> bool {
        !self.machine.state().is_loading()
    }

    /// Request the current page.
    pub fn load(&mut self, dispatch: &dyn Dispatch) {
        let ticket = self.machine.begin();
        let query = ListQuery::paged(self.pager.current(), self.pager.per_page());
        dispatch.dispatch(ViewId::Home, ticket, query);
    }

    pub fn previous(&mut self, dispatch: &dyn Dispatch) -> bool {
        self.change_page(dispatch, Pager::previous)
    }

    pub fn next(&mut self, dispatch: &dyn Dispatch) -> bool {
        self.change_page(dispatch, Pager::next)
    }

    /// Jump to `page`, clamped to the known page range.
    pub fn jump(&mut self, page: u32, dispatch: &dyn Dispatch) -> bool {
        self.change_page(dispatch, |p| p.jump(page))
    }

    /// Jump to the final page (the control after the ellipsis).
    pub fn jump_to_last(&mut self, dispatch: &dyn Dispatch) -> bool {
        let last = self.pager.total_pages();
        self.jump(last, dispatch)
    }

    fn change_page(&mut self, dispatch: &dyn Dispatch, step: impl FnOnce(&mut Pager) -> bool) -> bool {
        if !self.controls_enabled() {
            tracing::debug!(page = self.pager.current(), "home: paging ignored while loading");
            return false;
        }
        if !step(&mut self.pager) {
            return false;
        }
        tracing::debug!(page = self.pager.current(), total = self.pager.total_pages(), "home: page changed");
        self.load(dispatch);
        true
    }
}

impl View for HomeView {
    fn id(&self) -> ViewId {
        ViewId::Home
    }

    fn mount(&mut self, dispatch: &dyn Dispatch) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.load(dispatch);
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.machine.unmount();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn apply(&mut self, completion: Completion) -> Resolution {
        let resolution = self.machine.resolve(completion.ticket, completion.outcome);
        if resolution == Resolution::Applied {
            if let FetchState::Success { total_count: Some(total), .. } = self.machine.state() {
                self.pager.set_total_count(*total);
            }
        }
        resolution
    }

    fn state(&self) -> &FetchState {
        self.machine.state()
    }
}

// ---------------------------------------------------------------------------
// FixedView
// ---------------------------------------------------------------------------

/// A page that shows one fixed-size batch, loaded once per mount.
#[derive(Debug)]
pub struct FixedView {
    id: ViewId,
    machine: FetchMachine,
    per_page: u32,
    mounted: bool,
}

impl FixedView {
    pub fn projects(per_page: u32) -> Self {
        Self::new(ViewId::Projects, per_page, FetchProfile::new(CoverSize::PROJECT, PROJECTS_ERROR))
    }

    pub fn newsletter(per_page: u32) -> Self {
        Self::new(ViewId::Newsletter, per_page, FetchProfile::new(CoverSize::CARD, ARTICLES_ERROR))
    }

    pub fn projects_from_config(config: &FixedViewConfig) -> Self {
        Self::projects(config.per_page)
    }

    pub fn newsletter_from_config(config: &FixedViewConfig) -> Self {
        Self::newsletter(config.per_page)
    }

    fn new(id: ViewId, per_page: u32, profile: FetchProfile) -> Self {
        Self {
            id,
            machine: FetchMachine::new(profile),
            per_page: per_page.max(1),
            mounted: false,
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl View for FixedView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn mount(&mut self, dispatch: &dyn Dispatch) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let ticket = self.machine.begin();
        dispatch.dispatch(self.id, ticket, ListQuery::fixed(self.per_page));
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.machine.unmount();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn apply(&mut self, completion: Completion) -> Resolution {
        self.machine.resolve(completion.ticket, completion.outcome)
    }

    fn state(&self) -> &FetchState {
        self.machine.state()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
