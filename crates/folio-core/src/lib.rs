//! folio-core: article fetching, pagination and shared preferences.
//!
//! # Architecture
//!
//! ```text
//! View controller ──► FetchMachine ──► Dispatch (Loader) ──► ArticleSource
//!        ▲                 │                                      │
//!        │                 └── Normalizer ◄── Completion ◄────────┘
//!        └── Pager / PaginationWindow
//!
//! ThemeStore ──► every mounted page (subscribe / notify)
//! ```
//!
//! The UI thread owns every controller. Network calls run on tokio tasks and
//! come back as [`controller::Completion`] messages; nothing in this crate
//! blocks or locks.

pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod normalizer;
pub mod pagination;
pub mod preference;
pub mod source;
pub mod types;

pub use controller::{Completion, Dispatch, FixedView, HomeView, Loader, View, ViewId};
pub use error::{PreferenceError, SourceError};
pub use fetch::{FetchMachine, FetchProfile, FetchState, RequestTicket, Resolution};
pub use pagination::{PaginationWindow, Pager};
pub use preference::{ThemeMode, ThemeStore};
pub use source::ArticleSource;
pub use types::{Article, ArticleId, ArticlePage, Cover, CoverSize, ListQuery};
