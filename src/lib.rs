//! folio: terminal reader for a personal blog and portfolio.
//!
//! The workspace is split by layer:
//!
//! ```text
//! folio-api (DevToClient) ──► folio-core (views, fetch state, pagination)
//!                                   │
//!                  ┌────────────────┴───────────────┐
//!            folio-tui (tabs)                 headless (stdout)
//! ```
//!
//! This crate holds the binary and the headless listing mode, exposed here so
//! integration tests can drive it without a terminal.

pub mod headless;
