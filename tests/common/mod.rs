//! Shared test utilities for folio integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_devto_api;
pub mod fixtures;
pub mod scripted_source;

pub use builders::*;
pub use fixtures::*;
