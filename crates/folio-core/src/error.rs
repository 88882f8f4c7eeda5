//! Error types for folio-core.

use thiserror::Error;

/// Failure of one "list articles" call.
///
/// The variants carry upstream diagnostics for the debug log. None of this
/// text reaches the screen; views show their own generic message instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },

    #[error("could not decode response body: {0}")]
    Decode(String),
}

/// Failure to load or persist the theme preference.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
