//! Error type for the feed decode boundary.
//!
//! The transformation itself has no fatal paths: malformed individual
//! records degrade to standalone pass-through. Errors only exist where
//! payloads enter the system (file reads, JSON decode, option files).

use thiserror::Error;

/// Errors surfaced at the input boundary.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Reading an input file failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding an activities or project-info payload failed.
    #[error("failed to decode JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Pipeline option overrides were malformed.
    #[error("invalid pipeline options: {0}")]
    Config(String),
}
