//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Contact store could not be written.
    #[error("Contact store error: {0}")]
    Store(String),

    /// External send tool could not be started.
    #[error("Message dispatch failed: {0}")]
    Dispatch(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
