//! Common error types.

use thiserror::Error;

/// Error type for the toolbar chrome.
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Composition error: {0}")]
    Compose(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type UiResult<T> = Result<T, UiError>;

impl UiError {
    pub fn compose(msg: impl Into<String>) -> Self {
        Self::Compose(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}
