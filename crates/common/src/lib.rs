//! Common utilities and types shared across the toolbar chrome.

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{UiError, UiResult};
