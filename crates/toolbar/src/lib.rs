//! Customizable toolbar chrome.
//!
//! This crate provides the toolbar controllers including:
//! - Button composition from user-configured action lists
//! - Tap/swipe delegation to the action-execution service
//! - Theme application to composed buttons and the find overlay
//! - Find-in-page overlay state and match indicator

pub mod action;
pub mod button;
pub mod composer;
pub mod content;
pub mod find_bar;
pub mod icon;
pub mod theme;

pub use composer::ButtonComposer;
pub use find_bar::FindInPage;
pub use theme::ThemeData;
