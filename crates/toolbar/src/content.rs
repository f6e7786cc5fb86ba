//! Page state forwarded to state-dependent buttons.

/// Snapshot of the current tab state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// Page is currently loading.
    pub loading: bool,
    /// Current page is bookmarked.
    pub bookmarked: bool,
}
