//! Icon resolution.

use crate::content::PageState;

const PLACEHOLDER_NAME: &str = "placeholder";

/// Handle to a resolved icon asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    name: String,
}

impl Icon {
    /// Create an icon handle by asset name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The default icon shown when a key cannot be resolved.
    pub fn placeholder() -> Self {
        Self::named(PLACEHOLDER_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }
}

/// Resolves icon keys to icon handles.
///
/// Resolution never fails: unknown keys resolve to the placeholder
/// icon so composition can always complete.
pub trait IconResolver {
    fn resolve(&self, key: &str) -> Icon;

    /// State-aware resolution for buttons whose icon depends on the
    /// current page (reload/stop, bookmark toggle). Defaults to the
    /// state-independent icon.
    fn resolve_for_state(&self, key: &str, _state: &PageState) -> Icon {
        self.resolve(key)
    }
}
