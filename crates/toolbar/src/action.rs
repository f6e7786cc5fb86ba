//! Toolbar action definitions and the services that execute them.

use serde::{Deserialize, Serialize};

/// Action identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u32);

/// One user-chosen toolbar action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Action identifier.
    pub id: ActionId,
    /// Icon key, resolved through the icon service.
    pub icon: String,
    /// Display label.
    pub label: String,
}

impl ActionSpec {
    /// Create a new action spec.
    pub fn new(id: ActionId, icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            icon: icon.into(),
            label: label.into(),
        }
    }
}

/// Which customizable toolbar a button list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolbarSlot {
    CustomBar1,
    CustomBar2,
}

/// How an action was triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Tap,
    Swipe,
}

/// Source of the user-ordered action lists.
pub trait ActionRegistry {
    /// The ordered actions configured for a toolbar slot. Duplicates
    /// are allowed and order is display order.
    fn ordered_actions(&self, slot: ToolbarSlot) -> Vec<ActionSpec>;
}

/// Executes the action bound to a button.
pub trait ActionExecutor {
    fn invoke(&mut self, id: ActionId, trigger: Trigger);

    /// The companion action bound to a button's swipe gesture.
    fn invoke_secondary(&mut self, id: ActionId, trigger: Trigger);
}
