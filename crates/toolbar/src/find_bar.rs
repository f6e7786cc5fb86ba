//! Find-in-page overlay controller.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::theme::{FindOverlayStyle, ThemeData};

/// Delay before the focus retry fires, for platforms where a focus
/// request alone does not reliably raise the on-screen keyboard.
pub const FOCUS_RETRY_DELAY_MS: u64 = 100;

/// Find capability of a content view.
///
/// `find_all_async` is fire-and-forget: results arrive later through
/// the registered match listener, on the same thread. Issuing a new
/// query supersedes the previous one inside the engine.
pub trait FindTarget {
    fn set_match_listener(&mut self, listener: Option<MatchListener>);
    fn find_all_async(&mut self, query: &str);
    fn find_next(&mut self, forward: bool);
    fn clear_matches(&mut self);
    fn notify_find_session_ended(&mut self);
}

/// On-screen keyboard service.
pub trait SoftInput {
    fn show_keyboard(&mut self);
    fn hide_keyboard(&mut self);
}

/// Match count reported by the engine for the current query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchCount {
    /// 0-based ordinal of the highlighted match.
    pub ordinal: u32,
    /// Total matches.
    pub total: u32,
}

impl MatchCount {
    pub fn update(&mut self, ordinal: u32, total: u32) {
        self.ordinal = ordinal;
        self.total = total;
    }

    /// Indicator string, 1-based while there are matches.
    pub fn display(&self) -> String {
        let shown = if self.total > 0 { self.ordinal + 1 } else { 0 };
        format!("{}/{}", shown, self.total)
    }
}

/// Shared counter handed to the bound target; the engine callback
/// writes into it and the indicator reads the latest value.
pub type MatchListener = Rc<RefCell<MatchCount>>;

/// Key input into the find query field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FindKey {
    Char(char),
    Backspace,
    Enter,
    ShiftEnter,
    Escape,
}

/// Coordinates the find overlay's visibility, query input, and live
/// match count against at most one bound content view.
///
/// The binding is weak: a content view dropped by its tab degrades
/// every forwarded operation to a no-op.
pub struct FindInPage {
    visible: bool,
    query: String,
    matches: MatchListener,
    bound: Option<Weak<RefCell<dyn FindTarget>>>,
    input: Box<dyn SoftInput>,
    query_focused: bool,
    focus_retry_armed: bool,
    style: FindOverlayStyle,
}

impl FindInPage {
    pub fn new(input: Box<dyn SoftInput>) -> Self {
        Self {
            visible: false,
            query: String::new(),
            matches: Rc::new(RefCell::new(MatchCount::default())),
            bound: None,
            input,
            query_focused: false,
            focus_retry_armed: false,
            style: FindOverlayStyle::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_query_focused(&self) -> bool {
        self.query_focused
    }

    /// Resolved overlay colors for the host to paint.
    pub fn style(&self) -> FindOverlayStyle {
        self.style
    }

    pub fn matches(&self) -> MatchCount {
        *self.matches.borrow()
    }

    /// The "current/total" indicator, reflecting the latest engine
    /// callback.
    pub fn indicator_text(&self) -> String {
        self.matches.borrow().display()
    }

    fn bound(&self) -> Option<Rc<RefCell<dyn FindTarget>>> {
        self.bound.as_ref().and_then(Weak::upgrade)
    }

    /// Tear down the current binding, if the target is still alive.
    fn unbind(&mut self) {
        if let Some(target) = self.bound() {
            let mut target = target.borrow_mut();
            target.set_match_listener(None);
            target.clear_matches();
            target.notify_find_session_ended();
        }
        self.bound = None;
    }

    /// Bind a content view and make the overlay visible.
    ///
    /// Re-entrant while already visible: the previous binding is torn
    /// down first, then query, matches, and focus are reset against the
    /// new target. The theme snapshot is resolved per field.
    pub fn show(&mut self, target: Rc<RefCell<dyn FindTarget>>, theme: Option<&ThemeData>) {
        self.unbind();

        target
            .borrow_mut()
            .set_match_listener(Some(self.matches.clone()));
        self.bound = Some(Rc::downgrade(&target));

        *self.matches.borrow_mut() = MatchCount::default();
        self.style = FindOverlayStyle::resolve(theme);
        self.query.clear();
        self.visible = true;
        self.query_focused = true;
        self.input.show_keyboard();
        // Retry after FOCUS_RETRY_DELAY_MS via focus_retry_due().
        self.focus_retry_armed = true;
        tracing::debug!("find overlay shown");
    }

    /// Delayed focus-retry entry point, scheduled by the host
    /// `FOCUS_RETRY_DELAY_MS` after `show`. Guarded so it never acts on
    /// an overlay hidden or unbound since it was armed.
    pub fn focus_retry_due(&mut self) {
        if !self.focus_retry_armed {
            return;
        }
        self.focus_retry_armed = false;

        if self.visible && self.bound().is_some() {
            self.query_focused = true;
            self.input.show_keyboard();
        }
    }

    /// Handle a key in the query field. Every text mutation clears the
    /// previous highlighting and issues a fresh find request with the
    /// full current query.
    pub fn on_key(&mut self, key: FindKey) {
        match key {
            FindKey::Char(c) => {
                self.query.push(c);
                self.search();
            }
            FindKey::Backspace => {
                if self.query.pop().is_some() {
                    self.search();
                }
            }
            FindKey::Enter => self.find_next(true),
            FindKey::ShiftEnter => self.find_next(false),
            FindKey::Escape => self.hide(),
        }
    }

    /// Replace the whole query, issuing a fresh find request.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.search();
    }

    fn search(&mut self) {
        let Some(target) = self.bound() else { return };
        let mut target = target.borrow_mut();
        target.clear_matches();
        target.find_all_async(&self.query);
    }

    /// Navigate to the next (`forward`) or previous match. Hides the
    /// keyboard and returns focus to the query field.
    pub fn find_next(&mut self, forward: bool) {
        let Some(target) = self.bound() else { return };
        self.input.hide_keyboard();
        target.borrow_mut().find_next(forward);
        self.query_focused = true;
    }

    /// Hide the overlay and end the find session on a still-live
    /// binding. Safe to call when already hidden or unbound.
    pub fn hide(&mut self) {
        if self.visible {
            tracing::debug!("find overlay hidden");
        }
        self.visible = false;
        self.query_focused = false;
        self.focus_retry_armed = false;
        self.input.hide_keyboard();
        self.unbind();
        *self.matches.borrow_mut() = MatchCount::default();
    }
}
