//! Button composition controller.

use common::UiResult;

use crate::action::{ActionExecutor, ActionRegistry, ActionSpec, ToolbarSlot};
use crate::button::{ActionButton, ButtonFactory};
use crate::content::PageState;
use crate::icon::IconResolver;
use crate::theme::ThemeData;

/// Maps an ordered action list onto live buttons in a toolbar slot and
/// keeps them themed.
///
/// Re-composition is a wholesale rebuild: the list is small and only
/// changes on user-driven preference edits, so no diffing is attempted.
pub struct ButtonComposer {
    slot: ToolbarSlot,
    buttons: Vec<ActionButton>,
    factory: Box<dyn ButtonFactory>,
    registry: Box<dyn ActionRegistry>,
    executor: Box<dyn ActionExecutor>,
    icons: Box<dyn IconResolver>,
    /// Last applied theme snapshot, re-applied on every rebuild.
    theme: Option<ThemeData>,
}

impl ButtonComposer {
    pub fn new(
        slot: ToolbarSlot,
        factory: Box<dyn ButtonFactory>,
        registry: Box<dyn ActionRegistry>,
        executor: Box<dyn ActionExecutor>,
        icons: Box<dyn IconResolver>,
    ) -> Self {
        Self {
            slot,
            buttons: Vec::new(),
            factory,
            registry,
            executor,
            icons,
            theme: None,
        }
    }

    /// Replace the slot contents with one button per spec, in spec
    /// order.
    ///
    /// All views are inflated before the slot is touched, so a failed
    /// inflation never leaves it half rendered.
    pub fn compose(&mut self, specs: &[ActionSpec]) -> UiResult<()> {
        let mut fresh = Vec::with_capacity(specs.len());
        for spec in specs {
            let mut button = self.factory.inflate_button(spec)?;
            button.reset_icon(self.icons.as_ref());
            fresh.push(button);
        }

        tracing::debug!(slot = ?self.slot, count = fresh.len(), "composed toolbar buttons");
        self.buttons = fresh;
        self.tint_buttons();
        Ok(())
    }

    /// Re-read the configured action list and rebuild the slot. Called
    /// on preference reset.
    pub fn recompose(&mut self) -> UiResult<()> {
        let specs = self.registry.ordered_actions(self.slot);
        self.compose(&specs)
    }

    /// Apply a theme snapshot to every composed button. Idempotent.
    pub fn apply_theme(&mut self, theme: Option<&ThemeData>) {
        self.theme = theme.copied();
        self.tint_buttons();
    }

    fn tint_buttons(&mut self) {
        let tint = self.theme.and_then(|t| t.icon_tint_color);
        for button in &mut self.buttons {
            match tint {
                Some(color) => button.set_tint(color),
                None => button.clear_tint(),
            }
        }
    }

    /// Forward the current tab state so state-dependent buttons can
    /// refresh their icon without a recompose.
    pub fn notify_page_state(&mut self, state: &PageState) {
        for button in &mut self.buttons {
            button.refresh_icon(self.icons.as_ref(), state);
        }
    }

    /// Restore every button's spec-defined default icon, discarding
    /// transient overrides.
    pub fn reset_icons(&mut self) {
        for button in &mut self.buttons {
            button.reset_icon(self.icons.as_ref());
        }
    }

    /// Dispatch a tap on the button at `index` to its bound action.
    pub fn tap(&mut self, index: usize) {
        if let Some(button) = self.buttons.get(index) {
            button.tap(self.executor.as_mut());
        }
    }

    /// Dispatch a swipe on the button at `index` to its secondary
    /// bound action.
    pub fn swipe(&mut self, index: usize) {
        if let Some(button) = self.buttons.get(index) {
            button.swipe(self.executor.as_mut());
        }
    }

    /// The composed buttons, in display order.
    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    pub fn button_mut(&mut self, index: usize) -> Option<&mut ActionButton> {
        self.buttons.get_mut(index)
    }

    pub fn count(&self) -> usize {
        self.buttons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionId, Trigger};
    use crate::button::DefaultButtonFactory;
    use crate::icon::Icon;
    use common::{Color, UiError};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct ListRegistry(Vec<ActionSpec>);

    impl ActionRegistry for ListRegistry {
        fn ordered_actions(&self, _slot: ToolbarSlot) -> Vec<ActionSpec> {
            self.0.clone()
        }
    }

    struct SharedExecutor {
        log: Rc<RefCell<Vec<(ActionId, Trigger, bool)>>>,
    }

    impl ActionExecutor for SharedExecutor {
        fn invoke(&mut self, id: ActionId, trigger: Trigger) {
            self.log.borrow_mut().push((id, trigger, false));
        }

        fn invoke_secondary(&mut self, id: ActionId, trigger: Trigger) {
            self.log.borrow_mut().push((id, trigger, true));
        }
    }

    struct StubResolver;

    impl IconResolver for StubResolver {
        fn resolve(&self, key: &str) -> Icon {
            match key {
                "back" | "forward" | "reload" | "bookmark" => Icon::named(key),
                _ => Icon::placeholder(),
            }
        }

        fn resolve_for_state(&self, key: &str, state: &PageState) -> Icon {
            match key {
                "reload" if state.loading => Icon::named("stop"),
                _ => self.resolve(key),
            }
        }
    }

    /// Fails on the nth inflation.
    struct FailingFactory {
        remaining: usize,
    }

    impl ButtonFactory for FailingFactory {
        fn inflate_button(&mut self, spec: &ActionSpec) -> UiResult<ActionButton> {
            if self.remaining == 0 {
                return Err(UiError::compose("inflation failed"));
            }
            self.remaining -= 1;
            DefaultButtonFactory.inflate_button(spec)
        }
    }

    fn specs() -> Vec<ActionSpec> {
        vec![
            ActionSpec::new(ActionId(1), "back", "Back"),
            ActionSpec::new(ActionId(2), "forward", "Forward"),
            ActionSpec::new(ActionId(3), "reload", "Reload"),
        ]
    }

    fn composer(actions: Vec<ActionSpec>) -> ButtonComposer {
        ButtonComposer::new(
            ToolbarSlot::CustomBar1,
            Box::new(DefaultButtonFactory),
            Box::new(ListRegistry(actions)),
            Box::new(SharedExecutor {
                log: Rc::new(RefCell::new(Vec::new())),
            }),
            Box::new(StubResolver),
        )
    }

    #[test]
    fn test_compose_one_button_per_spec() {
        let mut composer = composer(Vec::new());
        composer.compose(&specs()).unwrap();

        assert_eq!(composer.count(), 3);
        let ids: Vec<_> = composer.buttons().iter().map(|b| b.action_id()).collect();
        assert_eq!(ids, vec![ActionId(1), ActionId(2), ActionId(3)]);
        assert_eq!(composer.buttons()[2].icon().name(), "reload");
    }

    #[test]
    fn test_compose_empty_renders_no_buttons() {
        let mut composer = composer(Vec::new());
        composer.compose(&specs()).unwrap();
        composer.compose(&[]).unwrap();
        assert_eq!(composer.count(), 0);
    }

    #[test]
    fn test_compose_duplicates_render_distinct_views() {
        let mut composer = composer(Vec::new());
        let spec = ActionSpec::new(ActionId(1), "back", "Back");
        composer.compose(&[spec.clone(), spec]).unwrap();

        assert_eq!(composer.count(), 2);
        assert_eq!(
            composer.buttons()[0].action_id(),
            composer.buttons()[1].action_id()
        );
    }

    #[test]
    fn test_recompose_is_idempotent() {
        let mut composer = composer(specs());
        composer.recompose().unwrap();
        let first = composer.buttons().to_vec();

        composer.recompose().unwrap();
        assert_eq!(composer.buttons(), first.as_slice());
    }

    #[test]
    fn test_failed_inflation_leaves_slot_untouched() {
        let mut composer = ButtonComposer::new(
            ToolbarSlot::CustomBar1,
            Box::new(FailingFactory { remaining: 4 }),
            Box::new(ListRegistry(specs())),
            Box::new(SharedExecutor {
                log: Rc::new(RefCell::new(Vec::new())),
            }),
            Box::new(StubResolver),
        );

        composer.compose(&specs()).unwrap();
        assert_eq!(composer.count(), 3);

        // Factory now fails on the second of three inflations.
        assert!(composer.compose(&specs()).is_err());
        assert_eq!(composer.count(), 3);
    }

    #[test]
    fn test_unresolvable_icon_falls_back_to_placeholder() {
        let mut composer = composer(Vec::new());
        composer
            .compose(&[ActionSpec::new(ActionId(9), "no-such-icon", "Mystery")])
            .unwrap();

        assert!(composer.buttons()[0].icon().is_placeholder());
    }

    #[test]
    fn test_apply_theme_tints_buttons() {
        let mut composer = composer(Vec::new());
        composer.compose(&specs()).unwrap();

        let theme = ThemeData::new().with_icon_tint(Color::rgb(10, 20, 30));
        composer.apply_theme(Some(&theme));
        composer.apply_theme(Some(&theme)); // idempotent
        for button in composer.buttons() {
            assert_eq!(button.tint(), Some(Color::rgb(10, 20, 30)));
        }

        composer.apply_theme(None);
        for button in composer.buttons() {
            assert_eq!(button.tint(), None);
        }
    }

    #[test]
    fn test_theme_with_unset_tint_clears_existing() {
        let mut composer = composer(Vec::new());
        composer.compose(&specs()).unwrap();

        composer.apply_theme(Some(
            &ThemeData::new().with_icon_tint(Color::rgb(1, 1, 1)),
        ));
        composer.apply_theme(Some(&ThemeData::new().with_text(Color::BLACK)));

        for button in composer.buttons() {
            assert_eq!(button.tint(), None);
        }
    }

    #[test]
    fn test_recompose_keeps_current_theme() {
        let mut composer = composer(specs());
        composer.recompose().unwrap();
        composer.apply_theme(Some(
            &ThemeData::new().with_icon_tint(Color::rgb(5, 5, 5)),
        ));

        composer.recompose().unwrap();
        assert_eq!(composer.buttons()[0].tint(), Some(Color::rgb(5, 5, 5)));
    }

    #[test]
    fn test_page_state_refreshes_state_dependent_icons() {
        let mut composer = composer(Vec::new());
        composer.compose(&specs()).unwrap();

        composer.notify_page_state(&PageState {
            loading: true,
            ..Default::default()
        });
        assert_eq!(composer.buttons()[2].icon().name(), "stop");
        assert_eq!(composer.buttons()[0].icon().name(), "back");

        composer.notify_page_state(&PageState::default());
        assert_eq!(composer.buttons()[2].icon().name(), "reload");
    }

    #[test]
    fn test_reset_icons_discards_overrides() {
        let mut composer = composer(Vec::new());
        composer.compose(&specs()).unwrap();

        composer
            .button_mut(0)
            .unwrap()
            .set_icon(Icon::named("loading"));
        assert_eq!(composer.buttons()[0].icon().name(), "loading");

        composer.reset_icons();
        assert_eq!(composer.buttons()[0].icon().name(), "back");
    }

    #[test]
    fn test_tap_and_swipe_dispatch_by_index() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composer = ButtonComposer::new(
            ToolbarSlot::CustomBar1,
            Box::new(DefaultButtonFactory),
            Box::new(ListRegistry(specs())),
            Box::new(SharedExecutor { log: log.clone() }),
            Box::new(StubResolver),
        );
        composer.recompose().unwrap();

        composer.tap(1);
        composer.swipe(2);
        composer.tap(99); // out of range, no-op

        assert_eq!(
            *log.borrow(),
            vec![
                (ActionId(2), Trigger::Tap, false),
                (ActionId(3), Trigger::Swipe, true),
            ]
        );
    }
}
