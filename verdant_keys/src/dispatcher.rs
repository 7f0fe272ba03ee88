// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key event dispatch over an [`ActionTable`].
//!
//! ## Semantics
//!
//! For each event passed to [`KeyboardHandler::handle`]:
//!
//! - Enter, Space, Escape and the four arrows are consumed: the event's
//!   default is prevented *before* the bound callback runs, and even when no
//!   callback is bound (so Space never scrolls the page under a widget that
//!   chose not to react).
//! - Tab and Shift+Tab are never consumed; their callbacks run and native
//!   focus movement proceeds.
//! - Every other key passes through untouched.
//!
//! A handler may carry a *scope*: a predicate evaluated first. Events for
//! which it returns `false` pass through untouched, as if the key were not
//! recognized. Presets use it for context-dependent keys, such as Enter in a
//! multi-line text field.

use core::fmt;

use crate::action::{Action, ActionTable};
use crate::key::KeyboardEvent;

/// Dispatches key events to the callbacks of an [`ActionTable`].
///
/// ```
/// use core::cell::Cell;
/// use verdant_keys::{Action, ActionTable, Key, KeyEvent, KeyboardHandler};
///
/// let closed = Cell::new(false);
/// let mut handler = KeyboardHandler::new(
///     ActionTable::new().on(Action::Escape, |_: &mut KeyEvent| closed.set(true)),
/// );
///
/// let mut esc = KeyEvent::new(Key::Escape);
/// assert_eq!(handler.handle(&mut esc), Some(Action::Escape));
/// assert!(esc.default_prevented());
/// assert!(closed.get());
///
/// // Unbound but recognized: still consumed.
/// let mut space = KeyEvent::new(Key::Space);
/// assert_eq!(handler.handle(&mut space), Some(Action::Space));
/// assert!(space.default_prevented());
/// ```
pub struct KeyboardHandler<'a, E> {
    table: ActionTable<'a, E>,
    scope: Option<fn(&E) -> bool>,
}

impl<'a, E: KeyboardEvent> KeyboardHandler<'a, E> {
    /// Dispatch through `table`.
    pub fn new(table: ActionTable<'a, E>) -> Self {
        Self { table, scope: None }
    }

    /// Only handle events for which `scope` returns `true`.
    pub fn with_scope(mut self, scope: fn(&E) -> bool) -> Self {
        self.scope = Some(scope);
        self
    }

    /// The underlying table.
    pub fn table(&self) -> &ActionTable<'a, E> {
        &self.table
    }

    /// Handle one key event.
    ///
    /// Returns the recognized action, or `None` when the event passed through.
    pub fn handle(&mut self, event: &mut E) -> Option<Action> {
        if let Some(scope) = self.scope
            && !scope(event)
        {
            return None;
        }
        let action = Action::from_key(event.key(), event.modifiers())?;
        if action.prevents_default() {
            event.prevent_default();
        }
        let _bound = self.table.invoke(action, event);
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "keys.dispatch", action = ?action, bound = _bound);
        Some(action)
    }
}

impl<E> fmt::Debug for KeyboardHandler<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHandler")
            .field("table", &self.table)
            .field("scoped", &self.scope.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Key, KeyEvent, Modifiers};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recording(log: &RefCell<Vec<Action>>) -> KeyboardHandler<'_, KeyEvent> {
        let mut table = ActionTable::new();
        for action in Action::ALL {
            table = table.on(action, move |_: &mut KeyEvent| log.borrow_mut().push(action));
        }
        KeyboardHandler::new(table)
    }

    #[test]
    fn recognized_keys_prevent_default_before_callback() {
        let mut seen_prevented = false;
        let mut handler = KeyboardHandler::new(
            ActionTable::new().on(Action::Enter, |e: &mut KeyEvent| {
                seen_prevented = e.default_prevented();
            }),
        );
        let mut ev = KeyEvent::new(Key::Enter);
        handler.handle(&mut ev);
        drop(handler);
        assert!(seen_prevented);
    }

    #[test]
    fn unbound_recognized_keys_are_still_consumed() {
        let mut handler: KeyboardHandler<'_, KeyEvent> = KeyboardHandler::new(ActionTable::new());
        for key in [
            Key::Enter,
            Key::Space,
            Key::Escape,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
        ] {
            let mut ev = KeyEvent::new(key);
            assert!(handler.handle(&mut ev).is_some());
            assert!(ev.default_prevented(), "{key:?} should be consumed");
        }
    }

    #[test]
    fn tab_runs_callback_without_consuming() {
        let log = RefCell::new(Vec::new());
        let mut handler = recording(&log);

        let mut tab = KeyEvent::new(Key::Tab);
        let mut back = KeyEvent::new(Key::Tab).with_modifiers(Modifiers::SHIFT);
        handler.handle(&mut tab);
        handler.handle(&mut back);

        assert!(!tab.default_prevented());
        assert!(!back.default_prevented());
        assert_eq!(*log.borrow(), vec![Action::Tab, Action::ShiftTab]);
    }

    #[test]
    fn other_keys_pass_through() {
        let log = RefCell::new(Vec::new());
        let mut handler = recording(&log);

        for key in [Key::Character('a'), Key::Home, Key::End, Key::Other] {
            let mut ev = KeyEvent::new(key);
            assert_eq!(handler.handle(&mut ev), None);
            assert!(!ev.default_prevented());
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn out_of_scope_events_pass_through() {
        let log = RefCell::new(Vec::new());
        let mut handler = recording(&log).with_scope(|e| !e.shift());

        let mut shifted = KeyEvent::new(Key::Escape).with_shift();
        assert_eq!(handler.handle(&mut shifted), None);
        assert!(!shifted.default_prevented());

        let mut plain = KeyEvent::new(Key::Escape);
        assert_eq!(handler.handle(&mut plain), Some(Action::Escape));
        assert_eq!(*log.borrow(), vec![Action::Escape]);
    }
}
