// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic actions and the table that binds them to callbacks.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::key::{Key, Modifiers};

/// A semantic keyboard action recognized by [`KeyboardHandler`](crate::KeyboardHandler).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Enter.
    Enter,
    /// Space.
    Space,
    /// Escape.
    Escape,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Tab without Shift.
    Tab,
    /// Shift+Tab.
    ShiftTab,
}

const ACTION_COUNT: usize = 9;

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; ACTION_COUNT] = [
        Self::Enter,
        Self::Space,
        Self::Escape,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::Tab,
        Self::ShiftTab,
    ];

    /// Recognize the action for a key press, if any.
    ///
    /// Only Tab consults the modifiers; the other actions fire regardless of
    /// which modifiers are held.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        Some(match key {
            Key::Enter => Self::Enter,
            Key::Space => Self::Space,
            Key::Escape => Self::Escape,
            Key::ArrowUp => Self::ArrowUp,
            Key::ArrowDown => Self::ArrowDown,
            Key::ArrowLeft => Self::ArrowLeft,
            Key::ArrowRight => Self::ArrowRight,
            Key::Tab if modifiers.contains(Modifiers::SHIFT) => Self::ShiftTab,
            Key::Tab => Self::Tab,
            Key::Home | Key::End | Key::Character(_) | Key::Other => return None,
        })
    }

    /// Whether dispatching this action consumes the event.
    ///
    /// Tab and Shift+Tab must keep moving native focus, so they are never
    /// consumed.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Tab | Self::ShiftTab)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

type Callback<'a, E> = Box<dyn FnMut(&mut E) + 'a>;

/// Mapping from [`Action`] to an optional callback.
///
/// One callback may serve several actions; see [`ActionTable::on_any`].
/// Binding an action twice replaces the earlier binding.
///
/// ```
/// use verdant_keys::{Action, ActionTable, KeyEvent};
///
/// let table: ActionTable<'_, KeyEvent> = ActionTable::new()
///     .on(Action::Escape, |_| {})
///     .on_any(&[Action::Enter, Action::Space], |_| {});
///
/// assert!(table.is_bound(Action::Space));
/// assert!(!table.is_bound(Action::Tab));
/// ```
pub struct ActionTable<'a, E> {
    bindings: [Option<usize>; ACTION_COUNT],
    callbacks: SmallVec<[Callback<'a, E>; 4]>,
}

impl<'a, E> ActionTable<'a, E> {
    /// An empty table: every action is a no-op.
    pub fn new() -> Self {
        Self {
            bindings: [None; ACTION_COUNT],
            callbacks: SmallVec::new(),
        }
    }

    /// Bind `callback` to `action`.
    pub fn on(self, action: Action, callback: impl FnMut(&mut E) + 'a) -> Self {
        self.on_any(&[action], callback)
    }

    /// Bind one `callback` to every action in `actions`.
    pub fn on_any(mut self, actions: &[Action], callback: impl FnMut(&mut E) + 'a) -> Self {
        if actions.is_empty() {
            return self;
        }
        let index = self.callbacks.len();
        self.callbacks.push(Box::new(callback));
        for action in actions {
            self.bindings[action.slot()] = Some(index);
        }
        self
    }

    /// Whether `action` has a callback.
    pub fn is_bound(&self, action: Action) -> bool {
        self.bindings[action.slot()].is_some()
    }

    /// Actions that currently have a callback.
    pub fn bound_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_bound(*action))
            .collect()
    }

    /// Run the callback for `action`, returning whether one was bound.
    pub(crate) fn invoke(&mut self, action: Action, event: &mut E) -> bool {
        match self.bindings[action.slot()] {
            Some(index) => {
                (self.callbacks[index])(event);
                true
            }
            None => false,
        }
    }
}

impl<E> Default for ActionTable<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ActionTable<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionTable")
            .field("bound", &self.bound_actions())
            .finish_non_exhaustive()
    }
}
