// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant List: a keyboard cursor over opaque list items.
//!
//! [`ListNavigator`] tracks which item of a list the keyboard is "on" and
//! reports cursor moves and selections through two callbacks. It never moves
//! host focus itself; the `on_focus` callback decides what a cursor move
//! means on screen (focusing a row, scrolling it into view, highlighting it).
//!
//! | Key           | Effect                                              |
//! |---------------|-----------------------------------------------------|
//! | `ArrowDown`   | next item, wrapping to the first; `on_focus`        |
//! | `ArrowUp`     | previous item, wrapping to the last; `on_focus`     |
//! | `Home`/`End`  | first / last item; `on_focus`                       |
//! | `Enter`/Space | `on_select` for the current item, if there is one   |
//!
//! All of these keys are consumed. The cursor starts on no item, and Enter
//! before any arrow key selects nothing: the first item is never selected
//! implicitly.
//!
//! ```rust
//! use core::cell::RefCell;
//! use verdant_keys::{Key, KeyEvent};
//! use verdant_list::ListNavigator;
//!
//! let picked = RefCell::new(None);
//! let mut plants = ListNavigator::new(
//!     vec!["basil", "chard", "dill"],
//!     |plant: &&'static str, _| *picked.borrow_mut() = Some(*plant),
//!     |_, _| {},
//! );
//!
//! plants.handle_key_down(&mut KeyEvent::new(Key::Enter));
//! assert_eq!(*picked.borrow(), None);
//!
//! plants.handle_key_down(&mut KeyEvent::new(Key::ArrowUp));
//! plants.handle_key_down(&mut KeyEvent::new(Key::Enter));
//! assert_eq!(*picked.borrow(), Some("dill"));
//! ```
//!
//! ## Lifecycle
//!
//! The navigator owns its items. When the list is replaced (a search filter
//! changed, a page loaded), build a new navigator, or call
//! [`ListNavigator::reset`] first if the old one must live on, so no stale
//! index outlives the items it pointed into.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for cursor moves and selections.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use verdant_keys::{Key, KeyboardEvent};

type ItemCallback<'a, T> = Box<dyn FnMut(&T, usize) + 'a>;

/// Keyboard cursor over a list of items.
pub struct ListNavigator<'a, T> {
    items: Vec<T>,
    current: Option<usize>,
    on_select: ItemCallback<'a, T>,
    on_focus: ItemCallback<'a, T>,
}

impl<'a, T> ListNavigator<'a, T> {
    /// Navigate `items`, reporting selections to `on_select` and cursor moves
    /// to `on_focus`. Both receive the item and its index.
    pub fn new(
        items: impl Into<Vec<T>>,
        on_select: impl FnMut(&T, usize) + 'a,
        on_focus: impl FnMut(&T, usize) + 'a,
    ) -> Self {
        Self {
            items: items.into(),
            current: None,
            on_select: Box::new(on_select),
            on_focus: Box::new(on_focus),
        }
    }

    /// The items being navigated.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the item under the cursor, or `None` before the first move.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Handle a keydown event.
    ///
    /// Returns whether the key belongs to list navigation (and was consumed).
    pub fn handle_key_down<E: KeyboardEvent>(&mut self, event: &mut E) -> bool {
        let last = self.items.len().checked_sub(1);
        let target = match event.key() {
            Key::ArrowDown => last.map(|last| match self.current {
                Some(i) if i < last => i + 1,
                _ => 0,
            }),
            Key::ArrowUp => last.map(|last| match self.current {
                Some(i) if i > 0 => i - 1,
                _ => last,
            }),
            Key::Home => last.map(|_| 0),
            Key::End => last,
            Key::Enter | Key::Space => {
                event.prevent_default();
                if let Some(index) = self.current {
                    self.select_item(index);
                }
                return true;
            }
            _ => return false,
        };
        event.prevent_default();
        if let Some(index) = target {
            self.focus_item(index);
        }
        true
    }

    /// Put the cursor on `index` and report it through `on_focus`.
    ///
    /// Out-of-range indices are ignored.
    pub fn focus_item(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "list.focus", from = ?self.current, to = index);
        self.current = Some(index);
        (self.on_focus)(item, index);
    }

    /// Report the item at `index` through `on_select`.
    ///
    /// The cursor does not move. Out-of-range indices are ignored.
    pub fn select_item(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "list.select", index);
        (self.on_select)(item, index);
    }

    /// Take the cursor off every item without invoking callbacks.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNavigator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNavigator")
            .field("items", &self.items)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
