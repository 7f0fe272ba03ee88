// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving tab stop over an ordered group of elements.
//!
//! Exactly one member of the group is reachable with Tab (its tab index is
//! [`TAB_STOP`]); every other present member gets [`NOT_TABBABLE`]. Arrow
//! keys, or direct calls, move which member holds the tab stop and focus it.
//!
//! ## Lifecycle
//!
//! A group takes its elements by value when the widget mounts. When the
//! widget's element set changes shape, build a new group; there is no way to
//! patch one in place.

use alloc::vec::Vec;

use verdant_keys::{Key, KeyboardEvent};

use crate::host::{FocusHost, NOT_TABBABLE, TAB_STOP};

/// What happens at the ends of the group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stop at the first and last member.
    Never,
    /// Wrap from last to first and first to last.
    #[default]
    Wrap,
}

/// Which arrow keys [`RovingFocusGroup::handle_key`] responds to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left / Right.
    Horizontal,
    /// Up / Down.
    Vertical,
    /// All four arrows; Right and Down move forward.
    #[default]
    Both,
}

#[derive(Copy, Clone, Debug)]
enum Move {
    Next,
    Previous,
    First,
    Last,
}

/// Roving tab stop over an ordered group.
///
/// Slots may be `None` (for example, a ref that has not been populated yet);
/// such slots still count toward the group's length but never receive a tab
/// index or focus.
///
/// ```
/// use verdant_focus::{FocusHost, MemoryHost, RovingFocusGroup};
///
/// let mut host: MemoryHost<char> = MemoryHost::new();
/// let mut tabs = RovingFocusGroup::from_elements(['a', 'b', 'c', 'd'], 0);
/// tabs.update_tab_index(&mut host);
///
/// for _ in 0..3 {
///     tabs.focus_next(&mut host);
/// }
/// assert_eq!(tabs.current_index(), 3);
/// assert_eq!(host.tab_index('d'), Some(0));
/// assert_eq!(host.tab_index('a'), Some(-1));
///
/// tabs.focus_next(&mut host);
/// assert_eq!(tabs.current_index(), 0);
/// assert_eq!(host.active_element(), Some('a'));
/// ```
#[derive(Clone, Debug)]
pub struct RovingFocusGroup<K> {
    elements: Vec<Option<K>>,
    current: usize,
    wrap: WrapMode,
    orientation: Orientation,
}

impl<K: Copy> RovingFocusGroup<K> {
    /// Build a group over `elements` with the tab stop at `initial`.
    ///
    /// An `initial` outside the group starts at the first member.
    pub fn new(elements: impl IntoIterator<Item = Option<K>>, initial: usize) -> Self {
        let elements: Vec<Option<K>> = elements.into_iter().collect();
        let current = if initial < elements.len() { initial } else { 0 };
        Self {
            elements,
            current,
            wrap: WrapMode::default(),
            orientation: Orientation::default(),
        }
    }

    /// Build a group where every slot is present.
    pub fn from_elements(elements: impl IntoIterator<Item = K>, initial: usize) -> Self {
        Self::new(elements.into_iter().map(Some), initial)
    }

    /// Set the wrap behavior.
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set which arrows [`handle_key`](Self::handle_key) responds to.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Number of slots, including empty ones.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the group has no slots.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The slots, in order.
    pub fn elements(&self) -> &[Option<K>] {
        &self.elements
    }

    /// Index of the tab stop.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The element holding the tab stop, if its slot is present.
    pub fn current_element(&self) -> Option<K> {
        self.elements.get(self.current).copied().flatten()
    }

    /// Make the current member the only tab stop.
    ///
    /// Idempotent. Empty slots are skipped.
    pub fn update_tab_index(&self, host: &mut impl FocusHost<K>) {
        for (i, element) in self.elements.iter().enumerate() {
            if let Some(element) = *element {
                let tab_index = if i == self.current {
                    TAB_STOP
                } else {
                    NOT_TABBABLE
                };
                host.set_tab_index(element, Some(tab_index));
            }
        }
    }

    /// Move the tab stop forward and focus it.
    pub fn focus_next(&mut self, host: &mut impl FocusHost<K>) {
        self.apply(Move::Next, host);
    }

    /// Move the tab stop backward and focus it.
    pub fn focus_previous(&mut self, host: &mut impl FocusHost<K>) {
        self.apply(Move::Previous, host);
    }

    /// Move the tab stop to the first member and focus it.
    pub fn focus_first(&mut self, host: &mut impl FocusHost<K>) {
        self.apply(Move::First, host);
    }

    /// Move the tab stop to the last member and focus it.
    pub fn focus_last(&mut self, host: &mut impl FocusHost<K>) {
        self.apply(Move::Last, host);
    }

    /// Move the tab stop to `index` and focus it.
    ///
    /// Out-of-range indices leave the group untouched and return `false`.
    pub fn set_focus(&mut self, index: usize, host: &mut impl FocusHost<K>) -> bool {
        if index >= self.elements.len() {
            return false;
        }
        self.move_to(index, host);
        true
    }

    /// Handle arrow, Home and End keys for this group.
    ///
    /// Handled keys have their default prevented. Returns whether the key was
    /// handled; an empty group handles nothing.
    pub fn handle_key<E: KeyboardEvent>(
        &mut self,
        event: &mut E,
        host: &mut impl FocusHost<K>,
    ) -> bool {
        if self.elements.is_empty() {
            return false;
        }
        let horizontal = matches!(self.orientation, Orientation::Horizontal | Orientation::Both);
        let vertical = matches!(self.orientation, Orientation::Vertical | Orientation::Both);
        let step = match event.key() {
            Key::ArrowRight if horizontal => Move::Next,
            Key::ArrowLeft if horizontal => Move::Previous,
            Key::ArrowDown if vertical => Move::Next,
            Key::ArrowUp if vertical => Move::Previous,
            Key::Home => Move::First,
            Key::End => Move::Last,
            _ => return false,
        };
        event.prevent_default();
        self.apply(step, host);
        true
    }

    fn target(&self, step: Move) -> Option<usize> {
        let len = self.elements.len();
        if len == 0 {
            return None;
        }
        let last = len - 1;
        match step {
            Move::Next if self.current < last => Some(self.current + 1),
            Move::Next => matches!(self.wrap, WrapMode::Wrap).then_some(0),
            Move::Previous if self.current > 0 => Some(self.current - 1),
            Move::Previous => matches!(self.wrap, WrapMode::Wrap).then_some(last),
            Move::First => Some(0),
            Move::Last => Some(last),
        }
    }

    fn apply(&mut self, step: Move, host: &mut impl FocusHost<K>) {
        if let Some(index) = self.target(step) {
            self.move_to(index, host);
        }
    }

    fn move_to(&mut self, index: usize, host: &mut impl FocusHost<K>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "roving.move", from = self.current, to = index);
        self.current = index;
        self.update_tab_index(host);
        if let Some(element) = self.current_element() {
            host.focus(element);
        }
    }
}
