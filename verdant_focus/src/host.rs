// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: how the focus layer reads and moves focus.

/// Tab index that makes an element the tab stop of its group.
pub const TAB_STOP: i32 = 0;

/// Tab index that keeps an element focusable but out of sequential Tab order.
pub const NOT_TABBABLE: i32 = -1;

/// Capability to read and move input focus among host elements.
///
/// The host owns the elements and the single, global "active element"
/// pointer. Every operation in this crate that moves focus borrows the host
/// mutably, so only one controller can move focus at a time.
///
/// `K` is a small, copyable element handle chosen by the host (a node id,
/// an index into a widget arena, ...).
pub trait FocusHost<K> {
    /// Move input focus to `element`.
    fn focus(&mut self, element: K);

    /// The element that currently has input focus, if any.
    fn active_element(&self) -> Option<K>;

    /// The element's tab index attribute, or `None` if it is absent.
    fn tab_index(&self, element: K) -> Option<i32>;

    /// Set the element's tab index attribute; `None` removes it.
    fn set_tab_index(&mut self, element: K, tab_index: Option<i32>);
}

/// Handle to a key listener registered through [`KeyListenerHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Capability to attach keydown listeners of type `L` to host elements.
pub trait KeyListenerHost<K, L> {
    /// Attach `listener` to `element`'s keydown events.
    fn add_key_listener(&mut self, element: K, listener: L) -> ListenerId;

    /// Detach a listener from `element`, returning it if it was attached there.
    fn remove_key_listener(&mut self, element: K, id: ListenerId) -> Option<L>;
}
