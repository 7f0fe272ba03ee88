// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning plain elements into keyboard-operable ones.

use crate::host::{FocusHost, KeyListenerHost, ListenerId};

/// Give `element` a tab index and attach `listener` to its keydown events.
///
/// Pass [`TAB_STOP`](crate::TAB_STOP) to put the element in sequential Tab
/// order. Keep the returned id to undo this with [`remove_focusable`].
///
/// ```
/// use verdant_focus::{FocusHost, MemoryHost, TAB_STOP, make_focusable, remove_focusable};
///
/// let mut host: MemoryHost<u32, &str> = MemoryHost::new();
/// let id = make_focusable(&mut host, 4, "open-garden", TAB_STOP);
/// assert_eq!(host.tab_index(4), Some(0));
///
/// assert_eq!(remove_focusable(&mut host, 4, id), Some("open-garden"));
/// assert_eq!(host.tab_index(4), None);
/// ```
pub fn make_focusable<K, L, H>(host: &mut H, element: K, listener: L, tab_index: i32) -> ListenerId
where
    K: Copy,
    H: FocusHost<K> + KeyListenerHost<K, L>,
{
    host.set_tab_index(element, Some(tab_index));
    host.add_key_listener(element, listener)
}

/// Undo [`make_focusable`]: drop the tab index and detach the listener.
///
/// Returns the listener if it was still attached to `element`.
pub fn remove_focusable<K, L, H>(host: &mut H, element: K, id: ListenerId) -> Option<L>
where
    K: Copy,
    H: FocusHost<K> + KeyListenerHost<K, L>,
{
    host.set_tab_index(element, None);
    host.remove_key_listener(element, id)
}
