// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus trap: keep Tab and Shift+Tab cycling inside a container.
//!
//! A trap is built when a bounded container (typically a modal dialog) opens,
//! from a snapshot of its focusable descendants. While the host keeps the
//! trap and routes the container's keydown events to
//! [`FocusTrap::handle_key`], Tab from the last element wraps to the first
//! and Shift+Tab from the first wraps to the last. Every other Tab press is
//! left to the host, so ordinary traversal inside the container still works.
//!
//! Releasing (or dropping) the trap is the teardown step. Do it on every
//! path that closes the container.
//!
//! The boundary is fixed at construction: focusable elements added to or
//! removed from the container afterwards are not noticed. Build a new trap
//! if the container's contents change while it is open.

use verdant_keys::{Key, KeyboardEvent};

use crate::host::FocusHost;

/// An armed focus trap over one container.
#[must_use = "the container stops trapping focus once the trap is dropped"]
#[derive(Debug, PartialEq, Eq)]
pub struct FocusTrap<K> {
    container: K,
    first: K,
    last: K,
}

/// Arm a focus trap over `container` with the given focusable descendants.
///
/// Returns `None` when there is nothing focusable to trap.
///
/// ```
/// use verdant_focus::{FocusHost, MemoryHost, trap_focus};
/// use verdant_keys::KeyEvent;
///
/// let mut host: MemoryHost<&str> = MemoryHost::new();
/// let trap = trap_focus("dialog", &["name", "notes", "save"]).unwrap();
///
/// host.focus("save");
/// let mut tab = KeyEvent::from_dom("Tab", false);
/// assert!(trap.handle_key(&mut tab, &mut host));
/// assert!(tab.default_prevented());
/// assert_eq!(host.active_element(), Some("name"));
///
/// assert_eq!(trap.release(), "dialog");
/// ```
pub fn trap_focus<K: Copy>(container: K, focusable: &[K]) -> Option<FocusTrap<K>> {
    let (&first, &last) = (focusable.first()?, focusable.last()?);
    #[cfg(feature = "tracing")]
    tracing::debug!(message = "trap.arm", focusable = focusable.len());
    Some(FocusTrap {
        container,
        first,
        last,
    })
}

impl<K: Copy + PartialEq> FocusTrap<K> {
    /// The trapped container.
    pub fn container(&self) -> K {
        self.container
    }

    /// First focusable element in the snapshot.
    pub fn first(&self) -> K {
        self.first
    }

    /// Last focusable element in the snapshot.
    pub fn last(&self) -> K {
        self.last
    }

    /// Handle a keydown event that reached the container.
    ///
    /// Returns `true` when focus was wrapped (and the event consumed).
    pub fn handle_key<E: KeyboardEvent>(
        &self,
        event: &mut E,
        host: &mut impl FocusHost<K>,
    ) -> bool {
        if event.key() != Key::Tab {
            return false;
        }
        let active = host.active_element();
        let (boundary, wrap_to) = if event.shift() {
            (self.first, self.last)
        } else {
            (self.last, self.first)
        };
        if active != Some(boundary) {
            return false;
        }
        event.prevent_default();
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "trap.wrap", backward = event.shift());
        host.focus(wrap_to);
        true
    }

    /// Disarm the trap, handing back the container.
    pub fn release(self) -> K {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "trap.release");
        self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;
    use verdant_keys::{KeyEvent, Modifiers};

    const DIALOG: u32 = 100;

    fn tab() -> KeyEvent {
        KeyEvent::new(Key::Tab)
    }

    fn shift_tab() -> KeyEvent {
        KeyEvent::new(Key::Tab).with_modifiers(Modifiers::SHIFT)
    }

    #[test]
    fn empty_snapshot_arms_nothing() {
        assert_eq!(trap_focus::<u32>(DIALOG, &[]), None);
    }

    #[test]
    fn tab_from_last_wraps_to_first() {
        let mut host: MemoryHost<u32> = MemoryHost::new();
        let trap = trap_focus(DIALOG, &[1, 2, 3]).unwrap();
        host.focus(3);

        let mut ev = tab();
        assert!(trap.handle_key(&mut ev, &mut host));
        assert!(ev.default_prevented());
        assert_eq!(host.active_element(), Some(1));
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        let mut host: MemoryHost<u32> = MemoryHost::new();
        let trap = trap_focus(DIALOG, &[1, 2, 3]).unwrap();
        host.focus(1);

        let mut ev = shift_tab();
        assert!(trap.handle_key(&mut ev, &mut host));
        assert_eq!(host.active_element(), Some(3));
    }

    #[test]
    fn interior_tabs_pass_through() {
        let mut host: MemoryHost<u32> = MemoryHost::new();
        let trap = trap_focus(DIALOG, &[1, 2, 3]).unwrap();
        host.focus(2);

        let mut forward = tab();
        let mut backward = shift_tab();
        assert!(!trap.handle_key(&mut forward, &mut host));
        assert!(!trap.handle_key(&mut backward, &mut host));
        assert!(!forward.default_prevented());
        assert!(!backward.default_prevented());
        assert_eq!(host.active_element(), Some(2));

        // Shift+Tab from the last element is ordinary backward traversal.
        host.focus(3);
        let mut backward = shift_tab();
        assert!(!trap.handle_key(&mut backward, &mut host));
    }

    #[test]
    fn single_element_keeps_focus_both_ways() {
        let mut host: MemoryHost<u32> = MemoryHost::new();
        let trap = trap_focus(DIALOG, &[7]).unwrap();
        host.focus(7);

        assert!(trap.handle_key(&mut tab(), &mut host));
        assert_eq!(host.active_element(), Some(7));
        assert!(trap.handle_key(&mut shift_tab(), &mut host));
        assert_eq!(host.active_element(), Some(7));
    }

    #[test]
    fn non_tab_keys_are_ignored() {
        let mut host: MemoryHost<u32> = MemoryHost::new();
        let trap = trap_focus(DIALOG, &[1, 2]).unwrap();
        host.focus(2);
        let mut esc = KeyEvent::new(Key::Escape);
        assert!(!trap.handle_key(&mut esc, &mut host));
        assert!(!esc.default_prevented());
    }

    #[test]
    fn release_returns_container() {
        let trap = trap_focus(DIALOG, &[1]).unwrap();
        assert_eq!((trap.first(), trap.last()), (1, 1));
        assert_eq!(trap.release(), DIALOG);
    }
}
