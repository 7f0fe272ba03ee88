// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host for headless use and tests.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::host::{FocusHost, KeyListenerHost, ListenerId};

/// A [`FocusHost`] and [`KeyListenerHost`] backed by plain maps.
///
/// It tracks tab index attributes, the active element, every focus move (in
/// order), and attached listeners. Listener values are stored as-is; calling
/// them is up to whoever drives the host.
#[derive(Clone, Debug)]
pub struct MemoryHost<K, L = ()> {
    active: Option<K>,
    tab_indices: HashMap<K, i32>,
    listeners: HashMap<ListenerId, (K, L)>,
    next_listener: u64,
    history: Vec<K>,
}

impl<K, L> MemoryHost<K, L>
where
    K: Copy + Eq + Hash,
{
    /// An empty host with nothing focused.
    pub fn new() -> Self {
        Self {
            active: None,
            tab_indices: HashMap::new(),
            listeners: HashMap::new(),
            next_listener: 1,
            history: Vec::new(),
        }
    }

    /// Every element focused so far, oldest first.
    pub fn focus_history(&self) -> &[K] {
        &self.history
    }

    /// Elements whose tab index is currently `tab_index`.
    pub fn elements_with_tab_index(&self, tab_index: i32) -> Vec<K> {
        self.tab_indices
            .iter()
            .filter_map(|(k, t)| (*t == tab_index).then_some(*k))
            .collect()
    }

    /// Listeners attached to `element`.
    pub fn listeners_on(&self, element: K) -> impl Iterator<Item = &L> + '_ {
        self.listeners
            .values()
            .filter(move |(k, _)| *k == element)
            .map(|(_, l)| l)
    }

    /// Mutable access to one attached listener.
    pub fn listener_mut(&mut self, id: ListenerId) -> Option<&mut L> {
        self.listeners.get_mut(&id).map(|(_, l)| l)
    }

    /// Number of attached listeners across all elements.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<K, L> Default for MemoryHost<K, L>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, L> FocusHost<K> for MemoryHost<K, L>
where
    K: Copy + Eq + Hash,
{
    fn focus(&mut self, element: K) {
        self.active = Some(element);
        self.history.push(element);
    }

    fn active_element(&self) -> Option<K> {
        self.active
    }

    fn tab_index(&self, element: K) -> Option<i32> {
        self.tab_indices.get(&element).copied()
    }

    fn set_tab_index(&mut self, element: K, tab_index: Option<i32>) {
        match tab_index {
            Some(t) => {
                self.tab_indices.insert(element, t);
            }
            None => {
                self.tab_indices.remove(&element);
            }
        }
    }
}

impl<K, L> KeyListenerHost<K, L> for MemoryHost<K, L>
where
    K: Copy + Eq + Hash,
{
    fn add_key_listener(&mut self, element: K, listener: L) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (element, listener));
        id
    }

    fn remove_key_listener(&mut self, element: K, id: ListenerId) -> Option<L> {
        match self.listeners.get(&id) {
            Some((k, _)) if *k == element => self.listeners.remove(&id).map(|(_, l)| l),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_is_recorded_in_order() {
        let mut host: MemoryHost<u32> = MemoryHost::new();
        assert_eq!(host.active_element(), None);
        host.focus(3);
        host.focus(1);
        assert_eq!(host.active_element(), Some(1));
        assert_eq!(host.focus_history(), &[3, 1]);
    }

    #[test]
    fn tab_index_can_be_removed() {
        let mut host: MemoryHost<u32> = MemoryHost::new();
        host.set_tab_index(7, Some(0));
        assert_eq!(host.tab_index(7), Some(0));
        host.set_tab_index(7, None);
        assert_eq!(host.tab_index(7), None);
    }

    #[test]
    fn listener_removal_checks_element() {
        let mut host: MemoryHost<u32, &str> = MemoryHost::new();
        let id = host.add_key_listener(1, "card");
        assert_eq!(host.remove_key_listener(2, id), None);
        assert_eq!(host.listener_count(), 1);
        assert_eq!(host.remove_key_listener(1, id), Some("card"));
        assert_eq!(host.listener_count(), 0);
    }
}
