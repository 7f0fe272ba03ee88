// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the list cursor.
//!
//! 1. The cursor is `None` or in bounds after any key sequence.
//! 2. Selections always report the item under the cursor.
//! 3. Every navigation key is consumed.

use std::cell::RefCell;

use proptest::prelude::*;
use verdant_keys::{Key, KeyEvent};
use verdant_list::ListNavigator;

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowDown),
        Just(Key::ArrowUp),
        Just(Key::Home),
        Just(Key::End),
        Just(Key::Enter),
        Just(Key::Space),
    ]
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(
        len in 0usize..10,
        keys in proptest::collection::vec(key_strategy(), 0..50),
    ) {
        let selected = RefCell::new(Vec::new());
        let items: Vec<usize> = (0..len).map(|i| i * 10).collect();
        let mut nav = ListNavigator::new(
            items,
            |item: &usize, index| selected.borrow_mut().push((*item, index)),
            |_, _| {},
        );

        for key in keys {
            let before = nav.current_index();
            let mut ev = KeyEvent::new(key);
            prop_assert!(nav.handle_key_down(&mut ev));
            prop_assert!(ev.default_prevented());

            match nav.current_index() {
                None => prop_assert!(len == 0 || before.is_none()),
                Some(i) => prop_assert!(i < len, "cursor {} out of {}", i, len),
            }
        }

        drop(nav);
        for (item, index) in selected.into_inner() {
            prop_assert_eq!(item, index * 10);
        }
    }
}

#[test]
fn arrow_down_from_last_wraps_to_first() {
    let mut nav = ListNavigator::new(vec!['x', 'y', 'z'], |_, _| {}, |_, _| {});
    nav.focus_item(2);
    nav.handle_key_down(&mut KeyEvent::new(Key::ArrowDown));
    assert_eq!(nav.current_index(), Some(0));
    nav.handle_key_down(&mut KeyEvent::new(Key::ArrowUp));
    assert_eq!(nav.current_index(), Some(2));
}
