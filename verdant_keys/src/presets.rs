// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named key maps for common interactive roles.
//!
//! Each preset is a [`KeyboardHandler`] with a fixed binding of keys to the
//! conventional meaning they carry in that role:
//!
//! | Preset              | Enter    | Space    | Escape  |
//! |---------------------|----------|----------|---------|
//! | [`button_handler`]  | click    | click    |         |
//! | [`link_handler`]    | navigate | navigate |         |
//! | [`form_handler`]    | submit¹  |          | cancel  |
//! | [`modal_handler`]   | confirm  | confirm  | close   |
//!
//! ¹ Not inside a multi-line text field, where Enter inserts a newline and the
//! event is left alone.
//!
//! The form preset only claims Enter and Escape. Space and the arrows keep
//! their text-editing meaning in form fields and pass through untouched.

use crate::action::{Action, ActionTable};
use crate::dispatcher::KeyboardHandler;
use crate::key::{Key, KeyboardEvent};

/// Enter and Space activate, like a native `<button>`.
///
/// Use for non-native elements acting as buttons (cards, icon spans).
pub fn button_handler<'a, E: KeyboardEvent>(
    on_click: impl FnMut(&mut E) + 'a,
) -> KeyboardHandler<'a, E> {
    KeyboardHandler::new(ActionTable::new().on_any(&[Action::Enter, Action::Space], on_click))
}

/// Enter and Space navigate, for non-anchor elements acting as links.
pub fn link_handler<'a, E: KeyboardEvent>(
    on_navigate: impl FnMut(&mut E) + 'a,
) -> KeyboardHandler<'a, E> {
    KeyboardHandler::new(ActionTable::new().on_any(&[Action::Enter, Action::Space], on_navigate))
}

/// Enter submits and Escape cancels.
///
/// Enter targeting a multi-line text field is neither submitted nor
/// consumed. Other keys are never consumed.
pub fn form_handler<'a, E: KeyboardEvent>(
    on_submit: impl FnMut(&mut E) + 'a,
    on_cancel: impl FnMut(&mut E) + 'a,
) -> KeyboardHandler<'a, E> {
    KeyboardHandler::new(
        ActionTable::new()
            .on(Action::Enter, on_submit)
            .on(Action::Escape, on_cancel),
    )
    .with_scope(|event| match event.key() {
        Key::Enter => !event.target().is_multi_line(),
        Key::Escape => true,
        _ => false,
    })
}

/// Escape closes; Enter and Space confirm.
pub fn modal_handler<'a, E: KeyboardEvent>(
    on_close: impl FnMut(&mut E) + 'a,
    on_confirm: impl FnMut(&mut E) + 'a,
) -> KeyboardHandler<'a, E> {
    KeyboardHandler::new(
        ActionTable::new()
            .on(Action::Escape, on_close)
            .on_any(&[Action::Enter, Action::Space], on_confirm),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeyEvent, Modifiers, TargetKind};
    use core::cell::Cell;

    /// Event that counts default prevention instead of latching it.
    struct CountingEvent {
        key: Key,
        target: TargetKind,
        prevented: u32,
    }

    impl CountingEvent {
        fn new(key: Key) -> Self {
            Self {
                key,
                target: TargetKind::Other,
                prevented: 0,
            }
        }
    }

    impl KeyboardEvent for CountingEvent {
        fn key(&self) -> Key {
            self.key
        }

        fn modifiers(&self) -> Modifiers {
            Modifiers::empty()
        }

        fn target(&self) -> TargetKind {
            self.target
        }

        fn prevent_default(&mut self) {
            self.prevented += 1;
        }
    }

    #[test]
    fn button_activates_once_per_enter_and_space() {
        let clicks = Cell::new(0);
        let mut handler = button_handler(|_: &mut CountingEvent| clicks.set(clicks.get() + 1));

        let mut enter = CountingEvent::new(Key::Enter);
        handler.handle(&mut enter);
        assert_eq!((clicks.get(), enter.prevented), (1, 1));

        let mut space = CountingEvent::new(Key::Space);
        handler.handle(&mut space);
        assert_eq!((clicks.get(), space.prevented), (2, 1));
    }

    #[test]
    fn link_navigates_on_enter_and_space_only() {
        let visits = Cell::new(0);
        let mut handler = link_handler(|_: &mut KeyEvent| visits.set(visits.get() + 1));

        for key in [Key::Enter, Key::Space, Key::Escape, Key::Character('l')] {
            handler.handle(&mut KeyEvent::new(key));
        }
        assert_eq!(visits.get(), 2);
    }

    #[test]
    fn form_does_not_submit_from_textarea() {
        let submits = Cell::new(0);
        let cancels = Cell::new(0);
        let mut handler = form_handler(
            |_: &mut CountingEvent| submits.set(submits.get() + 1),
            |_: &mut CountingEvent| cancels.set(cancels.get() + 1),
        );

        let mut in_textarea = CountingEvent::new(Key::Enter);
        in_textarea.target = TargetKind::from_tag_name("TEXTAREA");
        assert_eq!(handler.handle(&mut in_textarea), None);
        assert_eq!(submits.get(), 0);
        assert_eq!(in_textarea.prevented, 0, "newline must still be inserted");

        let mut in_input = CountingEvent::new(Key::Enter);
        in_input.target = TargetKind::SingleLineText;
        handler.handle(&mut in_input);
        assert_eq!(submits.get(), 1);
        assert_eq!(in_input.prevented, 1);
    }

    #[test]
    fn form_escape_cancels_even_from_textarea() {
        let cancels = Cell::new(0);
        let mut handler = form_handler(
            |_: &mut KeyEvent| {},
            |_: &mut KeyEvent| cancels.set(cancels.get() + 1),
        );

        let mut ev = KeyEvent::new(Key::Escape).with_target(TargetKind::MultiLineText);
        handler.handle(&mut ev);
        assert_eq!(cancels.get(), 1);
        assert!(ev.default_prevented());
    }

    #[test]
    fn form_leaves_text_editing_keys_alone() {
        let mut handler = form_handler(|_: &mut KeyEvent| {}, |_: &mut KeyEvent| {});
        for key in [Key::Space, Key::ArrowLeft, Key::ArrowDown, Key::Tab] {
            let mut ev = KeyEvent::new(key).with_target(TargetKind::SingleLineText);
            assert_eq!(handler.handle(&mut ev), None);
            assert!(!ev.default_prevented(), "{key:?} must reach the field");
        }
    }

    #[test]
    fn modal_escape_only_closes() {
        let closes = Cell::new(0);
        let confirms = Cell::new(0);
        let mut handler = modal_handler(
            |_: &mut KeyEvent| closes.set(closes.get() + 1),
            |_: &mut KeyEvent| confirms.set(confirms.get() + 1),
        );

        handler.handle(&mut KeyEvent::new(Key::Escape));
        assert_eq!((closes.get(), confirms.get()), (1, 0));

        handler.handle(&mut KeyEvent::new(Key::Enter));
        handler.handle(&mut KeyEvent::new(Key::Space));
        assert_eq!((closes.get(), confirms.get()), (1, 2));
    }
}
