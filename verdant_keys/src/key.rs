// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical key model and the [`KeyboardEvent`] seam.
//!
//! Hosts translate their native key events (DOM `KeyboardEvent`, a terminal
//! key press, a windowing-system event) into something implementing
//! [`KeyboardEvent`]. [`KeyEvent`] is a ready-made implementation for hosts
//! that do not need to forward default prevention anywhere else.

use core::fmt;

/// A key, reduced to the cases that keyboard interaction cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `Enter` / `Return`.
    Enter,
    /// The space bar (DOM key value `" "`).
    Space,
    /// `Escape`.
    Escape,
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `Tab`; Shift+Tab is expressed through [`Modifiers::SHIFT`].
    Tab,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// Any other key producing a single printable character.
    Character(char),
    /// Anything else (function keys, media keys, unidentified keys).
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a [`Key`].
    ///
    /// Legacy names emitted by older engines (`"Esc"`, `"Up"`, `"Spacebar"`, ...)
    /// are accepted alongside the standard ones.
    ///
    /// ```
    /// use verdant_keys::Key;
    ///
    /// assert_eq!(Key::from_dom_key(" "), Key::Space);
    /// assert_eq!(Key::from_dom_key("ArrowDown"), Key::ArrowDown);
    /// assert_eq!(Key::from_dom_key("q"), Key::Character('q'));
    /// assert_eq!(Key::from_dom_key("F5"), Key::Other);
    /// ```
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Tab" => Self::Tab,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enter => "Enter",
            Self::Space => " ",
            Self::Escape => "Escape",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Tab => "Tab",
            Self::Home => "Home",
            Self::End => "End",
            Self::Character(c) => return write!(f, "{c}"),
            Self::Other => "Unidentified",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// Modifier keys held while a key was pressed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

/// Coarse classification of the element an event was dispatched to.
///
/// Only the distinctions that change key semantics are kept: Enter inside a
/// multi-line text field inserts a newline instead of submitting a form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A multi-line text field (`<textarea>`).
    MultiLineText,
    /// A single-line text field (`<input>`).
    SingleLineText,
    /// Anything else.
    #[default]
    Other,
}

impl TargetKind {
    /// Classify an element by its tag name (case-insensitive).
    pub fn from_tag_name(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("textarea") {
            Self::MultiLineText
        } else if tag.eq_ignore_ascii_case("input") {
            Self::SingleLineText
        } else {
            Self::Other
        }
    }

    /// Whether Enter in this target means "insert a newline".
    pub fn is_multi_line(self) -> bool {
        matches!(self, Self::MultiLineText)
    }
}

/// A key event as seen by the interaction layer.
pub trait KeyboardEvent {
    /// The key that was pressed.
    fn key(&self) -> Key;

    /// Modifiers held during the press.
    fn modifiers(&self) -> Modifiers;

    /// What kind of element the event targets.
    fn target(&self) -> TargetKind {
        TargetKind::Other
    }

    /// Suppress the host's default action for this event.
    fn prevent_default(&mut self);

    /// Shorthand for `modifiers().contains(Modifiers::SHIFT)`.
    fn shift(&self) -> bool {
        self.modifiers().contains(Modifiers::SHIFT)
    }
}

/// Plain owned key event that records whether its default was prevented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: Modifiers,
    /// Classification of the event target.
    pub target: TargetKind,
    default_prevented: bool,
}

impl KeyEvent {
    /// A press of `key` with no modifiers on a generic target.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            target: TargetKind::Other,
            default_prevented: false,
        }
    }

    /// Build from a DOM `key` value and shift state.
    pub fn from_dom(key: &str, shift: bool) -> Self {
        let mut event = Self::new(Key::from_dom_key(key));
        event.modifiers.set(Modifiers::SHIFT, shift);
        event
    }

    /// Add Shift to the held modifiers.
    pub fn with_shift(mut self) -> Self {
        self.modifiers |= Modifiers::SHIFT;
        self
    }

    /// Replace the held modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the target classification.
    pub fn with_target(mut self, target: TargetKind) -> Self {
        self.target = target;
        self
    }

    /// Whether [`KeyboardEvent::prevent_default`] was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl KeyboardEvent for KeyEvent {
    fn key(&self) -> Key {
        self.key
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn target(&self) -> TargetKind {
        self.target
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn dom_names_map_to_keys() {
        assert_eq!(Key::from_dom_key("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
        assert_eq!(Key::from_dom_key("Left"), Key::ArrowLeft);
        assert_eq!(Key::from_dom_key("Home"), Key::Home);
        assert_eq!(Key::from_dom_key("é"), Key::Character('é'));
        assert_eq!(Key::from_dom_key(""), Key::Other);
        assert_eq!(Key::from_dom_key("Shift"), Key::Other);
    }

    #[test]
    fn space_displays_as_dom_value() {
        assert_eq!(Key::Space.to_string(), " ");
        assert_eq!(Key::Character('x').to_string(), "x");
    }

    #[test]
    fn textarea_is_multi_line() {
        assert!(TargetKind::from_tag_name("TEXTAREA").is_multi_line());
        assert!(!TargetKind::from_tag_name("INPUT").is_multi_line());
        assert_eq!(TargetKind::from_tag_name("div"), TargetKind::Other);
    }

    #[test]
    fn from_dom_tracks_shift() {
        let ev = KeyEvent::from_dom("Tab", true);
        assert_eq!(ev.key, Key::Tab);
        assert!(ev.shift());
        assert!(!ev.default_prevented());
    }
}
