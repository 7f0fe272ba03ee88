// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Keys: semantic keyboard actions for accessible widgets.
//!
//! ## Overview
//!
//! This crate turns raw key presses into a small, fixed vocabulary of
//! semantic [`Action`]s and runs the callback a widget bound to each one.
//! It does not know about elements or focus; it only decides which callback
//! a key means and whether the host's default action for that key should be
//! suppressed.
//!
//! - [`Key`], [`Modifiers`] and [`TargetKind`] describe a key press.
//! - [`KeyboardEvent`] is the seam hosts implement for their native events;
//!   [`KeyEvent`] is a plain implementation.
//! - [`ActionTable`] binds actions to callbacks.
//! - [`KeyboardHandler`] dispatches events through a table.
//! - [`presets`] provides button, link, form and modal key maps.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::Cell;
//! use verdant_keys::{Key, KeyEvent, TargetKind, presets};
//!
//! let submitted = Cell::new(0);
//! let mut form = presets::form_handler(
//!     |_: &mut KeyEvent| submitted.set(submitted.get() + 1),
//!     |_: &mut KeyEvent| {},
//! );
//!
//! // Enter in a single-line field submits…
//! form.handle(&mut KeyEvent::new(Key::Enter).with_target(TargetKind::SingleLineText));
//! // …but in a textarea it is left alone so the newline is typed.
//! let mut newline = KeyEvent::new(Key::Enter).with_target(TargetKind::MultiLineText);
//! form.handle(&mut newline);
//!
//! assert_eq!(submitted.get(), 1);
//! assert!(!newline.default_prevented());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `trace`-level event for every dispatched action.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod dispatcher;
mod key;
pub mod presets;

pub use action::{Action, ActionTable};
pub use dispatcher::KeyboardHandler;
pub use key::{Key, KeyEvent, KeyboardEvent, Modifiers, TargetKind};
