// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Focus: focus bookkeeping for composite widgets.
//!
//! ## Overview
//!
//! The host (a DOM binding, a retained widget tree, a terminal UI) owns the
//! elements and the single active-element pointer. It exposes them through
//! [`FocusHost`], using whatever small copyable handle `K` it likes for
//! elements. This crate owns only interaction state:
//!
//! - [`RovingFocusGroup`]: exactly one member of a group is a tab stop;
//!   arrows move it.
//! - [`FocusTrap`] / [`trap_focus`]: Tab and Shift+Tab wrap at the edges of a
//!   container.
//! - [`make_focusable`] / [`remove_focusable`]: give an element a tab index
//!   and a keydown listener through [`KeyListenerHost`].
//! - [`MemoryHost`]: a map-backed host for headless use and tests.
//!
//! ## Focus ownership
//!
//! Every operation that moves focus takes `&mut impl FocusHost<K>`. Holding
//! that borrow is what entitles a controller to move focus, so two
//! behaviors cannot fight over the active element within one call.
//!
//! ## Minimal example
//!
//! A toolbar whose buttons share one tab stop, inside a dialog that traps
//! Tab:
//!
//! ```rust
//! use verdant_focus::{FocusHost, MemoryHost, RovingFocusGroup, trap_focus};
//! use verdant_keys::{Key, KeyEvent};
//!
//! let mut host: MemoryHost<u32> = MemoryHost::new();
//! let mut toolbar = RovingFocusGroup::from_elements([1, 2, 3], 0);
//! toolbar.update_tab_index(&mut host);
//! let trap = trap_focus(0, &[1, 2, 3, 4]).unwrap();
//!
//! let mut right = KeyEvent::new(Key::ArrowRight);
//! toolbar.handle_key(&mut right, &mut host);
//! assert_eq!(host.active_element(), Some(2));
//!
//! host.focus(4);
//! trap.handle_key(&mut KeyEvent::new(Key::Tab), &mut host);
//! assert_eq!(host.active_element(), Some(1));
//! # let _ = trap.release();
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for focus moves and trap lifecycle.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod focusable;
mod host;
mod memory;
mod roving;
mod trap;

pub use focusable::{make_focusable, remove_focusable};
pub use host::{FocusHost, KeyListenerHost, ListenerId, NOT_TABBABLE, TAB_STOP};
pub use memory::MemoryHost;
pub use roving::{Orientation, RovingFocusGroup, WrapMode};
pub use trap::{FocusTrap, trap_focus};
