// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing and deleting a garden entirely from the keyboard.
//!
//! This example shows how to combine:
//! - `make_focusable` to turn a garden card into a keyboard-operable button,
//! - `trap_focus` to keep Tab inside an open dialog,
//! - the form and button presets for the edit dialog's fields and actions,
//! - the modal preset for a field-less "delete garden?" confirmation.
//!
//! Run:
//! - `cargo run -p verdant_demos --example garden_dialog`

use std::cell::{Cell, RefCell};

use verdant_demos::{init_tracing, key_script};
use verdant_focus::{
    FocusHost, FocusTrap, MemoryHost, TAB_STOP, make_focusable, remove_focusable, trap_focus,
};
use verdant_keys::{Key, KeyEvent, KeyboardEvent, TargetKind, presets};

/// Keydown roles attached through `make_focusable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    OpenEditor,
}

type Host = MemoryHost<&'static str, Role>;

const CARD: &str = "garden-card";
const EDITOR: &str = "edit-dialog";
/// Focusable descendants of the edit dialog, in Tab order.
const EDITOR_FIELDS: [&str; 4] = ["name", "notes", "save", "cancel"];
const CONFIRM: &str = "delete-dialog";
const CONFIRM_FIELDS: [&str; 2] = ["delete", "keep"];

#[derive(Debug, Default)]
struct Tally {
    saved: u32,
    cancelled: u32,
    deleted: u32,
    kept: u32,
}

fn target_kind(element: Option<&str>) -> TargetKind {
    match element {
        Some("name") => TargetKind::from_tag_name("INPUT"),
        Some("notes") => TargetKind::from_tag_name("TEXTAREA"),
        _ => TargetKind::Other,
    }
}

/// Native Tab traversal for presses a trap lets through.
fn native_tab(host: &mut Host, order: &[&'static str], backward: bool) {
    let Some(active) = host.active_element() else {
        return;
    };
    let Some(pos) = order.iter().position(|f| *f == active) else {
        return;
    };
    let next = if backward {
        pos.saturating_sub(1)
    } else {
        (pos + 1).min(order.len() - 1)
    };
    host.focus(order[next]);
}

/// Tab inside an open dialog: wrap at the edges, else move natively.
fn route_tab(
    trap: &FocusTrap<&'static str>,
    order: &[&'static str],
    event: &mut KeyEvent,
    host: &mut Host,
) -> bool {
    if event.key != Key::Tab {
        return false;
    }
    if !trap.handle_key(event, host) {
        native_tab(host, order, event.shift());
    }
    true
}

fn edit_garden(host: &mut Host, tally: &RefCell<Tally>) {
    let activated = Cell::new(false);
    let mut card = presets::button_handler(|_: &mut KeyEvent| activated.set(true));
    let done = Cell::new(false);
    let mut form = presets::form_handler(
        |_: &mut KeyEvent| {
            tracing::info!("garden saved from a field");
            tally.borrow_mut().saved += 1;
            done.set(true);
        },
        |_: &mut KeyEvent| {
            tracing::info!("edit cancelled");
            tally.borrow_mut().cancelled += 1;
            done.set(true);
        },
    );
    let mut save = presets::button_handler(|_: &mut KeyEvent| {
        tracing::info!("garden saved from the button");
        tally.borrow_mut().saved += 1;
        done.set(true);
    });

    let mut trap: Option<FocusTrap<&'static str>> = None;
    let script = "Enter, Tab, Enter, Tab, Tab, Tab, Shift+Tab, Shift+Tab, Space";

    for mut event in key_script(script) {
        let active = host.active_element();
        event.target = target_kind(active);
        tracing::debug!(key = %event.key, shift = event.shift(), ?active, "keydown");

        let Some(open) = trap.as_ref() else {
            if active == Some(CARD) && host.listeners_on(CARD).any(|r| *r == Role::OpenEditor) {
                card.handle(&mut event);
            }
            if activated.replace(false) {
                trap = trap_focus(EDITOR, &EDITOR_FIELDS);
                host.focus(EDITOR_FIELDS[0]);
                tracing::info!("edit dialog opened");
            }
            continue;
        };

        if route_tab(open, &EDITOR_FIELDS, &mut event, host) {
            continue;
        }
        match active {
            Some("save") => {
                save.handle(&mut event);
            }
            Some("cancel") => {}
            _ => {
                form.handle(&mut event);
            }
        }
        if !event.default_prevented() {
            tracing::debug!(key = %event.key, "left to the field");
        }

        if done.replace(false)
            && let Some(open) = trap.take()
        {
            open.release();
            host.focus(CARD);
            tracing::info!("edit dialog closed");
        }
    }

    if let Some(open) = trap.take() {
        open.release();
    }
}

fn confirm_delete(host: &mut Host, tally: &RefCell<Tally>) {
    let closed = Cell::new(false);
    let mut modal = presets::modal_handler(
        |_: &mut KeyEvent| {
            tracing::info!("garden kept");
            tally.borrow_mut().kept += 1;
            closed.set(true);
        },
        |_: &mut KeyEvent| {
            tracing::info!("garden deleted");
            tally.borrow_mut().deleted += 1;
            closed.set(true);
        },
    );

    let Some(trap) = trap_focus(CONFIRM, &CONFIRM_FIELDS) else {
        return;
    };
    host.focus(CONFIRM_FIELDS[0]);
    tracing::info!("delete dialog opened");

    for mut event in key_script("Tab, Tab, Shift+Tab, Escape, Enter") {
        if route_tab(&trap, &CONFIRM_FIELDS, &mut event, host) {
            continue;
        }
        modal.handle(&mut event);
        if closed.get() {
            break;
        }
    }

    trap.release();
    host.focus(CARD);
    tracing::info!("delete dialog closed");
}

fn main() {
    init_tracing();

    let mut host: Host = MemoryHost::new();
    let card_listener = make_focusable(&mut host, CARD, Role::OpenEditor, TAB_STOP);
    host.focus(CARD);

    let tally = RefCell::new(Tally::default());
    edit_garden(&mut host, &tally);
    confirm_delete(&mut host, &tally);

    let removed = remove_focusable(&mut host, CARD, card_listener);
    tracing::debug!(?removed, remaining = host.listener_count(), "card listener removed");

    let tally = tally.into_inner();
    tracing::info!(
        saved = tally.saved,
        cancelled = tally.cancelled,
        deleted = tally.deleted,
        kept = tally.kept,
        focus_moves = host.focus_history().len(),
        "done"
    );
}
