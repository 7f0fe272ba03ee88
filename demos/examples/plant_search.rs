// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browsing the plant encyclopedia: a catalog tab strip and a filtered result list.
//!
//! This example shows how to combine:
//! - `RovingFocusGroup` for the Plants / Soils / Tools tab strip, so Tab
//!   enters the strip once and arrows move between tabs,
//! - `ListNavigator` for the search results, whose `on_focus` callback moves
//!   host focus to the result row,
//! - rebuilding the navigator when the search filter changes.
//!
//! Run:
//! - `cargo run -p verdant_demos --example plant_search`

use std::cell::RefCell;

use verdant_demos::{init_tracing, key_script};
use verdant_focus::{FocusHost, MemoryHost, Orientation, RovingFocusGroup, TAB_STOP};
use verdant_keys::KeyEvent;
use verdant_list::ListNavigator;

const CATALOG: [&str; 8] = [
    "basil", "beet", "borage", "chard", "chives", "dill", "fennel", "garlic",
];

/// Host element handles for this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Element {
    Tab(usize),
    Result(usize),
}

fn browse_tabs(host: &mut MemoryHost<Element>) {
    let mut tabs = RovingFocusGroup::from_elements((0..3).map(Element::Tab), 0)
        .with_orientation(Orientation::Horizontal);
    tabs.update_tab_index(host);

    for mut event in key_script("ArrowRight, ArrowRight, ArrowRight, ArrowDown, End, Home") {
        let handled = tabs.handle_key(&mut event, host);
        tracing::debug!(key = %event.key, handled, tab = tabs.current_index(), "tab strip");
    }
    let stops = host.elements_with_tab_index(TAB_STOP);
    tracing::info!(?stops, active = ?host.active_element(), "tab strip settled");
}

fn search(host: &RefCell<MemoryHost<Element>>, query: &str, script: &str) -> Option<&'static str> {
    let matches: Vec<&'static str> = CATALOG
        .iter()
        .copied()
        .filter(|plant| plant.starts_with(query))
        .collect();
    tracing::info!(query, results = matches.len(), "filter applied");

    let picked = RefCell::new(None);
    let mut results = ListNavigator::new(
        matches,
        |plant: &&'static str, _| *picked.borrow_mut() = Some(*plant),
        |plant: &&'static str, index| {
            host.borrow_mut().focus(Element::Result(index));
            tracing::debug!(plant = *plant, index, "result focused");
        },
    );

    for mut event in key_script(script) {
        results.handle_key_down(&mut event);
    }
    drop(results);
    picked.into_inner()
}

fn main() {
    init_tracing();

    let host: RefCell<MemoryHost<Element>> = RefCell::new(MemoryHost::new());
    browse_tabs(&mut host.borrow_mut());

    // Enter before any arrow selects nothing.
    let none = search(&host, "b", "Enter");
    // ArrowUp from the unfocused state lands on the last match.
    let last = search(&host, "b", "ArrowUp, Enter");
    // Narrowing the filter builds a fresh navigator; no stale cursor survives.
    let first = search(&host, "ch", "ArrowDown, ArrowDown, ArrowDown, Space");

    let mut reused = ListNavigator::new(vec!["fennel"], |_, _| {}, |_, _| {});
    reused.handle_key_down(&mut KeyEvent::from_dom("ArrowDown", false));
    reused.reset();
    tracing::info!(cursor = ?reused.current_index(), "navigator reset");

    tracing::info!(
        ?none,
        ?last,
        ?first,
        focus_moves = host.borrow().focus_history().len(),
        "done"
    );
}
