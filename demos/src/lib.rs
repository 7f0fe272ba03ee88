// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the Verdant demos.
//!
//! Run a demo with, for example:
//! - `cargo run -p verdant_demos --example garden_dialog`
//! - `RUST_LOG=trace cargo run -p verdant_demos --example plant_search`

use tracing_subscriber::EnvFilter;
use verdant_keys::KeyEvent;

/// Install a formatting subscriber honoring `RUST_LOG` (default `debug`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Parse a comma-separated key script such as `"ArrowDown, Shift+Tab, Space"`.
///
/// Each entry is a DOM key name, optionally prefixed with `Shift+`. The
/// literal entry `Space` stands for the space bar, since a bare `" "` would
/// be trimmed away.
pub fn key_script(script: &str) -> Vec<KeyEvent> {
    script
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (shift, name) = match entry.strip_prefix("Shift+") {
                Some(rest) => (true, rest),
                None => (false, entry),
            };
            let name = if name == "Space" { " " } else { name };
            KeyEvent::from_dom(name, shift)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_keys::{Key, KeyboardEvent};

    #[test]
    fn script_parses_shift_and_space() {
        let events = key_script("Tab, Shift+Tab ,Space,,q");
        let keys: Vec<Key> = events.iter().map(|e| e.key).collect();
        assert_eq!(keys, [Key::Tab, Key::Tab, Key::Space, Key::Character('q')]);
        assert!(!events[0].shift());
        assert!(events[1].shift());
    }
}
