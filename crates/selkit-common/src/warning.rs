//! Warnings with colored terminal output.
//!
//! Each distinct warning is printed at most once per process. Used by the
//! selector builder to flag unusual combinator tokens and by the CLI.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Warnings we've already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are rendered with ANSI colors.
static COLOR: AtomicBool = AtomicBool::new(true);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // The set holds no invariants a panicking writer could break.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Enable or disable colored warning output.
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```
/// use selkit_common::warning::{has_warned, warn_once};
///
/// warn_once("selector", "combinator '|' is not a CSS combinator");
/// assert!(has_warned("selector", "combinator '|' is not a CSS combinator"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if !should_print {
        return;
    }

    let line = format!("[selkit {component}] ⚠ {message}");
    if COLOR.load(Ordering::Relaxed) {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{line}");
    }
}

/// Check whether a warning has already been emitted.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
