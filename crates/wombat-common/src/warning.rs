//! Engine warnings with colored terminal output.
//!
//! Each unique `[component] message` pair is printed once per process (or
//! until [`clear_warnings`] is called), so a style value that is resolved for
//! every frame does not flood stderr with the same diagnostic.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set. A panic on another thread while it held the lock
/// leaves the set usable, so poisoning is ignored.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a suspicious or unsupported situation (prints once per unique message)
///
/// # Example
/// ```
/// use wombat_common::warning::warn_once;
///
/// warn_once("CSS", "calc(1px + 1s) has no resolvable type");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        let line = format!("[Wombat {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Whether `warn_once` has already reported this exact message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call when starting a new document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
