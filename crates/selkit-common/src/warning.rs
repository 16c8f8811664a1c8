//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder and the JSON helpers to report input that is
//! accepted verbatim but is probably not what the caller meant.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about questionable input (prints once per unique message).
///
/// Returns `true` if the warning was new and got printed.
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unknown combinator token '|'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[selkit {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn warning_count() -> usize {
    WARNED.lock().unwrap().as_ref().map_or(0, HashSet::len)
}

/// Forget all recorded warnings so they can be printed again.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
