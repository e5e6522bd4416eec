//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the style and layout components to report declared features the
//! engine accepts but does not implement.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about an unsupported feature (prints once per unique message)
///
/// # Example
/// ```
/// use boxgrid_common::warning::{has_warned, warn_once};
///
/// warn_once("Layout", "float is not supported");
/// assert!(has_warned("Layout", "float is not supported"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{}", format!("[boxgrid {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if `warn_once` has already reported this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call before laying out an unrelated document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_and_clears() {
        let message = "test-only: warn_once records and clears";
        assert!(!has_warned("Test", message));

        warn_once("Test", message);
        warn_once("Test", message);
        assert!(has_warned("Test", message));
        assert!(!has_warned("Other", message));

        clear_warnings();
        assert!(!has_warned("Test", message));
    }
}
