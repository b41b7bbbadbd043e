//! Crash containment for the render and update cycle
//!
//! A panic inside drawing or event handling would otherwise tear down the
//! whole session. [`guard`] catches the unwind and turns it into a
//! [`CrashInfo`] that the recovery screen can show, leaving the terminal
//! alive so the user can retry or reload.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Details of a caught panic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashInfo {
    /// Panic payload rendered as text
    pub message: String,
}

impl CrashInfo {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unexpected error".to_string()
        };
        Self { message }
    }
}

/// Run a closure, converting a panic into a [`CrashInfo`]
///
/// The global panic hook is silenced for the duration of the call so the
/// panic message does not smear across the alternate screen, then put back.
pub fn guard<T>(f: impl FnOnce() -> T) -> Result<T, CrashInfo> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);
    result.map_err(CrashInfo::from_panic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_passes_through_on_success() {
        let result = guard(|| 40 + 2);
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_guard_catches_str_panic() {
        let result: Result<(), CrashInfo> = guard(|| panic!("feed row out of range"));
        let crash = result.unwrap_err();
        assert_eq!(crash.message, "feed row out of range");
    }

    #[test]
    fn test_guard_catches_formatted_panic() {
        let result: Result<(), CrashInfo> = guard(|| panic!("bad index {}", 7));
        let crash = result.unwrap_err();
        assert_eq!(crash.message, "bad index 7");
    }

    #[test]
    fn test_guard_restores_panic_hook() {
        let marker = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let marker_clone = marker.clone();
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |_| {
            marker_clone.store(true, std::sync::atomic::Ordering::SeqCst);
        }));

        let _: Result<(), CrashInfo> = guard(|| panic!("inner"));
        // hook installed above must be back in place after the guard
        let _ = panic::catch_unwind(|| panic!("outer"));
        panic::set_hook(previous);

        assert!(marker.load(std::sync::atomic::Ordering::SeqCst));
    }
}
