//! # Transient Notifier
//!
//! The short-lived confirmation message shown after a copy or export action.
//!
//! A new notification always replaces the current one and restarts the
//! visible duration; there is no queue. Expiry is checked against a
//! caller-supplied clock each event-loop tick, so only the most recent
//! notification's deadline is ever honored.

use std::time::{Duration, Instant};

/// How long a toast stays visible after the most recent `notify`.
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single on-screen confirmation message.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            shown_at: now,
        }
    }

    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            shown_at: now,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_visible_before_deadline() {
        let start = Instant::now();
        let toast = Toast::new("Copied!", start);
        assert!(!toast.is_expired(start));
        assert!(!toast.is_expired(start + Duration::from_millis(1499)));
    }

    #[test]
    fn test_toast_expired_at_deadline() {
        let start = Instant::now();
        let toast = Toast::new("Copied!", start);
        assert!(toast.is_expired(start + TOAST_DURATION));
        assert!(toast.is_expired(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_replacement_restarts_the_clock() {
        // notify("A") then notify("B") 100ms later: the displayed message is
        // "B" for a full duration from the second call, and "A" never
        // reappears.
        let start = Instant::now();
        let mut current = Some(Toast::new("A", start));
        assert_eq!(current.as_ref().map(Toast::message), Some("A"));

        let second = start + Duration::from_millis(100);
        current = Some(Toast::new("B", second));

        let toast = current.as_ref().expect("toast present");
        assert_eq!(toast.message(), "B");

        // Still "B" where the first toast's deadline would have fallen.
        let first_deadline = start + TOAST_DURATION;
        assert!(!toast.is_expired(first_deadline));

        // Gone 1500ms after the second call.
        assert!(toast.is_expired(second + TOAST_DURATION));
    }
}
