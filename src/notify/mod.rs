//! Transient notifications ("toasts").
//!
//! A [`Notifier`] takes a short message and gives nothing back. [`Toasts`]
//! shows one message at a time and drops it once its display time runs out.

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug)]
pub struct Toasts {
    duration: Duration,
    current: Option<Toast>,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the visible toast if it has been up for the full duration.
    /// Returns true when something was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|t| now.saturating_duration_since(t.shown_at) >= self.duration);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str) {
        tracing::info!(text = message, "notification");
        self.current = Some(Toast {
            text: message.to_string(),
            shown_at: Instant::now(),
            timestamp: Local::now(),
        });
    }
}
