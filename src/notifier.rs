use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::{Notification, Notifier, Severity};

/// Logs notifications through `tracing`.
#[derive(Default, Debug)]
pub struct TracingNotifier {}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Error => tracing::warn!("{}", notification),
            Severity::Success | Severity::Info => tracing::info!("{}", notification),
        }
    }
}

/// The toast currently on screen. A newer notification replaces the old one and
/// each one disappears after [`NotificationSlot::DISMISS_AFTER`].
#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<(Notification, Instant)>,
    ttl: Duration,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(Self::DISMISS_AFTER)
    }
}

impl NotificationSlot {
    pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some((notification, now));
    }

    pub fn current(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, shown_at)| now.saturating_duration_since(*shown_at) < self.ttl)
            .map(|(notification, _)| notification)
    }
}

/// Keeps every notification plus the live toast, for embedding UIs and tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
    slot: Mutex<NotificationSlot>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.sent().pop()
    }

    /// The toast that would be visible at `now`.
    pub fn current(&self, now: Instant) -> Option<Notification> {
        self.slot
            .lock()
            .ok()
            .and_then(|slot| slot.current(now).cloned())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification.clone());
        }
        if let Ok(mut slot) = self.slot.lock() {
            slot.show(notification.clone(), Instant::now());
        }
    }
}
