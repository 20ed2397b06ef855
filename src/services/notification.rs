//! Notification sink - Transient user-facing messages.
//!
//! A bounded queue owned by the composition root and shared by `Arc`
//! between the controllers and the error reporter. Messages expire after a
//! fixed lifetime; nothing is persisted.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::config::{Config, DEFAULT_NOTIFICATION_CAPACITY, DEFAULT_NOTIFICATION_LIFE_MS};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single queued message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub created_at: Instant,
    pub life: Duration,
}

impl Notification {
    /// Whether the message is past its display lifetime at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.life
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Queue a message
    fn notify(&self, severity: Severity, title: &str, message: &str);

    /// Drop every queued message immediately
    fn clear(&self);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, "Success", message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, "Error", message);
    }

    fn info(&self, message: &str) {
        self.notify(Severity::Info, "Information", message);
    }

    fn warn(&self, message: &str) {
        self.notify(Severity::Warn, "Warning", message);
    }
}

/// Bounded in-memory notification queue.
#[derive(Debug)]
pub struct NotificationQueue {
    entries: Mutex<VecDeque<Notification>>,
    life: Duration,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(life: Duration, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            life,
            capacity,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.notification_life(), config.notification_capacity)
    }

    /// Unexpired messages, oldest first
    pub fn active(&self) -> Vec<Notification> {
        self.active_at(Instant::now())
    }

    /// Unexpired messages at `now`; expired ones are pruned.
    pub fn active_at(&self, now: Instant) -> Vec<Notification> {
        let mut entries = self.entries.lock();
        entries.retain(|n| !n.is_expired_at(now));
        entries.iter().cloned().collect()
    }

    /// Take every unexpired message out of the queue
    pub fn drain(&self) -> Vec<Notification> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        entries.drain(..).filter(|n| !n.is_expired_at(now)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_NOTIFICATION_LIFE_MS),
            DEFAULT_NOTIFICATION_CAPACITY,
        )
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(Notification {
            severity,
            title: title.to_string(),
            message: message.to_string(),
            created_at: Instant::now(),
            life: self.life,
        });
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }
}
