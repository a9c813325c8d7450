//! Notification model and the collaborator that displays it

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single toast request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Renders notifications to the user.
///
/// The import flow calls this once per accept, reject, advance or failure
/// and never inspects the outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that buffers toasts until the host drains them.
///
/// Hosts that render once per frame (or once per command, like the CLI) keep a
/// queue and flush it after each event.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Mutex<Vec<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.lock())
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    pub fn last(&self) -> Option<Notification> {
        self.pending.lock().last().cloned()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        tracing::trace!(title = %notification.title, kind = ?notification.kind, "Queued notification");
        self.pending.lock().push(notification);
    }
}
