//! Transient user notifications.
//!
//! Every create/update/mutate action and every load failure produces a
//! [`Notice`].  The presentation layer drains the sink and renders toasts;
//! here they are just typed, serializable payloads.

use std::sync::{Arc, Mutex};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// In-memory notification sink shared between commands and the UI.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<Vec<Notice>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    /// Take all pending notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, level: NoticeLevel, message: String) {
        tracing::debug!(?level, %message, "Notice");
        self.lock().push(Notice { level, message });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let notifier = Notifier::new();
        notifier.info("loading");
        notifier.success("done");

        let notices = notifier.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[1].level, NoticeLevel::Success);

        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_clones_share_the_sink() {
        let notifier = Notifier::new();
        let clone = notifier.clone();
        clone.error("boom");
        assert_eq!(notifier.drain().len(), 1);
    }
}
