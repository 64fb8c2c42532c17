//! Notification toast
//!
//! At most one toast is shown. A new toast replaces the current one, and each
//! toast dismisses itself after [`AUTO_DISMISS`] unless closed first.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a toast stays up on its own
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon name
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="notification {}"><i class="fas fa-{}"></i><span>{}</span><button class="close-notification"><i class="fas fa-times"></i></button></div>"#,
            self.kind.class_name(),
            self.kind.icon(),
            super::renderer::escape_html(&self.message),
        )
    }
}

#[derive(Default)]
struct Slot {
    next_id: u64,
    current: Option<Notification>,
    timer: Option<JoinHandle<()>>,
}

/// Shows and dismisses toasts
///
/// Cloning shares the same slot.
#[derive(Clone, Default)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // A poisoned slot only holds display state, so keep using it
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Replace any current toast and arm its auto-dismiss timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let mut slot = self.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }

        slot.next_id += 1;
        let id = slot.next_id;
        slot.current = Some(Notification {
            id,
            message: message.into(),
            kind,
        });

        let weak = Arc::downgrade(&self.slot);
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS).await;
            if let Some(shared) = weak.upgrade() {
                let mut slot = shared
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                if slot.current.as_ref().is_some_and(|n| n.id == id) {
                    slot.current = None;
                    slot.timer = None;
                }
            }
        }));

        id
    }

    /// Close button: dismiss now and cancel the timer
    ///
    /// Returns false when `id` is no longer the visible toast.
    pub fn close(&self, id: u64) -> bool {
        let mut slot = self.lock();
        if !slot.current.as_ref().is_some_and(|n| n.id == id) {
            return false;
        }
        slot.current = None;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        true
    }

    pub fn current(&self) -> Option<Notification> {
        self.lock().current.clone()
    }

    /// Whether an auto-dismiss timer is still pending
    pub fn timer_armed(&self) -> bool {
        self.lock().timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_five_seconds() {
        let notifier = Notifier::new();
        notifier.show("Message sent successfully!", NotificationKind::Success);

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert!(notifier.current().is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_replaces_existing() {
        let notifier = Notifier::new();
        let first = notifier.show("first", NotificationKind::Info);
        tokio::time::sleep(Duration::from_secs(3)).await;
        let second = notifier.show("second", NotificationKind::Error);
        assert_ne!(first, second);
        assert_eq!(notifier.current().unwrap().message, "second");

        // The first toast's timer must not dismiss the second one
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(notifier.current().unwrap().id, second);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_timer() {
        let notifier = Notifier::new();
        let id = notifier.show("hello", NotificationKind::Warning);
        assert!(notifier.timer_armed());

        assert!(notifier.close(id));
        assert!(notifier.current().is_none());
        assert!(!notifier.timer_armed());
        assert!(!notifier.close(id));
    }

    #[test]
    fn test_icons_by_kind() {
        assert_eq!(NotificationKind::Success.icon(), "check-circle");
        assert_eq!(NotificationKind::Error.icon(), "exclamation-circle");
        assert_eq!(NotificationKind::Warning.icon(), "exclamation-triangle");
        assert_eq!(NotificationKind::default().icon(), "info-circle");
    }

    #[test]
    fn test_markup() {
        let n = Notification {
            id: 1,
            message: "Please fill the name field".to_string(),
            kind: NotificationKind::Error,
        };
        let html = n.to_html();
        assert!(html.starts_with(r#"<div class="notification error">"#));
        assert!(html.contains("fa-exclamation-circle"));
        assert!(html.contains("<span>Please fill the name field</span>"));
    }
}
