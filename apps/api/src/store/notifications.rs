use crate::models::{Notification, NotificationId};

/// One live notification per session. Replacing it does not touch the
/// previous one's expiry timer; the timer checks the id instead.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn replace(&mut self, notification: Notification) -> Option<Notification> {
        self.current.replace(notification)
    }

    /// Clears the slot only if it still holds notification `id`.
    pub fn clear_if_current(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn note(id: NotificationId, message: &str) -> Notification {
        Notification {
            id,
            message: message.to_string(),
            severity: Severity::Success,
        }
    }

    #[test]
    fn test_stale_id_does_not_clear_newer_notification() {
        let mut slot = NotificationSlot::default();
        slot.replace(note(1, "first"));
        slot.replace(note(2, "second"));

        assert!(!slot.clear_if_current(1));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("second"));

        assert!(slot.clear_if_current(2));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_returns_the_live_notification() {
        let mut slot = NotificationSlot::default();
        assert!(slot.dismiss().is_none());
        slot.replace(note(7, "hello"));
        assert_eq!(slot.dismiss().map(|n| n.id), Some(7));
        assert!(slot.current().is_none());
    }
}
