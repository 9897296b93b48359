use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::models::Notification;
use crate::navigation::Route;
use crate::store::notifications::NotificationSlot;

pub type SessionId = Uuid;

/// Handle for an in-flight description enhancement.
#[derive(Debug, Clone)]
pub struct EnhancementTicket {
    pub id: u64,
    pub token: CancellationToken,
}

/// Per-client UI state. Auth is just the logged-in email; role and display
/// name are always read from the user table.
#[derive(Debug)]
pub struct ClientSession {
    pub(crate) user_email: Option<String>,
    pub(crate) route: Route,
    pub(crate) notification: NotificationSlot,
    pub(crate) enhancement: Option<EnhancementTicket>,
    pub(crate) description_draft: Option<String>,
    /// Last time the client read or changed this session.
    pub(crate) last_seen: Instant,
}

impl Default for ClientSession {
    fn default() -> Self {
        ClientSession {
            user_email: None,
            route: Route::default(),
            notification: NotificationSlot::default(),
            enhancement: None,
            description_draft: None,
            last_seen: Instant::now(),
        }
    }
}

impl ClientSession {
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_email.is_some()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub fn description_draft(&self) -> Option<&str> {
        self.description_draft.as_deref()
    }

    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    /// True while an enhancement request is outstanding (the busy flag).
    pub fn is_enhancing(&self) -> bool {
        self.enhancement
            .as_ref()
            .is_some_and(|t| !t.token.is_cancelled())
    }

    /// Cancels and forgets the in-flight enhancement, if any.
    pub fn cancel_enhancement(&mut self) -> bool {
        match self.enhancement.take() {
            Some(ticket) => {
                ticket.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Switching to another account drops the previous user's draft and enhancement.
    pub(crate) fn sign_in(&mut self, email: &str) {
        if self.user_email.as_deref() != Some(email) {
            self.sign_out();
        }
        self.user_email = Some(email.to_string());
    }

    /// Drops every auth-derived field.
    pub(crate) fn sign_out(&mut self) {
        self.user_email = None;
        self.cancel_enhancement();
        self.description_draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_on_home() {
        let session = ClientSession::default();
        assert_eq!(session.route(), &Route::Home);
        assert!(!session.is_logged_in());
        assert!(!session.is_enhancing());
    }

    #[test]
    fn test_cancel_enhancement_cancels_token() {
        let token = CancellationToken::new();
        let mut session = ClientSession {
            enhancement: Some(EnhancementTicket {
                id: 1,
                token: token.clone(),
            }),
            ..Default::default()
        };
        assert!(session.is_enhancing());
        assert!(session.cancel_enhancement());
        assert!(token.is_cancelled());
        assert!(!session.is_enhancing());
        assert!(!session.cancel_enhancement());
    }

    #[test]
    fn test_sign_in_as_another_user_drops_draft_and_ticket() {
        let token = CancellationToken::new();
        let mut session = ClientSession {
            user_email: Some("a@corp.io".into()),
            enhancement: Some(EnhancementTicket {
                id: 2,
                token: token.clone(),
            }),
            description_draft: Some("a's draft".into()),
            ..Default::default()
        };

        session.sign_in("b@corp.io");
        assert_eq!(session.user_email(), Some("b@corp.io"));
        assert!(session.description_draft().is_none());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_sign_in_as_same_user_keeps_draft() {
        let mut session = ClientSession {
            user_email: Some("a@corp.io".into()),
            description_draft: Some("a's draft".into()),
            ..Default::default()
        };
        session.sign_in("a@corp.io");
        assert_eq!(session.description_draft(), Some("a's draft"));
    }

    #[test]
    fn test_cancelled_ticket_does_not_count_as_busy() {
        let token = CancellationToken::new();
        token.cancel();
        let session = ClientSession {
            enhancement: Some(EnhancementTicket { id: 3, token }),
            ..Default::default()
        };
        assert!(!session.is_enhancing());
    }
}
