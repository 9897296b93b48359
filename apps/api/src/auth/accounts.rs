//! Simulated authentication against the in-memory user table.
//! Plaintext passwords, exact match, no lockout.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::postings::REQUIRED_FIELDS;
use crate::models::job::require;
use crate::models::user::display_name_from_email;
use crate::models::{Portfolio, Role, Severity, User};
use crate::navigation::Route;
use crate::store::{SessionId, Store};

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Invalid email or password.";
pub const REGISTERED: &str = "Registration successful! Please log in.";
pub const EMAIL_TAKEN: &str = "User with this email already exists.";
pub const LOGGED_OUT: &str = "Logged out successfully.";

impl Store {
    /// Succeeds iff a user with `email` exists and `password` matches exactly.
    /// On failure the session's auth and route are left untouched.
    pub fn login(&mut self, session: SessionId, email: &str, password: &str) -> Result<(), AppError> {
        self.session(session)?;

        let authenticated = self
            .user(email)
            .is_some_and(|user| user.password == password);

        if !authenticated {
            warn!("Failed login for {email} on session {session}");
            self.show_notification(session, LOGIN_FAILED, Severity::Error)?;
            return Err(AppError::Unauthorized(LOGIN_FAILED.to_string()));
        }

        self.session_mut(session)?.sign_in(email);
        info!("Session {session} logged in as {email}");
        self.show_notification(session, LOGIN_SUCCEEDED, Severity::Success)?;
        self.set_route(session, Route::Home)
    }

    /// Creates an account with an empty role-specific collection.
    /// Fails without touching the user table if `email` is already registered.
    pub fn register(
        &mut self,
        session: SessionId,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AppError> {
        self.session(session)?;
        if let Err(e) = require("email", email).and_then(|_| require("password", password)) {
            self.show_notification(session, REQUIRED_FIELDS, Severity::Error)?;
            return Err(e);
        }

        if self.user(email).is_some() {
            warn!("Registration rejected: {email} already exists");
            self.show_notification(session, EMAIL_TAKEN, Severity::Error)?;
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: display_name_from_email(email),
            portfolio: Portfolio::empty(role),
        };
        self.insert_user(user.clone());
        info!("Registered {email} as {role}");

        self.show_notification(session, REGISTERED, Severity::Success)?;
        self.set_route(session, Route::Login)?;
        Ok(user)
    }

    /// Clears every session field and returns home, whatever the prior state.
    pub fn logout(&mut self, session: SessionId) -> Result<(), AppError> {
        self.session_mut(session)?.sign_out();
        self.set_route(session, Route::Home)?;
        self.show_notification(session, LOGGED_OUT, Severity::Success)?;
        info!("Session {session} logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_seed_credentials() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        store.navigate(sid, Route::Login).unwrap();

        store
            .login(sid, "candidate@example.com", "password")
            .unwrap();

        let viewer = store.viewer(sid).unwrap().unwrap();
        assert_eq!(viewer.name, "Jane Doe");
        assert_eq!(viewer.role(), Role::Candidate);
        let session = store.session(sid).unwrap();
        assert_eq!(session.route(), &Route::Home);
        assert_eq!(
            session.notification().map(|n| n.message.as_str()),
            Some(LOGIN_SUCCEEDED)
        );
    }

    #[test]
    fn test_wrong_password_leaves_session_untouched() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        store.navigate(sid, Route::Login).unwrap();

        let err = store
            .login(sid, "candidate@example.com", "Password")
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        let session = store.session(sid).unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(session.route(), &Route::Login);
        assert_eq!(
            session.notification().map(|n| n.message.as_str()),
            Some(LOGIN_FAILED)
        );
    }

    #[test]
    fn test_unknown_email_fails_login() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        assert!(store.login(sid, "ghost@example.com", "password").is_err());
        assert!(store.viewer(sid).unwrap().is_none());
    }

    #[test]
    fn test_failed_login_keeps_previous_user() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        store
            .login(sid, "candidate@example.com", "password")
            .unwrap();
        assert!(store.login(sid, "employer@example.com", "wrong").is_err());
        assert_eq!(
            store.session(sid).unwrap().user_email(),
            Some("candidate@example.com")
        );
    }

    #[test]
    fn test_register_new_employer() {
        let mut store = Store::seeded();
        let sid = store.open_session();

        let user = store
            .register(sid, "hiring@startup.io", "s3cret", Role::Employer)
            .unwrap();
        assert_eq!(user.name, "hiring");
        assert_eq!(user.role(), Role::Employer);
        assert!(user.posted_job_ids().is_empty());
        assert_eq!(store.user_count(), 3);
        assert_eq!(store.session(sid).unwrap().route(), &Route::Login);

        store.login(sid, "hiring@startup.io", "s3cret").unwrap();
    }

    #[test]
    fn test_register_existing_email_never_mutates_users() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        let before = store.user("candidate@example.com").cloned();

        let err = store
            .register(sid, "candidate@example.com", "other", Role::Employer)
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.user_count(), 2);
        assert_eq!(store.user("candidate@example.com").cloned(), before);
    }

    #[test]
    fn test_register_rejects_blank_password() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        assert!(matches!(
            store.register(sid, "new@example.com", "", Role::Candidate),
            Err(AppError::Validation(_))
        ));
        assert!(store.user("new@example.com").is_none());
        assert_eq!(
            store
                .session(sid)
                .unwrap()
                .notification()
                .map(|n| n.message.as_str()),
            Some(REQUIRED_FIELDS)
        );
    }

    #[test]
    fn test_switching_employer_drops_previous_draft() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        store
            .register(sid, "other@corp.io", "pw", Role::Employer)
            .unwrap();
        store
            .login(sid, "employer@example.com", "password")
            .unwrap();
        store.navigate(sid, Route::EmployerDashboard).unwrap();
        let ticket = store.begin_enhancement(sid, "Acme secret draft").unwrap();
        store
            .finish_enhancement(sid, ticket.id, Ok("Acme secret draft, enhanced".into()))
            .unwrap();

        store.login(sid, "other@corp.io", "pw").unwrap();
        store.navigate(sid, Route::EmployerDashboard).unwrap();

        let session = store.session(sid).unwrap();
        assert_eq!(session.user_email(), Some("other@corp.io"));
        assert!(session.description_draft().is_none());
    }

    #[test]
    fn test_switching_mid_enhancement_discards_result() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        store
            .register(sid, "other@corp.io", "pw", Role::Employer)
            .unwrap();
        store
            .login(sid, "employer@example.com", "password")
            .unwrap();
        store.navigate(sid, Route::EmployerDashboard).unwrap();
        let ticket = store.begin_enhancement(sid, "draft").unwrap();

        store.login(sid, "other@corp.io", "pw").unwrap();
        assert!(ticket.token.is_cancelled());
        store.navigate(sid, Route::EmployerDashboard).unwrap();
        assert_eq!(
            store
                .finish_enhancement(sid, ticket.id, Ok("late".into()))
                .unwrap(),
            crate::jobs::enhance::EnhanceOutcome::Discarded
        );
        assert!(store.session(sid).unwrap().description_draft().is_none());
    }

    #[test]
    fn test_generated_user_ids_are_unique() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        let a = store.register(sid, "a@x.io", "pw", Role::Candidate).unwrap();
        let b = store.register(sid, "b@x.io", "pw", Role::Candidate).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_logout_clears_session_from_any_state() {
        let mut store = Store::seeded();
        let sid = store.open_session();

        store.logout(sid).unwrap();
        assert_eq!(store.session(sid).unwrap().route(), &Route::Home);

        store
            .login(sid, "employer@example.com", "password")
            .unwrap();
        store.navigate(sid, Route::EmployerDashboard).unwrap();
        store.logout(sid).unwrap();

        let session = store.session(sid).unwrap();
        assert!(!session.is_logged_in());
        assert!(session.description_draft().is_none());
        assert_eq!(session.route(), &Route::Home);
        assert_eq!(
            session.notification().map(|n| n.message.as_str()),
            Some(LOGGED_OUT)
        );
    }
}
