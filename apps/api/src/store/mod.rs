//! The in-memory board: jobs, users, and per-client sessions.
//!
//! `Store` is plain data mutated only through named transitions (see the
//! `auth`, `jobs`, and `navigation` modules). `SharedStore` is the handle
//! carried in `AppState`; it owns the lock and the notification timers.

pub mod notifications;
pub mod seed;
pub mod session;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Job, Notification, NotificationId, Severity, User};

pub use session::{ClientSession, EnhancementTicket, SessionId};

#[derive(Debug, Default)]
pub struct Store {
    jobs: Vec<Job>,
    /// Keyed by email.
    users: HashMap<String, User>,
    sessions: HashMap<SessionId, ClientSession>,
    next_notification_id: NotificationId,
    next_ticket_id: u64,
    /// Notifications shown since the last drain, awaiting an expiry timer.
    pending_expiries: Vec<(SessionId, NotificationId)>,
}

impl Store {
    pub fn new(jobs: Vec<Job>, users: Vec<User>) -> Self {
        Store {
            jobs,
            users: users.into_iter().map(|u| (u.email.clone(), u)).collect(),
            ..Default::default()
        }
    }

    /// The demo board: four jobs and one account per role.
    pub fn seeded() -> Self {
        Self::new(seed::initial_jobs(), seed::initial_users())
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn open_session(&mut self) -> SessionId {
        let id = Uuid::new_v4();
        self.sessions.insert(id, ClientSession::default());
        info!("Opened session {id}");
        id
    }

    /// Drops the session, cancelling any in-flight enhancement it owns.
    pub fn close_session(&mut self, id: SessionId) -> bool {
        match self.sessions.remove(&id) {
            Some(mut session) => {
                session.cancel_enhancement();
                info!("Closed session {id}");
                true
            }
            None => false,
        }
    }

    pub fn session(&self, id: SessionId) -> Result<&ClientSession, AppError> {
        self.sessions.get(&id).ok_or(AppError::UnknownSession)
    }

    /// Mutable access on behalf of the client; refreshes the idle clock.
    pub(crate) fn session_mut(&mut self, id: SessionId) -> Result<&mut ClientSession, AppError> {
        let session = self.sessions.get_mut(&id).ok_or(AppError::UnknownSession)?;
        session.last_seen = Instant::now();
        Ok(session)
    }

    /// Marks the session as active without changing it.
    pub fn touch(&mut self, id: SessionId) -> Result<(), AppError> {
        self.session_mut(id).map(|_| ())
    }

    /// Closes every session idle for at least `idle` as of `now`.
    pub fn sweep_idle(&mut self, now: Instant, idle: Duration) -> Vec<SessionId> {
        let expired: Vec<SessionId> = self
            .sessions
            .iter()
            .filter(|(_, s)| now.saturating_duration_since(s.last_seen) >= idle)
            .map(|(id, _)| *id)
            .collect();

        for id in &expired {
            self.close_session(*id);
        }
        expired
    }

    /// The logged-in user behind a session, looked up fresh from the user table.
    pub fn viewer(&self, id: SessionId) -> Result<Option<&User>, AppError> {
        let session = self.session(id)?;
        Ok(session.user_email().and_then(|email| self.users.get(email)))
    }

    pub(crate) fn user_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.get_mut(email)
    }

    pub(crate) fn insert_user(&mut self, user: User) {
        self.users.insert(user.email.clone(), user);
    }

    pub(crate) fn push_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    pub(crate) fn next_ticket_id(&mut self) -> u64 {
        self.next_ticket_id += 1;
        self.next_ticket_id
    }

    /// Replaces the session's notification and queues it for expiry.
    pub fn show_notification(
        &mut self,
        session: SessionId,
        message: impl Into<String>,
        severity: Severity,
    ) -> Result<NotificationId, AppError> {
        let slot = &mut self
            .sessions
            .get_mut(&session)
            .ok_or(AppError::UnknownSession)?
            .notification;

        self.next_notification_id += 1;
        let id = self.next_notification_id;
        slot.replace(Notification {
            id,
            message: message.into(),
            severity,
        });
        self.pending_expiries.push((session, id));
        Ok(id)
    }

    pub fn dismiss_notification(&mut self, session: SessionId) -> Result<(), AppError> {
        self.session_mut(session)?.notification.dismiss();
        Ok(())
    }

    /// Timer callback: clears notification `id` if it is still the live one.
    pub fn expire_notification(&mut self, session: SessionId, id: NotificationId) -> bool {
        self.sessions
            .get_mut(&session)
            .is_some_and(|s| s.notification.clear_if_current(id))
    }

    pub fn take_pending_expiries(&mut self) -> Vec<(SessionId, NotificationId)> {
        std::mem::take(&mut self.pending_expiries)
    }
}

/// Cloneable, lock-guarded handle to the store. Every mutation goes through
/// [`SharedStore::mutate`], which arms expiry timers for any notifications the
/// transition produced.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
    notification_ttl: Duration,
}

impl SharedStore {
    pub fn new(store: Store, notification_ttl: Duration) -> Self {
        SharedStore {
            inner: Arc::new(RwLock::new(store)),
            notification_ttl,
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let guard = self.inner.read().await;
        f(&guard)
    }

    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let (result, expiries) = {
            let mut guard = self.inner.write().await;
            let result = f(&mut guard);
            (result, guard.take_pending_expiries())
        };

        for (session, id) in expiries {
            self.schedule_expiry(session, id);
        }

        result
    }

    /// Periodically closes sessions whose client has gone quiet.
    pub fn spawn_idle_sweeper(&self, idle: Duration, every: Duration) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let closed = inner.write().await.sweep_idle(Instant::now(), idle);
                if !closed.is_empty() {
                    info!("Swept {} idle session(s)", closed.len());
                }
            }
        })
    }

    fn schedule_expiry(&self, session: SessionId, id: NotificationId) {
        let inner = Arc::clone(&self.inner);
        let ttl = self.notification_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if inner.write().await.expire_notification(session, id) {
                debug!("Notification {id} expired for session {session}");
            }
        });
    }
}
