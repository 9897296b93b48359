//! Page routing: the `Route` state, its central guard, and the views rendered from it.

pub mod guard;
pub mod handlers;
pub mod route;
pub mod views;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::Severity;
use crate::store::{SessionId, Store};

pub use guard::Guard;
pub use route::Route;

/// What happened to a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    Accepted { route: Route },
    Redirected { requested: Route, route: Route },
    /// The session stays on `route`.
    Denied { requested: Route, route: Route },
}

impl Store {
    /// Guarded transition to `target`.
    pub fn navigate(&mut self, session: SessionId, target: Route) -> Result<Navigation, AppError> {
        match self.enforce(session, &target)? {
            Guard::Allow => {
                self.set_route(session, target.clone())?;
                Ok(Navigation::Accepted { route: target })
            }
            Guard::Redirect { to, .. } => Ok(Navigation::Redirected {
                requested: target,
                route: to,
            }),
            Guard::Deny { .. } => {
                let current = self.session(session)?.route().clone();
                Ok(Navigation::Denied {
                    requested: target,
                    route: current,
                })
            }
        }
    }

    /// Runs the guard for an action performed on behalf of `target`'s page.
    /// A redirect or denial has already been applied when this returns `Err`.
    pub(crate) fn authorize(&mut self, session: SessionId, target: &Route) -> Result<(), AppError> {
        match self.enforce(session, target)? {
            Guard::Allow => Ok(()),
            Guard::Redirect { message, .. } => Err(AppError::Unauthorized(message.to_string())),
            Guard::Deny { message } => Err(AppError::Forbidden(message.to_string())),
        }
    }

    /// Unguarded route change. Leaving the employer dashboard cancels its enhancement.
    pub(crate) fn set_route(&mut self, session: SessionId, route: Route) -> Result<(), AppError> {
        let state = self.session_mut(session)?;
        if state.route == Route::EmployerDashboard
            && route != Route::EmployerDashboard
            && state.cancel_enhancement()
        {
            info!("Session {session} left the dashboard; in-flight enhancement cancelled");
        }
        state.route = route;
        Ok(())
    }

    fn enforce(&mut self, session: SessionId, target: &Route) -> Result<Guard, AppError> {
        let verdict = guard::evaluate(target, self.viewer(session)?);
        match &verdict {
            Guard::Allow => {}
            Guard::Redirect { to, message } => {
                warn!(
                    "Session {session} redirected from {} to {}",
                    target.name(),
                    to.name()
                );
                self.show_notification(session, *message, Severity::Error)?;
                self.set_route(session, to.clone())?;
            }
            Guard::Deny { message } => {
                warn!("Session {session} denied {}", target.name());
                self.show_notification(session, *message, Severity::Error)?;
            }
        }
        Ok(verdict)
    }
}
