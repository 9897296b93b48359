//! Central access check evaluated before any route transition is accepted.

use crate::models::{Role, User};
use crate::navigation::Route;

pub const LOGIN_TO_APPLY: &str = "Please log in to apply for jobs.";
pub const EMPLOYERS_CANNOT_APPLY: &str = "Employers cannot apply for jobs.";
pub const EMPLOYER_ONLY: &str =
    "Access Denied: Please log in as an employer to view this dashboard.";
pub const CANDIDATE_ONLY: &str =
    "Access Denied: Please log in as a candidate to view this dashboard.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Allow,
    /// Send the client somewhere else (always the login page today).
    Redirect { to: Route, message: &'static str },
    /// Stay on the current page.
    Deny { message: &'static str },
}

/// Decides whether `viewer` may enter `target`.
pub fn evaluate(target: &Route, viewer: Option<&User>) -> Guard {
    let role = viewer.map(User::role);
    match target {
        Route::JobApplication { .. } => match role {
            None => Guard::Redirect {
                to: Route::Login,
                message: LOGIN_TO_APPLY,
            },
            Some(Role::Employer) => Guard::Deny {
                message: EMPLOYERS_CANNOT_APPLY,
            },
            Some(Role::Candidate) => Guard::Allow,
        },
        Route::EmployerDashboard => require_role(role, Role::Employer, EMPLOYER_ONLY),
        Route::CandidateDashboard => require_role(role, Role::Candidate, CANDIDATE_ONLY),
        _ => Guard::Allow,
    }
}

fn require_role(role: Option<Role>, wanted: Role, message: &'static str) -> Guard {
    match role {
        None => Guard::Redirect {
            to: Route::Login,
            message,
        },
        Some(r) if r == wanted => Guard::Allow,
        Some(_) => Guard::Deny { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Portfolio;

    fn user(role: Role) -> User {
        User {
            id: "u".into(),
            email: "u@example.com".into(),
            password: "pw".into(),
            name: "u".into(),
            portfolio: Portfolio::empty(role),
        }
    }

    fn application() -> Route {
        Route::JobApplication {
            job_id: "job1".into(),
        }
    }

    #[test]
    fn test_anonymous_apply_redirects_to_login() {
        assert_eq!(
            evaluate(&application(), None),
            Guard::Redirect {
                to: Route::Login,
                message: LOGIN_TO_APPLY
            }
        );
    }

    #[test]
    fn test_employer_cannot_apply() {
        let employer = user(Role::Employer);
        assert_eq!(
            evaluate(&application(), Some(&employer)),
            Guard::Deny {
                message: EMPLOYERS_CANNOT_APPLY
            }
        );
    }

    #[test]
    fn test_dashboards_require_matching_role() {
        let candidate = user(Role::Candidate);
        let employer = user(Role::Employer);

        assert_eq!(
            evaluate(&Route::CandidateDashboard, Some(&candidate)),
            Guard::Allow
        );
        assert_eq!(
            evaluate(&Route::EmployerDashboard, Some(&employer)),
            Guard::Allow
        );
        assert!(matches!(
            evaluate(&Route::EmployerDashboard, Some(&candidate)),
            Guard::Deny { .. }
        ));
        assert!(matches!(
            evaluate(&Route::CandidateDashboard, None),
            Guard::Redirect { to: Route::Login, .. }
        ));
    }

    #[test]
    fn test_public_pages_are_open() {
        for route in [
            Route::Home,
            Route::JobListings,
            Route::JobDetail {
                job_id: "missing".into(),
            },
            Route::Login,
            Route::Register,
        ] {
            assert_eq!(evaluate(&route, None), Guard::Allow);
        }
    }
}
