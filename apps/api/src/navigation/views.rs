//! View models for every page. Pure reads over the store; nothing here mutates.

use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::search::search_jobs;
use crate::models::{Job, JobCard, Notification, Role, User};
use crate::navigation::guard::{CANDIDATE_ONLY, EMPLOYER_ONLY};
use crate::navigation::Route;
use crate::store::{SessionId, Store};

/// How many jobs the home page features.
pub const FEATURED_COUNT: usize = 3;

const NO_SEARCH_RESULTS: &str = "No jobs found matching your search criteria.";
const NO_POSTED_JOBS: &str = "You haven't posted any jobs yet.";
const NO_APPLICATIONS: &str = "You haven't applied for any jobs yet.";
const JOB_NOT_FOUND: &str = "Job not found.";
const APPLICATION_JOB_NOT_FOUND: &str = "Job not found for application.";

/// Everything a client needs to draw the current screen.
#[derive(Debug, Clone, Serialize)]
pub struct AppView {
    pub session_id: SessionId,
    pub user: Option<ViewerSummary>,
    pub nav: Vec<NavLink>,
    pub can_logout: bool,
    pub route: Route,
    pub page: PageView,
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewerSummary {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageView {
    Home {
        featured: Vec<JobCard>,
    },
    JobListings {
        query: String,
        jobs: Vec<JobCard>,
        empty_message: Option<&'static str>,
    },
    JobDetail {
        job: Job,
        can_apply: bool,
    },
    JobApplication {
        job: JobCard,
    },
    JobNotFound {
        message: &'static str,
    },
    Login,
    Register {
        roles: [Role; 2],
        default_role: Role,
    },
    EmployerDashboard {
        name: String,
        default_company: String,
        posted_jobs: Vec<JobCard>,
        /// Postings recorded on the employer's account.
        posted_count: usize,
        empty_message: Option<&'static str>,
        enhancing: bool,
        description_draft: Option<String>,
    },
    CandidateDashboard {
        name: String,
        applications: Vec<JobCard>,
        empty_message: Option<&'static str>,
    },
    AccessDenied {
        message: &'static str,
    },
}

/// Renders the session's current page. `query` only affects the listings page.
pub fn render(store: &Store, session_id: SessionId, query: Option<&str>) -> Result<AppView, AppError> {
    let session = store.session(session_id)?;
    let viewer = store.viewer(session_id)?;
    let route = session.route().clone();

    let page = match &route {
        Route::Home => PageView::Home {
            featured: store.jobs().iter().take(FEATURED_COUNT).map(JobCard::from).collect(),
        },
        Route::JobListings => {
            let query = query.unwrap_or_default();
            let jobs: Vec<JobCard> = search_jobs(store.jobs(), query)
                .into_iter()
                .map(JobCard::from)
                .collect();
            PageView::JobListings {
                query: query.to_string(),
                empty_message: jobs.is_empty().then_some(NO_SEARCH_RESULTS),
                jobs,
            }
        }
        Route::JobDetail { job_id } => match store.job(job_id) {
            Some(job) => PageView::JobDetail {
                job: job.clone(),
                can_apply: viewer.map(User::role) != Some(Role::Employer),
            },
            None => PageView::JobNotFound {
                message: JOB_NOT_FOUND,
            },
        },
        Route::JobApplication { job_id } => match store.job(job_id) {
            Some(job) => PageView::JobApplication { job: job.into() },
            None => PageView::JobNotFound {
                message: APPLICATION_JOB_NOT_FOUND,
            },
        },
        Route::Login => PageView::Login,
        Route::Register => PageView::Register {
            roles: [Role::Candidate, Role::Employer],
            default_role: Role::default(),
        },
        Route::EmployerDashboard => match viewer.filter(|u| u.role() == Role::Employer) {
            Some(employer) => {
                let posted_jobs: Vec<JobCard> = store
                    .jobs()
                    .iter()
                    .filter(|j| j.employer_id == employer.id)
                    .map(JobCard::from)
                    .collect();
                PageView::EmployerDashboard {
                    name: employer.name.clone(),
                    default_company: employer.name.clone(),
                    empty_message: posted_jobs.is_empty().then_some(NO_POSTED_JOBS),
                    posted_jobs,
                    posted_count: employer.posted_job_ids().len(),
                    enhancing: session.is_enhancing(),
                    description_draft: session.description_draft().map(str::to_string),
                }
            }
            None => PageView::AccessDenied {
                message: EMPLOYER_ONLY,
            },
        },
        Route::CandidateDashboard => match viewer.filter(|u| u.role() == Role::Candidate) {
            Some(candidate) => {
                let applications: Vec<JobCard> =
                    candidate.applied_jobs().iter().map(JobCard::from).collect();
                PageView::CandidateDashboard {
                    name: candidate.name.clone(),
                    empty_message: applications.is_empty().then_some(NO_APPLICATIONS),
                    applications,
                }
            }
            None => PageView::AccessDenied {
                message: CANDIDATE_ONLY,
            },
        },
    };

    Ok(AppView {
        session_id,
        user: viewer.map(|u| ViewerSummary {
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role(),
        }),
        nav: nav_links(viewer.map(User::role), &route),
        can_logout: session.is_logged_in(),
        route,
        page,
        notification: session.notification().cloned(),
    })
}

fn nav_links(role: Option<Role>, current: &Route) -> Vec<NavLink> {
    let mut targets = vec![("Job Listings", Route::JobListings)];
    match role {
        Some(Role::Employer) => targets.push(("Employer Dashboard", Route::EmployerDashboard)),
        Some(Role::Candidate) => targets.push(("Candidate Dashboard", Route::CandidateDashboard)),
        None => {
            targets.push(("Login", Route::Login));
            targets.push(("Register", Route::Register));
        }
    }

    targets
        .into_iter()
        .map(|(label, route)| NavLink {
            label,
            active: route.name() == current.name(),
            route,
        })
        .collect()
}
