use serde::{Deserialize, Serialize};

/// Every page the board can show. Serialized as `{"page": "job-detail", "job_id": "job1"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    JobListings,
    JobDetail {
        job_id: String,
    },
    JobApplication {
        job_id: String,
    },
    EmployerDashboard,
    CandidateDashboard,
    Login,
    Register,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::JobListings => "job-listings",
            Route::JobDetail { .. } => "job-detail",
            Route::JobApplication { .. } => "job-application",
            Route::EmployerDashboard => "employer-dashboard",
            Route::CandidateDashboard => "candidate-dashboard",
            Route::Login => "login",
            Route::Register => "register",
        }
    }
}
