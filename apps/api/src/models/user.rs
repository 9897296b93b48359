use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::job::Job;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Preselected on the registration form.
    #[default]
    Candidate,
    Employer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Candidate => write!(f, "candidate"),
            Role::Employer => write!(f, "employer"),
        }
    }
}

/// Role-specific collection. The variant *is* the user's role.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Portfolio {
    /// Full copies of each job applied to, duplicates included.
    Candidate { applied_jobs: Vec<Job> },
    Employer { posted_job_ids: Vec<String> },
}

impl Portfolio {
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Candidate => Portfolio::Candidate {
                applied_jobs: Vec::new(),
            },
            Role::Employer => Portfolio::Employer {
                posted_job_ids: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Plaintext; the board only simulates authentication.
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    #[serde(flatten)]
    pub portfolio: Portfolio,
}

impl User {
    pub fn role(&self) -> Role {
        match self.portfolio {
            Portfolio::Candidate { .. } => Role::Candidate,
            Portfolio::Employer { .. } => Role::Employer,
        }
    }

    pub fn applied_jobs(&self) -> &[Job] {
        match &self.portfolio {
            Portfolio::Candidate { applied_jobs } => applied_jobs,
            Portfolio::Employer { .. } => &[],
        }
    }

    pub fn posted_job_ids(&self) -> &[String] {
        match &self.portfolio {
            Portfolio::Employer { posted_job_ids } => posted_job_ids,
            Portfolio::Candidate { .. } => &[],
        }
    }
}

/// Display name used for self-registered accounts: the email's local part.
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}
