use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A posting on the board. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    /// Free text, e.g. "$90,000 - $110,000".
    pub salary: String,
    pub posted_date: NaiveDate,
    /// Not checked against the user table.
    pub employer_id: String,
}

/// The summary shown on listing, home, and dashboard cards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: NaiveDate,
}

impl From<&Job> for JobCard {
    fn from(job: &Job) -> Self {
        JobCard {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            posted_date: job.posted_date,
        }
    }
}

/// Employer "Post a New Job" form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Comma-separated, as typed.
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub salary: String,
}

impl JobForm {
    pub fn validate(&self) -> Result<(), AppError> {
        require("title", &self.title)?;
        require("company", &self.company)?;
        require("location", &self.location)?;
        require("description", &self.description)
    }

    /// Splits the raw requirements field on commas, trimming each entry and dropping blanks.
    pub fn requirement_list(&self) -> Vec<String> {
        self.requirements
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Candidate application form. Only the job itself is kept on the candidate;
/// the rest is logged on submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Resume text or a link to one.
    pub resume_text: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<(), AppError> {
        require("full_name", &self.full_name)?;
        require("email", &self.email)?;
        require("resume_text", &self.resume_text)
    }
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> JobForm {
        JobForm {
            title: "Rust Engineer".into(),
            company: "Acme Corp".into(),
            location: "Remote".into(),
            description: "Build things.".into(),
            requirements: String::new(),
            salary: String::new(),
        }
    }

    #[test]
    fn test_requirement_list_trims_and_drops_blanks() {
        let form = JobForm {
            requirements: " Rust ,, Tokio,  ,Axum ".into(),
            ..form()
        };
        assert_eq!(form.requirement_list(), vec!["Rust", "Tokio", "Axum"]);
    }

    #[test]
    fn test_requirement_list_empty_input() {
        assert!(form().requirement_list().is_empty());
    }

    #[test]
    fn test_job_form_requires_title() {
        let form = JobForm {
            title: "   ".into(),
            ..form()
        };
        match form.validate() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("title")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_job_form_salary_is_optional() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_application_form_optional_fields() {
        let form: ApplicationForm = serde_json::from_str(
            r#"{"full_name": "Jane Doe", "email": "jane@example.com", "resume_text": "https://cv.example.com"}"#,
        )
        .unwrap();
        assert!(form.phone.is_none());
        assert!(form.cover_letter.is_none());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_application_form_requires_resume() {
        let form = ApplicationForm {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            ..Default::default()
        };
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));
    }
}
