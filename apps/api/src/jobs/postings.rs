use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ApplicationForm, Job, JobForm, Portfolio, Severity};
use crate::navigation::Route;
use crate::store::{SessionId, Store};

pub const JOB_POSTED: &str = "Job posted successfully!";
pub const REQUIRED_FIELDS: &str = "Please fill in all required fields.";

impl Store {
    /// Publishes a job for the logged-in employer and records it on their account.
    pub fn post_job(&mut self, session: SessionId, form: JobForm) -> Result<Job, AppError> {
        self.authorize(session, &Route::EmployerDashboard)?;
        if let Err(e) = form.validate() {
            self.show_notification(session, REQUIRED_FIELDS, Severity::Error)?;
            return Err(e);
        }

        let (employer_email, employer_id) = self
            .viewer(session)?
            .map(|u| (u.email.clone(), u.id.clone()))
            .ok_or_else(|| AppError::Unauthorized("Login required".to_string()))?;

        let job = Job {
            id: Uuid::new_v4().to_string(),
            requirements: form.requirement_list(),
            title: form.title,
            company: form.company,
            location: form.location,
            description: form.description,
            salary: form.salary,
            posted_date: Utc::now().date_naive(),
            employer_id,
        };
        self.push_job(job.clone());

        if let Some(Portfolio::Employer { posted_job_ids }) = self
            .user_mut(&employer_email)
            .map(|u| &mut u.portfolio)
        {
            posted_job_ids.push(job.id.clone());
        }
        info!("Employer {employer_email} posted job {} ({})", job.id, job.title);

        self.session_mut(session)?.description_draft = None;
        self.show_notification(session, JOB_POSTED, Severity::Success)?;
        self.set_route(session, Route::EmployerDashboard)?;
        Ok(job)
    }

    /// Records an application. Anonymous sessions are sent to login and
    /// employers are refused before anything is touched.
    pub fn apply(
        &mut self,
        session: SessionId,
        job_id: &str,
        form: &ApplicationForm,
    ) -> Result<Job, AppError> {
        self.authorize(
            session,
            &Route::JobApplication {
                job_id: job_id.to_string(),
            },
        )?;

        let job = self
            .job(job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

        if let Err(e) = form.validate() {
            self.show_notification(session, REQUIRED_FIELDS, Severity::Error)?;
            return Err(e);
        }

        let candidate_email = self
            .session(session)?
            .user_email()
            .map(str::to_string)
            .ok_or_else(|| AppError::Unauthorized("Login required".to_string()))?;

        // Duplicates are kept: applying twice lists the job twice.
        if let Some(Portfolio::Candidate { applied_jobs }) = self
            .user_mut(&candidate_email)
            .map(|u| &mut u.portfolio)
        {
            applied_jobs.push(job.clone());
        }
        info!(
            job_id = %job.id,
            applicant = %form.full_name,
            contact = %form.email,
            phone = form.phone.as_deref().unwrap_or("-"),
            has_cover_letter = form.cover_letter.as_deref().is_some_and(|c| !c.trim().is_empty()),
            "Application submitted by {candidate_email}"
        );

        self.show_notification(
            session,
            format!("Successfully applied for {}!", job.title),
            Severity::Success,
        )?;
        self.set_route(session, Route::CandidateDashboard)?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::guard::{EMPLOYERS_CANNOT_APPLY, LOGIN_TO_APPLY};

    fn job_form() -> JobForm {
        JobForm {
            title: "Staff Rust Engineer".into(),
            company: "Acme Corp".into(),
            location: "Remote".into(),
            description: "Own the storage engine.".into(),
            requirements: "Rust, Tokio , ,async".into(),
            salary: "$200,000".into(),
        }
    }

    fn application() -> ApplicationForm {
        ApplicationForm {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            resume_text: "https://jane.dev/cv".into(),
            cover_letter: None,
        }
    }

    fn logged_in(email: &str) -> (Store, SessionId) {
        let mut store = Store::seeded();
        let sid = store.open_session();
        store.login(sid, email, "password").unwrap();
        (store, sid)
    }

    #[test]
    fn test_employer_posts_exactly_one_job() {
        let (mut store, sid) = logged_in("employer@example.com");
        store.navigate(sid, Route::EmployerDashboard).unwrap();

        let job = store.post_job(sid, job_form()).unwrap();

        assert_eq!(store.jobs().len(), 5);
        assert_eq!(store.jobs().last(), Some(&job));
        assert_eq!(job.employer_id, "employer1");
        assert_eq!(job.requirements, vec!["Rust", "Tokio", "async"]);
        assert_eq!(job.posted_date, Utc::now().date_naive());
        let employer = store.user("employer@example.com").unwrap();
        assert_eq!(
            employer.posted_job_ids(),
            &["job1".to_string(), "job3".to_string(), job.id.clone()]
        );
        assert_eq!(
            store.session(sid).unwrap().route(),
            &Route::EmployerDashboard
        );
    }

    #[test]
    fn test_posted_job_ids_are_unique() {
        let (mut store, sid) = logged_in("employer@example.com");
        let a = store.post_job(sid, job_form()).unwrap();
        let b = store.post_job(sid, job_form()).unwrap();
        assert_ne!(a.id, b.id);
        assert!(store.jobs().iter().filter(|j| j.id == a.id).count() == 1);
    }

    #[test]
    fn test_candidate_cannot_post() {
        let (mut store, sid) = logged_in("candidate@example.com");
        let err = store.post_job(sid, job_form()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(store.jobs().len(), 4);
    }

    #[test]
    fn test_post_with_missing_title_is_rejected() {
        let (mut store, sid) = logged_in("employer@example.com");
        let form = JobForm {
            title: String::new(),
            ..job_form()
        };
        assert!(matches!(
            store.post_job(sid, form),
            Err(AppError::Validation(_))
        ));
        assert_eq!(store.jobs().len(), 4);
        assert_eq!(
            store
                .user("employer@example.com")
                .unwrap()
                .posted_job_ids()
                .len(),
            2
        );
    }

    #[test]
    fn test_anonymous_apply_redirects_and_mutates_nothing() {
        let mut store = Store::seeded();
        let sid = store.open_session();
        store
            .navigate(
                sid,
                Route::JobDetail {
                    job_id: "job1".into(),
                },
            )
            .unwrap();

        let err = store.apply(sid, "job1", &application()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        let session = store.session(sid).unwrap();
        assert_eq!(session.route(), &Route::Login);
        assert_eq!(
            session.notification().map(|n| n.message.as_str()),
            Some(LOGIN_TO_APPLY)
        );
        assert!(store
            .user("candidate@example.com")
            .unwrap()
            .applied_jobs()
            .is_empty());
    }

    #[test]
    fn test_employer_apply_is_denied() {
        let (mut store, sid) = logged_in("employer@example.com");
        let err = store.apply(sid, "job2", &application()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(
            store
                .session(sid)
                .unwrap()
                .notification()
                .map(|n| n.message.as_str()),
            Some(EMPLOYERS_CANNOT_APPLY)
        );
    }

    #[test]
    fn test_candidate_apply_copies_job() {
        let (mut store, sid) = logged_in("candidate@example.com");
        let job = store.apply(sid, "job3", &application()).unwrap();

        let candidate = store.user("candidate@example.com").unwrap();
        assert_eq!(candidate.applied_jobs(), &[job.clone()]);
        let session = store.session(sid).unwrap();
        assert_eq!(session.route(), &Route::CandidateDashboard);
        assert_eq!(
            session.notification().map(|n| n.message.clone()),
            Some("Successfully applied for UI/UX Designer!".to_string())
        );
    }

    #[test]
    fn test_duplicate_applications_are_kept() {
        let (mut store, sid) = logged_in("candidate@example.com");
        store.apply(sid, "job1", &application()).unwrap();
        store.apply(sid, "job1", &application()).unwrap();
        assert_eq!(
            store
                .user("candidate@example.com")
                .unwrap()
                .applied_jobs()
                .len(),
            2
        );
    }

    #[test]
    fn test_apply_to_unknown_job() {
        let (mut store, sid) = logged_in("candidate@example.com");
        assert!(matches!(
            store.apply(sid, "job99", &application()),
            Err(AppError::NotFound(_))
        ));
    }
}
