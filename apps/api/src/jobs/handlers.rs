//! Axum route handlers for the job board.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::enhance::EnhanceOutcome;
use crate::jobs::search::search_jobs;
use crate::models::{ApplicationForm, Job, JobForm};
use crate::routes::extract::ClientSessionId;
use crate::routes::respond::respond;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub query: String,
    pub total: usize,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs?q=
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<JobSearchResponse> {
    let jobs: Vec<Job> = state
        .store
        .read(|s| search_jobs(s.jobs(), &params.q).into_iter().cloned().collect())
        .await;

    Json(JobSearchResponse {
        total: jobs.len(),
        query: params.q,
        jobs,
    })
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .store
        .read(|s| s.job(&job_id).cloned())
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

/// POST /api/v1/jobs
pub async fn handle_post_job(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
    Json(form): Json<JobForm>,
) -> Response {
    let result = state.store.mutate(|s| s.post_job(session, form)).await;
    respond(&state, session, result).await
}

/// POST /api/v1/jobs/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
    Path(job_id): Path<String>,
    Json(form): Json<ApplicationForm>,
) -> Response {
    let result = state
        .store
        .mutate(|s| s.apply(session, &job_id, &form))
        .await;
    respond(&state, session, result).await
}

/// POST /api/v1/enhance-description
///
/// Calls the enhancer outside the store lock. Leaving the dashboard cancels the
/// ticket, which drops the outbound request and discards its result.
pub async fn handle_enhance_description(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
    Json(req): Json<EnhanceRequest>,
) -> Response {
    let ticket = match state
        .store
        .mutate(|s| s.begin_enhancement(session, &req.description))
        .await
    {
        Ok(ticket) => ticket,
        Err(e) => return respond::<EnhanceOutcome>(&state, session, Err(e)).await,
    };

    // A dropped request (client hung up) must not leave the busy flag set.
    let _cancel_on_drop = ticket.token.clone().drop_guard();

    let result = tokio::select! {
        _ = ticket.token.cancelled() => {
            info!("Enhancement {} for session {session} cancelled in flight", ticket.id);
            Ok(EnhanceOutcome::Discarded)
        }
        enhanced = state.enhancer.enhance(&req.description) => {
            state
                .store
                .mutate(|s| s.finish_enhancement(session, ticket.id, enhanced))
                .await
        }
    };

    respond(&state, session, result).await
}
