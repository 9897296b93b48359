pub mod extract;
pub mod health;
pub mod respond;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::jobs::handlers as jobs;
use crate::navigation::handlers as navigation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions & page state
        .route(
            "/api/v1/sessions",
            post(navigation::handle_open_session).delete(navigation::handle_close_session),
        )
        .route("/api/v1/view", get(navigation::handle_get_view))
        .route("/api/v1/navigate", post(navigation::handle_navigate))
        .route(
            "/api/v1/notification",
            delete(navigation::handle_dismiss_notification),
        )
        // Accounts
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        // Job board
        .route(
            "/api/v1/jobs",
            get(jobs::handle_search_jobs).post(jobs::handle_post_job),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/jobs/:id/apply", post(jobs::handle_apply))
        .route(
            "/api/v1/enhance-description",
            post(jobs::handle_enhance_description),
        )
        .with_state(state)
}
