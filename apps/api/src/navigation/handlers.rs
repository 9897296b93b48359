use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::navigation::views::{render, AppView};
use crate::navigation::Route;
use crate::routes::extract::ClientSessionId;
use crate::routes::respond::respond;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OpenSessionResponse {
    pub session_id: uuid::Uuid,
    /// How long a notification stays up, so clients can animate it out.
    pub notification_ttl_ms: u128,
    pub view: AppView,
}

/// POST /api/v1/sessions
pub async fn handle_open_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<OpenSessionResponse>), AppError> {
    let session_id = state.store.mutate(|s| s.open_session()).await;
    let view = state.store.read(|s| render(s, session_id, None)).await?;

    Ok((
        StatusCode::CREATED,
        Json(OpenSessionResponse {
            session_id,
            notification_ttl_ms: state.config.notification_ttl.as_millis(),
            view,
        }),
    ))
}

/// DELETE /api/v1/sessions
pub async fn handle_close_session(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
) -> Result<StatusCode, AppError> {
    if state.store.mutate(|s| s.close_session(session)).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::UnknownSession)
    }
}

/// GET /api/v1/view?q=
pub async fn handle_get_view(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
    Query(params): Query<ViewQuery>,
) -> Result<Json<AppView>, AppError> {
    let view = state
        .store
        .mutate(|s| {
            s.touch(session)?;
            render(s, session, params.q.as_deref())
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
    Json(target): Json<Route>,
) -> Response {
    let result = state.store.mutate(|s| s.navigate(session, target)).await;
    respond(&state, session, result).await
}

/// DELETE /api/v1/notification
pub async fn handle_dismiss_notification(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
) -> Response {
    let result = state
        .store
        .mutate(|s| s.dismiss_notification(session))
        .await;
    respond(&state, session, result).await
}
