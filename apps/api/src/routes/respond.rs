use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::navigation::views::{render, AppView};
use crate::state::AppState;
use crate::store::SessionId;

/// Body of every successful state-changing request: the action's result plus
/// the re-rendered page.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub view: AppView,
}

/// Re-renders the session's page after a transition and folds it into the response.
/// Failed transitions keep their status code but still carry the view, so the
/// client can show the page and its notification.
pub async fn respond<T: Serialize>(
    state: &AppState,
    session: SessionId,
    result: Result<T, AppError>,
) -> Response {
    let view = match state.store.read(|s| render(s, session, None)).await {
        Ok(view) => view,
        Err(e) => return e.into_response(),
    };

    match result {
        Ok(data) => Json(ActionResponse {
            data: Some(data),
            view,
        })
        .into_response(),
        Err(e) => {
            let (status, mut body) = e.status_and_body();
            body["view"] = serde_json::to_value(&view).unwrap_or(Value::Null);
            (status, Json(body)).into_response()
        }
    }
}
