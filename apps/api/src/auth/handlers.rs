use axum::{extract::State, response::Response, Json};
use serde::{Deserialize, Serialize};

use crate::models::{Role, User};
use crate::routes::extract::ClientSessionId;
use crate::routes::respond::respond;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        RegisteredUser {
            role: user.role(),
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
    Json(req): Json<LoginRequest>,
) -> Response {
    let result = state
        .store
        .mutate(|s| s.login(session, &req.email, &req.password))
        .await;
    respond(&state, session, result).await
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let result = state
        .store
        .mutate(|s| s.register(session, &req.email, &req.password, req.role))
        .await
        .map(RegisteredUser::from);
    respond(&state, session, result).await
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    ClientSessionId(session): ClientSessionId,
) -> Response {
    let result = state.store.mutate(|s| s.logout(session)).await;
    respond(&state, session, result).await
}
