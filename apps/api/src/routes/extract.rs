use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::SessionId;

pub const SESSION_HEADER: &str = "x-session-id";

/// The client session addressed by the `x-session-id` header.
/// Only the header is checked here; the store decides whether the session exists.
#[derive(Debug, Clone, Copy)]
pub struct ClientSessionId(pub SessionId);

#[async_trait]
impl<S> FromRequestParts<S> for ClientSessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::UnknownSession)?;

        let id = Uuid::parse_str(raw.trim()).map_err(|_| AppError::UnknownSession)?;
        Ok(ClientSessionId(id))
    }
}
