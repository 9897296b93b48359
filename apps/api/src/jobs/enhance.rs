//! AI rewrite of the employer's description draft.
//!
//! The outbound call runs outside the store lock. `begin_enhancement` hands out
//! a ticket whose token is cancelled when the session leaves the employer
//! dashboard; `finish_enhancement` only applies results for a live ticket.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::models::Severity;
use crate::navigation::Route;
use crate::store::{EnhancementTicket, SessionId, Store};

pub const ENHANCE_EMPTY: &str = "Please enter a description to enhance.";
pub const ENHANCE_STARTED: &str = "Enhancing description...";
pub const ENHANCE_SUCCEEDED: &str = "Description enhanced successfully!";
pub const ENHANCE_FAILED: &str = "Error enhancing description. Please try again.";
pub const ENHANCE_BUSY: &str = "A description enhancement is already in progress.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnhanceOutcome {
    Enhanced { description: String },
    /// The session navigated away (or logged out) before the call returned.
    Discarded,
}

impl Store {
    pub fn begin_enhancement(
        &mut self,
        session: SessionId,
        draft: &str,
    ) -> Result<EnhancementTicket, AppError> {
        self.authorize(session, &Route::EmployerDashboard)?;

        if self.session(session)?.route() != &Route::EmployerDashboard {
            return Err(AppError::Conflict(
                "Descriptions can only be enhanced from the employer dashboard".to_string(),
            ));
        }

        if draft.trim().is_empty() {
            self.show_notification(session, ENHANCE_EMPTY, Severity::Error)?;
            return Err(AppError::Validation(ENHANCE_EMPTY.to_string()));
        }

        if self.session(session)?.is_enhancing() {
            return Err(AppError::Conflict(ENHANCE_BUSY.to_string()));
        }

        let ticket = EnhancementTicket {
            id: self.next_ticket_id(),
            token: CancellationToken::new(),
        };
        self.session_mut(session)?.enhancement = Some(ticket.clone());
        self.show_notification(session, ENHANCE_STARTED, Severity::Info)?;
        debug!("Session {session} started enhancement {}", ticket.id);
        Ok(ticket)
    }

    /// Applies the enhancer's result if `ticket_id` is still the session's live ticket.
    /// Every failure collapses into one user-facing message; the cause is logged.
    pub fn finish_enhancement(
        &mut self,
        session: SessionId,
        ticket_id: u64,
        result: Result<String, LlmError>,
    ) -> Result<EnhanceOutcome, AppError> {
        let Ok(state) = self.session_mut(session) else {
            return Ok(EnhanceOutcome::Discarded);
        };

        let live = state
            .enhancement
            .as_ref()
            .is_some_and(|t| t.id == ticket_id && !t.token.is_cancelled());
        if !live {
            debug!("Discarding stale enhancement {ticket_id} for session {session}");
            return Ok(EnhanceOutcome::Discarded);
        }
        state.enhancement = None;

        match result {
            Ok(description) => {
                state.description_draft = Some(description.clone());
                self.show_notification(session, ENHANCE_SUCCEEDED, Severity::Success)?;
                Ok(EnhanceOutcome::Enhanced { description })
            }
            Err(e) => {
                warn!("Description enhancement failed for session {session}: {e}");
                self.show_notification(session, ENHANCE_FAILED, Severity::Error)?;
                Err(AppError::Llm(e.to_string()))
            }
        }
    }
}
