//! Sign Out Use Case
//!
//! Invalidates the current session. Idempotent.

use std::sync::Arc;

use crate::application::check_session::CurrentSession;
use crate::application::outcome::{Flash, Outcome, View, messages};
use crate::domain::repository::AuthSessionRepository;
use crate::error::AccountResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Sign out from current session
    ///
    /// The caller clears the session cookie regardless of what is found here.
    pub async fn execute(&self, current: &CurrentSession) -> AccountResult<Outcome> {
        if let Some(session_id) = current.session_id {
            self.session_repo.delete(session_id).await?;
            tracing::info!(session_id = %session_id, "User signed out");
        }

        Ok(Outcome::Render {
            view: View::SignIn,
            flash: Some(Flash::success(messages::SIGNED_OUT)),
        })
    }
}
