//! Check Session Use Case
//!
//! Resolves the session cookie into the request-scoped [`CurrentSession`].

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::AccountConfig;
use crate::application::session_token;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AccountError, AccountResult};

/// Signed-in user as seen by handlers (no credentials)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInUser {
    pub user_id: UserId,
    pub display_name: String,
}

/// Session state of the current request
///
/// Two states: anonymous (`user == None`) and authenticated.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession {
    /// Verified session row id, if the cookie resolved to one
    pub session_id: Option<Uuid>,
    pub user: Option<SignedInUser>,
}

impl CurrentSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Check session use case
pub struct CheckSessionUseCase<S, U>
where
    S: AuthSessionRepository,
    U: UserRepository,
{
    session_repo: Arc<S>,
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<S, U> CheckSessionUseCase<S, U>
where
    S: AuthSessionRepository,
    U: UserRepository,
{
    pub fn new(session_repo: Arc<S>, user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self {
            session_repo,
            user_repo,
            config,
        }
    }

    /// Resolve a session token
    ///
    /// A missing, forged or unknown token yields an anonymous session;
    /// only storage failures are errors.
    pub async fn execute(&self, session_token: Option<&str>) -> AccountResult<CurrentSession> {
        let Some(token) = session_token else {
            return Ok(CurrentSession::anonymous());
        };

        let session_id = match session_token::parse(&self.config.session_secret, token) {
            Ok(id) => id,
            Err(AccountError::SessionInvalid) => return Ok(CurrentSession::anonymous()),
            Err(e) => return Err(e),
        };

        let Some(session) = self.session_repo.find_by_id(session_id).await? else {
            tracing::debug!(session_id = %session_id, "Session cookie without session row");
            return Ok(CurrentSession::anonymous());
        };

        // Weak reference: resolve the user by lookup
        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .map(|user| SignedInUser {
                user_id: user.user_id,
                display_name: user.display_name(),
            });

        if user.is_none() {
            tracing::warn!(
                session_id = %session_id,
                user_id = %session.user_id,
                "Session refers to a missing user"
            );
        }

        Ok(CurrentSession {
            session_id: Some(session_id),
            user,
        })
    }
}
