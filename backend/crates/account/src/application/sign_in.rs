//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::check_session::CurrentSession;
use crate::application::config::AccountConfig;
use crate::application::outcome::{Outcome, Rejection, Route, View};
use crate::application::session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::AccountResult;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub outcome: Outcome,
    /// Signed session token for the cookie, set only when a session was created
    pub session_token: Option<String>,
}

impl SignInOutput {
    fn without_session(outcome: Outcome) -> Self {
        Self {
            outcome,
            session_token: None,
        }
    }
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// GET /signin
    pub fn show_form(&self, current: &CurrentSession) -> Outcome {
        match &current.user {
            Some(user) => Outcome::already_signed_in(user.display_name.clone()),
            None => Outcome::render(View::SignIn),
        }
    }

    /// POST /signin
    pub async fn execute(
        &self,
        current: &CurrentSession,
        input: SignInInput,
    ) -> AccountResult<SignInOutput> {
        if let Some(user) = &current.user {
            return Ok(SignInOutput::without_session(Outcome::already_signed_in(
                user.display_name.clone(),
            )));
        }

        let email = Email::new(input.email);
        let password = RawPassword::new(input.password);

        // Exact (email, password) match: email lookup, then hash verification
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .filter(|user| user.password_hash.verify(&password));

        let Some(user) = user else {
            tracing::warn!("Invalid login attempt");
            return Ok(SignInOutput::without_session(Outcome::Rejected {
                reason: Rejection::InvalidCredentials,
                retry: Route::SignIn,
            }));
        };

        // Create session
        let session = AuthSession::new(user.user_id);
        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            outcome: Outcome::redirect(Route::SecretPage),
            session_token: Some(session_token),
        })
    }
}
