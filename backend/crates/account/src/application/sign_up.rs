//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::check_session::CurrentSession;
use crate::application::config::AccountConfig;
use crate::application::outcome::{Outcome, Rejection, Route, View};
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountError, AccountResult};

/// Sign up input
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    /// GET /signup
    pub fn show_form(&self, current: &CurrentSession) -> Outcome {
        match &current.user {
            Some(user) => Outcome::already_signed_in(user.display_name.clone()),
            None => Outcome::render(View::SignUp),
        }
    }

    /// POST /signup
    pub async fn execute(
        &self,
        current: &CurrentSession,
        input: SignUpInput,
    ) -> AccountResult<Outcome> {
        if let Some(user) = &current.user {
            return Ok(Outcome::already_signed_in(user.display_name.clone()));
        }

        let password = RawPassword::new(input.password);
        let confirm_password = RawPassword::new(input.confirm_password);

        if !password.matches(&confirm_password) {
            return Ok(Self::rejected(Rejection::PasswordMismatch));
        }

        let email = Email::new(input.email);

        // Check if email is taken
        if self.user_repo.exists_by_email(&email).await? {
            tracing::debug!("Signup rejected: email already registered");
            return Ok(Self::rejected(Rejection::EmailTaken));
        }

        let password_hash = UserPassword::from_raw(&password, &self.config.password_params)?;
        let new_user = NewUser::new(input.first_name, input.last_name, email, password_hash);

        // The UNIQUE constraint still guards a registration that raced the check above
        let user = match self.user_repo.create(new_user).await {
            Ok(user) => user,
            Err(AccountError::DuplicateEmail) => {
                return Ok(Self::rejected(Rejection::EmailTaken));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = %user.user_id, "User signed up");

        Ok(Outcome::redirect(Route::ThankYou))
    }

    fn rejected(reason: Rejection) -> Outcome {
        Outcome::Rejected {
            reason,
            retry: Route::SignUp,
        }
    }
}
