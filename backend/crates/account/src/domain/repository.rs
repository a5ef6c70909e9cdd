//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AccountResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user; the returned entity carries the generated identity.
    ///
    /// Fails with `AccountError::DuplicateEmail` if the email is taken.
    async fn create(&self, user: NewUser) -> AccountResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AccountResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AccountResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AccountResult<Option<AuthSession>>;

    /// Delete a session. Deleting a missing session is not an error.
    async fn delete(&self, session_id: Uuid) -> AccountResult<()>;
}
