//! User Entity
//!
//! An account record. Created once on signup, never updated or deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};

/// Account that has not been inserted yet (no identity assigned)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    /// Unique across all users
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        first_name: String,
        last_name: String,
        email: Email,
        password_hash: UserPassword,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Attach the identity the store generated on insert
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

/// Persisted user entity
#[derive(Debug, Clone)]
pub struct User {
    /// Generated by the store on insert
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name for display on the gated page
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => self.email.to_string(),
        }
    }
}
