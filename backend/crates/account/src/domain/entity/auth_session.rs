//! Auth Session Entity
//!
//! Server-side record behind the session cookie. It holds the signed-in
//! user's identity by value; the user row is resolved by lookup.
//! No expiry: a session lives until logout.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4), the payload of the signed cookie
    pub session_id: Uuid,
    /// Signed-in user
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(user_id: UserId) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_binds_user() {
        let session = AuthSession::new(UserId::from_i64(9));
        assert_eq!(session.user_id, UserId::from_i64(9));
        assert_eq!(session.session_id.get_version_num(), 4);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = AuthSession::new(UserId::from_i64(1));
        let b = AuthSession::new(UserId::from_i64(1));
        assert_ne!(a.session_id, b.session_id);
    }
}
