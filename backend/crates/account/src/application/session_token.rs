//! Session Token
//!
//! Cookie value `<session_id>.<signature>`, signed with the session secret.

use uuid::Uuid;

use crate::error::{AccountError, AccountResult};

/// Generate signed session token
pub fn issue(secret: &[u8; 32], session_id: Uuid) -> String {
    platform::crypto::sign(secret, &session_id.to_string())
}

/// Parse and verify session token
pub fn parse(secret: &[u8; 32], token: &str) -> AccountResult<Uuid> {
    let session_id = platform::crypto::verify(secret, token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected session token");
        AccountError::SessionInvalid
    })?;

    session_id
        .parse()
        .map_err(|_| AccountError::SessionInvalid)
}
