//! User Password Value Object
//!
//! Domain wrappers around `platform::password`.
//! `RawPassword` is what came in on the form, `UserPassword` is what is stored.

use platform::password::{ClearTextPassword, HashParams, HashedPassword};
use std::fmt;

use crate::error::{AccountError, AccountResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input. Zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    /// Exact, case-sensitive comparison (password vs. confirmation)
    pub fn matches(&self, other: &RawPassword) -> bool {
        self.0.matches(&other.0)
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword, params: &HashParams) -> AccountResult<Self> {
        let hashed = raw.0.hash(params)?;
        Ok(Self(hashed))
    }

    /// Restore from the database column
    pub fn from_db(phc_string: impl Into<String>) -> AccountResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AccountError::Internal("Invalid password hash in database".to_string()))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a submitted password against this hash
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(&raw.0)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
