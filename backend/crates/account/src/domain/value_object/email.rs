//! Email Value Object
//!
//! The address exactly as the user submitted it. Lookups are exact and
//! case-sensitive, so no trimming or lowercasing happens here, and no
//! syntax check either: an empty string is a valid (if odd) email.

use std::fmt;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
