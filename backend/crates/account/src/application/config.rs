//! Application Configuration
//!
//! Configuration for the Account application layer.

use std::fmt;

use platform::cookie::CookieConfig;
use platform::password::HashParams;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Account application configuration
#[derive(Clone)]
pub struct AccountConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Flash message cookie name
    pub flash_cookie_name: String,
    /// HMAC key for session and flash cookies (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Argon2id cost for new password hashes
    pub password_params: HashParams,
}

impl fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("flash_cookie_name", &self.flash_cookie_name)
            .field("session_secret", &"[REDACTED]")
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("password_params", &self.password_params)
            .finish()
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session".to_string(),
            flash_cookie_name: "flash".to_string(),
            session_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_params: HashParams::default(),
        }
    }
}

impl AccountConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, random secret)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Attributes of the session cookie (browser-session lifetime)
    pub fn session_cookie(&self) -> CookieConfig {
        self.cookie(&self.session_cookie_name)
    }

    /// Attributes of the flash cookie
    pub fn flash_cookie(&self) -> CookieConfig {
        self.cookie(&self.flash_cookie_name)
    }

    fn cookie(&self, name: &str) -> CookieConfig {
        CookieConfig {
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            ..CookieConfig::named(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_config() {
        let config = AccountConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_cookie_attributes_follow_config() {
        let config = AccountConfig::development();

        let session = config.session_cookie();
        assert_eq!(session.name, "session");
        assert!(!session.secure);
        assert!(session.http_only);
        assert_eq!(session.max_age_secs, None);

        assert_eq!(config.flash_cookie().name, "flash");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AccountConfig {
            session_secret: [7u8; 32],
            ..AccountConfig::default()
        };

        let debug = format!("{:?}", config);
        assert!(debug.contains("session_secret: \"[REDACTED]\""));
        assert!(!debug.contains("7, 7"));
        assert!(debug.contains("flash_cookie_name: \"flash\""));
    }
}
