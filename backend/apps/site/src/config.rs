//! Site Configuration
//!
//! Read from the environment (after `.env` is loaded).

use std::env;
use std::net::SocketAddr;

use account::AccountConfig;
use anyhow::{Context, bail};

const DEFAULT_DATABASE_URL: &str = "sqlite://my_db_data.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Process-level configuration
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub account: AccountConfig,
}

impl SiteConfig {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Load from an arbitrary key lookup
    ///
    /// `development` allows a random session secret and insecure cookies by default.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address")?;

        let mut account = match lookup("SESSION_SECRET") {
            Some(secret_b64) => AccountConfig {
                session_secret: decode_secret(&secret_b64)?,
                ..AccountConfig::default()
            },
            None if development => {
                tracing::warn!("SESSION_SECRET not set, using a random development secret");
                AccountConfig::with_random_secret()
            }
            None => bail!("SESSION_SECRET must be set in production"),
        };

        account.cookie_secure = match lookup("COOKIE_SECURE") {
            Some(value) => value
                .parse::<bool>()
                .context("COOKIE_SECURE must be true or false")?,
            None => !development,
        };

        Ok(Self {
            database_url,
            bind_addr,
            account,
        })
    }
}

/// Decode a base64 (standard alphabet) 32-byte secret
fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;

    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("SESSION_SECRET must be 32 bytes, got {}", bytes.len()))
}
