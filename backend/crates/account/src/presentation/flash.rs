//! Flash Cookie
//!
//! Pending flashes travel across a redirect in a signed cookie:
//! `<base64url(json)>.<signature>`. The next rendered page consumes them.

use axum::http::HeaderMap;

use crate::application::config::AccountConfig;
use crate::application::outcome::Flash;
use crate::error::{AccountError, AccountResult};

/// Most flashes one cookie carries
pub const MAX_PENDING: usize = 3;

/// Queue `flash` behind `pending`
///
/// A repeated message moves to the back instead of being added twice, and
/// only the newest [`MAX_PENDING`] entries are kept, so the cookie stays
/// bounded when redirects are not followed.
pub fn enqueue(mut pending: Vec<Flash>, flash: Option<Flash>) -> Vec<Flash> {
    if let Some(flash) = flash {
        pending.retain(|queued| *queued != flash);
        pending.push(flash);
    }

    let excess = pending.len().saturating_sub(MAX_PENDING);
    pending.drain(..excess);
    pending
}

/// Serialize and sign pending flashes
pub fn encode(secret: &[u8; 32], flashes: &[Flash]) -> AccountResult<String> {
    let json = serde_json::to_vec(flashes)
        .map_err(|e| AccountError::Internal(format!("Flash serialization failed: {}", e)))?;

    Ok(platform::crypto::sign(
        secret,
        &platform::crypto::to_base64url(&json),
    ))
}

/// Verify and deserialize a flash cookie value. Anything tampered is dropped.
pub fn decode(secret: &[u8; 32], value: &str) -> Vec<Flash> {
    let payload = match platform::crypto::verify(secret, value) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(error = %e, "Dropping flash cookie");
            return Vec::new();
        }
    };

    platform::crypto::from_base64url(payload)
        .ok()
        .and_then(|json| serde_json::from_slice(&json).ok())
        .unwrap_or_default()
}

/// Flashes queued by an earlier response, if the request carries any
pub fn pending(headers: &HeaderMap, config: &AccountConfig) -> Option<Vec<Flash>> {
    platform::cookie::extract_cookie(headers, &config.flash_cookie_name)
        .map(|value| decode(&config.session_secret, &value))
}
