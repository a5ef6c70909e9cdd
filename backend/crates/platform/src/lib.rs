//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cookie header building and extraction
//! - HMAC-SHA256 signing of opaque values (session and flash cookies)
//! - Password hashing (Argon2id)

pub mod cookie;
pub mod crypto;
pub mod password;
