//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and flow outcomes
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTTP handlers, forms, views, router
//!
//! ## Features
//! - Signup with first/last name, email and confirmed password
//! - Signin by exact email + password
//! - A secret page gated on the session
//! - Logout, idempotent
//!
//! ## Session Model
//! - Two states per request: anonymous or authenticated
//! - Server-side session rows, referenced by an HMAC-signed cookie
//! - No expiry; a session ends on logout
//! - Passwords hashed with Argon2id

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::sqlite::SqliteAccountRepository;
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
