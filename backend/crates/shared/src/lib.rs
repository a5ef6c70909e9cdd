//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - the unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - store-assigned typed identifiers ([`id::Id`])
//!
//! Storage and HTTP integrations are feature-gated (`sqlx`, `axum`) so that
//! domain code can depend on the kernel without pulling in either stack.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
