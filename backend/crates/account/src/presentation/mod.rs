//! Presentation Layer
//!
//! HTTP handlers, forms, flash cookie, views, router, and middleware.

pub mod dto;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use handlers::AccountAppState;
pub use middleware::resolve_session;
pub use router::{account_router, account_router_generic};
