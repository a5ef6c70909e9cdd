//! Account Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::infra::sqlite::SqliteAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::resolve_session;

/// Create the Account router with SQLite repository
pub fn account_router(repo: SqliteAccountRepository, config: AccountConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create a generic Account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::welcome::<R>).post(handlers::welcome::<R>))
        .route(
            "/signup",
            get(handlers::sign_up_form::<R>).post(handlers::sign_up::<R>),
        )
        .route(
            "/signin",
            get(handlers::sign_in_form::<R>).post(handlers::sign_in::<R>),
        )
        .route("/secret_page", get(handlers::secret_page::<R>))
        .route("/logout", get(handlers::logout::<R>))
        .route("/thankyou", get(handlers::thank_you::<R>))
        .route_layer(from_fn_with_state(state.clone(), resolve_session::<R>))
        .with_state(state)
}
