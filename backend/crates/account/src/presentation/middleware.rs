//! Session Middleware
//!
//! Resolves the session cookie once per request and stores the result as a
//! request-scoped [`CurrentSession`] extension for handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::{CheckSessionUseCase, CurrentSession};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::AccountError;
use crate::presentation::handlers::AccountAppState;

/// Middleware that resolves the session but doesn't require it
///
/// Forged or unknown cookies resolve to an anonymous session; only storage
/// failures abort the request.
pub async fn resolve_session<R>(
    State(state): State<AccountAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AccountError>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let current: CurrentSession = use_case.execute(token.as_deref()).await?;

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}
