//! HTTP Handlers

use axum::Extension;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{
    CurrentSession, Outcome, SignInUseCase, SignOutUseCase, SignUpUseCase, View, secret_page as gate,
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{SignInForm, SignUpForm};
use crate::presentation::{flash, views};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Welcome / Thank You
// ============================================================================

/// GET, POST /
pub async fn welcome<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    respond(&state.config, &headers, Outcome::render(View::Welcome), Vec::new())
}

/// GET /thankyou
pub async fn thank_you<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    respond(&state.config, &headers, Outcome::render(View::ThankYou), Vec::new())
}

// ============================================================================
// Sign Up
// ============================================================================

/// GET /signup
pub async fn sign_up_form<R>(
    State(state): State<AccountAppState<R>>,
    Extension(current): Extension<CurrentSession>,
    headers: HeaderMap,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    respond(&state.config, &headers, use_case.show_form(&current), Vec::new())
}

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AccountAppState<R>>,
    Extension(current): Extension<CurrentSession>,
    headers: HeaderMap,
    Form(form): Form<SignUpForm>,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    let outcome = use_case.execute(&current, form.into()).await?;

    respond(&state.config, &headers, outcome, Vec::new())
}

// ============================================================================
// Sign In
// ============================================================================

/// GET /signin
pub async fn sign_in_form<R>(
    State(state): State<AccountAppState<R>>,
    Extension(current): Extension<CurrentSession>,
    headers: HeaderMap,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    respond(&state.config, &headers, use_case.show_form(&current), Vec::new())
}

/// POST /signin
pub async fn sign_in<R>(
    State(state): State<AccountAppState<R>>,
    Extension(current): Extension<CurrentSession>,
    headers: HeaderMap,
    Form(form): Form<SignInForm>,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case.execute(&current, form.into()).await?;

    let mut cookies = Vec::new();
    if let Some(token) = output.session_token {
        let cookie = state
            .config
            .session_cookie()
            .set_cookie_header(&token)
            .ok_or_else(|| AccountError::Internal("Unencodable session cookie".to_string()))?;
        cookies.push(cookie);
    }

    respond(&state.config, &headers, output.outcome, cookies)
}

// ============================================================================
// Secret Page
// ============================================================================

/// GET /secret_page
pub async fn secret_page<R>(
    State(state): State<AccountAppState<R>>,
    Extension(current): Extension<CurrentSession>,
    headers: HeaderMap,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    respond(&state.config, &headers, gate(&current), Vec::new())
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
pub async fn logout<R>(
    State(state): State<AccountAppState<R>>,
    Extension(current): Extension<CurrentSession>,
    headers: HeaderMap,
) -> AccountResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.repo.clone());
    let outcome = use_case.execute(&current).await?;

    // Always clear the cookie, even if no session row was found
    let cookies = state
        .config
        .session_cookie()
        .delete_cookie_header()
        .into_iter()
        .collect();

    respond(&state.config, &headers, outcome, cookies)
}

// ============================================================================
// Outcome -> Response
// ============================================================================

/// Turn a flow outcome into a page or a 303 redirect
///
/// Rendering consumes the flashes pending in the request's flash cookie;
/// redirecting carries them, plus any new one, to the next page.
fn respond(
    config: &AccountConfig,
    headers: &HeaderMap,
    outcome: Outcome,
    cookies: Vec<HeaderValue>,
) -> AccountResult<Response> {
    let pending = flash::pending(headers, config);
    let had_flash_cookie = pending.is_some();

    let flashes = flash::enqueue(pending.unwrap_or_default(), outcome.flash());

    let flash_cookie = config.flash_cookie();

    let (mut response, flash_header) = match outcome {
        Outcome::Render { view, .. } => {
            let response = Html(views::render(&view, &flashes)).into_response();
            let header = had_flash_cookie
                .then(|| flash_cookie.delete_cookie_header())
                .flatten();
            (response, header)
        }
        Outcome::Rejected { retry: route, .. } | Outcome::RedirectTo { route, .. } => {
            let response = Redirect::to(&route.to_string()).into_response();
            let header = if flashes.is_empty() {
                None
            } else {
                let value = flash::encode(&config.session_secret, &flashes)?;
                Some(
                    flash_cookie
                        .set_cookie_header(&value)
                        .ok_or_else(|| AccountError::Internal("Unencodable flash cookie".to_string()))?,
                )
            };
            (response, header)
        }
    };

    let response_headers = response.headers_mut();
    for cookie in cookies.into_iter().chain(flash_header) {
        response_headers.append(header::SET_COOKIE, cookie);
    }

    Ok(response)
}
