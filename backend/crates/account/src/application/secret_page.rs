//! Gated Page
//!
//! The only real state check: authenticated sessions see the page,
//! anonymous ones are sent to sign in.

use crate::application::check_session::CurrentSession;
use crate::application::outcome::{Flash, Outcome, Route, View, messages};

/// GET /secret_page
pub fn secret_page(current: &CurrentSession) -> Outcome {
    match &current.user {
        Some(user) => Outcome::render(View::SecretPage {
            display_name: user.display_name.clone(),
        }),
        None => Outcome::RedirectTo {
            route: Route::SignIn,
            flash: Some(Flash::error(messages::SIGN_IN_REQUIRED)),
        },
    }
}
