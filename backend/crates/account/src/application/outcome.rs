//! Flow Outcomes
//!
//! What a use case decided, independent of how it is rendered.
//! The presentation layer turns an [`Outcome`] into a page or a redirect.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Addressable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Route {
    #[display("/")]
    Welcome,
    #[display("/signup")]
    SignUp,
    #[display("/signin")]
    SignIn,
    #[display("/secret_page")]
    SecretPage,
    #[display("/logout")]
    Logout,
    #[display("/thankyou")]
    ThankYou,
}

/// Renderable pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Welcome,
    SignUp,
    SignIn,
    /// Gated page, greeting the signed-in user
    SecretPage { display_name: String },
    ThankYou,
}

/// Flash severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    #[display("error")]
    Error,
    #[display("success")]
    Success,
}

/// One-shot message shown on the next rendered view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }
}

/// Messages shown to users
pub mod messages {
    pub const ALREADY_SIGNED_IN: &str = "Already Signed In. Please Log out First.";
    pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
    pub const EMAIL_TAKEN: &str = "Email address already in use. Please use a different email.";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
    pub const SIGN_IN_REQUIRED: &str = "Secret Page is only accessible by logged in users";
    pub const SIGNED_OUT: &str = "You Have Successfully Logged out!";
}

/// Why a submitted form was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    PasswordMismatch,
    EmailTaken,
    InvalidCredentials,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::PasswordMismatch => messages::PASSWORD_MISMATCH,
            Rejection::EmailTaken => messages::EMAIL_TAKEN,
            Rejection::InvalidCredentials => messages::INVALID_CREDENTIALS,
        }
    }
}

/// Result of a flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Render a view now, optionally adding a flash to the pending ones
    Render { view: View, flash: Option<Flash> },
    /// The form was turned down; send the user back to `retry`
    Rejected { reason: Rejection, retry: Route },
    /// Continue at another route
    RedirectTo { route: Route, flash: Option<Flash> },
}

impl Outcome {
    pub fn render(view: View) -> Self {
        Outcome::Render { view, flash: None }
    }

    pub fn redirect(route: Route) -> Self {
        Outcome::RedirectTo { route, flash: None }
    }

    /// Signup/signin while a session is active: show the gated page instead
    pub fn already_signed_in(display_name: String) -> Self {
        Outcome::Render {
            view: View::SecretPage { display_name },
            flash: Some(Flash::error(messages::ALREADY_SIGNED_IN)),
        }
    }

    /// Flash the presentation layer should queue or show for this outcome
    pub fn flash(&self) -> Option<Flash> {
        match self {
            Outcome::Render { flash, .. } | Outcome::RedirectTo { flash, .. } => flash.clone(),
            Outcome::Rejected { reason, .. } => Some(Flash::error(reason.message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Welcome.to_string(), "/");
        assert_eq!(Route::SecretPage.to_string(), "/secret_page");
        assert_eq!(Route::ThankYou.to_string(), "/thankyou");
    }

    #[test]
    fn test_rejection_flash() {
        let outcome = Outcome::Rejected {
            reason: Rejection::PasswordMismatch,
            retry: Route::SignUp,
        };
        assert_eq!(outcome.flash(), Some(Flash::error("Passwords do not match.")));
    }

    #[test]
    fn test_already_signed_in() {
        let outcome = Outcome::already_signed_in("John Doe".to_string());
        match outcome {
            Outcome::Render { view, flash } => {
                assert_eq!(
                    view,
                    View::SecretPage {
                        display_name: "John Doe".to_string()
                    }
                );
                assert_eq!(flash, Some(Flash::error(messages::ALREADY_SIGNED_IN)));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_flash_level_serde() {
        let json = serde_json::to_string(&Flash::success("ok")).unwrap();
        assert_eq!(json, r#"{"level":"success","message":"ok"}"#);
    }
}
