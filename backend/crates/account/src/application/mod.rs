//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod outcome;
pub mod secret_page;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use check_session::{CheckSessionUseCase, CurrentSession, SignedInUser};
pub use config::AccountConfig;
pub use outcome::{Flash, FlashLevel, Outcome, Rejection, Route, View};
pub use secret_page::secret_page;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
