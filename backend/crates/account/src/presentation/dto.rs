//! Form DTOs (Data Transfer Objects)
//!
//! `application/x-www-form-urlencoded` bodies. Every field is required;
//! a missing one fails extraction before any use case runs.

use serde::Deserialize;

use crate::application::{SignInInput, SignUpInput};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up form
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<SignUpForm> for SignUpInput {
    fn from(form: SignUpForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password,
            confirm_password: form.confirm_password,
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in form
#[derive(Debug, Clone, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl From<SignInForm> for SignInInput {
    fn from(form: SignInForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}
