//! Handoff DTOs for the authentication collaborator.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::Serialize;

/// Validated sign-in values.
///
/// Only [`crate::state::login_form::LoginForm::validate`] constructs this, so
/// holding one means email and password passed their rules. Values are
/// already trimmed.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    email: String,
    password: String,
    remember: bool,
}

impl LoginCredentials {
    pub(crate) fn new(email: String, password: String, remember: bool) -> Self {
        Self { email, password, remember }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember(&self) -> bool {
        self.remember
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

/// Result reported by an authenticator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthOutcome {
    Accepted,
    Rejected { reason: String },
}
