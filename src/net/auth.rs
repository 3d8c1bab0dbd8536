//! Authentication collaborator interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginForm::try_submit` calls [`Authenticator::authenticate`] only after
//! every field rule passed. A real network client can implement the trait
//! without touching the form.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::{AuthOutcome, LoginCredentials};

/// Receives validated credentials and reports an outcome.
pub trait Authenticator {
    fn authenticate(&self, credentials: LoginCredentials) -> AuthOutcome;
}

/// Records the submitted values and accepts them. Never sends anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAuthenticator;

impl Authenticator for LogAuthenticator {
    fn authenticate(&self, credentials: LoginCredentials) -> AuthOutcome {
        log::info!(
            "sign-in submitted: email={} remember={} password_len={}",
            credentials.email(),
            credentials.remember(),
            credentials.password().chars().count()
        );
        AuthOutcome::Accepted
    }
}

impl<F> Authenticator for F
where
    F: Fn(LoginCredentials) -> AuthOutcome,
{
    fn authenticate(&self, credentials: LoginCredentials) -> AuthOutcome {
        self(credentials)
    }
}
