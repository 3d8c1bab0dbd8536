//! Sign-in form state: field values, per-field errors, and submission.
//!
//! DESIGN
//! ======
//! `LoginForm` is an explicit value the page holds in a signal. Edits re-run
//! only the edited field's rule, so an error clears as soon as that field
//! satisfies it. A submit attempt validates every field, replaces the whole
//! error set, and only then hands credentials to the authenticator.
//!
//! Both states are synchronous: `Submitting` lasts for the duration of
//! [`LoginForm::try_submit`] and the form is back to `Idle` when it returns.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::net::auth::Authenticator;
use crate::net::types::{AuthOutcome, LoginCredentials};
use crate::util::validation::{Field, FieldError, validate_email, validate_field, validate_password};

/// Observable submission state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    remember: bool,
    email_error: Option<FieldError>,
    password_error: Option<FieldError>,
    status: FormStatus,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Raw (untrimmed) value currently held by `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.set_value(Field::Email, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.set_value(Field::Password, value);
    }

    pub fn set_remember(&mut self, remember: bool) {
        self.remember = remember;
    }

    /// Store a new value for `field` and re-run that field's rule.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let error = validate_field(field, &value);
        match field {
            Field::Email => {
                self.email = value;
                self.email_error = error;
            }
            Field::Password => {
                self.password = value;
                self.password_error = error;
            }
        }
    }

    /// Error currently displayed for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Email => self.email_error.as_ref(),
            Field::Password => self.password_error.as_ref(),
        }
    }

    /// Currently displayed errors in field order.
    pub fn errors(&self) -> Vec<FieldError> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).cloned())
            .collect()
    }

    /// Run every field rule against the current values.
    ///
    /// Each field reports at most one error (required before format); errors
    /// from different fields are all reported, email first. Does not touch
    /// the displayed error state.
    ///
    /// # Errors
    ///
    /// Returns every failing field's error when any rule fails.
    pub fn validate(&self) -> Result<LoginCredentials, Vec<FieldError>> {
        let errors: Vec<FieldError> = [validate_email(&self.email), validate_password(&self.password)]
            .into_iter()
            .flatten()
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginCredentials::new(
            self.email.trim().to_owned(),
            self.password.trim().to_owned(),
            self.remember,
        ))
    }

    /// Submit-click path: validate, publish the error set, then hand off.
    ///
    /// The authenticator is never called when validation fails.
    ///
    /// # Errors
    ///
    /// Returns the field errors that blocked submission.
    pub fn try_submit<A>(&mut self, authenticator: &A) -> Result<AuthOutcome, Vec<FieldError>>
    where
        A: Authenticator + ?Sized,
    {
        self.status = FormStatus::Submitting;
        let validated = self.validate();
        let (email_error, password_error) = match &validated {
            Ok(_) => (None, None),
            Err(errors) => (find_error(errors, Field::Email), find_error(errors, Field::Password)),
        };
        self.email_error = email_error;
        self.password_error = password_error;

        let result = validated.map(|credentials| submit(authenticator, credentials));
        self.status = FormStatus::Idle;
        result
    }
}

/// Hand validated credentials to `authenticator`.
///
/// Taking [`LoginCredentials`] by value means callers can only reach this
/// with values that went through [`LoginForm::validate`].
pub fn submit<A>(authenticator: &A, credentials: LoginCredentials) -> AuthOutcome
where
    A: Authenticator + ?Sized,
{
    authenticator.authenticate(credentials)
}

fn find_error(errors: &[FieldError], field: Field) -> Option<FieldError> {
    errors.iter().find(|e| e.field == field).cloned()
}
