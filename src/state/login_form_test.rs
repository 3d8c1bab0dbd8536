use std::cell::{Cell, RefCell};

use super::*;
use crate::net::auth::LogAuthenticator;
use crate::util::validation::FieldErrorKind;

fn form(email: &str, password: &str, remember: bool) -> LoginForm {
    let mut form = LoginForm::new();
    form.set_email(email);
    form.set_password(password);
    form.set_remember(remember);
    form
}

fn kinds(errors: &[FieldError]) -> Vec<(Field, FieldErrorKind)> {
    errors.iter().map(|e| (e.field, e.kind)).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_is_blank_idle_and_error_free() {
    let form = LoginForm::new();
    assert_eq!(form.email(), "");
    assert_eq!(form.password(), "");
    assert!(!form.remember());
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(form.errors().is_empty());
}

// =============================================================
// validate()
// =============================================================

#[test]
fn validate_empty_email_is_missing() {
    let errors = form("", "x", false).validate().unwrap_err();
    assert_eq!(kinds(&errors), vec![(Field::Email, FieldErrorKind::MissingField)]);
}

#[test]
fn validate_empty_password_is_missing() {
    let errors = form("a@b.com", "", false).validate().unwrap_err();
    assert_eq!(kinds(&errors), vec![(Field::Password, FieldErrorKind::MissingField)]);
}

#[test]
fn validate_email_without_tld_is_invalid_format() {
    let errors = form("a@b", "secret", false).validate().unwrap_err();
    assert_eq!(kinds(&errors), vec![(Field::Email, FieldErrorKind::InvalidFormat)]);
}

#[test]
fn validate_reports_every_invalid_field() {
    let errors = form("a@b", "", false).validate().unwrap_err();
    assert_eq!(
        kinds(&errors),
        vec![(Field::Email, FieldErrorKind::InvalidFormat), (Field::Password, FieldErrorKind::MissingField)]
    );

    let errors = LoginForm::new().validate().unwrap_err();
    assert_eq!(
        kinds(&errors),
        vec![(Field::Email, FieldErrorKind::MissingField), (Field::Password, FieldErrorKind::MissingField)]
    );
}

#[test]
fn validate_password_error_is_independent_of_email_validity() {
    for email in ["", "a@b", "a@b.com"] {
        let errors = form(email, "", false).validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == Field::Password && e.kind == FieldErrorKind::MissingField));
    }
}

#[test]
fn validate_whitespace_only_values_are_missing() {
    let errors = form("   ", "\t ", false).validate().unwrap_err();
    assert_eq!(
        kinds(&errors),
        vec![(Field::Email, FieldErrorKind::MissingField), (Field::Password, FieldErrorKind::MissingField)]
    );
}

#[test]
fn validate_success_returns_trimmed_values_and_remember() {
    let creds = form("  a@b.com ", " secret ", true).validate().unwrap();
    assert_eq!(creds.email(), "a@b.com");
    assert_eq!(creds.password(), "secret");
    assert!(creds.remember());
}

#[test]
fn validate_is_idempotent() {
    let form = form("a@b", "", false);
    let first = form.validate().unwrap_err();
    let second = form.validate().unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn validate_does_not_change_displayed_errors() {
    let form = LoginForm::new();
    assert!(form.validate().is_err());
    assert!(form.errors().is_empty());
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn editing_a_field_updates_only_its_own_error() {
    let mut form = LoginForm::new();
    form.set_email("a@b");
    form.set_password("");
    assert_eq!(form.error(Field::Email).map(|e| e.kind), Some(FieldErrorKind::InvalidFormat));
    assert_eq!(form.error(Field::Password).map(|e| e.kind), Some(FieldErrorKind::MissingField));

    form.set_email("a@b.com");
    assert!(form.error(Field::Email).is_none());
    assert!(form.error(Field::Password).is_some());
}

#[test]
fn editing_email_escalates_from_missing_to_format() {
    let mut form = LoginForm::new();
    form.set_email("");
    assert_eq!(form.error(Field::Email).map(|e| e.kind), Some(FieldErrorKind::MissingField));
    form.set_email("a");
    assert_eq!(form.error(Field::Email).map(|e| e.kind), Some(FieldErrorKind::InvalidFormat));
}

#[test]
fn set_value_keeps_raw_input() {
    let mut form = LoginForm::new();
    form.set_value(Field::Email, " a@b.com ");
    assert_eq!(form.value(Field::Email), " a@b.com ");
    assert!(form.error(Field::Email).is_none());
}

// =============================================================
// try_submit()
// =============================================================

#[test]
fn try_submit_blocks_invalid_input_without_calling_authenticator() {
    let calls = Cell::new(0);
    let auth = |_: LoginCredentials| {
        calls.set(calls.get() + 1);
        AuthOutcome::Accepted
    };

    let mut form = form("", "x", false);
    let errors = form.try_submit(&auth).unwrap_err();
    assert_eq!(kinds(&errors), vec![(Field::Email, FieldErrorKind::MissingField)]);
    assert_eq!(calls.get(), 0);
    assert_eq!(form.status(), FormStatus::Idle);
}

#[test]
fn try_submit_publishes_errors_for_untouched_fields() {
    let mut form = LoginForm::new();
    assert!(form.try_submit(&LogAuthenticator).is_err());
    assert_eq!(form.errors().len(), 2);
    assert_eq!(form.error(Field::Email).map(|e| e.message.as_str()), Some("Please input your email!"));
    assert_eq!(form.error(Field::Password).map(|e| e.message.as_str()), Some("Please input your password!"));
}

#[test]
fn try_submit_hands_exact_credentials_to_authenticator() {
    let seen = RefCell::new(None);
    let auth = |c: LoginCredentials| {
        *seen.borrow_mut() = Some(c);
        AuthOutcome::Accepted
    };

    let mut form = form("a@b.com", "secret", true);
    assert_eq!(form.try_submit(&auth), Ok(AuthOutcome::Accepted));
    assert!(form.errors().is_empty());
    assert_eq!(form.status(), FormStatus::Idle);

    let creds = seen.into_inner().unwrap();
    assert_eq!((creds.email(), creds.password(), creds.remember()), ("a@b.com", "secret", true));
}

#[test]
fn try_submit_clears_stale_errors_after_fix() {
    let mut form = LoginForm::new();
    assert!(form.try_submit(&LogAuthenticator).is_err());

    form.set_email("a@b.com");
    form.set_password("secret");
    assert_eq!(form.try_submit(&LogAuthenticator), Ok(AuthOutcome::Accepted));
    assert!(form.errors().is_empty());
}

#[test]
fn try_submit_passes_rejections_through() {
    let auth = |_: LoginCredentials| AuthOutcome::Rejected { reason: "locked".to_owned() };
    let mut form = form("a@b.com", "secret", false);
    assert_eq!(form.try_submit(&auth), Ok(AuthOutcome::Rejected { reason: "locked".to_owned() }));
    assert_eq!(form.status(), FormStatus::Idle);
}

#[test]
fn submit_accepts_dyn_authenticator() {
    let creds = form("a@b.com", "secret", false).validate().unwrap();
    let auth: &dyn Authenticator = &LogAuthenticator;
    assert_eq!(submit(auth, creds), AuthOutcome::Accepted);
}
