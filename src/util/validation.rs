//! Field rules for the sign-in form.
//!
//! DESIGN
//! ======
//! Each rule is a pure function over a field's current value returning an
//! optional [`FieldError`]. Per-field validators chain rules in order
//! (required before format) and stop at the first failure; the form composes
//! the per-field validators without short-circuiting across fields.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Form fields that carry validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// Every validated field, in display order.
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    /// HTML `name`/`id` attribute for the field's input.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Which rule a field value failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FieldErrorKind {
    /// Required value absent (empty after trimming).
    MissingField,
    /// Value present but fails its syntax rule.
    InvalidFormat,
}

/// A validation failure attached to a single field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind, message: message_for(field, kind).to_owned() }
    }
}

fn message_for(field: Field, kind: FieldErrorKind) -> &'static str {
    match (field, kind) {
        (Field::Email, FieldErrorKind::MissingField) => "Please input your email!",
        (Field::Email, FieldErrorKind::InvalidFormat) => "Please enter a valid email!",
        (Field::Password, FieldErrorKind::MissingField) => "Please input your password!",
        (Field::Password, FieldErrorKind::InvalidFormat) => "Please enter a valid password!",
    }
}

// Local part: dot-separated atoms or a quoted string. Domain: bracketed IPv4
// literal, or dotted labels ending in an alphabetic TLD of two or more chars.
const EMAIL_PATTERN: &str = r#"^(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*|".+")@(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|(?:[a-zA-Z0-9\-\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+\.)+[a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,})$"#;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Whether `value` has `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Fails with [`FieldErrorKind::MissingField`] when `value` is blank.
#[must_use]
pub fn required(field: Field, value: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::new(field, FieldErrorKind::MissingField))
}

/// Fails with [`FieldErrorKind::InvalidFormat`] when `value` is not an email.
#[must_use]
pub fn email_syntax(field: Field, value: &str) -> Option<FieldError> {
    (!is_valid_email(value.trim())).then(|| FieldError::new(field, FieldErrorKind::InvalidFormat))
}

#[must_use]
pub fn validate_email(value: &str) -> Option<FieldError> {
    required(Field::Email, value).or_else(|| email_syntax(Field::Email, value))
}

/// Password only has to be present; no length or complexity rule.
#[must_use]
pub fn validate_password(value: &str) -> Option<FieldError> {
    required(Field::Password, value)
}

/// Run the rule chain for `field` against `value`.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    match field {
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}
