//! Field rules for the login form.
//!
//! DESIGN
//! ======
//! Each rule is a named predicate returning `Ok(())` or the `FieldError` to
//! display. Rules are composed into one ordered pipeline per field; a field
//! reports the first rule it fails, independently of the other field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::util::credentials::Credentials;

/// Minimum password length, counted in UTF-16 code units like a browser
/// `input.value.length`.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Symbols a password may (and must at least once) contain.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Inline message attached to a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Required")]
    Required,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("At least {min} characters")]
    TooShort { min: usize },
    #[error("Password must contain at least one uppercase letter, one number, and one special character")]
    MissingCharacterClasses,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Login form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// DOM `name`/`id` of the input.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Per-field error slots. An empty set means the form is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }
}

/// A single named rule.
pub type Rule = fn(&str) -> Result<(), FieldError>;

/// Email pipeline, in evaluation order.
pub const EMAIL_RULES: &[Rule] = &[required, email_format];

/// Password pipeline, in evaluation order.
pub const PASSWORD_RULES: &[Rule] = &[required, min_length, character_classes];

// =============================================================================
// RULES
// =============================================================================

/// Value must not be empty.
pub fn required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() { Err(FieldError::Required) } else { Ok(()) }
}

/// Value must look like an email address.
pub fn email_format(value: &str) -> Result<(), FieldError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Value must be at least `PASSWORD_MIN_LEN` UTF-16 code units long, so a
/// character outside the Basic Multilingual Plane counts twice.
pub fn min_length(value: &str) -> Result<(), FieldError> {
    if value.encode_utf16().count() < PASSWORD_MIN_LEN {
        Err(FieldError::TooShort { min: PASSWORD_MIN_LEN })
    } else {
        Ok(())
    }
}

/// Value must contain an uppercase letter, a digit and an allowed symbol, and
/// nothing outside ASCII letters, digits and `PASSWORD_SYMBOLS`.
pub fn character_classes(value: &str) -> Result<(), FieldError> {
    let is_symbol = |c: char| PASSWORD_SYMBOLS.contains(c);

    let alphabet_ok = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || is_symbol(c));
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(is_symbol);

    if alphabet_ok && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err(FieldError::MissingCharacterClasses)
    }
}

// =============================================================================
// PIPELINES
// =============================================================================

/// Run `rules` in order and stop at the first failure.
pub fn run_rules(rules: &[Rule], value: &str) -> Result<(), FieldError> {
    rules.iter().try_for_each(|rule| rule(value))
}

/// Validate both fields; every failing field carries its own error.
///
/// # Errors
///
/// Returns the per-field errors when at least one field fails its pipeline.
pub fn validate(credentials: &Credentials<'_>) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        email: run_rules(EMAIL_RULES, credentials.email).err(),
        password: run_rules(PASSWORD_RULES, credentials.password).err(),
    };

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
