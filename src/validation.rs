//! Signup form validation.
//!
//! Every rule is checked; failures accumulate in declaration order.

use serde::Serialize;
use thiserror::Error;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// A single failed signup rule. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum SignupError {
    #[error("Email must include @")]
    EmailMissingAt,
    #[error("Password must be at least 8 chars")]
    PasswordTooShort,
}

/// Outcome of a validation: either valid, or the ordered list of failed rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { errors: Vec<SignupError> },
}

impl ValidationResult {
    fn from_errors(errors: Vec<SignupError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid { errors }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Failed rules, empty when valid.
    pub fn errors(&self) -> &[SignupError] {
        match self {
            Self::Valid => &[],
            Self::Invalid { errors } => errors,
        }
    }

    /// User-facing messages, in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }
}

/// Validate signup credentials.
///
/// Rules, in order: `email` contains `@`; `password` has at least [`MIN_PASSWORD_CHARS`]
/// characters. Both are always checked.
pub fn validate_signup(email: &str, password: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if !email.contains('@') {
        errors.push(SignupError::EmailMissingAt);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.push(SignupError::PasswordTooShort);
    }
    ValidationResult::from_errors(errors)
}
