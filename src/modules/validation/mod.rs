use thiserror::Error;

use crate::modules::messages;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 12;
pub const MIN_CODE_LENGTH: usize = 10;

// Characters rejected to protect against SQL-injection-style input.
const FORBIDDEN_CHARS: &[char] = &[
    '/', '\\', '(', ')', '<', '>', '\'', '"', '+', '-', '=', ';', '|', '\n', '\r',
];

/// Typed validation failure. Always locally recoverable: callers surface
/// the message and re-prompt. The `Display` text is the user-facing
/// explanation, sourced from the message table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", messages::format(messages::EMPTY_INPUT, .0))]
    EmptyInput(&'static str),
    #[error("{}", messages::format(messages::INJECTION_REJECTED, ""))]
    InjectionRejected,
    #[error("{}", messages::format(messages::POLICY_FAILED, .0))]
    PolicyRejected(&'static str),
    #[error("{}", messages::format(messages::INVALID_INPUT, .0))]
    FormatRejected(&'static str),
}

/// Validate a username before it is used for a lookup: non-empty, then
/// free of forbidden characters.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::EmptyInput("Username"));
    }
    if has_forbidden_chars(username) {
        return Err(ValidationError::InjectionRejected);
    }
    Ok(())
}

/// Validate a password: non-empty, free of forbidden characters, and
/// compliant with the password policy.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyInput("Password"));
    }
    if has_forbidden_chars(password) {
        return Err(ValidationError::InjectionRejected);
    }
    check_password_policy(password)
}

/// Validate an MFA code: non-empty, parseable as a signed 32-bit integer
/// (which covers both non-digit characters and numeric overflow), and at
/// least 10 decimal digits long.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::EmptyInput("MFA Code"));
    }
    if code.parse::<i32>().is_err() {
        return Err(ValidationError::FormatRejected("MFA Code"));
    }
    if code.len() < MIN_CODE_LENGTH {
        return Err(ValidationError::PolicyRejected("MFA Code"));
    }
    Ok(())
}

/// Check for characters that could be used for SQL injection.
fn has_forbidden_chars(input: &str) -> bool {
    input.chars().any(|c| FORBIDDEN_CHARS.contains(&c))
}

/// Policy: length within [8,12], alphanumeric only, and at least one
/// uppercase letter, one lowercase letter, and one digit.
fn check_password_policy(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH || password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PolicyRejected("Password"));
    }
    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::PolicyRejected("Password"));
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_upper || !has_lower || !has_digit {
        return Err(ValidationError::PolicyRejected("Password"));
    }
    Ok(())
}
