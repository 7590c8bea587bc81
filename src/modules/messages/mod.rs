use lazy_static::lazy_static;
use std::collections::HashMap;

// Message keys. Kept as string constants so callers can't drift from the
// table below without failing a lookup.
pub const DEFAULT_PASSWORD_USED: &str = "DEFAULT_PASSWORD_USED";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const INCORRECT_INPUT: &str = "INCORRECT_INPUT";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const NO_MORE_ATTEMPTS: &str = "NO_MORE_ATTEMPTS";
pub const POLICY_FAILED: &str = "POLICY_FAILED";
pub const INJECTION_REJECTED: &str = "INJECTION_REJECTED";
pub const TOO_MANY_FAILS: &str = "TOO_MANY_FAILS";

const UNKNOWN_ERROR: &str = "Unknown error.";

lazy_static! {
    /// User-facing message templates. `{}` is replaced by the field name
    /// (Username, Password, MFA Code) where the template carries one.
    static ref MESSAGES: HashMap<&'static str, &'static str> = {
        let mut messages = HashMap::new();
        messages.insert(DEFAULT_PASSWORD_USED, "Too many failed attempts, creating default password.");
        messages.insert(EMPTY_INPUT, "{} cannot be empty.");
        messages.insert(INCORRECT_INPUT, "{} is incorrect or not found.");
        messages.insert(INVALID_INPUT, "{} contains invalid input.");
        messages.insert(NO_MORE_ATTEMPTS, "No attempts remaining.");
        messages.insert(POLICY_FAILED, "{} failed to meet one or more requirements.");
        messages.insert(INJECTION_REJECTED, "Input contains invalid characters.");
        messages.insert(TOO_MANY_FAILS, "Too many failed attempts, returning to start.");
        messages
    };
}

/// Look up a message template and substitute the field name into its
/// placeholder. Unknown keys resolve to a generic unknown-error string
/// instead of failing.
pub fn format(key: &str, value: &str) -> String {
    match MESSAGES.get(key) {
        Some(template) => template.replacen("{}", value, 1),
        None => UNKNOWN_ERROR.to_string(),
    }
}

/// Print a message that takes no field name.
pub fn print(key: &str) {
    println!("{}", format(key, ""));
}

/// Print a message with the field name substituted in.
pub fn print_with(key: &str, value: &str) {
    println!("{}", format(key, value));
}
