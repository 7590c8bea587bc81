use crate::modules::cipher::Cipher;
use crate::modules::messages;
use crate::modules::store::RecordStore;
use crate::modules::utils::logging::log_auth_event;
use crate::modules::validation;

/// Authenticate a user-entered MFA code: the input must pass the
/// code-format validation and equal the stored code. Codes are stored and
/// compared as plain numbers; they are not obfuscated.
pub fn authenticate_code(store: &RecordStore, cipher: &Cipher, username: &str, input: &str) -> bool {
    let record = match store.find_by_obfuscated_username(&cipher.obfuscate(username)) {
        Some(record) => record,
        None => {
            messages::print_with(messages::INCORRECT_INPUT, "MFA Code");
            return false;
        }
    };

    if let Err(e) = validation::validate_code(input) {
        println!("{}", e);
        return false;
    }

    // Format validation guarantees the parse succeeds.
    let matched = input
        .parse::<i32>()
        .map(|code| code == record.code)
        .unwrap_or(false);
    if !matched {
        messages::print_with(messages::INCORRECT_INPUT, "MFA Code");
    }
    log_auth_event("mfa_code", username, matched, None);
    matched
}
