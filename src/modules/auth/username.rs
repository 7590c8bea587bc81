use crate::modules::cipher::Cipher;
use crate::modules::messages;
use crate::modules::store::RecordStore;
use crate::modules::utils::logging::log_auth_event;
use crate::modules::validation;

/// Authenticate a user-entered username against the store. Every failure
/// prints exactly one message line and returns false; expected failures
/// never surface as errors.
pub fn authenticate_username(store: &RecordStore, cipher: &Cipher, input: &str) -> bool {
    // Validate the raw input before it is used for a lookup.
    if let Err(e) = validation::validate_username(input) {
        println!("{}", e);
        return false;
    }

    let obfuscated = cipher.obfuscate(input);
    let record = match store.find_by_obfuscated_username(&obfuscated) {
        Some(record) => record,
        None => {
            messages::print_with(messages::INCORRECT_INPUT, "Username");
            log_auth_event("username", input, false, Some("not found"));
            return false;
        }
    };

    // Defense in depth: the lookup already matched on the obfuscated
    // username, but compare explicitly before counting the stage.
    if record.username != obfuscated {
        messages::print_with(messages::INCORRECT_INPUT, "Username");
        return false;
    }

    log_auth_event("username", input, true, None);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RecordStore, Cipher) {
        let cipher = Cipher::new();
        let store = RecordStore::seed(&cipher);
        (store, cipher)
    }

    #[test]
    fn test_known_username_authenticates() {
        let (store, cipher) = setup();
        assert!(authenticate_username(&store, &cipher, "scientist"));
        assert!(authenticate_username(&store, &cipher, "engineer"));
    }

    #[test]
    fn test_unknown_username_fails() {
        let (store, cipher) = setup();
        assert!(!authenticate_username(&store, &cipher, "intruder"));
    }

    #[test]
    fn test_invalid_input_fails_before_lookup() {
        let (store, cipher) = setup();
        assert!(!authenticate_username(&store, &cipher, ""));
        assert!(!authenticate_username(&store, &cipher, "scientist'--"));
        assert!(!authenticate_username(&store, &cipher, "a;DROP TABLE"));
    }

    #[test]
    fn test_obfuscated_form_is_not_accepted_as_input() {
        // Entering the stored ciphertext must not authenticate.
        let (store, cipher) = setup();
        let obfuscated = cipher.obfuscate("scientist");
        assert!(!authenticate_username(&store, &cipher, &obfuscated));
    }
}
