use log::{info, warn};
use thiserror::Error;

use super::default_password;
use crate::modules::cipher::Cipher;
use crate::modules::messages;
use crate::modules::store::RecordStore;
use crate::modules::utils::logging::log_auth_event;
use crate::modules::validation::{self, ValidationError};

/// A generated default password failed its own policy check. This is an
/// internal-consistency failure in the generator or the policy, not a user
/// error, and must abort the default-password path loudly.
#[derive(Debug, Error)]
#[error("generated default password failed validation: {0}")]
pub struct DefaultPasswordError(#[from] ValidationError);

/// Authenticate a user-entered password against the stored one. On the
/// login path every failure, including a validation failure, is reported
/// as plain incorrect input so the prompt leaks no policy details.
pub fn authenticate_password(
    store: &RecordStore,
    cipher: &Cipher,
    username: &str,
    input: &str,
) -> bool {
    let record = match store.find_by_obfuscated_username(&cipher.obfuscate(username)) {
        Some(record) => record,
        None => {
            messages::print_with(messages::INCORRECT_INPUT, "Password");
            return false;
        }
    };

    if validation::validate_password(input).is_err() {
        messages::print_with(messages::INCORRECT_INPUT, "Password");
        log_auth_event("password", username, false, Some("validation failed"));
        return false;
    }

    let matched = record.password.as_deref() == Some(cipher.obfuscate(input).as_str());
    if !matched {
        messages::print_with(messages::INCORRECT_INPUT, "Password");
    }
    log_auth_event("password", username, matched, None);
    matched
}

/// Whether the user's record already has a password. A missing record
/// counts as no password.
pub fn password_exists(store: &RecordStore, cipher: &Cipher, username: &str) -> bool {
    store
        .find_by_obfuscated_username(&cipher.obfuscate(username))
        .map(|record| record.password.is_some())
        .unwrap_or(false)
}

/// Validate and store a user-chosen password. Unlike the login path, a
/// validation failure here prints the full explanation: this is the
/// creation path, and the user needs to know what the policy wants.
pub fn create_new_password(
    store: &mut RecordStore,
    cipher: &Cipher,
    username: &str,
    input: &str,
) -> bool {
    let obfuscated_username = cipher.obfuscate(username);
    if store
        .find_by_obfuscated_username(&obfuscated_username)
        .is_none()
    {
        return false;
    }

    if let Err(e) = validation::validate_password(input) {
        println!("{}", e);
        return false;
    }

    store.set_password(&obfuscated_username, cipher.obfuscate(input));
    log_auth_event("create_password", username, true, None);
    true
}

/// Generate and install a default password after manual creation attempts
/// are exhausted. Does not consume the user's attempt budget. The
/// generated password must pass validation; a failure there is fatal for
/// this path, never a re-prompt.
pub fn create_default_password(
    store: &mut RecordStore,
    cipher: &Cipher,
    username: &str,
    debug: bool,
) -> Result<(), DefaultPasswordError> {
    let generated = default_password::generate();
    validation::validate_password(&generated)?;

    if !store.set_password(&cipher.obfuscate(username), cipher.obfuscate(&generated)) {
        warn!("No record found while installing default password");
        return Ok(());
    }

    // Print the password since email delivery is not a feature yet.
    if debug {
        println!("[DEBUG] Generated Password: {}", generated);
        info!("Generated default password for user (debug mode)");
    }
    log_auth_event("default_password", username, true, None);

    println!("The password has been set to a default password.");
    println!("You will receive a secure email containing the password.");
    Ok(())
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
    fn test_password_lifecycle() {
        let (mut store, cipher) = setup();

        // No password yet.
        assert!(!password_exists(&store, &cipher, "scientist"));
        assert!(!authenticate_password(&store, &cipher, "scientist", "Abc12345"));

        // First creation.
        assert!(create_new_password(&mut store, &cipher, "scientist", "Abc12345"));
        assert!(password_exists(&store, &cipher, "scientist"));

        // Correct and incorrect logins.
        assert!(authenticate_password(&store, &cipher, "scientist", "Abc12345"));
        assert!(!authenticate_password(&store, &cipher, "scientist", "Xyz98765"));
    }

    #[test]
    fn test_create_rejects_non_compliant_password() {
        let (mut store, cipher) = setup();
        assert!(!create_new_password(&mut store, &cipher, "scientist", "short"));
        assert!(!create_new_password(&mut store, &cipher, "scientist", "abcdefgh"));
        assert!(!create_new_password(&mut store, &cipher, "scientist", "A1!bcdef"));
        assert!(!password_exists(&store, &cipher, "scientist"));
    }

    #[test]
    fn test_create_for_unknown_user_fails() {
        let (mut store, cipher) = setup();
        assert!(!create_new_password(&mut store, &cipher, "intruder", "Abc12345"));
    }

    #[test]
    fn test_authenticate_rejects_invalid_input_without_lookup() {
        let (mut store, cipher) = setup();
        create_new_password(&mut store, &cipher, "scientist", "Abc12345");

        // Forbidden characters and empty input fail before any comparison.
        assert!(!authenticate_password(&store, &cipher, "scientist", ""));
        assert!(!authenticate_password(&store, &cipher, "scientist", "Abc'12345"));
    }

    #[test]
    fn test_stored_password_is_obfuscated_at_rest() {
        let (mut store, cipher) = setup();
        create_new_password(&mut store, &cipher, "scientist", "Abc12345");

        let record = store
            .find_by_obfuscated_username(&cipher.obfuscate("scientist"))
            .unwrap();
        let stored = record.password.as_deref().unwrap();
        assert_ne!(stored, "Abc12345");
        assert_eq!(cipher.deobfuscate(stored), "Abc12345");
    }

    #[test]
    fn test_default_password_is_installed_and_compliant() {
        let (mut store, cipher) = setup();
        create_default_password(&mut store, &cipher, "scientist", false).unwrap();

        assert!(password_exists(&store, &cipher, "scientist"));
        let record = store
            .find_by_obfuscated_username(&cipher.obfuscate("scientist"))
            .unwrap();
        let plaintext = cipher.deobfuscate(record.password.as_deref().unwrap());
        assert!(validation::validate_password(&plaintext).is_ok());
    }

    #[test]
    fn test_default_password_overwrites_existing() {
        let (mut store, cipher) = setup();
        create_new_password(&mut store, &cipher, "scientist", "Abc12345");
        create_default_password(&mut store, &cipher, "scientist", false).unwrap();
        assert!(!authenticate_password(&store, &cipher, "scientist", "Abc12345"));
    }
}
