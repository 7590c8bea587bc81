use std::io;
use std::thread;
use std::time::Duration;

use super::{code, password, username};
use crate::modules::cipher::Cipher;
use crate::modules::config::AppConfig;
use crate::modules::messages;
use crate::modules::store::{export, RecordStore};
use crate::modules::utils::io::Prompt;
use crate::modules::utils::logging::log_auth_event;
use crate::{EXTRA_ATTEMPTS, TOTAL_STAGES};

/// Outcome of the new-password stage.
#[derive(Debug, PartialEq, Eq)]
enum NewPasswordOutcome {
    Created,          // User chose a compliant password
    DefaultInstalled, // Manual attempts exhausted, default installed
}

/// The login state machine: collects username, password, and MFA code in
/// order, with a per-stage attempt budget, a fixed throttling delay after
/// every failed attempt, and a restart from the username stage whenever a
/// budget runs out. The session ends only when all three stages pass in a
/// single iteration.
pub struct LoginSession {
    /// Credential stages passed in the current outer-loop iteration.
    correct_credentials: u32,
    /// Fixed delay inserted after every failed attempt.
    throttle: Duration,
}

impl LoginSession {
    pub fn new(throttle: Duration) -> Self {
        Self {
            correct_credentials: 0,
            throttle,
        }
    }

    /// Main session loop. Loops until all credentials are correctly
    /// entered in one iteration, then dumps the obfuscated record set to
    /// the export file and returns the authenticated username. Only I/O
    /// failures on the prompt or an internal consistency failure in the
    /// default-password path end the session early.
    pub fn run(
        &mut self,
        prompt: &mut dyn Prompt,
        store: &mut RecordStore,
        cipher: &Cipher,
        config: &AppConfig,
    ) -> io::Result<String> {
        loop {
            // Reset the stage counter on each pass.
            self.correct_credentials = 0;

            let username = self.read_username(prompt, store, cipher)?;
            self.read_password(prompt, store, cipher, &username, config)?;

            // The code stage is only reached when both earlier stages
            // passed this iteration.
            if self.correct_credentials >= 2 {
                self.read_code(prompt, store, cipher, &username)?;
            }

            if self.correct_credentials >= TOTAL_STAGES {
                // Dump the obfuscated records; a write failure is reported
                // but does not undo the successful login.
                if let Err(e) = export::write_export(store, &config.export_file) {
                    eprintln!("Error writing to file: {}", e);
                }
                log_auth_event("login", &username, true, None);
                return Ok(username);
            }

            println!("Login failed, returning to start.");
            self.add_delay();
        }
    }

    /// Prompt for a username until one authenticates. No attempt budget
    /// here: wrong guesses never lock out, they are only throttled.
    fn read_username(
        &mut self,
        prompt: &mut dyn Prompt,
        store: &RecordStore,
        cipher: &Cipher,
    ) -> io::Result<String> {
        loop {
            let input = prompt.read_line("Username: ")?;
            if username::authenticate_username(store, cipher, &input) {
                self.correct_credentials += 1;
                return Ok(input);
            }
            self.add_delay();
        }
    }

    /// Prompt for the user's password within the attempt budget. When the
    /// user has no password yet, the new-password stage runs first; a
    /// default-password installation there counts as passing this stage
    /// outright.
    fn read_password(
        &mut self,
        prompt: &mut dyn Prompt,
        store: &mut RecordStore,
        cipher: &Cipher,
        username: &str,
        config: &AppConfig,
    ) -> io::Result<()> {
        if !password::password_exists(store, cipher, username) {
            let outcome = self.read_new_password(prompt, store, cipher, username, config)?;
            if outcome == NewPasswordOutcome::DefaultInstalled {
                self.correct_credentials += 1;
                return Ok(());
            }
        }

        let mut attempts = EXTRA_ATTEMPTS + 1;
        while attempts > 0 {
            let input = prompt.read_password("Password: ")?;
            if password::authenticate_password(store, cipher, username, &input) {
                self.correct_credentials += 1;
                return Ok(());
            }
            attempts = self.remaining_attempts(attempts);
            self.add_delay();
        }

        // Exhausted; the outer loop restarts from the username stage.
        messages::print(messages::TOO_MANY_FAILS);
        log_auth_event("password", username, false, Some("attempts exhausted"));
        Ok(())
    }

    /// Prompt the user to create their first password. Exhausting the
    /// budget installs a generated default password with no further user
    /// action.
    fn read_new_password(
        &mut self,
        prompt: &mut dyn Prompt,
        store: &mut RecordStore,
        cipher: &Cipher,
        username: &str,
        config: &AppConfig,
    ) -> io::Result<NewPasswordOutcome> {
        let mut attempts = EXTRA_ATTEMPTS + 1;
        while attempts > 0 {
            let input = prompt.read_password("Create a new password: ")?;
            if password::create_new_password(store, cipher, username, &input) {
                return Ok(NewPasswordOutcome::Created);
            }
            attempts = self.remaining_attempts(attempts);
            self.add_delay();
        }

        messages::print(messages::DEFAULT_PASSWORD_USED);
        password::create_default_password(store, cipher, username, config.debug)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(NewPasswordOutcome::DefaultInstalled)
    }

    /// Prompt for the MFA code within the attempt budget.
    fn read_code(
        &mut self,
        prompt: &mut dyn Prompt,
        store: &RecordStore,
        cipher: &Cipher,
        username: &str,
    ) -> io::Result<()> {
        let mut attempts = EXTRA_ATTEMPTS + 1;
        while attempts > 0 {
            let input = prompt.read_line("MFA Code: ")?;
            if code::authenticate_code(store, cipher, username, &input) {
                self.correct_credentials += 1;
                return Ok(());
            }
            attempts = self.remaining_attempts(attempts);
            self.add_delay();
        }

        messages::print(messages::NO_MORE_ATTEMPTS);
        log_auth_event("mfa_code", username, false, Some("attempts exhausted"));
        Ok(())
    }

    /// Decrement and report the remaining attempts for the current stage.
    fn remaining_attempts(&self, attempts: u32) -> u32 {
        let attempts = attempts - 1;
        println!("Remaining Attempts: {}", attempts);
        attempts
    }

    /// Fixed post-failure delay to slow automated guessing. Uses a plain
    /// blocking sleep; there is nothing to cancel or retry here.
    fn add_delay(&self) {
        thread::sleep(self.throttle);
    }
}
