use std::process;
use std::time::Duration;

use credgate::utils::io::{stdin_is_interactive, ConsolePrompt};
use credgate::utils::logging::initialize_logging;
use credgate::{AppConfig, Cipher, LoginSession, RecordStore};

fn main() {
    // Logging failures are reported but not fatal.
    if let Err(e) = initialize_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    // The session needs an interactive terminal for prompts and masked
    // password reads.
    if !stdin_is_interactive() {
        eprintln!(
            "No console available. Please run this program from the command line or terminal."
        );
        process::exit(2);
    }

    let config = AppConfig::load();
    let cipher = Cipher::new();
    let mut store = RecordStore::seed(&cipher);
    let mut prompt = ConsolePrompt;

    let mut session = LoginSession::new(Duration::from_millis(config.throttle_ms));
    match session.run(&mut prompt, &mut store, &cipher, &config) {
        Ok(username) => {
            println!("Login successful, welcome {}!", username);
        }
        Err(e) => {
            eprintln!("Session aborted: {}", e);
            process::exit(1);
        }
    }
}
