use std::io::{self, IsTerminal, Write};

/// Input source for the login session. The production implementation is
/// the console; tests drive the session with a scripted implementation.
pub trait Prompt {
    /// Display the prompt and read an echoed line (username, MFA code).
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Display the prompt and read a masked line (passwords).
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;
}

/// Console-backed prompt: echoed reads from stdin, masked reads through
/// the terminal.
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}

/// Startup precondition: the session needs an interactive terminal on
/// stdin for prompts and masked reads.
pub fn stdin_is_interactive() -> bool {
    io::stdin().is_terminal()
}
