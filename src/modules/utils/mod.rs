pub mod io;
pub mod logging;

// Re-export the main types and functions
pub use io::{ConsolePrompt, Prompt};
