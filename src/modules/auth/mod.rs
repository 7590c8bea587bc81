pub mod code;
pub mod default_password;
pub mod password;
pub mod session;
pub mod username;

// Re-export the main types and functions
pub use password::DefaultPasswordError;
pub use session::LoginSession;
