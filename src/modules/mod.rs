// Declare all modules
pub mod auth;
pub mod cipher;
pub mod config;
pub mod messages;
pub mod store;
pub mod utils;
pub mod validation;

// No re-exports here as they're handled in lib.rs
