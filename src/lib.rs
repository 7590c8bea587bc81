// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, cipher, config, messages, store, utils, validation};

// Re-export commonly used types
pub use modules::auth::session::LoginSession;
pub use modules::cipher::Cipher;
pub use modules::config::AppConfig;
pub use modules::store::RecordStore;

// Constants
pub const CONFIG_FILE: &str = "credgate.json";
pub const EXPORT_FILE: &str = "user_info.txt";
pub const TOTAL_STAGES: u32 = 3;
pub const EXTRA_ATTEMPTS: u32 = 2;
pub const THROTTLE_MILLIS: u64 = 1000;
