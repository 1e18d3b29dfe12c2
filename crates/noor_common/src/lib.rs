// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Shared data structures


// Re-export error types and utilities for easier access
pub use error::{config_error, storage_error, validation_error, Context, NoorError};

// Re-export logging utilities for easier access
pub use logging::{init_with_level, log_error, log_result, parse_level};

pub use models::Locale;
