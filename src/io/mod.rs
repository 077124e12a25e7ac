/// Engine constants and default values
pub mod configuration;
/// Error types and constructors
pub mod error;
