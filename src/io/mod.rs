//! Configuration and error handling

/// Draft dimension constants and defaults
pub mod configuration;
/// Error types for draft operations
pub mod error;
