// --- File: crates/akshara_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, validation_error, AksharaError,
};

// Re-export HTTP utilities for easier access
pub use http::{post, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export feature flag handling utilities for easier access
pub use features::{is_feature_enabled, is_webhook_enabled};

// Re-export service abstractions for easier access
pub use services::{BookingSubmission, BookingSubmitter, BoxFuture, BoxedError};
