//! Logging and observability
//!
//! Structured logging through `tracing`, with human-readable or JSON output.
//!
//! # Example
//!
//! ```no_run
//! use prompt_shield::logging::{init_logging, LogFormat};
//!
//! init_logging("info", LogFormat::Json).expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LogFormat};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use prompt_shield::log_error_with_context;
/// use prompt_shield::domain::ShieldError;
///
/// let error = ShieldError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
