//! Result type alias for Prompt Shield

use super::errors::ShieldError;

/// Result type alias for Prompt Shield operations
///
/// # Examples
///
/// ```
/// use prompt_shield::domain::result::Result;
/// use prompt_shield::domain::errors::ShieldError;
///
/// fn failing_function() -> Result<()> {
///     Err(ShieldError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ShieldError>;
