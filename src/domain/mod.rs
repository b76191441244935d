//! Domain error types shared across Prompt Shield.
//!
//! All fallible operations return [`Result<T, ShieldError>`]:
//!
//! ```rust
//! use prompt_shield::domain::{Result, ShieldError};
//!
//! fn example() -> Result<()> {
//!     let config = prompt_shield::config::ShieldConfig::from_env()?;
//!     if config.max_prompt_length() == 0 {
//!         return Err(ShieldError::Configuration("unreachable".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::ShieldError;
pub use result::Result;
