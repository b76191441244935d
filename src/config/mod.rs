//! Configuration management for Prompt Shield.
//!
//! Configuration comes from built-in defaults, an optional TOML file and
//! `PROMPT_SHIELD_*` environment variables, in that order of precedence.
//!
//! # Example Configuration
//!
//! ```toml
//! high_risk_terms = ["api_key", "ssh_key", "trade_secret", "customer_ssn"]
//! medium_risk_terms = ["password", "internal_only", "confidential"]
//! max_prompt_length = 1500
//! pattern_library = "patterns/custom.toml"
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! export PROMPT_SHIELD_HIGH_RISK_TERMS="api_key,ssh_key"
//! export PROMPT_SHIELD_MEDIUM_RISK_TERMS="password"
//! export PROMPT_SHIELD_MAX_PROMPT_LENGTH=2000
//! export PROMPT_SHIELD_PATTERN_LIBRARY=patterns/custom.toml
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_with_env};
pub use schema::{ConfigFile, ShieldConfig};
