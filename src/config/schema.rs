//! Configuration schema types

use crate::domain::{Result, ShieldError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default maximum prompt length, in characters
pub const DEFAULT_MAX_PROMPT_LENGTH: usize = 1500;

/// Default high risk terms
pub const DEFAULT_HIGH_RISK_TERMS: &[&str] =
    &["api_key", "ssh_key", "trade_secret", "customer_ssn"];

/// Default medium risk terms
pub const DEFAULT_MEDIUM_RISK_TERMS: &[&str] =
    &["password", "internal_only", "confidential"];

/// Validated analyser configuration
///
/// Immutable once built. Construct it with [`ShieldConfig::new`], take the
/// [`Default`], or load it with [`crate::config::load_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShieldConfig {
    high_risk_terms: Vec<String>,
    medium_risk_terms: Vec<String>,
    max_prompt_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern_library: Option<PathBuf>,
}

impl ShieldConfig {
    /// Build a configuration from term lists and a length limit.
    ///
    /// Terms are trimmed and blank entries dropped, keeping order.
    ///
    /// # Errors
    ///
    /// Returns [`ShieldError::Configuration`] if `max_prompt_length` is zero.
    pub fn new(
        high_risk_terms: Vec<String>,
        medium_risk_terms: Vec<String>,
        max_prompt_length: usize,
    ) -> Result<Self> {
        let config = Self {
            high_risk_terms: normalize_terms(high_risk_terms),
            medium_risk_terms: normalize_terms(medium_risk_terms),
            max_prompt_length,
            pattern_library: None,
        };
        config.validate().map_err(ShieldError::Configuration)?;
        Ok(config)
    }

    /// Attach a TOML pattern library of extra PII recognizers
    pub fn with_pattern_library(mut self, path: impl Into<PathBuf>) -> Result<Self> {
        self.pattern_library = Some(path.into());
        self.validate().map_err(ShieldError::Configuration)?;
        Ok(self)
    }

    /// Load configuration from `PROMPT_SHIELD_*` environment variables over
    /// the defaults
    pub fn from_env() -> Result<Self> {
        super::loader::load_config(None)
    }

    pub fn high_risk_terms(&self) -> &[String] {
        &self.high_risk_terms
    }

    pub fn medium_risk_terms(&self) -> &[String] {
        &self.medium_risk_terms
    }

    /// Maximum prompt length, in characters
    pub fn max_prompt_length(&self) -> usize {
        self.max_prompt_length
    }

    pub fn pattern_library(&self) -> Option<&Path> {
        self.pattern_library.as_deref()
    }

    /// Validates the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_prompt_length == 0 {
            return Err("max_prompt_length must be a positive integer".to_string());
        }

        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library not found: {}", path.display()));
            }
        }

        Ok(())
    }
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            high_risk_terms: DEFAULT_HIGH_RISK_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            medium_risk_terms: DEFAULT_MEDIUM_RISK_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_prompt_length: DEFAULT_MAX_PROMPT_LENGTH,
            pattern_library: None,
        }
    }
}

/// On-disk configuration file
///
/// Every key is optional; missing keys fall back to the defaults.
///
/// ```toml
/// high_risk_terms = ["api_key", "ssh_key"]
/// medium_risk_terms = ["password"]
/// max_prompt_length = 2000
/// pattern_library = "patterns/custom.toml"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub high_risk_terms: Option<Vec<String>>,
    pub medium_risk_terms: Option<Vec<String>>,
    /// Signed so that negative values reach validation with a clear message
    pub max_prompt_length: Option<i64>,
    pub pattern_library: Option<PathBuf>,
}

impl ConfigFile {
    /// Resolve defaults and validate
    pub fn into_config(self) -> Result<ShieldConfig> {
        let defaults = ShieldConfig::default();

        let max_prompt_length = match self.max_prompt_length {
            Some(value) if value <= 0 => {
                return Err(ShieldError::Configuration(format!(
                    "max_prompt_length must be a positive integer, got {value}"
                )))
            }
            Some(value) => usize::try_from(value).map_err(|_| {
                ShieldError::Configuration(format!("max_prompt_length is too large: {value}"))
            })?,
            None => defaults.max_prompt_length,
        };

        let config = ShieldConfig::new(
            self.high_risk_terms.unwrap_or(defaults.high_risk_terms),
            self.medium_risk_terms.unwrap_or(defaults.medium_risk_terms),
            max_prompt_length,
        )?;

        match self.pattern_library {
            Some(path) => config.with_pattern_library(path),
            None => Ok(config),
        }
    }
}

/// Split a comma-separated list into trimmed, non-empty terms
pub fn split_term_list(value: &str) -> Vec<String> {
    normalize_terms(value.split(',').map(str::to_string).collect())
}

fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
        .collect()
}
