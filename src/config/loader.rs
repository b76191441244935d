//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Resolution order, later steps winning:
//! 1. Built-in defaults
//! 2. Optional TOML configuration file
//! 3. `PROMPT_SHIELD_*` environment variables
//!
//! The result is validated before it is returned.

use super::schema::{split_term_list, ConfigFile, ShieldConfig};
use crate::domain::{Result, ShieldError};
use std::fs;
use std::path::{Path, PathBuf};

/// Comma-separated high risk terms
pub const ENV_HIGH_RISK_TERMS: &str = "PROMPT_SHIELD_HIGH_RISK_TERMS";

/// Comma-separated medium risk terms
pub const ENV_MEDIUM_RISK_TERMS: &str = "PROMPT_SHIELD_MEDIUM_RISK_TERMS";

/// Integer maximum prompt length
pub const ENV_MAX_PROMPT_LENGTH: &str = "PROMPT_SHIELD_MAX_PROMPT_LENGTH";

/// Path to a TOML pattern library
pub const ENV_PATTERN_LIBRARY: &str = "PROMPT_SHIELD_PATTERN_LIBRARY";

/// Loads configuration from an optional TOML file and the process environment
///
/// # Errors
///
/// Returns [`ShieldError::Configuration`] if:
/// - The file cannot be read or parsed
/// - `PROMPT_SHIELD_MAX_PROMPT_LENGTH` is not an integer
/// - The resulting configuration fails validation
///
/// # Examples
///
/// ```no_run
/// use prompt_shield::config::load_config;
/// use std::path::Path;
///
/// let config = load_config(Some(Path::new("prompt-shield.toml"))).expect("Failed to load config");
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ShieldConfig> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an explicit environment lookup
pub fn load_config_with_env<F>(path: Option<&Path>, env: F) -> Result<ShieldConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut file = match path {
        Some(path) => read_config_file(path)?,
        None => ConfigFile::default(),
    };

    apply_env_overrides(&mut file, &env)?;

    let config = file.into_config()?;

    tracing::debug!(
        config_path = ?path,
        high_risk_terms = config.high_risk_terms().len(),
        medium_risk_terms = config.medium_risk_terms().len(),
        max_prompt_length = config.max_prompt_length(),
        "Configuration loaded"
    );

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(ShieldError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShieldError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(toml::from_str(&contents)?)
}

fn apply_env_overrides<F>(file: &mut ConfigFile, env: &F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = env(ENV_HIGH_RISK_TERMS) {
        file.high_risk_terms = Some(split_term_list(&val));
    }
    if let Some(val) = env(ENV_MEDIUM_RISK_TERMS) {
        file.medium_risk_terms = Some(split_term_list(&val));
    }
    if let Some(val) = env(ENV_MAX_PROMPT_LENGTH) {
        let parsed = val.trim().parse::<i64>().map_err(|_| {
            ShieldError::Configuration(format!(
                "{ENV_MAX_PROMPT_LENGTH} must be an integer, got '{val}'"
            ))
        })?;
        file.max_prompt_length = Some(parsed);
    }
    if let Some(val) = env(ENV_PATTERN_LIBRARY) {
        file.pattern_library = Some(PathBuf::from(val));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = load_config_with_env(None, env_from(&[])).unwrap();
        assert_eq!(config, ShieldConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let env = env_from(&[
            (ENV_HIGH_RISK_TERMS, "token, private_key ,"),
            (ENV_MEDIUM_RISK_TERMS, ""),
            (ENV_MAX_PROMPT_LENGTH, " 200 "),
        ]);
        let config = load_config_with_env(None, env).unwrap();

        assert_eq!(config.high_risk_terms(), ["token", "private_key"]);
        assert!(config.medium_risk_terms().is_empty());
        assert_eq!(config.max_prompt_length(), 200);
    }

    #[test]
    fn test_non_integer_max_length() {
        let env = env_from(&[(ENV_MAX_PROMPT_LENGTH, "lots")]);
        let err = load_config_with_env(None, env).unwrap_err();

        assert!(matches!(err, ShieldError::Configuration(_)));
        assert!(err
            .to_string()
            .contains("PROMPT_SHIELD_MAX_PROMPT_LENGTH must be an integer"));
    }

    #[test]
    fn test_non_positive_max_length() {
        let env = env_from(&[(ENV_MAX_PROMPT_LENGTH, "0")]);
        assert!(load_config_with_env(None, env).is_err());

        let env = env_from(&[(ENV_MAX_PROMPT_LENGTH, "-10")]);
        assert!(load_config_with_env(None, env).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_with_env(Some(Path::new("nonexistent.toml")), env_from(&[]));
        assert!(matches!(result, Err(ShieldError::Configuration(_))));
    }

    #[test]
    fn test_file_then_env() {
        let toml_content = r#"
high_risk_terms = ["launch_codes"]
medium_risk_terms = ["roadmap", "draft"]
max_prompt_length = 800
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config_with_env(Some(temp_file.path()), env_from(&[])).unwrap();
        assert_eq!(config.high_risk_terms(), ["launch_codes"]);
        assert_eq!(config.medium_risk_terms(), ["roadmap", "draft"]);
        assert_eq!(config.max_prompt_length(), 800);

        let env = env_from(&[(ENV_MAX_PROMPT_LENGTH, "900")]);
        let config = load_config_with_env(Some(temp_file.path()), env).unwrap();
        assert_eq!(config.high_risk_terms(), ["launch_codes"]);
        assert_eq!(config.max_prompt_length(), 900);
    }

    #[test]
    fn test_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"max_prompt_length = = 3").unwrap();
        temp_file.flush().unwrap();

        let err = load_config_with_env(Some(temp_file.path()), env_from(&[])).unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
