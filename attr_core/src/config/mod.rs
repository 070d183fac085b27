//! Configuration loading from TOML files

mod constants;

pub use constants::{
    BoostConfig, GrowthConstants, ModifierConstants, RebalanceConstants, StatConstants, StatLimits,
    TurnRange, ZeroStatConstants,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate stat constants from a TOML file
pub fn load_constants(path: &Path) -> Result<StatConstants, ConfigError> {
    let constants: StatConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Parse and validate stat constants from a TOML string
pub fn parse_constants(content: &str) -> Result<StatConstants, ConfigError> {
    let constants: StatConstants = parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

/// Constants shipped with the crate
pub fn default_constants() -> StatConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_constants(toml).unwrap_or_else(|e| {
        tracing::warn!("bundled constants rejected, using built-in defaults: {}", e);
        StatConstants::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_constants_match_defaults() {
        let bundled = default_constants();
        let built_in = StatConstants::default();
        assert_eq!(bundled.limits.max_stat, built_in.limits.max_stat);
        assert_eq!(bundled.limits.stat_zero_turn_cap, built_in.limits.stat_zero_turn_cap);
        assert_eq!(bundled.modifiers.boosts.len(), built_in.modifiers.boosts.len());
    }

    #[test]
    fn test_parse_constants_rejects_invalid() {
        let toml = r#"
[zero.recovery_turns]
min = 20
max = 10
"#;
        let err = parse_constants(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_parse_constants_reports_bad_toml() {
        let err = parse_constants("limits = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_constants_missing_file() {
        let err = load_constants(Path::new("/nonexistent/constants.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
