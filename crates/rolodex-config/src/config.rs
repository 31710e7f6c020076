//! Main configuration types.
//!
//! This module provides the top-level [`RolodexConfig`] struct and its builder.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingConfig, NavigationConfig};

/// Complete Rolodex application configuration.
///
/// This is the root configuration type containing all sections. Use
/// [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use rolodex_config::RolodexConfig;
///
/// let config = RolodexConfig::default();
/// assert_eq!(config.navigation.base_path, "/app");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct RolodexConfig {
    /// Navigation configuration.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RolodexConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> RolodexConfigBuilder {
        RolodexConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The base path does not start with `/`
    /// - The base path ends with `/` (other than a bare `/`)
    /// - The base path contains parameter braces
    /// - The log level is not one of trace, debug, info, warn, error
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.navigation.base_path;
        if !base.starts_with('/') {
            return Err(ConfigError::invalid_value(
                "navigation.base_path",
                "must start with '/'",
            ));
        }
        if base.len() > 1 && base.ends_with('/') {
            return Err(ConfigError::invalid_value(
                "navigation.base_path",
                "must not end with '/'",
            ));
        }
        if base.contains(['{', '}']) {
            return Err(ConfigError::invalid_value(
                "navigation.base_path",
                "must not contain parameter segments",
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
            return Err(ConfigError::invalid_value(
                "logging.level",
                format!("unknown log level: {}", self.logging.level),
            ));
        }

        Ok(())
    }

    /// Creates a development configuration preset.
    ///
    /// Pretty ANSI log output at debug level.
    ///
    /// # Example
    ///
    /// ```
    /// use rolodex_config::RolodexConfig;
    ///
    /// let config = RolodexConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();
        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.ansi_enabled = true;
        config.logging.include_location = true;
        config
    }

    /// Creates a production configuration preset.
    ///
    /// JSON log output at info level.
    ///
    /// # Example
    ///
    /// ```
    /// use rolodex_config::{LogFormat, RolodexConfig};
    ///
    /// let config = RolodexConfig::production();
    /// assert_eq!(config.logging.format, LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();
        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.logging.ansi_enabled = false;
        config
    }
}

/// Builder for [`RolodexConfig`].
#[derive(Debug, Default)]
pub struct RolodexConfigBuilder {
    navigation: Option<NavigationConfig>,
    logging: Option<LoggingConfig>,
}

impl RolodexConfigBuilder {
    /// Sets the navigation configuration.
    #[must_use]
    pub fn navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = Some(navigation);
        self
    }

    /// Sets the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the configuration; unset sections use their defaults.
    #[must_use]
    pub fn build(self) -> RolodexConfig {
        RolodexConfig {
            navigation: self.navigation.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
        }
    }

    /// Builds and validates the configuration.
    pub fn build_validated(self) -> Result<RolodexConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(RolodexConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_relative_base_path() {
        let config = RolodexConfig::builder()
            .navigation(NavigationConfig {
                base_path: "app".to_string(),
            })
            .build();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_path"));
    }

    #[test]
    fn test_validate_trailing_slash() {
        let config = RolodexConfig::builder()
            .navigation(NavigationConfig {
                base_path: "/app/".to_string(),
            })
            .build();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bare_root_base_path() {
        let config = RolodexConfig::builder()
            .navigation(NavigationConfig {
                base_path: "/".to_string(),
            })
            .build();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_braced_base_path() {
        let config = RolodexConfig::builder()
            .navigation(NavigationConfig {
                base_path: "/{tenant}".to_string(),
            })
            .build();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_unknown_log_level() {
        let config = RolodexConfig::builder()
            .logging(LoggingConfig {
                level: "verbose".to_string(),
                ..Default::default()
            })
            .build();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("verbose"));
    }

    #[test]
    fn test_development_preset() {
        let config = RolodexConfig::development();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.logging.ansi_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_preset() {
        let config = RolodexConfig::production();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.logging.ansi_enabled);
    }

    #[test]
    fn test_build_validated_failure() {
        let result = RolodexConfig::builder()
            .navigation(NavigationConfig {
                base_path: "invalid".to_string(),
            })
            .build_validated();

        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RolodexConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[navigation]"));
        assert!(toml_str.contains("[logging]"));

        let parsed: RolodexConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let toml_str = r#"
            [navigation]
            base_path = "/app"

            [server]
            http_addr = "0.0.0.0:8080"
        "#;

        let result: Result<RolodexConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }
}
