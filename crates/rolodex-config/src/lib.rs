//! Typed configuration system for Rolodex.
//!
//! This crate provides a strongly-typed configuration for the contacts
//! application with support for:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Overview
//!
//! Configuration is built around the [`RolodexConfig`] struct:
//!
//! - [`NavigationConfig`] - routing settings (application base path)
//! - [`LoggingConfig`] - structured logging settings
//!
//! # Example
//!
//! ```no_run
//! use rolodex_config::{ConfigLoader, RolodexConfig};
//!
//! # fn main() -> Result<(), rolodex_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_file("rolodex.toml")?
//!     .with_env_prefix("ROLODEX")
//!     .load()?;
//!
//! println!("routes mounted under: {}", config.navigation.base_path);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [navigation]
//! base_path = "/app"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! ```
//!
//! # Environment Variable Overrides
//!
//! All values can be overridden with variables of the form
//! `PREFIX__SECTION__KEY`, for example:
//!
//! - `ROLODEX__NAVIGATION__BASE_PATH=/contacts-app`
//! - `ROLODEX__LOGGING__LEVEL=debug`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::{RolodexConfig, RolodexConfigBuilder};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingConfig, NavigationConfig};
