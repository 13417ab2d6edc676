//! Configuration system for flightbook.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `flightbook.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FLIGHTBOOK_*`)
//! 3. Project config (`flightbook.yaml`, nearest ancestor directory)
//! 4. User config (`~/.flightbook/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use flightbook::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("Listing format: {}", config.output_format());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, AUTOSAVE_ENV, DATA_FILE_ENV, OUTPUT_FORMAT_ENV};
pub use loader::{
    default_data_dir, ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE, USER_CONFIG_FILE,
};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
