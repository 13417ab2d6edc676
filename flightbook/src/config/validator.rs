//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use flightbook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `data_file` is empty or names an
    /// existing directory.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref data_file) = config.data_file {
            if data_file.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "data_file".into(),
                    message: "path must not be empty".into(),
                });
            }

            if data_file.is_dir() {
                return Err(Error::Validation {
                    field: "data_file".into(),
                    message: format!("{} is a directory", data_file.display()),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_valid_data_file() {
        let config = Config {
            data_file: Some(PathBuf::from("/does/not/exist/yet.txt")),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_empty_data_file() {
        let config = Config {
            data_file: Some(PathBuf::new()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("data_file"));
    }

    #[test]
    fn test_directory_data_file() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_file: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }
}
