//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use flightbook::config::{Config, ConfigMerger};
///
/// let low = Config { autosave: Some(true), ..Default::default() };
/// let high = Config { autosave: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.autosave, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_file.is_some() {
            target.data_file.clone_from(&source.data_file);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.autosave.is_some() {
            target.autosave = source.autosave;
        }
    }
}
