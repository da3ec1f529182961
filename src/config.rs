//! Configuration management and validation.
//!
//! The defaults reproduce the fixed locations the batch has always used;
//! every field can be overridden from the command line.

use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_N};
use crate::error::{RankingError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// How the parser treats lines that do not fit `name,gender,count`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordPolicy {
    /// Keep every line; unknown genders and unreadable counts pass through
    #[default]
    Permissive,
    /// Reject the year on the first malformed line
    Strict,
}

/// Global configuration for a ranking batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Directory containing `yob<YYYY>.txt` files
    pub input_dir: PathBuf,

    /// Directory receiving the twelve reports per year
    pub output_dir: PathBuf,

    /// Length of the top-N slices
    pub top_n: usize,

    /// Handling of malformed input lines
    pub record_policy: RecordPolicy,

    /// Explicit years to process instead of discovering them
    pub years: Option<Vec<String>>,

    /// Draw a progress bar while processing
    pub show_progress: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            top_n: DEFAULT_TOP_N,
            record_policy: RecordPolicy::Permissive,
            years: None,
            show_progress: true,
        }
    }
}

impl RankingConfig {
    /// Create configuration reading from a custom input directory
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    /// Create configuration writing to a custom output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the top-N slice length
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Reject malformed lines instead of passing them through
    pub fn with_strict_records(mut self) -> Self {
        self.record_policy = RecordPolicy::Strict;
        self
    }

    /// Process only the given years
    pub fn with_years(mut self, years: Vec<String>) -> Self {
        self.years = Some(years);
        self
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Check values that would otherwise fail every year the same way
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(RankingError::Configuration {
                message: "top-N size must be at least 1".to_string(),
            });
        }

        if let Some(years) = &self.years {
            if let Some(bad) = years
                .iter()
                .find(|y| y.len() != 4 || !y.chars().all(|c| c.is_ascii_digit()))
            {
                return Err(RankingError::Configuration {
                    message: format!("'{}' is not a 4-digit year", bad),
                });
            }
        }

        debug!(
            "Configuration: input={}, output={}, top_n={}, policy={:?}",
            self.input_dir.display(),
            self.output_dir.display(),
            self.top_n,
            self.record_policy
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = RankingConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("./raw/year"));
        assert_eq!(config.output_dir, PathBuf::from("./name-rankings"));
        assert_eq!(config.top_n, 1000);
        assert_eq!(config.record_policy, RecordPolicy::Permissive);
        assert!(config.years.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = RankingConfig::default()
            .with_input_dir("in")
            .with_output_dir("out")
            .with_top_n(10)
            .with_strict_records()
            .with_years(vec!["1990".to_string()])
            .without_progress();

        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.top_n, 10);
        assert_eq!(config.record_policy, RecordPolicy::Strict);
        assert_eq!(config.years, Some(vec!["1990".to_string()]));
        assert!(!config.show_progress);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_top = RankingConfig::default().with_top_n(0);
        assert!(matches!(
            zero_top.validate(),
            Err(RankingError::Configuration { .. })
        ));

        let bad_year = RankingConfig::default().with_years(vec!["99".to_string()]);
        assert!(matches!(
            bad_year.validate(),
            Err(RankingError::Configuration { .. })
        ));
    }
}
