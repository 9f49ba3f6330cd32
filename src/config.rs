//! Run configuration
//!
//! `CompressConfig` carries the settings every strategy needs: how summary
//! files are named and what to do with malformed records. Worker settings that
//! only the async strategy uses live in `strategy::WorkerConfig`.

use crate::io::csv_format::DEFAULT_OUTPUT_PREFIX;
use crate::types::{CompressError, MalformedRecordPolicy};

/// Settings shared by all processing strategies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressConfig {
    /// Prepended to a source's file name to name its summary
    pub output_prefix: String,

    /// What the aggregation driver does with malformed records
    pub malformed_policy: MalformedRecordPolicy,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            malformed_policy: MalformedRecordPolicy::default(),
        }
    }
}

impl CompressConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `CompressError::InvalidConfig` if the prefix is empty (the
    /// summary would overwrite its source) or contains a path separator (the
    /// summary would land outside the source's directory).
    pub fn new(
        output_prefix: &str,
        malformed_policy: MalformedRecordPolicy,
    ) -> Result<Self, CompressError> {
        if output_prefix.is_empty() {
            return Err(CompressError::invalid_config(
                "output prefix must not be empty",
            ));
        }

        if output_prefix.contains(['/', '\\']) {
            return Err(CompressError::invalid_config(&format!(
                "output prefix '{}' must not contain a path separator",
                output_prefix
            )));
        }

        Ok(Self {
            output_prefix: output_prefix.to_string(),
            malformed_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = CompressConfig::default();
        assert_eq!(config.output_prefix, "compressed_");
        assert_eq!(config.malformed_policy, MalformedRecordPolicy::Truncate);
    }

    #[rstest]
    #[case::default_prefix("compressed_", MalformedRecordPolicy::Truncate)]
    #[case::custom_prefix("summary-", MalformedRecordPolicy::Skip)]
    #[case::fail_policy("z", MalformedRecordPolicy::Fail)]
    fn test_valid_config(#[case] prefix: &str, #[case] policy: MalformedRecordPolicy) {
        let config = CompressConfig::new(prefix, policy).unwrap();
        assert_eq!(config.output_prefix, prefix);
        assert_eq!(config.malformed_policy, policy);
    }

    #[rstest]
    #[case::empty("")]
    #[case::unix_separator("out/")]
    #[case::windows_separator("out\\")]
    fn test_invalid_prefix(#[case] prefix: &str) {
        let result = CompressConfig::new(prefix, MalformedRecordPolicy::Truncate);
        assert!(matches!(result, Err(CompressError::InvalidConfig { .. })));
    }
}
