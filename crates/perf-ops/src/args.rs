//! CLI argument definitions for the row operations.
//!
//! The host harness owns its command line; this argument group is meant to
//! be flattened into it.

use clap::Args;
use perf_core::config::{
    DEFAULT_BATCH_THRESHOLD, DEFAULT_FAMILY, DEFAULT_QUALIFIER, DEFAULT_TABLE,
};
use perf_core::{ConfigError, RowOpConfig};

/// Arguments shared by all row operations.
#[derive(Args, Clone, Debug)]
pub struct RowOpArgs {
    /// Table to write to and read from
    #[arg(long, default_value = DEFAULT_TABLE, env = "PERF_EVAL_TABLE")]
    pub table: String,

    /// Column family of the test column
    #[arg(long, default_value = DEFAULT_FAMILY)]
    pub family: String,

    /// Column qualifier of the test column
    #[arg(long, default_value = DEFAULT_QUALIFIER)]
    pub qualifier: String,

    /// Write through the write-ahead log (pass `--write-to-wal false` to bypass it)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub write_to_wal: bool,

    /// Rows a batch write may buffer before the next row triggers a flush
    #[arg(long, default_value_t = DEFAULT_BATCH_THRESHOLD)]
    pub batch_threshold: usize,
}

impl RowOpArgs {
    /// Build a validated configuration from the parsed arguments.
    pub fn into_config(self) -> Result<RowOpConfig, ConfigError> {
        let config = RowOpConfig {
            table: self.table,
            family: self.family,
            qualifier: self.qualifier,
            write_to_wal: self.write_to_wal,
            batch_threshold: self.batch_threshold,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        row_op: RowOpArgs,
    }

    #[test]
    fn test_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["perf"]).unwrap();
        let mut config = cli.row_op.into_config().unwrap();
        // the table may come from the environment
        config.table = DEFAULT_TABLE.to_string();
        assert_eq!(config, RowOpConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "perf",
            "--table",
            "Other",
            "--family",
            "cf",
            "--write-to-wal",
            "false",
            "--batch-threshold",
            "10",
        ])
        .unwrap();
        let config = cli.row_op.into_config().unwrap();

        assert_eq!(config.table, "Other");
        assert_eq!(config.family, "cf");
        assert_eq!(config.qualifier, "data");
        assert!(!config.write_to_wal);
        assert_eq!(config.batch_threshold, 10);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let cli = Cli::try_parse_from(["perf", "--batch-threshold", "0"]).unwrap();
        assert!(cli.row_op.into_config().is_err());
    }
}
