use crate::config::CompressConfig;
use crate::io::csv_format::DEFAULT_OUTPUT_PREFIX;
use crate::strategy::WorkerConfig;
use crate::types::{CompressError, MalformedRecordPolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Compress customer order logs into per-customer summaries
#[derive(Parser, Debug)]
#[command(name = "order-compressor")]
#[command(about = "Compress customer order logs into per-customer summaries", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress every order log in a directory
    Compress(CompressArgs),

    /// Decode compressed integers into average order size and customer count
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Directory scanned for order logs
    #[arg(
        value_name = "DIR",
        default_value = ".",
        help = "Directory containing order log CSV files"
    )]
    pub directory: PathBuf,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' compresses files one by one, 'async' in parallel"
    )]
    pub strategy: StrategyType,

    /// What to do with malformed records
    #[arg(
        long = "on-malformed",
        value_name = "POLICY",
        default_value = "truncate",
        help = "Malformed record policy: 'truncate', 'skip' or 'fail'"
    )]
    pub malformed_policy: MalformedRecordPolicy,

    /// Prefix of summary file names
    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        default_value = DEFAULT_OUTPUT_PREFIX,
        help = "Prefix prepended to each source file name to name its summary"
    )]
    pub prefix: String,

    /// Records per read batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records read per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of files compressed concurrently (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of files compressed concurrently (default: CPU cores)"
    )]
    pub max_concurrent_sources: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded values read from a summary file
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<u64>,
}

/// Available processing strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CompressArgs {
    /// Build the shared configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns `CompressError::InvalidConfig` if the prefix is rejected.
    pub fn to_compress_config(&self) -> Result<CompressConfig, CompressError> {
        CompressConfig::new(&self.prefix, self.malformed_policy)
    }

    /// Create a WorkerConfig from CLI arguments
    ///
    /// Missing values use the defaults; zero values fall back to the defaults
    /// with a warning.
    pub fn to_worker_config(&self) -> WorkerConfig {
        if self.batch_size.is_some() || self.max_concurrent_sources.is_some() {
            let default = WorkerConfig::default();
            WorkerConfig::new(
                self.batch_size.unwrap_or(default.batch_size()),
                self.max_concurrent_sources
                    .unwrap_or(default.max_concurrent_sources()),
            )
        } else {
            WorkerConfig::default()
        }
    }
}
