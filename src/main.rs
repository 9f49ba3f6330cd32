//! Order Compressor CLI
//!
//! Command-line interface for compressing customer order logs.
//!
//! # Usage
//!
//! ```bash
//! order-compressor compress                       # every order log in the current directory
//! order-compressor compress logs/ --strategy async --max-concurrent 4
//! order-compressor compress logs/ --on-malformed skip --prefix summary_
//! order-compressor decode 518 515
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `info`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid configuration, unreadable directory, a source failed, etc.)

use order_compressor::cli::{self, Command, CompressArgs, DecodeArgs};
use order_compressor::core::decode;
use order_compressor::io::DirectoryDiscovery;
use order_compressor::strategy;
use order_compressor::CompressError;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();

    let result = match args.command {
        Command::Compress(compress) => run_compress(&compress),
        Command::Decode(decode_args) => {
            run_decode(&decode_args);
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run_compress(args: &CompressArgs) -> Result<(), CompressError> {
    let config = args.to_compress_config()?;

    let workers = if matches!(args.strategy, cli::StrategyType::Async) {
        Some(args.to_worker_config())
    } else {
        None
    };

    let discovery = DirectoryDiscovery::new(&args.directory, &config.output_prefix);
    let strategy = strategy::create_strategy(args.strategy.clone(), workers, config);

    let report = strategy::compress_discovered(&discovery, strategy.as_ref())?;
    log::info!(
        "Compression finished: {} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );

    if report.failed() > 0 {
        return Err(CompressError::runtime(&format!(
            "{} of {} sources failed",
            report.failed(),
            report.len()
        )));
    }

    Ok(())
}

fn run_decode(args: &DecodeArgs) {
    for &value in &args.values {
        let decoded = decode(value);
        println!(
            "{}: average order size {}, {} unique customers",
            value, decoded.avg_order_size, decoded.unique_count
        );
    }
}
