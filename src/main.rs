// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use data_processor::config::consts::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LOG_FILTER};
use data_processor::config::{
    configuration_from_env, load_configuration, merge_configuration, parse_assignments,
};
use data_processor::processors::{ConfigurableProcessor, Configuration};
use data_processor::traits::Processor;
use data_processor::utils::{calculate_sum, to_pretty_json, ContentFetcher, HttpFetcher};

#[derive(Parser)]
#[command(name = "data-processor")]
#[command(about = "Sum numbers, pretty-print JSON, fetch URLs and resolve processor output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum a list of integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Pretty-print a JSON document ("-" reads stdin)
    Format {
        input: String,
    },
    /// Fetch a URL and print the response body
    Fetch {
        url: String,
        /// Request timeout in seconds
        #[arg(short, long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
        timeout: u64,
    },
    /// Build a processor and print its resolved output
    Process {
        /// JSON, YAML or TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override a key, e.g. --set output=report.csv
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Ignore DATA_PROCESSOR_* environment variables
        #[arg(long)]
        no_env: bool,
        /// Use the default processor and ignore all other sources
        #[arg(long, conflicts_with_all = ["config", "set", "no_env"])]
        default: bool,
        /// Also print the processor's configuration as JSON
        #[arg(long)]
        show_config: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sum { numbers } => {
            let total = calculate_sum(&numbers).context("sum overflows a 64-bit integer")?;
            println!("Sum: {}", total);
        }
        Commands::Format { input } => {
            let raw = if input == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            } else {
                input
            };
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("input is not valid JSON")?;
            println!("{}", to_pretty_json(&value)?);
        }
        Commands::Fetch { url, timeout } => {
            let fetcher = HttpFetcher::new(Duration::from_secs(timeout))?;
            let body = fetcher.fetch(&url).await?;
            print!("{}", body);
        }
        Commands::Process {
            config,
            set,
            no_env,
            default,
            show_config,
        } => {
            let processor = if default {
                ConfigurableProcessor::create_default()
            } else {
                ConfigurableProcessor::new(assemble_configuration(config, &set, no_env)?)
            };

            report(&processor);
            if show_config {
                println!("{}", to_pretty_json(&processor.get_config())?);
            }
        }
    }

    Ok(())
}

/// File first, then environment, then `--set` assignments.
fn assemble_configuration(
    path: Option<PathBuf>,
    assignments: &[String],
    no_env: bool,
) -> Result<Configuration> {
    let mut config = match path {
        Some(path) => load_configuration(&path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Configuration::new(),
    };

    if !no_env {
        config = merge_configuration(config, configuration_from_env());
    }

    let overrides = parse_assignments(assignments)?;
    Ok(merge_configuration(config, overrides))
}

fn report(processor: &dyn Processor) {
    tracing::debug!(processor = processor.name(), "resolving output");
    println!("{}", processor.process());
}
