//! Command-line interface components.

use crate::config::RankingConfig;
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_N, LOG_TARGET};
use crate::models::ProcessingStats;
use crate::processor::RankingProcessor;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;

/// Rank yearly baby-name records and write per-year CSV and JSON reports
#[derive(Parser, Debug, Clone)]
#[command(name = "name-rankings")]
#[command(about = "Rank yearly baby-name records and write per-year CSV and JSON reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing yob<YYYY>.txt files
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory receiving the reports (created if absent)
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of records in each top-N report
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Process only these years (comma-separated) instead of every file found
    #[arg(long = "years", value_name = "LIST", value_delimiter = ',')]
    pub years: Option<Vec<String>>,

    /// Fail a year on the first malformed line instead of passing it through
    #[arg(long)]
    pub strict: bool,

    /// Output format for the batch summary
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Rendering of the batch summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Args {
    /// Log level implied by -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the processing configuration from the arguments
    pub fn to_config(&self) -> RankingConfig {
        let mut config = RankingConfig::default()
            .with_input_dir(self.input_dir.clone())
            .with_output_dir(self.output_dir.clone())
            .with_top_n(self.top_n);

        if self.strict {
            config = config.with_strict_records();
        }
        if let Some(years) = &self.years {
            config = config.with_years(years.iter().map(|y| y.trim().to_string()).collect());
        }
        if self.quiet || self.output_format == OutputFormat::Json {
            config = config.without_progress();
        }

        config
    }
}

/// Install the tracing subscriber; `RUST_LOG` overrides the -v/-q level
pub fn init_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Run the batch described by `args` and report the outcome
pub fn run(args: &Args) -> Result<ProcessingStats> {
    let config = args.to_config();
    let human = args.output_format == OutputFormat::Human && !args.quiet;

    if human {
        println!("{}", "Starting name ranking batch".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), config.input_dir.display());
        println!("  {} {}", "Output:".bright_cyan(), config.output_dir.display());
    }

    let processor = RankingProcessor::new(config).context("Invalid configuration")?;
    let stats = processor
        .process()
        .context("Ranking batch could not start")?;

    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Human if human => print_summary(&stats),
        OutputFormat::Human => {}
    }

    Ok(stats)
}

fn print_summary(stats: &ProcessingStats) {
    if stats.years_found == 0 {
        println!("\n{}", "No year files found".bright_yellow());
        return;
    }

    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}/{}",
        "Years processed:".bright_cyan(),
        stats.years_processed.to_string().bright_white(),
        stats.years_found
    );
    if stats.years_skipped > 0 {
        println!(
            "  {} {}",
            "Years skipped:".bright_yellow(),
            stats.years_skipped.to_string().bright_yellow()
        );
    }
    if stats.years_failed > 0 {
        println!(
            "  {} {}",
            "Years failed:".bright_red(),
            stats.years_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Records ranked:".bright_cyan(),
        stats.records_ranked.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files written:".bright_cyan(),
        stats.files_written.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Output files written to:".bright_cyan(),
        stats.output_path.display()
    );
}
