//! Batch processing engine.
//!
//! Runs the per-year pipeline (parse, rank, partition, render, write) for
//! every year in ascending order. A failing year is logged and recorded in
//! the statistics; it never stops the batch.

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::YearDiscovery, writer::ReportWriter};

use crate::config::RankingConfig;
use crate::error::{RankingError, Result};
use crate::models::{ProcessingStats, YearOutcome};
use crate::parser::parse_year_file;
use crate::partition::YearDataset;
use crate::ranking::rank_records;

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Main processor for a ranking batch
#[derive(Debug)]
pub struct RankingProcessor {
    config: RankingConfig,
    discovery: YearDiscovery,
    writer: ReportWriter,
}

impl RankingProcessor {
    /// Create a new processor, validating the configuration
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            discovery: YearDiscovery::new(config.input_dir.clone())?,
            writer: ReportWriter::new(config.output_dir.clone()),
            config,
        })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Main processing entry point.
    ///
    /// Fails only on setup problems: a missing input directory or an output
    /// directory that cannot be created.
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();

        if !self.discovery.input_dir().is_dir() {
            return Err(RankingError::InputDirectoryNotFound {
                path: self.discovery.input_dir().to_path_buf(),
            });
        }
        self.writer.ensure_output_dir()?;

        let years = self.years_to_process()?;
        info!("Found {} year files to process", years.len());

        let mut stats = ProcessingStats {
            years_found: years.len(),
            output_path: self.writer.output_dir().to_path_buf(),
            ..Default::default()
        };

        if years.is_empty() {
            warn!(
                "No year files found in {}",
                self.discovery.input_dir().display()
            );
            stats.processing_time_ms = start_time.elapsed().as_millis();
            return Ok(stats);
        }

        let pb = self.progress_bar(years.len());
        for year in &years {
            pb.set_message(format!("Year {}", year));
            let outcome = self.process_year(year);
            stats.record(&outcome);
            pb.inc(1);
        }
        pb.finish_with_message("All years processed");

        stats.processing_time_ms = start_time.elapsed().as_millis();
        debug!(
            "Batch finished in {}ms: {} processed, {} skipped, {} failed",
            stats.processing_time_ms, stats.years_processed, stats.years_skipped, stats.years_failed
        );

        Ok(stats)
    }

    /// Run the pipeline for one year. Errors are contained in the returned outcome.
    pub fn process_year(&self, year: &str) -> YearOutcome {
        let path = self.discovery.year_file_path(year);

        if !path.is_file() {
            warn!("File not found: {}", path.display());
            return YearOutcome::InputMissing {
                year: year.to_string(),
                path,
            };
        }

        info!("Processing year {}...", year);

        let mut files_written = 0;
        match self.run_year(year, &path, &mut files_written) {
            Ok(records) => {
                info!(
                    "Completed processing year {} - generated {} files",
                    year, files_written
                );
                YearOutcome::Completed {
                    year: year.to_string(),
                    records,
                    files_written,
                }
            }
            Err(e) => {
                error!("Error processing year {}: {}", year, e);
                YearOutcome::Failed {
                    year: year.to_string(),
                    reason: e.to_string(),
                    files_written,
                }
            }
        }
    }

    /// Parse, rank, partition and write one year, counting files as they land
    fn run_year(&self, year: &str, path: &Path, files_written: &mut usize) -> Result<usize> {
        let raw = parse_year_file(path, self.config.record_policy)?;
        let ranked = rank_records(raw);
        let dataset = YearDataset::partition(year, &ranked, self.config.top_n);

        for (kind, records) in dataset.groups() {
            self.writer.write_csv(kind, year, records)?;
            *files_written += 1;
            self.writer.write_json(kind, year, records)?;
            *files_written += 1;
        }

        Ok(ranked.len())
    }

    /// Explicit years (sorted, deduplicated) or every year found on disk
    fn years_to_process(&self) -> Result<Vec<String>> {
        match &self.config.years {
            Some(years) => {
                let mut years = years.clone();
                years.sort();
                years.dedup();
                Ok(years)
            }
            None => self.discovery.discover_years(),
        }
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}
