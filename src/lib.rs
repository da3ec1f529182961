//! Name Rankings Library
//!
//! Ranks yearly baby-name records and writes per-year reports.
//!
//! Each year's `yob<YYYY>.txt` file of `name,gender,count` lines is:
//! - parsed into records carrying a gender rank in input order
//! - sorted by count (stable, highest first) to assign overall ranks
//! - split into all/girl/boy groups plus their top-N prefixes
//! - written as CSV and JSON, twelve files per year
//!
//! Years are processed one at a time; a failing year is logged and the batch
//! moves on.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod models;
pub mod parser;
pub mod partition;
pub mod processor;
pub mod ranking;

// Re-export commonly used types
pub use config::{RankingConfig, RecordPolicy};
pub use error::{RankingError, Result};
pub use models::{Gender, GroupKind, NameRecord, ProcessingStats, RawRecord, YearOutcome};
pub use partition::YearDataset;
pub use processor::RankingProcessor;
