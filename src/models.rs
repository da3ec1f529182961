//! Core data structures for the name ranking pipeline.
//!
//! Records move through two phases: the parser builds [`RawRecord`]s in
//! input order, and the rank computer turns them into fully populated
//! [`NameRecord`]s once the whole year is known.

use crate::constants::{FEMALE_CODE, MALE_CODE};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Gender category of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    /// Any other literal value found in the input
    Other(String),
}

impl Gender {
    /// Map a raw gender field to its category
    pub fn from_code(code: &str) -> Self {
        match code {
            FEMALE_CODE => Gender::Female,
            MALE_CODE => Gender::Male,
            other => Gender::Other(other.to_string()),
        }
    }

    /// The literal code as it appears in input and output
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Female => FEMALE_CODE,
            Gender::Male => MALE_CODE,
            Gender::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Gender::Other(_))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A parsed input line, before overall ranks are known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub gender: Gender,
    /// `None` when the count field could not be read as an integer
    pub count: Option<i64>,
    /// Position among records of the same gender in input order; `None` for unknown genders
    pub gender_rank: Option<u32>,
}

/// A fully ranked record, serialized identically for CSV and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    pub name: String,
    pub overall_rank: u32,
    pub gender_rank: Option<u32>,
    pub count: Option<i64>,
    pub gender: Gender,
}

/// The six record collections written for every year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    AllNames,
    GirlNames,
    BoyNames,
    TopAllNames,
    TopGirlNames,
    TopBoyNames,
}

impl GroupKind {
    /// All groups in output order
    pub const ALL: [GroupKind; 6] = [
        GroupKind::AllNames,
        GroupKind::GirlNames,
        GroupKind::BoyNames,
        GroupKind::TopAllNames,
        GroupKind::TopGirlNames,
        GroupKind::TopBoyNames,
    ];

    /// Group name used as the report file stem
    pub fn file_stem(&self) -> &'static str {
        match self {
            GroupKind::AllNames => "all-names",
            GroupKind::GirlNames => "girl-names",
            GroupKind::BoyNames => "boy-names",
            GroupKind::TopAllNames => "top-all-names",
            GroupKind::TopGirlNames => "top-girl-names",
            GroupKind::TopBoyNames => "top-boy-names",
        }
    }

    /// Report file name for this group, year and extension
    pub fn file_name(&self, year: &str, extension: &str) -> String {
        format!("{}-{}.{}", self.file_stem(), year, extension)
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Terminal state of one year's pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearOutcome {
    /// All reports written
    Completed {
        year: String,
        records: usize,
        files_written: usize,
    },
    /// The year's input file does not exist
    InputMissing { year: String, path: PathBuf },
    /// Processing stopped on an error; files written before it remain on disk
    Failed {
        year: String,
        reason: String,
        files_written: usize,
    },
}

impl YearOutcome {
    pub fn year(&self) -> &str {
        match self {
            YearOutcome::Completed { year, .. }
            | YearOutcome::InputMissing { year, .. }
            | YearOutcome::Failed { year, .. } => year,
        }
    }

    pub fn files_written(&self) -> usize {
        match self {
            YearOutcome::Completed { files_written, .. }
            | YearOutcome::Failed { files_written, .. } => *files_written,
            YearOutcome::InputMissing { .. } => 0,
        }
    }
}

/// Batch processing statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProcessingStats {
    pub years_found: usize,
    pub years_processed: usize,
    pub years_skipped: usize,
    pub years_failed: usize,
    pub records_ranked: usize,
    pub files_written: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    /// Fold one year's outcome into the running totals
    pub fn record(&mut self, outcome: &YearOutcome) {
        match outcome {
            YearOutcome::Completed { records, .. } => {
                self.years_processed += 1;
                self.records_ranked += records;
            }
            YearOutcome::InputMissing { .. } => self.years_skipped += 1,
            YearOutcome::Failed { .. } => self.years_failed += 1,
        }
        self.files_written += outcome.files_written();
    }
}
