//! Application constants for the name ranking pipeline
//!
//! Default locations, the year-file naming convention, output group names
//! and report layout shared across the crate.

// =============================================================================
// Input and Output Locations
// =============================================================================

/// Directory holding one plaintext file per year
pub const DEFAULT_INPUT_DIR: &str = "./raw/year";

/// Directory receiving the generated reports (created if absent)
pub const DEFAULT_OUTPUT_DIR: &str = "./name-rankings";

/// Year files are named `yob<YYYY>.txt`
pub const YEAR_FILE_PREFIX: &str = "yob";
pub const YEAR_FILE_EXTENSION: &str = "txt";

/// Regex selecting year files and capturing the 4-digit year
pub const YEAR_FILE_PATTERN: &str = r"^yob(\d{4})\.txt$";

// =============================================================================
// Ranking and Report Layout
// =============================================================================

/// Size of the top-N slices written alongside the full lists
pub const DEFAULT_TOP_N: usize = 1000;

/// Gender codes recognised in the input
pub const FEMALE_CODE: &str = "F";
pub const MALE_CODE: &str = "M";

/// Header row of every CSV report, in field order
pub const CSV_HEADER: [&str; 5] = ["name", "overallRank", "genderRank", "count", "gender"];

/// Report formats emitted for every group
pub const CSV_EXTENSION: &str = "csv";
pub const JSON_EXTENSION: &str = "json";

/// Two artifacts (CSV + JSON) for each of the six groups
pub const FILES_PER_YEAR: usize = 12;

// =============================================================================
// Logging
// =============================================================================

/// Tracing target used for the default log filter
pub const LOG_TARGET: &str = "name_rankings";
