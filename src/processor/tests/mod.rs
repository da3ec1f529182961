//! Integration tests for the processor module
//!
//! Tests the complete per-year pipeline against temporary input and output
//! directories.


use crate::config::RankingConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create `raw/year` under `temp_dir` holding the given year files
pub fn create_input_dir(temp_dir: &TempDir, years: &[(&str, &str)]) -> PathBuf {
    let input_dir = temp_dir.path().join("raw").join("year");
    fs::create_dir_all(&input_dir).unwrap();
    for (year, contents) in years {
        fs::write(input_dir.join(format!("yob{}.txt", year)), contents).unwrap();
    }
    input_dir
}

/// Test configuration writing into `temp_dir/name-rankings` without a progress bar
pub fn test_config(temp_dir: &TempDir, input_dir: &Path) -> RankingConfig {
    RankingConfig::default()
        .with_input_dir(input_dir)
        .with_output_dir(temp_dir.path().join("name-rankings"))
        .without_progress()
}

/// Names of the files present in `dir`, sorted
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
