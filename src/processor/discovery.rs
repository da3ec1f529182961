//! Year file discovery
//!
//! Enumerates the input directory for `yob<YYYY>.txt` files and returns
//! their years in ascending order.

use crate::constants::{YEAR_FILE_EXTENSION, YEAR_FILE_PATTERN, YEAR_FILE_PREFIX};
use crate::error::{RankingError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File discovery component for year files
#[derive(Debug)]
pub struct YearDiscovery {
    input_dir: PathBuf,
    pattern: Regex,
}

impl YearDiscovery {
    /// Create a new discovery instance for `input_dir`
    pub fn new(input_dir: PathBuf) -> Result<Self> {
        let pattern = Regex::new(YEAR_FILE_PATTERN).map_err(|e| RankingError::Configuration {
            message: format!("invalid year file pattern: {}", e),
        })?;

        Ok(Self { input_dir, pattern })
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Location of the input file for `year`, whether or not it exists
    pub fn year_file_path(&self, year: &str) -> PathBuf {
        self.input_dir.join(format!(
            "{}{}.{}",
            YEAR_FILE_PREFIX, year, YEAR_FILE_EXTENSION
        ))
    }

    /// Discover all years with an input file, sorted ascending
    pub fn discover_years(&self) -> Result<Vec<String>> {
        if !self.input_dir.is_dir() {
            return Err(RankingError::InputDirectoryNotFound {
                path: self.input_dir.clone(),
            });
        }

        debug!("Searching for year files in: {}", self.input_dir.display());

        let mut years = Vec::new();
        for entry in fs::read_dir(&self.input_dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            if let Some(year) = file_name.to_str().and_then(|name| self.extract_year(name)) {
                years.push(year);
            }
        }

        years.sort();
        years.dedup();

        debug!("Found {} year files", years.len());
        Ok(years)
    }

    /// Year captured from a file name matching the year-file pattern
    pub fn extract_year(&self, file_name: &str) -> Option<String> {
        self.pattern
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_year() {
        let discovery = YearDiscovery::new(PathBuf::from(".")).unwrap();
        assert_eq!(discovery.extract_year("yob1880.txt"), Some("1880".to_string()));
        assert_eq!(discovery.extract_year("yob880.txt"), None);
        assert_eq!(discovery.extract_year("yob18800.txt"), None);
        assert_eq!(discovery.extract_year("yob1880.txt.bak"), None);
        assert_eq!(discovery.extract_year("NationalReadMe.pdf"), None);
    }

    #[test]
    fn test_discover_years_sorted() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["yob2001.txt", "yob1999.txt", "readme.txt", "yob2000.csv"] {
            fs::write(temp_dir.path().join(name), "Emma,F,1").unwrap();
        }
        fs::create_dir(temp_dir.path().join("yob1900.txt.d")).unwrap();

        let discovery = YearDiscovery::new(temp_dir.path().to_path_buf()).unwrap();
        let years = discovery.discover_years().unwrap();

        assert_eq!(years, vec!["1999".to_string(), "2001".to_string()]);
    }

    #[test]
    fn test_missing_input_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("raw").join("year");

        let discovery = YearDiscovery::new(missing.clone()).unwrap();
        match discovery.discover_years() {
            Err(RankingError::InputDirectoryNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected InputDirectoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_year_file_path() {
        let discovery = YearDiscovery::new(PathBuf::from("raw/year")).unwrap();
        assert_eq!(
            discovery.year_file_path("2020"),
            PathBuf::from("raw/year/yob2020.txt")
        );
    }
}
