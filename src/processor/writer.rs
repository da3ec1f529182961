//! Report writing module
//!
//! Writes the CSV and JSON rendering of each record group into the output
//! directory. Writes are not transactional: files written before a failure
//! stay on disk.

use crate::constants::{CSV_EXTENSION, JSON_EXTENSION};
use crate::error::{RankingError, Result};
use crate::format::{render_csv, render_json};
use crate::models::{GroupKind, NameRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writer for per-year group reports
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory (and parents) if absent
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|source| RankingError::OutputDirectory {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Path of the report for `kind` in `year` with the given extension
    pub fn report_path(&self, kind: GroupKind, year: &str, extension: &str) -> PathBuf {
        self.output_dir.join(kind.file_name(year, extension))
    }

    /// Write the CSV report for a group
    pub fn write_csv(&self, kind: GroupKind, year: &str, records: &[&NameRecord]) -> Result<PathBuf> {
        let path = self.report_path(kind, year, CSV_EXTENSION);
        write_file(&path, &render_csv(records)?)?;
        Ok(path)
    }

    /// Write the JSON report for a group
    pub fn write_json(&self, kind: GroupKind, year: &str, records: &[&NameRecord]) -> Result<PathBuf> {
        let path = self.report_path(kind, year, JSON_EXTENSION);
        write_file(&path, &render_json(records, year)?)?;
        Ok(path)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| RankingError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use tempfile::TempDir;

    fn emma() -> NameRecord {
        NameRecord {
            name: "Emma".to_string(),
            overall_rank: 1,
            gender_rank: Some(1),
            count: Some(100),
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("name-rankings");

        let writer = ReportWriter::new(output.clone());
        writer.ensure_output_dir().unwrap();
        assert!(output.is_dir());

        // Idempotent
        writer.ensure_output_dir().unwrap();
    }

    #[test]
    fn test_ensure_output_dir_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = ReportWriter::new(blocker.join("out"));
        assert!(matches!(
            writer.ensure_output_dir(),
            Err(RankingError::OutputDirectory { .. })
        ));
    }

    #[test]
    fn test_write_group_reports() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp_dir.path().to_path_buf());
        let record = emma();

        let csv_path = writer
            .write_csv(GroupKind::GirlNames, "2020", &[&record])
            .unwrap();
        let json_path = writer
            .write_json(GroupKind::GirlNames, "2020", &[&record])
            .unwrap();

        assert_eq!(csv_path, temp_dir.path().join("girl-names-2020.csv"));
        assert_eq!(json_path, temp_dir.path().join("girl-names-2020.json"));
        assert_eq!(
            fs::read_to_string(csv_path).unwrap(),
            "name,overallRank,genderRank,count,gender\nEmma,1,1,100,F"
        );
        assert!(fs::read_to_string(json_path).unwrap().contains("\"year\": \"2020\""));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp_dir.path().join("absent"));

        match writer.write_csv(GroupKind::AllNames, "2020", &[]) {
            Err(RankingError::WriteFailed { path, .. }) => {
                assert!(path.ends_with("all-names-2020.csv"));
            }
            other => panic!("Expected WriteFailed, got {:?}", other),
        }
    }
}
