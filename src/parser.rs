//! Year file parsing.
//!
//! Turns `name,gender,count` lines into [`RawRecord`]s, assigning each
//! record its gender rank from a per-year accumulator that counts records
//! of each gender in the order they appear.

use crate::config::RecordPolicy;
use crate::error::{RankingError, Result};
use crate::models::{Gender, RawRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Per-year gender rank accumulator, one counter per known gender
#[derive(Debug)]
pub struct GenderRankCounter {
    female: u32,
    male: u32,
}

impl Default for GenderRankCounter {
    fn default() -> Self {
        Self { female: 1, male: 1 }
    }
}

impl GenderRankCounter {
    /// Hand out the next rank for `gender`; unknown genders have no bucket
    pub fn next_rank(&mut self, gender: &Gender) -> Option<u32> {
        let slot = match gender {
            Gender::Female => &mut self.female,
            Gender::Male => &mut self.male,
            Gender::Other(_) => return None,
        };
        let rank = *slot;
        *slot += 1;
        Some(rank)
    }
}

/// Line parser holding the state for one year
#[derive(Debug, Default)]
pub struct RecordParser {
    policy: RecordPolicy,
    ranks: GenderRankCounter,
}

impl RecordParser {
    pub fn new(policy: RecordPolicy) -> Self {
        Self {
            policy,
            ranks: GenderRankCounter::default(),
        }
    }

    /// Parse one input line. `line_number` is 1-based and used for error reporting.
    pub fn parse_line(&mut self, line: &str, line_number: usize) -> Result<RawRecord> {
        let fields: Vec<&str> = line.split(',').collect();

        if self.policy == RecordPolicy::Strict && fields.len() != 3 {
            return Err(malformed(
                line_number,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        let name = fields[0];
        let gender_field = fields.get(1).copied().unwrap_or_default();
        let count_field = fields.get(2).copied().unwrap_or_default();

        let gender = Gender::from_code(gender_field);
        let count = match self.policy {
            RecordPolicy::Permissive => parse_count_lenient(count_field),
            RecordPolicy::Strict => Some(parse_count_strict(count_field, line_number)?),
        };

        if self.policy == RecordPolicy::Strict {
            if name.is_empty() {
                return Err(malformed(line_number, "empty name".to_string()));
            }
            if !gender.is_known() {
                return Err(malformed(
                    line_number,
                    format!("unknown gender '{}'", gender_field),
                ));
            }
        } else {
            if !gender.is_known() {
                warn!(
                    "Line {}: unknown gender '{}' for '{}', excluded from gender groups",
                    line_number, gender_field, name
                );
            }
            if count.is_none() {
                warn!(
                    "Line {}: unreadable count '{}' for '{}'",
                    line_number, count_field, name
                );
            }
        }

        let gender_rank = self.ranks.next_rank(&gender);

        Ok(RawRecord {
            name: name.to_string(),
            gender,
            count,
            gender_rank,
        })
    }

    /// Parse every non-blank line from `reader`, in order
    pub fn parse_reader<R: Read>(mut self, reader: R) -> Result<Vec<RawRecord>> {
        let reader = BufReader::new(reader);
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            records.push(self.parse_line(line, index + 1)?);
        }

        Ok(records)
    }
}

/// Read and parse a whole year file
pub fn parse_year_file(path: &Path, policy: RecordPolicy) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let records = RecordParser::new(policy).parse_reader(file)?;

    debug!("Parsed {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Leading-integer parse: optional sign, then digits; anything after is ignored
fn parse_count_lenient(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn parse_count_strict(value: &str, line_number: usize) -> Result<i64> {
    match value.trim().parse::<u32>() {
        Ok(count) => Ok(i64::from(count)),
        Err(_) => Err(malformed(
            line_number,
            format!("count '{}' is not a non-negative integer", value),
        )),
    }
}

fn malformed(line: usize, reason: String) -> RankingError {
    RankingError::MalformedRecord { line, reason }
}
