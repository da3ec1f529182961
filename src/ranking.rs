//! Overall rank computation.
//!
//! The only cross-record step of the pipeline: orders a year's records by
//! count, highest first, and numbers them from 1.

use crate::models::{NameRecord, RawRecord};
use std::cmp::Ordering;
use tracing::debug;

/// Sort a year's records by count descending and assign overall ranks.
///
/// The sort is stable, so records with equal counts keep their input order.
/// Records without a readable count sort after every counted record.
pub fn rank_records(mut records: Vec<RawRecord>) -> Vec<NameRecord> {
    records.sort_by(|a, b| compare_counts_descending(a.count, b.count));

    let ranked: Vec<NameRecord> = records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| NameRecord {
            name: raw.name,
            overall_rank: index as u32 + 1,
            gender_rank: raw.gender_rank,
            count: raw.count,
            gender: raw.gender,
        })
        .collect();

    debug!("Assigned overall ranks to {} records", ranked.len());
    ranked
}

fn compare_counts_descending(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
