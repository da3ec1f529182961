//! Splitting a ranked year into its report groups.
//!
//! Every group borrows from the single ranked record list, so the six
//! collections can never disagree about a record's fields.

use crate::models::{Gender, GroupKind, NameRecord};
use tracing::debug;

/// One year's ranked records and the views derived from them
#[derive(Debug)]
pub struct YearDataset<'a> {
    year: String,
    top_n: usize,
    all: Vec<&'a NameRecord>,
    girls: Vec<&'a NameRecord>,
    boys: Vec<&'a NameRecord>,
}

impl<'a> YearDataset<'a> {
    /// Partition ranked records by gender. Order is inherited from `records`.
    pub fn partition(year: impl Into<String>, records: &'a [NameRecord], top_n: usize) -> Self {
        let all: Vec<&NameRecord> = records.iter().collect();
        let girls: Vec<&NameRecord> = records
            .iter()
            .filter(|r| r.gender == Gender::Female)
            .collect();
        let boys: Vec<&NameRecord> = records
            .iter()
            .filter(|r| r.gender == Gender::Male)
            .collect();

        let year = year.into();
        debug!(
            "Year {}: {} records ({} girls, {} boys, {} other)",
            year,
            all.len(),
            girls.len(),
            boys.len(),
            all.len() - girls.len() - boys.len()
        );

        Self {
            year,
            top_n,
            all,
            girls,
            boys,
        }
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn all_names(&self) -> &[&'a NameRecord] {
        &self.all
    }

    pub fn girl_names(&self) -> &[&'a NameRecord] {
        &self.girls
    }

    pub fn boy_names(&self) -> &[&'a NameRecord] {
        &self.boys
    }

    pub fn top_all(&self) -> &[&'a NameRecord] {
        top(&self.all, self.top_n)
    }

    pub fn top_girls(&self) -> &[&'a NameRecord] {
        top(&self.girls, self.top_n)
    }

    pub fn top_boys(&self) -> &[&'a NameRecord] {
        top(&self.boys, self.top_n)
    }

    /// Records belonging to `kind`
    pub fn group(&self, kind: GroupKind) -> &[&'a NameRecord] {
        match kind {
            GroupKind::AllNames => self.all_names(),
            GroupKind::GirlNames => self.girl_names(),
            GroupKind::BoyNames => self.boy_names(),
            GroupKind::TopAllNames => self.top_all(),
            GroupKind::TopGirlNames => self.top_girls(),
            GroupKind::TopBoyNames => self.top_boys(),
        }
    }

    /// All six groups in output order
    pub fn groups(&self) -> impl Iterator<Item = (GroupKind, &[&'a NameRecord])> + '_ {
        GroupKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.group(kind)))
    }
}

fn top<'s, 'a>(records: &'s [&'a NameRecord], n: usize) -> &'s [&'a NameRecord] {
    &records[..n.min(records.len())]
}
