// src/stats/mod.rs
pub mod summary;

pub use summary::Summary;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::process::classify::{ClassifiedRecord, ClassifiedSet};
use crate::process::labels::{CreatorType, Domain, Era};

/// Record attribute a breakdown is grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Creator,
    Domain,
    Era,
    Year,
}

/// A concrete group value. Ordering within a variant is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupValue {
    Creator(CreatorType),
    Domain(Domain),
    Era(Era),
    Year(i32),
}

impl GroupBy {
    pub fn value_of(self, rec: &ClassifiedRecord) -> GroupValue {
        match self {
            GroupBy::Creator => GroupValue::Creator(rec.creator_label),
            GroupBy::Domain => GroupValue::Domain(rec.domain),
            GroupBy::Era => GroupValue::Era(rec.era),
            GroupBy::Year => GroupValue::Year(rec.release_year),
        }
    }
}

impl GroupValue {
    pub fn label(&self) -> String {
        match self {
            GroupValue::Creator(c) => c.label().to_string(),
            GroupValue::Domain(d) => d.label().to_string(),
            GroupValue::Era(e) => e.label().to_string(),
            GroupValue::Year(y) => y.to_string(),
        }
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for GroupValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Documentation rate of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRate {
    pub key: GroupValue,
    pub count: usize,
    pub documented: usize,
    /// Percentage, unrounded.
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeCount {
    pub name: String,
    pub count: usize,
    /// Share of the documented subset, unrounded percentage.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeGroupRate {
    pub key: GroupValue,
    pub documented: usize,
    pub percent: f64,
}

/// One theme's share per group value, over documented records only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeBreakdown {
    pub theme: String,
    pub groups: Vec<ThemeGroupRate>,
}

/// `part / whole` as a percentage; 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Read-only queries over a classified set.
pub struct Aggregator<'a> {
    set: &'a ClassifiedSet,
}

impl<'a> Aggregator<'a> {
    pub fn new(set: &'a ClassifiedSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &'a ClassifiedSet {
        self.set
    }

    pub fn total(&self) -> usize {
        self.set.records.len()
    }

    pub fn documented(&self) -> usize {
        self.documented_records().count()
    }

    fn documented_records(&self) -> impl Iterator<Item = &'a ClassifiedRecord> {
        self.set.records.iter().filter(|r| r.has_ethics)
    }

    /// Share of documented records, 0 for an empty set.
    pub fn overall_rate(&self) -> f64 {
        percent(self.documented(), self.total())
    }

    /// Documentation rate and size per group, in group order.
    pub fn rate_by(&self, by: GroupBy) -> Vec<GroupRate> {
        let mut groups: BTreeMap<GroupValue, (usize, usize)> = BTreeMap::new();
        for rec in &self.set.records {
            let entry = groups.entry(by.value_of(rec)).or_default();
            entry.0 += 1;
            if rec.has_ethics {
                entry.1 += 1;
            }
        }
        groups
            .into_iter()
            .map(|(key, (count, documented))| GroupRate {
                key,
                count,
                documented,
                rate: percent(documented, count),
            })
            .collect()
    }

    /// Rate of a single group value; 0 when no record falls in it.
    pub fn rate_of(&self, by: GroupBy, key: GroupValue) -> f64 {
        self.rate_by(by)
            .into_iter()
            .find(|g| g.key == key)
            .map(|g| g.rate)
            .unwrap_or(0.0)
    }

    /// Per-theme counts over documented records, most frequent first.
    /// Ties keep theme definition order.
    pub fn theme_counts(&self) -> Vec<ThemeCount> {
        let documented = self.documented();
        let mut counts: Vec<ThemeCount> = self
            .set
            .theme_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let count = self
                    .documented_records()
                    .filter(|r| r.themes.get(i).copied().unwrap_or(false))
                    .count();
                ThemeCount {
                    name: name.clone(),
                    count,
                    percent: percent(count, documented),
                }
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// For each theme (definition order), its share among documented records per group.
    pub fn theme_rate_by(&self, by: GroupBy) -> Vec<ThemeBreakdown> {
        let n_themes = self.set.theme_names.len();
        let mut groups: BTreeMap<GroupValue, (usize, Vec<usize>)> = BTreeMap::new();
        for rec in self.documented_records() {
            let entry = groups
                .entry(by.value_of(rec))
                .or_insert_with(|| (0, vec![0; n_themes]));
            entry.0 += 1;
            for (hits, flag) in entry.1.iter_mut().zip(&rec.themes) {
                if *flag {
                    *hits += 1;
                }
            }
        }

        self.set
            .theme_names
            .iter()
            .enumerate()
            .map(|(i, theme)| ThemeBreakdown {
                theme: theme.clone(),
                groups: groups
                    .iter()
                    .map(|(key, (documented, hits))| ThemeGroupRate {
                        key: *key,
                        documented: *documented,
                        percent: percent(hits[i], *documented),
                    })
                    .collect(),
            })
            .collect()
    }
}
