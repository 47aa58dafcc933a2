use anyhow::{Context, Result};
use serde::Serialize;

use super::{Aggregator, GroupBy, GroupRate, GroupValue, ThemeBreakdown, ThemeCount};
use crate::process::labels::CreatorType;

/// Every number the report prints, computed once from an [`Aggregator`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub keywords_version: String,
    pub total: usize,
    pub documented: usize,
    /// Rows excluded for an unparseable release date.
    pub dropped: usize,
    pub overall_rate: f64,
    pub big_tech_rate: f64,
    pub independent_rate: f64,
    pub by_creator: Vec<GroupRate>,
    pub by_domain: Vec<GroupRate>,
    pub by_era: Vec<GroupRate>,
    pub by_year: Vec<GroupRate>,
    pub themes: Vec<ThemeCount>,
    pub themes_by_era: Vec<ThemeBreakdown>,
    pub themes_by_creator: Vec<ThemeBreakdown>,
}

impl Summary {
    pub fn from_aggregator(agg: &Aggregator<'_>, keywords_version: &str) -> Self {
        Self {
            keywords_version: keywords_version.to_string(),
            total: agg.total(),
            documented: agg.documented(),
            dropped: agg.set().dropped,
            overall_rate: agg.overall_rate(),
            big_tech_rate: agg.rate_of(
                GroupBy::Creator,
                GroupValue::Creator(CreatorType::BigTech),
            ),
            independent_rate: agg.rate_of(
                GroupBy::Creator,
                GroupValue::Creator(CreatorType::Independent),
            ),
            by_creator: agg.rate_by(GroupBy::Creator),
            by_domain: agg.rate_by(GroupBy::Domain),
            by_era: agg.rate_by(GroupBy::Era),
            by_year: agg.rate_by(GroupBy::Year),
            themes: agg.theme_counts(),
            themes_by_era: agg.theme_rate_by(GroupBy::Era),
            themes_by_creator: agg.theme_rate_by(GroupBy::Creator),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing summary")
    }
}
