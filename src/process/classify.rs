use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{AnalysisConfig, DomainRule, ThemeKeywords};
use crate::process::columns::ResolvedColumns;
use crate::process::labels::{CreatorType, Domain, Era};
use crate::process::utils::{contains_any, normalize_text};
use crate::source::{Cell, RawTable};

/// The four cells of one survey row the classifier looks at.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    pub ethics: &'a Cell,
    pub release_date: &'a Cell,
    pub creator: &'a Cell,
    pub task: &'a Cell,
}

impl<'a> RawRecord<'a> {
    pub fn from_table(table: &'a RawTable, row: usize, cols: &ResolvedColumns) -> Self {
        Self {
            ethics: table.cell(row, cols.ethics),
            release_date: table.cell(row, cols.release_date),
            creator: table.cell(row, cols.creator),
            task: table.cell(row, cols.task),
        }
    }
}

/// A survey row with every derived label attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    /// 0-based data row in the source sheet.
    pub row: usize,
    pub ethical_text: String,
    pub has_ethics: bool,
    pub release_year: i32,
    pub era: Era,
    pub is_big_tech: bool,
    pub creator_label: CreatorType,
    pub creator: String,
    pub task: String,
    pub domain: Domain,
    /// One flag per configured theme, same order as the config.
    pub themes: Vec<bool>,
}

/// Output of a classification pass. Read-only once built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifiedSet {
    pub theme_names: Vec<String>,
    pub records: Vec<ClassifiedRecord>,
    /// Rows left out because their release date did not parse.
    pub dropped: usize,
}

impl ClassifiedSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Recall-favoring check: anything long enough without a negative phrase counts.
pub fn has_ethics<S: AsRef<str>>(text: &str, negative_phrases: &[S], min_len: usize) -> bool {
    text.chars().count() >= min_len && !contains_any(text, negative_phrases)
}

/// [`has_ethics`] against every negative table of `cfg`, long forms included.
pub fn is_documented(text: &str, cfg: &AnalysisConfig) -> bool {
    has_ethics(text, &cfg.negative_phrases, cfg.min_ethics_len)
        && !contains_any(text, &cfg.negative_long_forms)
}

pub fn is_big_tech<S: AsRef<str>>(creator: &str, organizations: &[S]) -> bool {
    contains_any(&creator.to_lowercase(), organizations)
}

/// First rule with a keyword in `task` wins; no match means `Other`.
pub fn categorize_domain(task: &str, rules: &[DomainRule]) -> Domain {
    rules
        .iter()
        .find(|r| contains_any(task, &r.keywords))
        .map(|r| r.domain)
        .unwrap_or(Domain::Other)
}

/// Theme flags are all false for undocumented text.
pub fn theme_flags(text: &str, has_ethics: bool, themes: &[ThemeKeywords]) -> Vec<bool> {
    themes
        .iter()
        .map(|t| has_ethics && contains_any(text, &t.keywords))
        .collect()
}

/// Classify one row; `None` when the release date cannot be parsed.
pub fn classify_row(
    row: usize,
    raw: &RawRecord<'_>,
    cfg: &AnalysisConfig,
) -> Option<ClassifiedRecord> {
    let ethical_text = normalize_text(&raw.ethics.to_text());
    let has_ethics = is_documented(&ethical_text, cfg);

    let Some(release_year) = raw.release_date.to_year() else {
        debug!(row, date = ?raw.release_date, "unparseable release date; dropping row");
        return None;
    };
    let era = Era::from_year(release_year, cfg.era_boundary_year);

    let creator = raw.creator.to_text();
    let is_big_tech = is_big_tech(&creator, &cfg.organizations);

    let task = raw.task.to_text();
    let domain = categorize_domain(&task.to_lowercase(), &cfg.domain_rules);

    let themes = theme_flags(&ethical_text, has_ethics, &cfg.themes);

    Some(ClassifiedRecord {
        row,
        ethical_text,
        has_ethics,
        release_year,
        era,
        is_big_tech,
        creator_label: CreatorType::from_flag(is_big_tech),
        creator,
        task,
        domain,
        themes,
    })
}

/// Classify every row of `table`. Rows are independent, so this fans out with rayon;
/// output keeps source order.
#[tracing::instrument(level = "info", skip_all, fields(rows = table.len()))]
pub fn classify_all(table: &RawTable, cols: &ResolvedColumns, cfg: &AnalysisConfig) -> ClassifiedSet {
    let records: Vec<ClassifiedRecord> = (0..table.len())
        .into_par_iter()
        .filter_map(|row| classify_row(row, &RawRecord::from_table(table, row, cols), cfg))
        .collect();

    let dropped = table.len() - records.len();
    info!(
        classified = records.len(),
        dropped, "classification finished"
    );

    ClassifiedSet {
        theme_names: cfg.theme_names(),
        records,
        dropped,
    }
}
